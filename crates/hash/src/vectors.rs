// Copyright 2025 Irreducible Inc.

//! Named test vectors shared by the self-tests.
//!
//! Vectors are "strings" of 16-bit code units. Engines see them clipped to bytes.

use hashkit_codec::base91::decode_bytes;
use lazy_static::lazy_static;

use crate::Error;

/// The test vector handles accepted by [`test_vector`].
pub const HANDLES: [&str; 5] = [
	"digest-base64",
	"digest-span-utf8",
	"digest-span-utf16",
	"digest-1024x0",
	"digest-random",
];

const BASE64_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

// 24 % 3 == 0
static SPAN_UTF8: [u16; 24] = [
	0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x7c, 0x7d, 0x7e, 0x7f, 0x80, 0x81, 0x82, 0x83,
	0xf8, 0xf9, 0xfa, 0xfb, 0xfc, 0xfd, 0xfe, 0xff,
];

static SPAN_UTF16: [u16; 24] = [
	0xffff, 0xfffe, 0xfffd, 0xfffc, 0xfffb, 0xfffa, 0xfff9, 0xfff8, 0x8003, 0x8002, 0x8001, 0x8000,
	0x7fff, 0x7ffe, 0x7ffd, 0x7ffc, 0x0007, 0x0006, 0x0005, 0x0004, 0x0003, 0x0002, 0x0001, 0x0000,
];

// 1024 % 3 == 1
static ZEROS: [u16; 1024] = [0; 1024];

/// 1031 fixed pseudorandom bytes, base-91 encoded. 1031 is prime and 1031 % 3 == 2.
const RANDOM_SAMPLE: &str = concat!(
	"a_Y;TC%Tj;J^(5tL;*zByj&d';0qY5[WlBSK<X+('M=,uRdvk}SuCG-vK&_9&!ClX/_QF1>Lbja(VOvAIxX(6pi?",
	"ns$2FS$.wy!*B~_1S=K%ds0{c5K>fw7i9TpT+?oX_]3Xk}Ub}IE;[%O;wUfcSC#IgP.7meZzf>XFb=*dcGh5^)b4",
	"mZPKgaVO7@HJu_]pb6=:bSNGtg|pxZ@#!X-9G82k{a/~npX6<5MQ[[%LQ(1(!&7!'@@@,I1)>^F9e)'i9KZ&=TTR",
	"K$2K+5Y9-z><NWFrk&^oMVT{hRi%BKe{&Ofrt<tgLwd>w*b;bVeSL@7/,skH9l~e{RvOv{54%.K&=:oCL5m&Vh0m",
	"/W'$qo1*h(JoQr*;~TQ_IN0p?%TdrHMs{SLRJ!w;6rM!HG@4*kJ2*D]rzG>Zt1?1<JxXj_XMCOXX'!nTt0.p*/'a",
	"?7e8O7zanTAQsm$(^6M;C[n[4oU82e?r6:ui3=mfp>$6_+OnM{BwU]o5E_N(cdZN!T+3zt</!=u~nY<kvy)]oBp%",
	"?<beBM%z)WFNZ2Cv9'@zyvw!z1}E2Q^EIS*9oy2Wa<lcooEKt|wHSKU!6GUK3+'nCASL}O##~[ebQuJO.';K4'-n",
	"sX661T@TxLr6e,?y#+nN4.=pOkaD%4;!enNnezN9qgsdShO^=|gU'yTWbFkylM6tYmyL_E)tSl1F3wNhcWwvVGLT",
	"F@dA}JvK?y:NT;7eJWGO}Y|s1+'ZY(*=|lk/YH~Y*9j*pgORhl.QiX^:dmQ_}l4QY$G@1Xwz!oNQ=P47#Ux}DD~P",
	"X':!a00S2>GyxH<bf6=4Yn1?lbTD<P'8h%z|Df>,&R1uZ6FzmHl?<!riCU41}K-(z:VSIGhxTfSv!RTJ~tMm@M]o",
	"f?QrGbL_[V9jZ%L|t-T~k(uR_[iYL0e28KN%jQ&,(<XkyhKDSi*)?hRNp8EXAj|QrE%WUne}.lO5X%FnYT]kjHW>",
	"=g[W}nrcBGLH]4nfHA8dljYYs?|y4+4Jm:;w(:{bZsjz+G]6:cPe?>on4%a5mk@k]1PtjQh[n1h1*^DE:GVOWr<c",
	"|^s)m<n._5N$ewRn4}69TbX!tU0fesL0qv3?TT7m;B0-Bv8P4+O2SNv.(sWC+,hQ/{C,H+AR7B<ZZhp9<[l*wWoa",
	"DrTFGlh?8[:o+NVwrR3RBsHc(#v8Tlm@,@!}kc]je|rDT@hVPsSQmK=}!5GUW~8D;VWo?P8'voX-09k@Nb#PV@){",
	"Xp:TTUXx,;0^)o+V?],<mpiP(9TR8~JruP6W",
);

lazy_static! {
	static ref BASE64: Vec<u16> = BASE64_SYMBOLS.encode_utf16().collect();
	static ref RANDOM: Result<Vec<u16>, hashkit_codec::Error> =
		decode_bytes(RANDOM_SAMPLE).map(|bytes| bytes.into_iter().map(u16::from).collect());
}

/// Looks up a test vector by handle.
pub fn test_vector(handle: &str) -> Result<&'static [u16], Error> {
	match handle {
		"digest-base64" => Ok(BASE64.as_slice()),
		"digest-span-utf8" => Ok(SPAN_UTF8.as_slice()),
		"digest-span-utf16" => Ok(SPAN_UTF16.as_slice()),
		"digest-1024x0" => Ok(ZEROS.as_slice()),
		"digest-random" => RANDOM.as_deref().map_err(|err| err.clone().into()),
		_ => Err(Error::Range {
			kind: "test vector handle",
			value: handle.to_string(),
		}),
	}
}

/// The pseudorandom sample truncated or repeated to exactly `len` units.
pub fn random_string(len: usize) -> Result<Vec<u16>, Error> {
	let sample = test_vector("digest-random")?;
	Ok(sample.iter().copied().cycle().take(len).collect())
}

/// Clips every code unit to its low byte.
pub fn clip_string(units: &[u16]) -> Vec<u16> {
	units.iter().map(|&unit| unit & 0xff).collect()
}
