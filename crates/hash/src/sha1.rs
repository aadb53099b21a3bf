// Copyright 2025 Irreducible Inc.

//! SHA-1, FIPS 180-4.

use crate::{
	Algorithm, Error, Format,
	engine::{Block, Engine, LengthOrder, block_words, for_each_padded_block},
	selftest::{Check, Expected, Input},
};

const IV: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

#[derive(Debug, Default, Clone)]
pub struct Sha1;

fn compress_block(state: &mut [u32; 5], block: &Block) {
	let mut w = [0u32; 80];
	w[..16].copy_from_slice(&block_words(block, LengthOrder::Big));
	for i in 16..80 {
		w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
	}

	let [mut a, mut b, mut c, mut d, mut e] = *state;
	for (i, &wi) in w.iter().enumerate() {
		let f = match i / 20 {
			0 => (b & c) | (!b & d),
			2 => (b & c) | (b & d) | (c & d),
			_ => b ^ c ^ d,
		};
		let temp = a
			.rotate_left(5)
			.wrapping_add(f)
			.wrapping_add(e)
			.wrapping_add(K[i / 20])
			.wrapping_add(wi);
		e = d;
		d = c;
		c = b.rotate_left(30);
		b = a;
		a = temp;
	}

	for (word, value) in state.iter_mut().zip([a, b, c, d, e]) {
		*word = word.wrapping_add(value);
	}
}

impl Engine for Sha1 {
	const ALGORITHM: Algorithm = Algorithm::Sha1;

	type Words = [u32; 5];

	fn new() -> Result<Self, Error> {
		Ok(Self)
	}

	fn compress(&self, message: &[u8]) -> [u32; 5] {
		let mut state = IV;
		for_each_padded_block(message, 0x80, LengthOrder::Big, |block| {
			compress_block(&mut state, block)
		});
		state
	}

	fn checks() -> Vec<Check> {
		let mut checks = Check::common_vectors([
			"da39a3ee5e6b4b0d3255bfef95601890afd80709",
			"1d278d3c888d1a2fa7eed622bfc02927ce4049af",
			"ae2b8506e503b1e0ec3cfd276c68e018e7991301",
			"a3a7c90044d847ad034f4c202a8a4da8cb2cd86d",
			"60cacbf3d72e1e7834203da608037b1bf83b40e8",
			"5370c98b9571ec854d7523340f6e16034c12ae98",
		]);
		checks.extend([
			Check::new(
				"'SHA-1' (formatted to byte sequence)",
				Input::Text("SHA-1"),
				Expected::Bytes(&[
					0xc5, 0x71, 0xb8, 0x65, 0x49, 0xe4, 0x9b, 0xf2, 0x23, 0xcf, 0x64, 0x83, 0x88,
					0xc4, 0x62, 0x88, 0xc2, 0x24, 0x1b, 0x5a,
				]),
			)
			.with_format(Format::ByteSeq),
			Check::new(
				"'ABCDE' (formatted to hex string)",
				Input::Text("ABCDE"),
				Expected::Text("7be07aaf460d593a323d0db33da05b64bfdcb3a5"),
			),
			Check::new(
				"'ABCDE' (formatted to base64)",
				Input::Text("ABCDE"),
				Expected::Text("e+B6r0YNWToyPQ2zPaBbZL/cs6U="),
			)
			.with_format(Format::Base64),
			Check::new(
				"'ABCDE' (formatted to base64, URL-safe)",
				Input::Text("ABCDE"),
				Expected::Text("e*B6r0YNWToyPQ2zPaBbZL-cs6U"),
			)
			.with_format(Format::Base64Safe),
		]);
		checks
	}
}
