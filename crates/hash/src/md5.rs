// Copyright 2025 Irreducible Inc.

//! MD5, RFC 1321.

use crate::{
	Algorithm, Error, Format,
	engine::{Block, Engine, LengthOrder, block_words, for_each_padded_block},
	selftest::{Check, Expected, Input},
};

const IV: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// `K[i] = floor(2^32 * abs(sin(i + 1)))`.
const K: [u32; 64] = [
	0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
	0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
	0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
	0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
	0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
	0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
	0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
	0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Left rotations, four per round.
const S: [[u32; 4]; 4] = [[7, 12, 17, 22], [5, 9, 14, 20], [4, 11, 16, 23], [6, 10, 15, 21]];

#[derive(Debug, Default, Clone)]
pub struct Md5;

fn compress_block(state: &mut [u32; 4], block: &Block) {
	let m = block_words(block, LengthOrder::Little);
	let [mut a, mut b, mut c, mut d] = *state;

	for i in 0..64 {
		let round = i / 16;
		let (f, g) = match round {
			0 => ((b & c) | (!b & d), i),
			1 => ((d & b) | (!d & c), (5 * i + 1) % 16),
			2 => (b ^ c ^ d, (3 * i + 5) % 16),
			_ => (c ^ (b | !d), (7 * i) % 16),
		};
		let mixed = a
			.wrapping_add(f)
			.wrapping_add(K[i])
			.wrapping_add(m[g])
			.rotate_left(S[round][i % 4]);
		a = d;
		d = c;
		c = b;
		b = b.wrapping_add(mixed);
	}

	for (word, value) in state.iter_mut().zip([a, b, c, d]) {
		*word = word.wrapping_add(value);
	}
}

impl Engine for Md5 {
	const ALGORITHM: Algorithm = Algorithm::Md5;

	type Words = [u32; 4];

	fn new() -> Result<Self, Error> {
		Ok(Self)
	}

	fn compress(&self, message: &[u8]) -> [u32; 4] {
		let mut state = IV;
		for_each_padded_block(message, 0x80, LengthOrder::Little, |block| {
			compress_block(&mut state, block)
		});
		state
	}

	fn checks() -> Vec<Check> {
		let mut checks = Check::common_vectors([
			"d41d8cd98f00b204e9800998ecf8427e",
			"08e39f7e8b0b62394f040746a17ca1f6",
			"34c4e74c0da5f130dd6f82a30853c996",
			"d086073d4a685c6d9a10edf684d591bc",
			"0f343b0931126a20f133d67c2b018a3b",
			"1407ed3b268f077aca21047b335c0133",
		]);
		checks.extend([
			Check::new(
				"'MD5' (formatted to byte sequence)",
				Input::Text("MD5"),
				Expected::Bytes(&[
					0x7f, 0x13, 0x8a, 0x09, 0x16, 0x9b, 0x25, 0x0e, 0x9d, 0xcb, 0x37, 0x81, 0x40,
					0x90, 0x73, 0x78,
				]),
			)
			.with_format(Format::ByteSeq),
			Check::new(
				"'ABCDEFGHIJ' (formatted to hex string)",
				Input::Text("ABCDEFGHIJ"),
				Expected::Text("e86410fa2d6e2634fd8ac5f4b3afe7f3"),
			),
			Check::new(
				"'ABCDEFGHIJ' (formatted to base64)",
				Input::Text("ABCDEFGHIJ"),
				Expected::Text("6GQQ+i1uJjT9isX0s6/n8w=="),
			)
			.with_format(Format::Base64),
			Check::new(
				"'ABCDEFGHIJ' (formatted to base64, URL-safe)",
				Input::Text("ABCDEFGHIJ"),
				Expected::Text("6GQQ*i1uJjT9isX0s6-n8w"),
			)
			.with_format(Format::Base64Safe),
		]);
		checks
	}
}
