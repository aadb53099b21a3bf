// Copyright 2025 Irreducible Inc.

//! SHA-256, FIPS 180-4.

use crate::{
	Algorithm, Error, Format,
	engine::{Block, Engine, LengthOrder, block_words, for_each_padded_block},
	selftest::{Check, Expected, Input},
};

const IV: [u32; 8] = [
	0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

const K: [u32; 64] = [
	0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
	0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
	0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
	0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
	0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
	0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
	0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
	0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

#[derive(Debug, Default, Clone)]
pub struct Sha256;

#[inline]
fn small_sigma0(x: u32) -> u32 {
	x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
fn small_sigma1(x: u32) -> u32 {
	x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline]
fn big_sigma0(x: u32) -> u32 {
	x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline]
fn big_sigma1(x: u32) -> u32 {
	x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

fn compress_block(state: &mut [u32; 8], block: &Block) {
	let mut w = [0u32; 64];
	w[..16].copy_from_slice(&block_words(block, LengthOrder::Big));
	for i in 16..64 {
		w[i] = small_sigma1(w[i - 2])
			.wrapping_add(w[i - 7])
			.wrapping_add(small_sigma0(w[i - 15]))
			.wrapping_add(w[i - 16]);
	}

	let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
	for (&k, &wi) in K.iter().zip(&w) {
		let ch = (e & f) ^ (!e & g);
		let maj = (a & b) ^ (a & c) ^ (b & c);
		let t1 = h
			.wrapping_add(big_sigma1(e))
			.wrapping_add(ch)
			.wrapping_add(k)
			.wrapping_add(wi);
		let t2 = big_sigma0(a).wrapping_add(maj);
		h = g;
		g = f;
		f = e;
		e = d.wrapping_add(t1);
		d = c;
		c = b;
		b = a;
		a = t1.wrapping_add(t2);
	}

	for (word, value) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
		*word = word.wrapping_add(value);
	}
}

impl Engine for Sha256 {
	const ALGORITHM: Algorithm = Algorithm::Sha256;

	type Words = [u32; 8];

	fn new() -> Result<Self, Error> {
		Ok(Self)
	}

	fn compress(&self, message: &[u8]) -> [u32; 8] {
		let mut state = IV;
		for_each_padded_block(message, 0x80, LengthOrder::Big, |block| {
			compress_block(&mut state, block)
		});
		state
	}

	fn checks() -> Vec<Check> {
		let mut checks = Check::common_vectors([
			"e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
			"e173d43de98094098259467ff632b4fc61496af96f3a354a006360d246e8166f",
			"00ae9a702783ce4b028ea876dd0bc04945ffa94ed7c4eb0d0d99bf574fec3d7b",
			"7c413b7ff6ff4b8e921f571c374f98c7145582931cdf4953e0188873f1e7036c",
			"5f70bf18a086007016e948b04aed3b82103a36bea41755b6cddfaf10ace3c6ef",
			"e498f0465fb2533f44546b29aa60cbd13e6c7144d21c9bcf04af8648984a054f",
		]);
		checks.extend([
			Check::new(
				"'SHA-256' (formatted to byte sequence)",
				Input::Text("SHA-256"),
				Expected::Bytes(&[
					0xbb, 0xd0, 0x7c, 0x4f, 0xc0, 0x2c, 0x99, 0xb9, 0x71, 0x24, 0xfe, 0xbf, 0x42,
					0xc7, 0xb6, 0x3b, 0x50, 0x11, 0xc0, 0xdf, 0x28, 0xd4, 0x09, 0xfb, 0xb4, 0x86,
					0xb5, 0xa9, 0xd2, 0xe6, 0x15, 0xea,
				]),
			)
			.with_format(Format::ByteSeq),
			Check::new(
				"'ABCDE' (formatted to hex string)",
				Input::Text("ABCDE"),
				Expected::Text("f0393febe8baaa55e32f7be2a7cc180bf34e52137d99e056c817a9c07b8f239a"),
			),
			Check::new(
				"'ABCDE' (formatted to base64)",
				Input::Text("ABCDE"),
				Expected::Text("8Dk/6+i6qlXjL3vip8wYC/NOUhN9meBWyBepwHuPI5o="),
			)
			.with_format(Format::Base64),
			Check::new(
				"'ABCDE' (formatted to base64, URL-safe)",
				Input::Text("ABCDE"),
				Expected::Text("8Dk-6*i6qlXjL3vip8wYC-NOUhN9meBWyBepwHuPI5o"),
			)
			.with_format(Format::Base64Safe),
		]);
		checks
	}
}
