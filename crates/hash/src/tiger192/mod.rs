// Copyright 2025 Irreducible Inc.

//! Tiger/192 by Ross Anderson and Eli Biham.
//!
//! The 64-bit state words are emulated with pairs of 32-bit halves, see [`Word64`].

mod sbox;
mod word;

pub use word::Word64;

use self::sbox::SBoxes;
use crate::{
	Algorithm, Error, Format, Order,
	engine::{Block, Engine, LengthOrder, for_each_padded_block},
	selftest::{Check, Expected, Input},
};

const IV: [Word64; 3] = [
	Word64::from_u64(0x0123456789abcdef),
	Word64::from_u64(0xfedcba9876543210),
	Word64::from_u64(0xf096a5b4c3b2e187),
];

const SCHEDULE_START: Word64 = Word64::from_u64(0xa5a5a5a5a5a5a5a5);
const SCHEDULE_END: Word64 = Word64::from_u64(0x0123456789abcdef);

#[derive(Debug, Clone)]
pub struct Tiger192 {
	sboxes: Box<SBoxes>,
}

impl Tiger192 {
	#[inline]
	fn round(&self, a: &mut Word64, b: &mut Word64, c: &mut Word64, x: Word64, factor: u32) {
		*c = *c ^ x;
		let t = &self.sboxes;
		*a = *a
			- (t.lookup(0, c.byte(0))
				^ t.lookup(1, c.byte(2))
				^ t.lookup(2, c.byte(4))
				^ t.lookup(3, c.byte(6)));
		*b = *b
			+ (t.lookup(3, c.byte(1))
				^ t.lookup(2, c.byte(3))
				^ t.lookup(1, c.byte(5))
				^ t.lookup(0, c.byte(7)));
		*b = b.mul_small(factor);
	}

	fn pass(&self, a: &mut Word64, b: &mut Word64, c: &mut Word64, x: &[Word64; 8], factor: u32) {
		self.round(a, b, c, x[0], factor);
		self.round(b, c, a, x[1], factor);
		self.round(c, a, b, x[2], factor);
		self.round(a, b, c, x[3], factor);
		self.round(b, c, a, x[4], factor);
		self.round(c, a, b, x[5], factor);
		self.round(a, b, c, x[6], factor);
		self.round(b, c, a, x[7], factor);
	}

	fn compress_block(&self, state: &mut [Word64; 3], block: &Block) {
		let mut x: [Word64; 8] = std::array::from_fn(|i| {
			Word64::from_le_bytes(block[8 * i..8 * i + 8].try_into().expect("slice is 8 bytes"))
		});
		let [mut a, mut b, mut c] = *state;

		self.pass(&mut a, &mut b, &mut c, &x, 5);
		key_schedule(&mut x);
		self.pass(&mut c, &mut a, &mut b, &x, 7);
		key_schedule(&mut x);
		self.pass(&mut b, &mut c, &mut a, &x, 9);

		let [a0, b0, c0] = *state;
		*state = [a ^ a0, b - b0, c + c0];
	}
}

fn key_schedule(x: &mut [Word64; 8]) {
	x[0] = x[0] - (x[7] ^ SCHEDULE_START);
	x[1] = x[1] ^ x[0];
	x[2] = x[2] + x[1];
	x[3] = x[3] - (x[2] ^ (!x[1] << 19));
	x[4] = x[4] ^ x[3];
	x[5] = x[5] + x[4];
	x[6] = x[6] - (x[5] ^ (!x[4] >> 23));
	x[7] = x[7] ^ x[6];
	x[0] = x[0] + x[7];
	x[1] = x[1] - (x[0] ^ (!x[7] << 19));
	x[2] = x[2] ^ x[1];
	x[3] = x[3] + x[2];
	x[4] = x[4] - (x[3] ^ (!x[2] >> 23));
	x[5] = x[5] ^ x[4];
	x[6] = x[6] + x[5];
	x[7] = x[7] - (x[6] ^ SCHEDULE_END);
}

impl Engine for Tiger192 {
	const ALGORITHM: Algorithm = Algorithm::Tiger192;

	type Words = [u32; 6];

	fn new() -> Result<Self, Error> {
		Ok(Self {
			sboxes: SBoxes::decode()?,
		})
	}

	fn compress(&self, message: &[u8]) -> [u32; 6] {
		let mut state = IV;
		for_each_padded_block(message, 0x01, LengthOrder::Little, |block| {
			self.compress_block(&mut state, block)
		});
		let [a, b, c] = state;
		[a.lo, a.hi, b.lo, b.hi, c.lo, c.hi]
	}

	/// Big order emits every accumulator most significant byte first, the form used by the
	/// published reference vectors.
	fn arrange(&self, words: [u32; 6], order: Order) -> [u32; 6] {
		match order {
			Order::Little => words,
			Order::Big => {
				let [a_lo, a_hi, b_lo, b_hi, c_lo, c_hi] = words;
				[a_hi, a_lo, b_hi, b_lo, c_hi, c_lo]
			}
		}
	}

	fn checks() -> Vec<Check> {
		let mut checks = Check::common_vectors([
			"3293ac630c13f0245f92bbb1766e16167a4e58492dde73f3",
			"55faa30905529d5e6badf5781809dedbca650760be850d0c",
			"8f8c57f5e8bfcfa5094002aa8a208ed8e0a285611ebdde4b",
			"6f0bc486b5f8bf15a10141863629bd149d60a0fb57895f3f",
			"1fa973bdd2018e89887cad6274c38f12916c6ac43bd2ea5b",
			"f72d942817a0c8e222033f7684cd1158d5f0aa666b88e808",
		]);
		checks.extend([
			Check::new(
				"'Tiger' (formatted to byte sequence, big order)",
				Input::Text("Tiger"),
				Expected::Bytes(&[
					0x9f, 0x00, 0xf5, 0x99, 0x07, 0x23, 0x00, 0xdd, 0x27, 0x6a, 0xbb, 0x38, 0xc8,
					0xeb, 0x6d, 0xec, 0x37, 0x79, 0x0c, 0x11, 0x6f, 0x9d, 0x2b, 0xdf,
				]),
			)
			.with_format(Format::ByteSeq)
			.with_order(Order::Big),
			Check::new(
				"'ABCDEFGHIJKLMNOPQRS' (formatted to hex string)",
				Input::Text("ABCDEFGHIJKLMNOPQRS"),
				Expected::Text("381f6b8035a54a77f0827fc11d2b2f090d50024f90b14bb6"),
			),
			Check::new(
				"'ABCDEFGHIJKLMNOPQRS' (formatted to base64)",
				Input::Text("ABCDEFGHIJKLMNOPQRS"),
				Expected::Text("OB9rgDWlSnfwgn/BHSsvCQ1QAk+QsUu2"),
			)
			.with_format(Format::Base64),
			Check::new(
				"'ABCDEFGHIJKLMNOPQRS' (formatted to base64, URL-safe)",
				Input::Text("ABCDEFGHIJKLMNOPQRS"),
				Expected::Text("OB9rgDWlSnfwgn-BHSsvCQ1QAk*QsUu2"),
			)
			.with_format(Format::Base64Safe),
		]);

		// NESSIE reference vectors, printed most significant byte first
		let reference = [
			("'Tiger' (big order)", "Tiger", "9f00f599072300dd276abb38c8eb6dec37790c116f9d2bdf"),
			(
				"'Tiger - A Fast New Hash Function, ...' (big order)",
				"Tiger - A Fast New Hash Function, by Ross Anderson and Eli Biham, proceedings of Fast Software Encryption 3, Cambridge.",
				"ebf591d5afa655ce7f22894ff87f54ac89c811b6b0da3193",
			),
			(
				"'ABC...789+-' (big order)",
				"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+-",
				"87fb2a9083851cf7470d2cf810e6df9eb586445034a5a386",
			),
			(
				"'ABC...XYZ=abc...xyz+012...789' (big order)",
				"ABCDEFGHIJKLMNOPQRSTUVWXYZ=abcdefghijklmnopqrstuvwxyz+0123456789",
				"467db80863ebce488df1cd1261655de957896565975f9197",
			),
		];
		checks.extend(reference.into_iter().map(|(label, message, expected)| {
			Check::new(label, Input::Text(message), Expected::Text(expected)).with_order(Order::Big)
		}));
		checks
	}
}

#[cfg(test)]
mod tests {
	use hex_literal::hex;

	use super::*;
	use crate::pipeline::arrange_bytes;

	fn tiger(message: &[u8]) -> Vec<u8> {
		let engine = Tiger192::new().unwrap();
		arrange_bytes(&engine.arrange(engine.compress(message), Order::Big), Order::Big)
	}

	#[test]
	fn test_reference_vectors() {
		assert_eq!(tiger(b""), hex!("24f0130c63ac933216166e76b1bb925ff373de2d49584e7a"));
		assert_eq!(tiger(b"Tiger"), hex!("9f00f599072300dd276abb38c8eb6dec37790c116f9d2bdf"));
	}

	#[test]
	fn test_little_order_is_byte_reversed_accumulators() {
		let engine = Tiger192::new().unwrap();
		let words = engine.compress(b"");
		assert_eq!(
			arrange_bytes(&engine.arrange(words, Order::Little), Order::Little),
			hex!("3293ac630c13f0245f92bbb1766e16167a4e58492dde73f3")
		);
	}
}
