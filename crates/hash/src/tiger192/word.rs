// Copyright 2025 Irreducible Inc.

//! 64-bit arithmetic on pairs of 32-bit halves.

use std::ops::{Add, BitXor, Not, Shl, Shr, Sub};

/// A 64-bit integer stored as its low and high 32-bit halves.
///
/// Addition and subtraction wrap modulo 2^64 and carry or borrow across the halves explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Word64 {
	pub lo: u32,
	pub hi: u32,
}

impl Word64 {
	pub const ZERO: Self = Self::new(0, 0);

	pub const fn new(lo: u32, hi: u32) -> Self {
		Self { lo, hi }
	}

	pub const fn from_u64(value: u64) -> Self {
		Self::new(value as u32, (value >> 32) as u32)
	}

	pub const fn to_u64(self) -> u64 {
		(self.hi as u64) << 32 | self.lo as u64
	}

	pub fn from_le_bytes(bytes: [u8; 8]) -> Self {
		let [b0, b1, b2, b3, b4, b5, b6, b7] = bytes;
		Self::new(u32::from_le_bytes([b0, b1, b2, b3]), u32::from_le_bytes([b4, b5, b6, b7]))
	}

	/// Byte `index` counted from the least significant end.
	#[inline]
	pub fn byte(self, index: usize) -> u8 {
		let half = if index < 4 { self.lo } else { self.hi };
		(half >> (8 * (index % 4))) as u8
	}

	/// Multiplies by a factor below 2^16.
	///
	/// The product of the low half overflows into the high half. That carry is recovered from the
	/// 16-bit halves of the low word, so no intermediate exceeds 32 bits.
	#[inline]
	pub fn mul_small(self, factor: u32) -> Self {
		debug_assert!(factor <= 0xffff);
		let low = (self.lo & 0xffff) * factor;
		let high = (self.lo >> 16) * factor;
		let carry = (high + (low >> 16)) >> 16;
		Self::new(
			self.lo.wrapping_mul(factor),
			self.hi.wrapping_mul(factor).wrapping_add(carry),
		)
	}
}

impl Add for Word64 {
	type Output = Self;

	#[inline]
	fn add(self, rhs: Self) -> Self {
		let (lo, carry) = self.lo.overflowing_add(rhs.lo);
		Self::new(lo, self.hi.wrapping_add(rhs.hi).wrapping_add(carry as u32))
	}
}

impl Sub for Word64 {
	type Output = Self;

	#[inline]
	fn sub(self, rhs: Self) -> Self {
		let (lo, borrow) = self.lo.overflowing_sub(rhs.lo);
		Self::new(lo, self.hi.wrapping_sub(rhs.hi).wrapping_sub(borrow as u32))
	}
}

impl BitXor for Word64 {
	type Output = Self;

	#[inline]
	fn bitxor(self, rhs: Self) -> Self {
		Self::new(self.lo ^ rhs.lo, self.hi ^ rhs.hi)
	}
}

impl Not for Word64 {
	type Output = Self;

	#[inline]
	fn not(self) -> Self {
		Self::new(!self.lo, !self.hi)
	}
}

/// Shifts by `1..32` bits.
impl Shl<u32> for Word64 {
	type Output = Self;

	#[inline]
	fn shl(self, bits: u32) -> Self {
		debug_assert!((1..32).contains(&bits));
		Self::new(self.lo << bits, self.hi << bits | self.lo >> (32 - bits))
	}
}

/// Shifts by `1..32` bits.
impl Shr<u32> for Word64 {
	type Output = Self;

	#[inline]
	fn shr(self, bits: u32) -> Self {
		debug_assert!((1..32).contains(&bits));
		Self::new(self.lo >> bits | self.hi << (32 - bits), self.hi >> bits)
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_carry_and_borrow() {
		let max_lo = Word64::new(u32::MAX, 0);
		assert_eq!(max_lo + Word64::new(1, 0), Word64::new(0, 1));
		assert_eq!(Word64::new(0, 1) - Word64::new(1, 0), max_lo);
		assert_eq!(Word64::ZERO - Word64::new(1, 0), Word64::new(u32::MAX, u32::MAX));
	}

	#[test]
	fn test_bytes() {
		let word = Word64::from_le_bytes([0, 1, 2, 3, 4, 5, 6, 7]);
		assert_eq!(word.to_u64(), 0x0706050403020100);
		for index in 0..8 {
			assert_eq!(word.byte(index), index as u8);
		}
	}

	proptest! {
		#[test]
		fn test_matches_native_arithmetic(a in any::<u64>(), b in any::<u64>(), bits in 1u32..32) {
			let (x, y) = (Word64::from_u64(a), Word64::from_u64(b));
			prop_assert_eq!((x + y).to_u64(), a.wrapping_add(b));
			prop_assert_eq!((x - y).to_u64(), a.wrapping_sub(b));
			prop_assert_eq!((x ^ y).to_u64(), a ^ b);
			prop_assert_eq!((!x).to_u64(), !a);
			prop_assert_eq!((x << bits).to_u64(), a << bits);
			prop_assert_eq!((x >> bits).to_u64(), a >> bits);
		}

		#[test]
		fn test_mul_small_matches_native(a in any::<u64>(), factor in 0u32..=0xffff) {
			prop_assert_eq!(
				Word64::from_u64(a).mul_small(factor).to_u64(),
				a.wrapping_mul(factor as u64)
			);
		}
	}
}
