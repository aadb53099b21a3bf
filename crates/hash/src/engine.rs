// Copyright 2025 Irreducible Inc.

use crate::{Algorithm, Error, Order, selftest::Check};

/// Size in bytes of the message blocks consumed by every engine.
pub const BLOCK_LEN: usize = 64;

pub type Block = [u8; BLOCK_LEN];

/// Padding and compression of one fixed-size hash function.
///
/// An engine maps a whole message to a short tuple of 32-bit words. Everything after that,
/// byte order and text encoding, is shared by all engines and lives in [`crate::pipeline`].
pub trait Engine: Send + Sync + Sized + 'static {
	const ALGORITHM: Algorithm;

	/// The digest words in their natural order.
	type Words: AsRef<[u32]>;

	fn new() -> Result<Self, Error>;

	/// Pads `message` and runs the compression function over every block.
	fn compress(&self, message: &[u8]) -> Self::Words;

	/// Rearranges the words before they are serialized in `order`.
	fn arrange(&self, words: Self::Words, _order: Order) -> Self::Words {
		words
	}

	/// Known answers that must hold before an instance is handed out.
	fn checks() -> Vec<Check>;
}

/// Byte order of the message length appended by the padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LengthOrder {
	Little,
	Big,
}

/// Calls `compress` on every block of the padded message.
///
/// The padding appends `marker`, zeros up to 56 mod 64, and the message length in bits as a
/// 64-bit integer. Full blocks of `message` are passed through without copying.
pub(crate) fn for_each_padded_block(
	message: &[u8],
	marker: u8,
	length_order: LengthOrder,
	mut compress: impl FnMut(&Block),
) {
	let mut blocks = message.chunks_exact(BLOCK_LEN);
	for block in &mut blocks {
		compress(block.try_into().expect("chunk is one block"));
	}

	let tail = blocks.remainder();
	let bit_len = (message.len() as u64).wrapping_mul(8);
	let bit_len = match length_order {
		LengthOrder::Little => bit_len.to_le_bytes(),
		LengthOrder::Big => bit_len.to_be_bytes(),
	};

	let mut last = [0u8; 2 * BLOCK_LEN];
	last[..tail.len()].copy_from_slice(tail);
	last[tail.len()] = marker;
	let end = if tail.len() < BLOCK_LEN - 8 {
		BLOCK_LEN
	} else {
		2 * BLOCK_LEN
	};
	last[end - 8..end].copy_from_slice(&bit_len);

	for block in last[..end].chunks_exact(BLOCK_LEN) {
		compress(block.try_into().expect("chunk is one block"));
	}
}

/// Reads the sixteen 32-bit words of a block.
pub(crate) fn block_words(block: &Block, length_order: LengthOrder) -> [u32; 16] {
	std::array::from_fn(|i| {
		let bytes = block[4 * i..4 * i + 4]
			.try_into()
			.expect("slice is 4 bytes");
		match length_order {
			LengthOrder::Little => u32::from_le_bytes(bytes),
			LengthOrder::Big => u32::from_be_bytes(bytes),
		}
	})
}
