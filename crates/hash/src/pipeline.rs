// Copyright 2025 Irreducible Inc.

//! Turns the words produced by a compression function into the requested output.

use hashkit_codec::text::{Base64Alphabet, to_base64, to_hex};

use crate::{DigestOptions, DigestOutput, Engine, Format, Message, Order, ResolvedOptions};

/// Serializes `words` into bytes, least or most significant byte of each word first.
pub fn arrange_bytes(words: &[u32], order: Order) -> Vec<u8> {
	let (factor, offset): (i32, i32) = match order {
		Order::Little => (1, 0),
		Order::Big => (-1, 3),
	};
	(0..4 * words.len())
		.map(|pos| {
			// `%` truncates towards zero, so the big order walks the offsets 3, 2, 1, 0
			let shift = 8 * (offset + (factor * pos as i32) % 4);
			(words[pos >> 2] >> shift) as u8
		})
		.collect()
}

pub fn encode(bytes: Vec<u8>, format: Format) -> DigestOutput {
	match format {
		Format::ByteSeq => DigestOutput::Bytes(bytes),
		Format::Hex => DigestOutput::Text(to_hex(&bytes)),
		Format::Base64 => DigestOutput::Text(to_base64(&bytes, Base64Alphabet::Standard)),
		Format::Base64Safe => DigestOutput::Text(to_base64(&bytes, Base64Alphabet::UrlSafe)),
	}
}

pub fn finish(words: &[u32], options: ResolvedOptions) -> DigestOutput {
	encode(arrange_bytes(words, options.order), options.format)
}

/// Digests `message` with `engine` and formats the result.
pub fn digest<E: Engine>(engine: &E, message: &Message, options: DigestOptions) -> DigestOutput {
	let options = options.resolve(E::ALGORITHM);
	let words = engine.arrange(engine.compress(message.as_bytes()), options.order);
	finish(words.as_ref(), options)
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_arrange_orders() {
		let words = [0x01020304, 0xa0b0c0d0];
		assert_eq!(
			arrange_bytes(&words, Order::Little),
			[0x04, 0x03, 0x02, 0x01, 0xd0, 0xc0, 0xb0, 0xa0]
		);
		assert_eq!(
			arrange_bytes(&words, Order::Big),
			[0x01, 0x02, 0x03, 0x04, 0xa0, 0xb0, 0xc0, 0xd0]
		);
		assert!(arrange_bytes(&[], Order::Big).is_empty());
	}

	#[test]
	fn test_encode_formats() {
		let bytes = vec![0xe8, 0x64, 0x10, 0xfa];
		assert_eq!(encode(bytes.clone(), Format::Hex), DigestOutput::Text("e86410fa".into()));
		assert_eq!(encode(bytes.clone(), Format::Base64), DigestOutput::Text("6GQQ+g==".into()));
		assert_eq!(encode(bytes.clone(), Format::Base64Safe), DigestOutput::Text("6GQQ*g".into()));
		assert_eq!(encode(bytes.clone(), Format::ByteSeq), DigestOutput::Bytes(bytes));
	}

	proptest! {
		#[test]
		fn test_little_bytes_reread_as_words_give_big_order(
			words in prop::collection::vec(any::<u32>(), 0..16),
		) {
			let little = arrange_bytes(&words, Order::Little);
			let reread = little
				.chunks_exact(4)
				.map(|chunk| u32::from_le_bytes(chunk.try_into().unwrap()))
				.collect::<Vec<_>>();
			prop_assert_eq!(&reread, &words);

			let big = words.iter().flat_map(|word| word.to_be_bytes()).collect::<Vec<_>>();
			prop_assert_eq!(arrange_bytes(&reread, Order::Big), big);
		}
	}
}
