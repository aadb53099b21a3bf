// Copyright 2025 Irreducible Inc.

//! Base-91 codec.
//!
//! Symbols are consumed in pairs. Every pair carries a 13 or 14 bit value, which lets 91
//! printable ASCII symbols store binary data with roughly 23% overhead. The codec is also the
//! container format for the constant tables compiled into the hash engines.

use hashkit_utils::bail;
use lazy_static::lazy_static;

use crate::Error;

/// The 91 symbols in value order.
pub const ALPHABET: &[u8; 91] =
	b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&()*+,./:;<=>?@[]^_'{|}~-";

const RADIX: u32 = 91;

/// Values whose low 13 bits exceed this carry 13 bits, smaller ones carry 14.
const SHORT_VALUE_LIMIT: u32 = 88;

const NOT_A_SYMBOL: u8 = u8::MAX;

/// Number of words produced by [`transform`] in [`Layout::Words`].
pub const BOX_WORDS: usize = 256;

lazy_static! {
	static ref SYMBOL_VALUES: [u8; 128] = {
		let mut values = [NOT_A_SYMBOL; 128];
		for (value, &symbol) in ALPHABET.iter().enumerate() {
			values[symbol as usize] = value as u8;
		}
		values
	};
}

/// Shape of the decoded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
	/// Little-endian 32-bit words.
	Words,
	/// Raw bytes.
	Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
	Words(Vec<u32>),
	Bytes(Vec<u8>),
}

fn symbol_value(symbol: char, position: usize) -> Result<u32, Error> {
	let value = if symbol.is_ascii() {
		SYMBOL_VALUES[symbol as usize]
	} else {
		NOT_A_SYMBOL
	};
	if value == NOT_A_SYMBOL {
		bail!(Error::InvalidSymbol { symbol, position });
	}
	Ok(value as u32)
}

/// Feeds every decoded byte of `source` to `sink`, in order.
fn decode_into(source: &str, mut sink: impl FnMut(u8)) -> Result<(), Error> {
	let mut symbols = source.chars().enumerate();
	let mut bits = 0u32;
	let mut shift = 0u32;

	while let Some((position, low)) = symbols.next() {
		let Some((next_position, high)) = symbols.next() else {
			bail!(Error::UnpairedSymbol { position });
		};
		let value = symbol_value(low, position)? + symbol_value(high, next_position)? * RADIX;

		bits |= value << shift;
		shift += if value & 0x1fff > SHORT_VALUE_LIMIT {
			13
		} else {
			14
		};

		// shift is at least 13 here, so each pair yields one or two bytes
		loop {
			sink(bits as u8);
			bits >>= 8;
			shift -= 8;
			if shift < 8 {
				break;
			}
		}
	}

	Ok(())
}

pub fn decode_bytes(source: &str) -> Result<Vec<u8>, Error> {
	let mut bytes = Vec::with_capacity(source.len() * 7 / 8 + 1);
	decode_into(source, |byte| bytes.push(byte))?;
	Ok(bytes)
}

/// Decodes `source` into little-endian words. A trailing partial word is dropped.
pub fn decode_words(source: &str) -> Result<Vec<u32>, Error> {
	let bytes = decode_bytes(source)?;
	let words = bytes
		.chunks_exact(4)
		.map(|chunk| u32::from_le_bytes(chunk.try_into().expect("chunk is 4 bytes")))
		.collect();
	Ok(words)
}

/// Decodes `source` into a zero-initialised box of `N` words.
///
/// Bytes beyond `4 * N` are ignored, missing ones stay zero.
pub fn decode_box<const N: usize>(source: &str) -> Result<[u32; N], Error> {
	let mut words = [0u32; N];
	let mut index = 0usize;
	decode_into(source, |byte| {
		if let Some(word) = words.get_mut(index / 4) {
			*word |= (byte as u32) << (8 * (index % 4));
		}
		index += 1;
	})?;
	Ok(words)
}

/// Decodes `source` into the shape given by `layout`.
///
/// `Layout::Words` fills a zeroed box of [`BOX_WORDS`] words, so a trailing partial word is kept.
pub fn transform(source: &str, layout: Layout) -> Result<Decoded, Error> {
	match layout {
		Layout::Words => {
			decode_box::<BOX_WORDS>(source).map(|words| Decoded::Words(words.to_vec()))
		}
		Layout::Bytes => decode_bytes(source).map(Decoded::Bytes),
	}
}

fn push_value(encoded: &mut String, value: u32) {
	encoded.push(ALPHABET[(value % RADIX) as usize] as char);
	encoded.push(ALPHABET[(value / RADIX) as usize] as char);
}

pub fn to_base91(bytes: &[u8]) -> String {
	let mut encoded = String::with_capacity(bytes.len() * 16 / 13 + 2);
	let mut bits = 0u32;
	let mut pending = 0u32;

	for &byte in bytes {
		bits |= (byte as u32) << pending;
		pending += 8;
		if pending > 13 {
			let mut value = bits & 0x1fff;
			if value > SHORT_VALUE_LIMIT {
				bits >>= 13;
				pending -= 13;
			} else {
				value = bits & 0x3fff;
				bits >>= 14;
				pending -= 14;
			}
			push_value(&mut encoded, value);
		}
	}

	// The trailing pair is always written, even for empty input.
	push_value(&mut encoded, bits);
	encoded
}

/// Encodes words serialized in little-endian byte order.
pub fn to_base91_words(words: &[u32]) -> String {
	let bytes = words
		.iter()
		.flat_map(|word| word.to_le_bytes())
		.collect::<Vec<_>>();
	to_base91(&bytes)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_alphabet_is_unique() {
		let mut seen = [false; 128];
		for &symbol in ALPHABET {
			assert!(symbol.is_ascii_graphic());
			assert!(!seen[symbol as usize], "duplicate symbol {}", symbol as char);
			seen[symbol as usize] = true;
		}
		assert!(!seen[b'"' as usize]);
		assert!(!seen[b'\\' as usize]);
	}

	#[test]
	fn test_empty_input() {
		assert_eq!(to_base91(&[]), "AA");
		assert_eq!(decode_bytes("").unwrap(), Vec::<u8>::new());
		assert_eq!(decode_bytes("AA").unwrap(), vec![0]);
	}

	#[test]
	fn test_known_text() {
		let encoded = to_base91(b"hello");
		assert_eq!(encoded, "TPwJh>AA");
		assert_eq!(&decode_bytes(&encoded).unwrap()[..5], b"hello");
	}

	#[test]
	fn test_words_round_trip() {
		let words = [0x02aab17c_u32, 0xf7e90c5e, 0, u32::MAX, 0x01234567];
		assert_eq!(decode_words(&to_base91_words(&words)).unwrap(), words);
	}

	#[test]
	fn test_box_clips_and_pads() {
		let words = [1u32, 2, 3, 4];
		let encoded = to_base91_words(&words);
		assert_eq!(decode_box::<2>(&encoded).unwrap(), [1, 2]);
		assert_eq!(decode_box::<6>(&encoded).unwrap(), [1, 2, 3, 4, 0, 0]);
	}

	#[test]
	fn test_transform_layouts() {
		let encoded = to_base91(&[0x78, 0x56, 0x34, 0x12, 0xff]);
		match transform(&encoded, Layout::Words).unwrap() {
			Decoded::Words(words) => {
				assert_eq!(words.len(), BOX_WORDS);
				assert_eq!(&words[..2], &[0x12345678, 0xff]);
				assert!(words[2..].iter().all(|&word| word == 0));
			}
			other => panic!("unexpected layout {other:?}"),
		}
		match transform(&encoded, Layout::Bytes).unwrap() {
			Decoded::Bytes(bytes) => assert_eq!(&bytes[..5], &[0x78, 0x56, 0x34, 0x12, 0xff]),
			other => panic!("unexpected layout {other:?}"),
		}
	}

	#[test]
	#[cfg(not(feature = "bail_panic"))]
	fn test_invalid_symbol() {
		assert_eq!(
			decode_bytes("AB\"A"),
			Err(Error::InvalidSymbol {
				symbol: '"',
				position: 2
			})
		);
		assert_eq!(
			decode_bytes("Aé"),
			Err(Error::InvalidSymbol {
				symbol: 'é',
				position: 1
			})
		);
	}

	#[test]
	#[cfg(not(feature = "bail_panic"))]
	fn test_unpaired_symbol() {
		assert_eq!(decode_bytes("ABC"), Err(Error::UnpairedSymbol { position: 2 }));
	}
}
