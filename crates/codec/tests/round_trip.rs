// Copyright 2025 Irreducible Inc.

use hashkit_codec::base91::{ALPHABET, decode_bytes, decode_words, to_base91, to_base91_words};
use proptest::prelude::*;

proptest! {
	#[test]
	fn test_bytes_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
		let decoded = decode_bytes(&to_base91(&bytes)).unwrap();
		prop_assert!(decoded.starts_with(&bytes));
		prop_assert!(decoded.len() - bytes.len() <= 1);
		prop_assert!(decoded[bytes.len()..].iter().all(|&byte| byte == 0));
	}

	#[test]
	fn test_words_round_trip(words in prop::collection::vec(any::<u32>(), 0..128)) {
		prop_assert_eq!(decode_words(&to_base91_words(&words)).unwrap(), words);
	}

	#[test]
	fn test_encoding_is_alphabet_only(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
		let encoded = to_base91(&bytes);
		prop_assert_eq!(encoded.len() % 2, 0);
		prop_assert!(encoded.bytes().all(|symbol| ALPHABET.contains(&symbol)));
	}
}
