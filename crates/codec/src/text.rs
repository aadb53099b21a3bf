// Copyright 2025 Irreducible Inc.

//! Printable encodings of digest bytes.

use base64::{
	Engine,
	alphabet::Alphabet,
	engine::{GeneralPurpose, GeneralPurposeConfig, general_purpose},
};
use lazy_static::lazy_static;

/// Symbol table of the URL-safe variant. Positions 62 and 63 differ from the standard table.
pub const URL_SAFE_SYMBOLS: &str =
	"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789*-";

lazy_static! {
	static ref URL_SAFE: GeneralPurpose = {
		let alphabet = Alphabet::new(URL_SAFE_SYMBOLS).expect("64 distinct printable symbols");
		GeneralPurpose::new(&alphabet, GeneralPurposeConfig::new().with_encode_padding(false))
	};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base64Alphabet {
	/// `+` and `/`, padded with `=`.
	Standard,
	/// `*` and `-`, unpadded.
	UrlSafe,
}

/// Lowercase hexadecimal, two digits per byte.
pub fn to_hex(bytes: &[u8]) -> String {
	hex::encode(bytes)
}

pub fn to_base64(bytes: &[u8], alphabet: Base64Alphabet) -> String {
	match alphabet {
		Base64Alphabet::Standard => general_purpose::STANDARD.encode(bytes),
		Base64Alphabet::UrlSafe => URL_SAFE.encode(bytes),
	}
}
