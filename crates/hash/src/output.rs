// Copyright 2025 Irreducible Inc.

use std::fmt;

/// A formatted digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DigestOutput {
	/// Output of the `hex`, `base64` and `base64_safe` formats.
	Text(String),
	/// Output of the `byteseq` format.
	Bytes(Vec<u8>),
}

impl DigestOutput {
	pub fn as_text(&self) -> Option<&str> {
		match self {
			DigestOutput::Text(text) => Some(text),
			DigestOutput::Bytes(_) => None,
		}
	}

	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			DigestOutput::Text(_) => None,
			DigestOutput::Bytes(bytes) => Some(bytes),
		}
	}
}

impl fmt::Display for DigestOutput {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DigestOutput::Text(text) => f.write_str(text),
			DigestOutput::Bytes(bytes) => {
				f.write_str("[")?;
				for (i, byte) in bytes.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{byte:#04x}")?;
				}
				f.write_str("]")
			}
		}
	}
}
