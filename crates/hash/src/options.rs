// Copyright 2025 Irreducible Inc.

//! Output options of a digest call and their resolution against per-algorithm defaults.

use std::str::FromStr;

use crate::{Algorithm, Error};

/// Textual or binary representation of a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
	/// Lowercase hexadecimal.
	Hex,
	/// The raw digest bytes.
	ByteSeq,
	/// Standard base64 with `=` padding.
	Base64,
	/// Base64 with `*` and `-` in place of `+` and `/`, unpadded.
	Base64Safe,
}

impl Format {
	pub const fn as_str(self) -> &'static str {
		match self {
			Format::Hex => "hex",
			Format::ByteSeq => "byteseq",
			Format::Base64 => "base64",
			Format::Base64Safe => "base64_safe",
		}
	}
}

impl FromStr for Format {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"hex" => Ok(Format::Hex),
			"byteseq" => Ok(Format::ByteSeq),
			"base64" => Ok(Format::Base64),
			"base64_safe" => Ok(Format::Base64Safe),
			_ => Err(Error::Range {
				kind: "format",
				value: s.to_string(),
			}),
		}
	}
}

/// Order in which the bytes of each digest word are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
	Little,
	Big,
}

impl Order {
	pub const fn as_str(self) -> &'static str {
		match self {
			Order::Little => "little",
			Order::Big => "big",
		}
	}
}

impl FromStr for Order {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"little" => Ok(Order::Little),
			"big" => Ok(Order::Big),
			_ => Err(Error::Range {
				kind: "order",
				value: s.to_string(),
			}),
		}
	}
}

/// Requested output options. Absent fields fall back to the algorithm defaults.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DigestOptions {
	pub format: Option<Format>,
	pub order: Option<Order>,
}

impl DigestOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_format(mut self, format: Format) -> Self {
		self.format = Some(format);
		self
	}

	pub fn with_order(mut self, order: Order) -> Self {
		self.order = Some(order);
		self
	}

	/// Builds options from raw option strings.
	///
	/// Values that do not name a known format or order are dropped and later replaced by the
	/// algorithm default, they are never reported as errors.
	pub fn lenient(format: Option<&str>, order: Option<&str>) -> Self {
		Self {
			format: format.and_then(|value| value.parse().ok()),
			order: order.and_then(|value| value.parse().ok()),
		}
	}

	pub fn resolve(self, algorithm: Algorithm) -> ResolvedOptions {
		ResolvedOptions {
			format: self.format.unwrap_or(algorithm.default_format()),
			order: self.order.unwrap_or(algorithm.default_order()),
		}
	}
}

/// Options with every field decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOptions {
	pub format: Format,
	pub order: Order,
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;

	use super::*;

	#[test]
	fn test_strict_parsing() {
		assert_eq!("base64_safe".parse::<Format>().unwrap(), Format::Base64Safe);
		assert_eq!("big".parse::<Order>().unwrap(), Order::Big);
		assert_matches!("HEX".parse::<Format>(), Err(Error::Range { kind: "format", .. }));
		assert_matches!("middle".parse::<Order>(), Err(Error::Range { kind: "order", .. }));
	}

	#[test]
	fn test_lenient_drops_unknown_values() {
		let options = DigestOptions::lenient(Some("base85"), Some("big"));
		assert_eq!(options.format, None);
		assert_eq!(options.order, Some(Order::Big));

		let resolved = options.resolve(Algorithm::Md5);
		assert_eq!(resolved.format, Format::Hex);
		assert_eq!(resolved.order, Order::Big);
	}

	#[test]
	fn test_resolve_defaults() {
		let resolved = DigestOptions::new().resolve(Algorithm::Sha1);
		assert_eq!(
			resolved,
			ResolvedOptions {
				format: Format::Hex,
				order: Order::Big
			}
		);

		let resolved = DigestOptions::new()
			.with_format(Format::ByteSeq)
			.resolve(Algorithm::Tiger192);
		assert_eq!(resolved.format, Format::ByteSeq);
		assert_eq!(resolved.order, Order::Little);
	}

	#[test]
	fn test_names_match_parsing() {
		for format in [Format::Hex, Format::ByteSeq, Format::Base64, Format::Base64Safe] {
			assert_eq!(format.as_str().parse::<Format>().unwrap(), format);
		}
		for order in [Order::Little, Order::Big] {
			assert_eq!(order.as_str().parse::<Order>().unwrap(), order);
		}
	}
}
