// Copyright 2025 Irreducible Inc.

use std::{fmt, str::FromStr};

use crate::{Error, Format, Order};

/// Algorithms known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
	Md5,
	Sha1,
	Sha256,
	Tiger192,
	/// Recognised by name only, construction reports [`Error::NotImplemented`].
	Aes256,
}

impl Algorithm {
	pub const ALL: [Algorithm; 5] = [
		Algorithm::Md5,
		Algorithm::Sha1,
		Algorithm::Sha256,
		Algorithm::Tiger192,
		Algorithm::Aes256,
	];

	pub const fn name(self) -> &'static str {
		match self {
			Algorithm::Md5 => "MD5",
			Algorithm::Sha1 => "SHA1",
			Algorithm::Sha256 => "SHA256",
			Algorithm::Tiger192 => "TIGER192",
			Algorithm::Aes256 => "AES256",
		}
	}

	pub const fn default_order(self) -> Order {
		match self {
			Algorithm::Sha1 | Algorithm::Sha256 => Order::Big,
			Algorithm::Md5 | Algorithm::Tiger192 | Algorithm::Aes256 => Order::Little,
		}
	}

	pub const fn default_format(self) -> Format {
		match self {
			Algorithm::Aes256 => Format::Base64,
			_ => Format::Hex,
		}
	}

	/// Key under which digest timings are reported to a profiler.
	pub fn signature(self) -> String {
		format!("{}.default", self.name())
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Algorithm {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let algorithm = match s.to_ascii_uppercase().as_str() {
			"MD5" => Algorithm::Md5,
			"SHA1" | "SHA-1" => Algorithm::Sha1,
			"SHA256" | "SHA-256" => Algorithm::Sha256,
			"TIGER192" | "TIGER" | "TIGER/192" => Algorithm::Tiger192,
			"AES256" | "AES-256" => Algorithm::Aes256,
			_ => {
				return Err(Error::Range {
					kind: "algorithm",
					value: s.to_string(),
				})
			}
		};
		Ok(algorithm)
	}
}
