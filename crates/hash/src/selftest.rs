// Copyright 2025 Irreducible Inc.

//! Known-answer checks run before an engine is handed out.

use hashkit_utils::bail;

use crate::{
	DigestOptions, DigestOutput, Engine, Error, Format, Message, Order, pipeline,
	vectors::{clip_string, test_vector},
};

/// Message of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
	Text(&'static str),
	/// A named test vector, see [`test_vector`].
	Vector(&'static str),
	/// A named test vector with every code unit explicitly clipped to a byte.
	ClippedVector(&'static str),
}

impl Input {
	fn message(self) -> Result<Message<'static>, Error> {
		let message = match self {
			Input::Text(text) => Message::from(text),
			Input::Vector(handle) => Message::from_units(test_vector(handle)?),
			Input::ClippedVector(handle) => Message::from_units(&clip_string(test_vector(handle)?)),
		};
		Ok(message)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
	Text(&'static str),
	Bytes(&'static [u8]),
	/// The digest of another input under the same options.
	SameAs(Input),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
	pub label: &'static str,
	pub input: Input,
	pub options: DigestOptions,
	pub expected: Expected,
}

impl Check {
	pub fn new(label: &'static str, input: Input, expected: Expected) -> Self {
		Self {
			label,
			input,
			options: DigestOptions::default(),
			expected,
		}
	}

	pub fn with_format(mut self, format: Format) -> Self {
		self.options.format = Some(format);
		self
	}

	pub fn with_order(mut self, order: Order) -> Self {
		self.options.order = Some(order);
		self
	}

	/// Checks over the empty string and the shared test vectors.
	///
	/// `expected` holds the default-format digests of, in order, the empty string,
	/// `digest-base64`, `digest-span-utf8`, `digest-span-utf16`, `digest-1024x0` and
	/// `digest-random`.
	pub fn common_vectors(expected: [&'static str; 6]) -> Vec<Self> {
		let [empty, base64, span_utf8, span_utf16, zeros, random] = expected;
		vec![
			Self::new("'' (empty string)", Input::Text(""), Expected::Text(empty)),
			Self::new("{digest-base64}", Input::Vector("digest-base64"), Expected::Text(base64)),
			Self::new(
				"{digest-span-utf8}",
				Input::Vector("digest-span-utf8"),
				Expected::Text(span_utf8),
			),
			Self::new(
				"{digest-span-utf16} (implicitly clipped to byte-sized characters)",
				Input::Vector("digest-span-utf16"),
				Expected::Text(span_utf16),
			),
			Self::new(
				"{digest-span-utf16} (explicitly clipped to byte-sized characters)",
				Input::Vector("digest-span-utf16"),
				Expected::SameAs(Input::ClippedVector("digest-span-utf16")),
			),
			Self::new("{digest-1024x0}", Input::Vector("digest-1024x0"), Expected::Text(zeros)),
			Self::new("{digest-random}", Input::Vector("digest-random"), Expected::Text(random)),
		]
	}
}

/// Runs every check of `E` against `engine`, stopping at the first mismatch.
pub fn run<E: Engine>(engine: &E) -> Result<(), Error> {
	let checks = E::checks();
	for check in &checks {
		let actual = pipeline::digest(engine, &check.input.message()?, check.options);
		let expected = match check.expected {
			Expected::Text(text) => DigestOutput::Text(text.to_string()),
			Expected::Bytes(bytes) => DigestOutput::Bytes(bytes.to_vec()),
			Expected::SameAs(input) => pipeline::digest(engine, &input.message()?, check.options),
		};

		if actual != expected {
			tracing::error!(
				algorithm = %E::ALGORITHM,
				vector = check.label,
				%expected,
				%actual,
				"self-test failed"
			);
			bail!(Error::Assertion {
				algorithm: E::ALGORITHM.name(),
				vector: check.label,
				expected: expected.to_string(),
				actual: actual.to_string(),
			});
		}
	}

	tracing::debug!(algorithm = %E::ALGORITHM, checks = checks.len(), "self-test passed");
	Ok(())
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;

	use super::*;
	use crate::{Algorithm, Md5};

	/// MD5 with a deliberately wrong answer for one input.
	struct BrokenMd5(Md5);

	impl Engine for BrokenMd5 {
		const ALGORITHM: Algorithm = Algorithm::Md5;

		type Words = [u32; 4];

		fn new() -> Result<Self, Error> {
			Ok(Self(Md5))
		}

		fn compress(&self, message: &[u8]) -> [u32; 4] {
			let mut words = self.0.compress(message);
			if message == b"ABCDEFGHIJ" {
				words[0] ^= 1;
			}
			words
		}

		fn checks() -> Vec<Check> {
			Md5::checks()
		}
	}

	#[test]
	fn test_all_engines_pass() {
		run(&crate::Md5::new().unwrap()).unwrap();
		run(&crate::Sha1::new().unwrap()).unwrap();
		run(&crate::Sha256::new().unwrap()).unwrap();
		run(&crate::Tiger192::new().unwrap()).unwrap();
	}

	#[test]
	#[cfg(not(feature = "bail_panic"))]
	fn test_first_mismatch_is_reported() {
		let result = run(&BrokenMd5::new().unwrap());
		assert_matches!(
			result,
			Err(Error::Assertion {
				algorithm: "MD5",
				vector: "'ABCDEFGHIJ' (formatted to hex string)",
				..
			})
		);
		if let Err(Error::Assertion {
			expected, actual, ..
		}) = result
		{
			assert_eq!(expected, "e86410fa2d6e2634fd8ac5f4b3afe7f3");
			assert_eq!(actual, "e96410fa2d6e2634fd8ac5f4b3afe7f3");
		}
	}

	#[test]
	fn test_common_vectors_layout() {
		let checks = Check::common_vectors(["a", "b", "c", "d", "e", "f"]);
		assert_eq!(checks.len(), 7);
		assert_eq!(checks[0].input, Input::Text(""));
		assert_eq!(
			checks[4].expected,
			Expected::SameAs(Input::ClippedVector("digest-span-utf16"))
		);
	}
}
