// Copyright 2025 Irreducible Inc.

use std::borrow::Cow;

use crate::DigestOptions;

/// Input of a digest call, a sequence of 8-bit code units.
///
/// Strings are never UTF-8 encoded. Each UTF-16 code unit is clipped to its low byte, so
/// `"\u{0141}"` and `"A"` hash identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message<'a>(Cow<'a, [u8]>);

impl<'a> Message<'a> {
	pub fn from_bytes(bytes: &'a [u8]) -> Self {
		Self(Cow::Borrowed(bytes))
	}

	pub fn from_units(units: &[u16]) -> Message<'static> {
		Message(Cow::Owned(clip_units(units)))
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// Keeps the low byte of every code unit.
pub fn clip_units(units: &[u16]) -> Vec<u8> {
	units.iter().map(|&unit| unit as u8).collect()
}

impl<'a> From<&'a [u8]> for Message<'a> {
	fn from(bytes: &'a [u8]) -> Self {
		Self::from_bytes(bytes)
	}
}

impl<'a, const N: usize> From<&'a [u8; N]> for Message<'a> {
	fn from(bytes: &'a [u8; N]) -> Self {
		Self::from_bytes(bytes)
	}
}

impl From<Vec<u8>> for Message<'static> {
	fn from(bytes: Vec<u8>) -> Self {
		Self(Cow::Owned(bytes))
	}
}

impl From<&[u16]> for Message<'static> {
	fn from(units: &[u16]) -> Self {
		Self::from_units(units)
	}
}

impl From<&str> for Message<'static> {
	fn from(text: &str) -> Self {
		Self(Cow::Owned(text.encode_utf16().map(|unit| unit as u8).collect()))
	}
}

/// A message together with its output options.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DigestRequest<'a> {
	pub message: Option<Message<'a>>,
	pub options: DigestOptions,
}

impl<'a> DigestRequest<'a> {
	pub fn new(message: impl Into<Message<'a>>) -> Self {
		Self {
			message: Some(message.into()),
			options: DigestOptions::default(),
		}
	}

	pub fn with_options(mut self, options: DigestOptions) -> Self {
		self.options = options;
		self
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_ascii_text_is_unchanged() {
		assert_eq!(Message::from("ABCDE").as_bytes(), b"ABCDE");
	}

	#[test]
	fn test_text_is_clipped_not_encoded() {
		assert_eq!(Message::from("\u{0141}\u{00ff}").as_bytes(), &[0x41, 0xff]);
		// a surrogate pair contributes two clipped units
		assert_eq!(Message::from("\u{1f600}").as_bytes(), &[0x3d, 0x00]);
	}

	#[test]
	fn test_bytes_are_borrowed() {
		let bytes = [1u8, 2, 3];
		let message = Message::from(&bytes);
		assert!(matches!(message.0, Cow::Borrowed(_)));
		assert_eq!(message.len(), 3);
		assert!(!message.is_empty());
	}

	proptest! {
		#[test]
		fn test_clipping_is_idempotent(units in prop::collection::vec(any::<u16>(), 0..256)) {
			let clipped = clip_units(&units);
			let widened = clipped.iter().map(|&byte| byte as u16).collect::<Vec<_>>();
			prop_assert_eq!(clip_units(&widened), clipped);
		}
	}
}
