// Copyright 2025 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("invalid argument: {0}")]
	Argument(&'static str),
	#[error("{value:?} is not a valid {kind}")]
	Range { kind: &'static str, value: String },
	/// Thrown when a digest computed during construction differs from its known answer.
	#[error("{algorithm} digest of test vector {vector} is erroneous: expected {expected}, got {actual}")]
	Assertion {
		algorithm: &'static str,
		vector: &'static str,
		expected: String,
		actual: String,
	},
	#[error("{0} is recognised but not implemented")]
	NotImplemented(&'static str),
	#[error("codec error: {0}")]
	Codec(#[from] hashkit_codec::Error),
}
