// Copyright 2025 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("symbol {symbol:?} at position {position} is not in the base-91 alphabet")]
	InvalidSymbol { symbol: char, position: usize },
	/// Thrown when the encoded text ends with half of a symbol pair.
	#[error("symbol at position {position} has no partner, base-91 text is made of symbol pairs")]
	UnpairedSymbol { position: usize },
}
