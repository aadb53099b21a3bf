// Copyright 2025 Irreducible Inc.

pub mod base91;
mod error;
pub mod text;

pub use error::*;
