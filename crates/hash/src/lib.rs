// Copyright 2023-2025 Irreducible Inc.

//! Self-testing MD5, SHA-1, SHA-256 and Tiger/192 digests with a shared output pipeline.
//!
//! ```
//! use hashkit_hash::{construct, DigestOptions, Format, Message};
//!
//! let md5 = construct("MD5").unwrap();
//! let options = DigestOptions::new().with_format(Format::Base64);
//! let output = md5.digest_with(&Message::from("ABCDEFGHIJ"), options);
//! assert_eq!(output.as_text(), Some("6GQQ+i1uJjT9isX0s6/n8w=="));
//! ```

mod algorithm;
pub mod config;
mod engine;
mod error;
mod hasher;
mod md5;
mod message;
mod options;
mod output;
pub mod pipeline;
pub mod profile;
pub mod registry;
pub mod selftest;
mod sha1;
mod sha256;
pub mod tiger192;
pub mod vectors;

pub use algorithm::*;
pub use engine::{BLOCK_LEN, Block, Engine};
pub use error::*;
pub use hasher::*;
pub use self::md5::Md5;
pub use message::*;
pub use options::*;
pub use output::*;
pub use registry::{Digester, construct, construct_with_profiler};
pub use self::sha1::Sha1;
pub use self::sha256::Sha256;
pub use tiger192::Tiger192;
