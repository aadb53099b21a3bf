// Copyright 2025 Irreducible Inc.

//! Construction of hash functions by name.

use std::{fmt, sync::Arc};

use hashkit_utils::bail;

use crate::{
	Algorithm, DigestOptions, DigestOutput, DigestRequest, Engine, Error, Hasher, Md5, Message,
	Sha1, Sha256, Tiger192, config::Config, profile::Profiler,
};

/// Object-safe view of a self-tested [`Hasher`].
pub trait Digester: Send + Sync + fmt::Debug {
	fn algorithm(&self) -> Algorithm;

	fn signature(&self) -> &str;

	fn digest_with(&self, message: &Message, options: DigestOptions) -> DigestOutput;

	/// Fails with [`Error::Argument`] when the request carries no message.
	fn digest_request(&self, request: DigestRequest) -> Result<DigestOutput, Error>;
}

impl<E: Engine> Digester for Hasher<E> {
	fn algorithm(&self) -> Algorithm {
		Hasher::algorithm(self)
	}

	fn signature(&self) -> &str {
		Hasher::signature(self)
	}

	fn digest_with(&self, message: &Message, options: DigestOptions) -> DigestOutput {
		Hasher::digest_with(self, message, options)
	}

	fn digest_request(&self, request: DigestRequest) -> Result<DigestOutput, Error> {
		Hasher::digest_request(self, request)
	}
}

/// Constructs the hash function registered under `name`.
///
/// Names are case-insensitive: `MD5`, `SHA1`, `SHA256` and `TIGER192`, plus the aliases `SHA-1`,
/// `SHA-256`, `TIGER` and `TIGER/192`. The profiler is picked by [`Config::from_env`].
pub fn construct(name: &str) -> Result<Box<dyn Digester>, Error> {
	construct_with_profiler(name, Config::from_env().profiler())
}

pub fn construct_with_profiler(
	name: &str,
	profiler: Arc<dyn Profiler>,
) -> Result<Box<dyn Digester>, Error> {
	let algorithm = name.parse::<Algorithm>()?;
	let digester: Box<dyn Digester> = match algorithm {
		Algorithm::Md5 => Box::new(Hasher::<Md5>::with_profiler(profiler)?),
		Algorithm::Sha1 => Box::new(Hasher::<Sha1>::with_profiler(profiler)?),
		Algorithm::Sha256 => Box::new(Hasher::<Sha256>::with_profiler(profiler)?),
		Algorithm::Tiger192 => Box::new(Hasher::<Tiger192>::with_profiler(profiler)?),
		Algorithm::Aes256 => {
			bail!(Error::NotImplemented(algorithm.name()));
		}
	};
	tracing::debug!(%algorithm, "constructed digester");
	Ok(digester)
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;

	use super::*;
	use crate::profile::NoopProfiler;

	#[test]
	fn test_construct_all() {
		for (name, algorithm) in [
			("MD5", Algorithm::Md5),
			("sha1", Algorithm::Sha1),
			("SHA-256", Algorithm::Sha256),
			("tiger/192", Algorithm::Tiger192),
		] {
			let digester = construct(name).unwrap();
			assert_eq!(digester.algorithm(), algorithm);
			assert_eq!(digester.signature(), algorithm.signature());
		}
	}

	#[test]
	#[cfg(not(feature = "bail_panic"))]
	fn test_construct_errors() {
		assert_matches!(construct("AES256"), Err(Error::NotImplemented("AES256")));
		assert_matches!(
			construct_with_profiler("whirlpool", Arc::new(NoopProfiler)),
			Err(Error::Range { kind: "algorithm", .. })
		);
	}

	#[test]
	fn test_trait_object_digest() {
		let digester = construct("SHA256").unwrap();
		let output = digester.digest_with(&Message::from("ABCDE"), DigestOptions::default());
		assert_eq!(
			output.as_text(),
			Some("f0393febe8baaa55e32f7be2a7cc180bf34e52137d99e056c817a9c07b8f239a")
		);
	}
}
