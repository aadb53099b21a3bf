// Copyright 2025 Irreducible Inc.

use std::{sync::Arc, time::Instant};

use tracing::instrument;

use crate::{
	Algorithm, DigestOptions, DigestOutput, DigestRequest, Engine, Error, Message, pipeline,
	profile::{NoopProfiler, Profiler},
	selftest,
};

/// A self-tested instance of the hash function implemented by `E`.
///
/// The only way to obtain a `Hasher` is through a constructor that first runs the engine's
/// known-answer checks, so every instance in existence has passed them.
pub struct Hasher<E: Engine> {
	engine: E,
	signature: String,
	profiler: Arc<dyn Profiler>,
}

impl<E: Engine> Hasher<E> {
	pub fn new() -> Result<Self, Error> {
		Self::with_profiler(Arc::new(NoopProfiler))
	}

	/// Creates an instance reporting the duration of every digest call to `profiler`.
	#[instrument(skip_all, name = "Hasher::new", fields(algorithm = %E::ALGORITHM))]
	pub fn with_profiler(profiler: Arc<dyn Profiler>) -> Result<Self, Error> {
		let engine = E::new()?;
		selftest::run(&engine)?;
		Ok(Self {
			engine,
			signature: E::ALGORITHM.signature(),
			profiler,
		})
	}

	pub fn algorithm(&self) -> Algorithm {
		E::ALGORITHM
	}

	/// Key under which digest calls are profiled, `<ALGORITHM>.default`.
	pub fn signature(&self) -> &str {
		&self.signature
	}

	/// Digests `message` with the default options of the algorithm.
	pub fn digest<'a>(&self, message: impl Into<Message<'a>>) -> DigestOutput {
		self.digest_with(&message.into(), DigestOptions::default())
	}

	#[instrument(level = "debug", skip_all, fields(algorithm = %E::ALGORITHM, len = message.len()))]
	pub fn digest_with(&self, message: &Message, options: DigestOptions) -> DigestOutput {
		let start = Instant::now();
		let output = pipeline::digest(&self.engine, message, options);
		self.profiler
			.sample(&self.signature, message.len(), start.elapsed());
		output
	}

	pub fn digest_request(&self, request: DigestRequest) -> Result<DigestOutput, Error> {
		let Some(message) = request.message else {
			hashkit_utils::bail!(Error::Argument("digest request carries no message"));
		};
		Ok(self.digest_with(&message, request.options))
	}
}

impl<E: Engine> std::fmt::Debug for Hasher<E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Hasher")
			.field("algorithm", &E::ALGORITHM)
			.finish_non_exhaustive()
	}
}
