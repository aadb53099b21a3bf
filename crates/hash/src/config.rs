// Copyright 2025 Irreducible Inc.

use std::sync::Arc;

use hashkit_utils::env::boolean_env_flag_set;

use crate::profile::{NoopProfiler, Profiler, SampleRecorder};

/// Attach the process-wide [`SampleRecorder`] to instances built by the registry.
pub const PROFILE_FLAG: &str = "HASHKIT_PROFILE";

/// Settings read from the environment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config {
	pub profile: bool,
}

impl Config {
	pub fn from_env() -> Self {
		Self {
			profile: boolean_env_flag_set(PROFILE_FLAG),
		}
	}

	pub fn profiler(&self) -> Arc<dyn Profiler> {
		if self.profile {
			SampleRecorder::global()
		} else {
			Arc::new(NoopProfiler)
		}
	}
}
