// Copyright 2023 Ulvetanna Inc.

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to the `warn` level when `RUST_LOG` is unset or malformed. Calling this more than
/// once is harmless, later calls leave the first subscriber in place.
pub fn init_tracing() {
	use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer())
		.try_init();
}

#[cfg(test)]
mod tests {
	#[test]
	fn test_init_is_idempotent() {
		super::init_tracing();
		super::init_tracing();
		::tracing::info!("subscriber installed");
	}
}
