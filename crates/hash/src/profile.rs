// Copyright 2025 Irreducible Inc.

//! Timing collaborators notified after every digest call.

use std::{
	collections::HashMap,
	sync::{Arc, Mutex, PoisonError},
	time::Duration,
};

use lazy_static::lazy_static;

/// Samples shorter than this are too coarse to derive a throughput from.
pub const MIN_RATE_SAMPLE: Duration = Duration::from_millis(20);

/// Shortest recorded time in milliseconds. Faster calls are recorded as this.
pub const MIN_TIME_MS: f64 = 1.0;

pub trait Profiler: Send + Sync {
	fn sample(&self, signature: &str, message_len: usize, elapsed: Duration);
}

/// Discards every sample.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProfiler;

impl Profiler for NoopProfiler {
	fn sample(&self, _signature: &str, _message_len: usize, _elapsed: Duration) {}
}

#[derive(Debug, Default, Clone)]
struct Samples {
	/// Elapsed times in milliseconds.
	times: Vec<f64>,
	/// Throughput in bits per second.
	rates: Vec<f64>,
}

/// Summary statistics over a series of samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
	pub count: usize,
	pub min: f64,
	pub max: f64,
	pub mean: f64,
	/// Sample standard deviation, zero for a single sample.
	pub stdev: f64,
	pub median: f64,
	pub last: f64,
}

impl Summary {
	fn of(values: &[f64]) -> Option<Self> {
		let &last = values.last()?;
		let count = values.len();
		let mut sorted = values.to_vec();
		sorted.sort_by(f64::total_cmp);

		let mean = sorted.iter().sum::<f64>() / count as f64;
		let stdev = if count > 1 {
			let squares = sorted.iter().map(|value| (value - mean).powi(2)).sum::<f64>();
			(squares / (count - 1) as f64).sqrt()
		} else {
			0.0
		};
		let median = if count % 2 == 1 {
			sorted[count / 2]
		} else {
			(sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
		};

		Some(Self {
			count,
			min: sorted[0],
			max: sorted[count - 1],
			mean,
			stdev,
			median,
			last,
		})
	}
}

/// Collects elapsed times and throughput rates per signature.
#[derive(Debug, Default)]
pub struct SampleRecorder {
	samples: Mutex<HashMap<String, Samples>>,
}

lazy_static! {
	static ref GLOBAL_RECORDER: Arc<SampleRecorder> = Arc::new(SampleRecorder::new());
}

impl SampleRecorder {
	pub fn new() -> Self {
		Self::default()
	}

	/// The process-wide recorder.
	pub fn global() -> Arc<SampleRecorder> {
		GLOBAL_RECORDER.clone()
	}

	fn with_samples<R>(&self, f: impl FnOnce(&mut HashMap<String, Samples>) -> R) -> R {
		let mut samples = self.samples.lock().unwrap_or_else(PoisonError::into_inner);
		f(&mut samples)
	}

	/// Elapsed times in milliseconds.
	pub fn times(&self, signature: &str) -> Option<Summary> {
		self.with_samples(|samples| Summary::of(&samples.get(signature)?.times))
	}

	/// Throughput in bits per second, over samples of at least [`MIN_RATE_SAMPLE`].
	pub fn rates(&self, signature: &str) -> Option<Summary> {
		self.with_samples(|samples| Summary::of(&samples.get(signature)?.rates))
	}

	pub fn signatures(&self) -> Vec<String> {
		let mut signatures = self.with_samples(|samples| samples.keys().cloned().collect::<Vec<_>>());
		signatures.sort();
		signatures
	}

	pub fn reset_times(&self, signature: &str) {
		self.with_samples(|samples| {
			if let Some(entry) = samples.get_mut(signature) {
				entry.times.clear();
			}
		})
	}

	pub fn reset_rates(&self, signature: &str) {
		self.with_samples(|samples| {
			if let Some(entry) = samples.get_mut(signature) {
				entry.rates.clear();
			}
		})
	}

	pub fn reset(&self) {
		self.with_samples(HashMap::clear)
	}
}

impl Profiler for SampleRecorder {
	fn sample(&self, signature: &str, message_len: usize, elapsed: Duration) {
		let millis = (elapsed.as_nanos() as f64 / 1e6).max(MIN_TIME_MS);
		tracing::trace!(signature, message_len, millis, "digest sample");
		self.with_samples(|samples| {
			let entry = samples.entry(signature.to_string()).or_default();
			entry.times.push(millis);
			if elapsed >= MIN_RATE_SAMPLE {
				entry
					.rates
					.push(message_len as f64 * 8.0 / elapsed.as_secs_f64());
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_summary() {
		let summary = Summary::of(&[4.0, 1.0, 3.0, 2.0]).unwrap();
		assert_eq!(summary.count, 4);
		assert_eq!(summary.min, 1.0);
		assert_eq!(summary.max, 4.0);
		assert_eq!(summary.mean, 2.5);
		assert_eq!(summary.median, 2.5);
		assert_eq!(summary.last, 2.0);
		assert!((summary.stdev - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);

		let single = Summary::of(&[7.0]).unwrap();
		assert_eq!(single.stdev, 0.0);
		assert_eq!(single.median, 7.0);
		assert!(Summary::of(&[]).is_none());
	}

	#[test]
	fn test_recorder() {
		let recorder = SampleRecorder::new();
		recorder.sample("MD5.default", 1000, Duration::from_millis(1));
		recorder.sample("MD5.default", 1000, Duration::from_millis(25));
		recorder.sample("SHA1.default", 10, Duration::from_millis(3));

		assert_eq!(recorder.signatures(), ["MD5.default", "SHA1.default"]);
		let times = recorder.times("MD5.default").unwrap();
		assert_eq!(times.count, 2);
		assert_eq!(times.last, 25.0);

		let rates = recorder.rates("MD5.default").unwrap();
		assert_eq!(rates.count, 1);
		assert!((rates.last - 320_000.0).abs() < 1e-6);
		assert!(recorder.rates("SHA1.default").is_none());

		recorder.reset_times("MD5.default");
		assert!(recorder.times("MD5.default").is_none());
		assert!(recorder.rates("MD5.default").is_some());

		recorder.reset();
		assert!(recorder.signatures().is_empty());
	}

	#[test]
	fn test_sub_millisecond_samples_count_as_one() {
		let recorder = SampleRecorder::new();
		recorder.sample("MD5.default", 64, Duration::ZERO);
		recorder.sample("MD5.default", 64, Duration::from_micros(300));
		recorder.sample("MD5.default", 64, Duration::from_micros(2500));

		let times = recorder.times("MD5.default").unwrap();
		assert_eq!(times.min, MIN_TIME_MS);
		assert_eq!(times.max, 2.5);
		assert_eq!(times.mean, 1.5);
		assert!(recorder.rates("MD5.default").is_none());
	}
}
