// Copyright 2024-2025 Irreducible Inc.

//! Early-return helpers shared by the hashkit crates.
//!
//! With the `bail_panic` feature enabled, `bail!` panics instead of returning, which gives a
//! backtrace at the exact point a self-test or argument check failed.

#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err);
	};
}

#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		return Err($err.into());
	};
}

#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}

#[cfg(all(test, not(feature = "bail_panic")))]
mod tests {
	#[derive(Debug, PartialEq, Eq)]
	enum Error {
		TooShort(usize),
	}

	fn check_len(data: &[u8]) -> Result<usize, Error> {
		crate::ensure!(data.len() >= 4, Error::TooShort(data.len()));
		Ok(data.len())
	}

	#[test]
	fn test_ensure_passes_through() {
		assert_eq!(check_len(b"abcd"), Ok(4));
	}

	#[test]
	fn test_ensure_returns_error() {
		assert_eq!(check_len(b"ab"), Err(Error::TooShort(2)));
	}
}
