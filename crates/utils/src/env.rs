// Copyright 2024 Irreducible Inc.

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match std::env::var(flag) {
		Ok(val) => parse_flag(&val),
		Err(_) => false,
	}
}

fn parse_flag(val: &str) -> bool {
	["1", "on", "ON", "true", "TRUE", "yes", "YES"].contains(&val)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_flag() {
		for val in ["1", "on", "TRUE", "yes"] {
			assert!(parse_flag(val), "{val}");
		}
		for val in ["", "0", "off", "True", "enabled"] {
			assert!(!parse_flag(val), "{val}");
		}
	}

	#[test]
	fn test_unset_flag() {
		assert!(!boolean_env_flag_set("HASHKIT_UTILS_FLAG_THAT_IS_NEVER_SET"));
	}
}
