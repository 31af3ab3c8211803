// Copyright 2024-2025 Irreducible Inc.

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
	struct Rejected(u8);

	fn reject_odd(value: u8) -> Result<u8, Rejected> {
		crate::ensure!(value % 2 == 0, Rejected(value));
		Ok(value / 2)
	}

	#[test]
	fn test_ensure() {
		assert_eq!(reject_odd(4), Ok(2));
		assert_eq!(reject_odd(5), Err(Rejected(5)));
	}
}
