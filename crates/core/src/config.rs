// Copyright 2024 Irreducible Inc.

use std::sync::OnceLock;

use ternlog_utils::env::boolean_env_flag_set;

/// Environment variable that turns off the native ternary logic instructions when set to a truthy
/// value (`1`, `on`, `true`, `yes`).
pub const DISABLE_NATIVE_ENV: &str = "TERNLOG_DISABLE_NATIVE";

static GLOBAL: OnceLock<Config> = OnceLock::new();

/// Process-wide evaluation settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Config {
	native: bool,
}

impl Config {
	pub const fn new() -> Self {
		Self { native: true }
	}

	/// Whether containers with a native ternary logic instruction may use it.
	pub const fn native(&self) -> bool {
		self.native
	}

	pub const fn with_native(self, native: bool) -> Self {
		Self { native }
	}

	/// Reads the configuration from the environment.
	pub fn from_env() -> Self {
		let config = Self::new().with_native(!boolean_env_flag_set(DISABLE_NATIVE_ENV));
		tracing::debug!(native = config.native, "resolved ternary logic configuration");
		config
	}

	/// The configuration used by [`crate::evaluate`] and the bulk entry points.
	///
	/// Resolved from the environment on first access unless [`Config::install`] ran before.
	pub fn global() -> &'static Self {
		GLOBAL.get_or_init(Self::from_env)
	}

	/// Publishes `self` as the global configuration.
	///
	/// Fails and returns `self` back if the global configuration was already resolved.
	pub fn install(self) -> Result<(), Self> {
		GLOBAL.set(self)
	}
}

impl Default for Config {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builder() {
		assert!(Config::new().native());
		assert!(!Config::new().with_native(false).native());
		assert_eq!(Config::default(), Config::new());
	}

	#[test]
	fn test_global_is_stable() {
		let first = *Config::global();
		assert_eq!(*Config::global(), first);
		assert_eq!(first.install(), Err(first));
	}
}
