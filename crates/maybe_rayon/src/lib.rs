// Copyright 2025 Irreducible Inc.
// The code is initially based on `maybe-rayon` crate, https://github.com/shssoichiro/maybe-rayon

//! The subset of the `rayon` API used by the bulk evaluators, available with and without
//! `rayon`.
//!
//! With the `rayon` feature this crate re-exports `rayon`. Without it, the same method names run
//! sequentially on the standard library iterators, which keeps single-threaded builds and their
//! profiles free of thread pool frames.

cfg_if::cfg_if! {
	if #[cfg(any(not(feature = "rayon"), all(target_arch="wasm32", not(target_feature = "atomics"))))] {
		pub mod iter;
		pub mod slice;

		pub mod prelude {
			pub use super::{iter::*, slice::*};
		}

		#[inline(always)]
		pub const fn current_num_threads() -> usize {
			1
		}
	} else {
		pub use rayon::*;
	}
}
