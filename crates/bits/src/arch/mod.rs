// Copyright 2023-2024 Irreducible Inc.

use cfg_if::cfg_if;

mod arch_optimal;

cfg_if! {
	if #[cfg(target_arch = "x86_64")] {
		mod x86_64;

		#[cfg(target_feature = "sse2")]
		pub use x86_64::m128::M128;
		#[cfg(target_feature = "avx2")]
		pub use x86_64::m256::M256;
		#[cfg(all(feature = "nightly_features", target_feature = "avx512f"))]
		pub use x86_64::m512::M512;
	} else if #[cfg(target_arch = "aarch64")] {
		mod aarch64;

		#[cfg(target_feature = "neon")]
		pub use aarch64::m128::M128;
	}
}

pub use arch_optimal::*;
