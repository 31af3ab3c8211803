// Copyright 2024 Irreducible Inc.

use cfg_if::cfg_if;

cfg_if! {
	if #[cfg(all(target_arch = "x86_64", feature = "nightly_features", target_feature = "avx512f"))] {
		pub const OPTIMAL_ALIGNMENT: usize = 512;

		pub type Bits128 = super::x86_64::m128::M128;
		pub type Bits256 = super::x86_64::m256::M256;
		pub type Bits512 = super::x86_64::m512::M512;
		pub type OptimalContainer = Bits512;
	} else if #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))] {
		pub const OPTIMAL_ALIGNMENT: usize = 256;

		pub type Bits128 = super::x86_64::m128::M128;
		pub type Bits256 = super::x86_64::m256::M256;
		pub type Bits512 = crate::container::ScaledContainer<Bits256, 2>;
		pub type OptimalContainer = Bits256;
	} else if #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))] {
		pub const OPTIMAL_ALIGNMENT: usize = 128;

		pub type Bits128 = super::x86_64::m128::M128;
		pub type Bits256 = crate::container::ScaledContainer<Bits128, 2>;
		pub type Bits512 = crate::container::ScaledContainer<Bits256, 2>;
		pub type OptimalContainer = Bits128;
	} else if #[cfg(all(target_arch = "aarch64", target_feature = "neon"))] {
		pub const OPTIMAL_ALIGNMENT: usize = 128;

		pub type Bits128 = super::aarch64::m128::M128;
		pub type Bits256 = crate::container::ScaledContainer<Bits128, 2>;
		pub type Bits512 = crate::container::ScaledContainer<Bits256, 2>;
		pub type OptimalContainer = Bits128;
	} else {
		pub const OPTIMAL_ALIGNMENT: usize = 128;

		pub type Bits128 = u128;
		pub type Bits256 = crate::container::ScaledContainer<Bits128, 2>;
		pub type Bits512 = crate::container::ScaledContainer<Bits128, 4>;
		pub type OptimalContainer = Bits128;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::BitContainer;

	#[test]
	fn test_widths() {
		assert_eq!(Bits128::BITS, 128);
		assert_eq!(Bits256::BITS, 256);
		assert_eq!(Bits512::BITS, 512);
		assert_eq!(OptimalContainer::BITS, OPTIMAL_ALIGNMENT);
		assert_eq!(std::mem::size_of::<Bits512>() * 8, 512);
	}
}
