// Copyright 2023 Ulvetanna Inc.

#[cfg(target_feature = "sse2")]
pub(super) mod m128;
#[cfg(target_feature = "avx2")]
pub(super) mod m256;
#[cfg(all(feature = "nightly_features", target_feature = "avx512f"))]
pub(super) mod m512;

/// Expands to a `match` over all 256 truth table codes, each arm calling the `vpternlog`
/// intrinsic `$intrinsic` with the code as immediate.
/// The immediate must be a constant, so for a code that is known at compile time the match
/// folds to a single instruction.
#[allow(unused_macros)]
macro_rules! ternary_logic_dispatch {
	($intrinsic:ident, $a:expr, $b:expr, $c:expr, $code:expr) => {
		seq_macro::seq!(N in 0..256 {
			match $code {
				#(
					N => unsafe { $intrinsic::<N>($a, $b, $c) },
				)*
			}
		})
	};
}

#[allow(unused_imports)]
pub(super) use ternary_logic_dispatch;
