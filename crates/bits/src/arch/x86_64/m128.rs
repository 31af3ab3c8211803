// Copyright 2024 Irreducible Inc.

use std::{
	arch::x86_64::*,
	mem::transmute,
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

use bytemuck::{Pod, Zeroable};
use rand::{Rng, RngCore};

use crate::container::{BitContainer, Random};

/// 128-bit value that is used for 128-bit SIMD operations
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct M128(pub(super) __m128i);

impl M128 {
	#[inline(always)]
	pub const fn from_u128(val: u128) -> Self {
		Self(unsafe { transmute::<u128, __m128i>(val) })
	}

	#[inline(always)]
	pub const fn to_u128(self) -> u128 {
		unsafe { transmute::<__m128i, u128>(self.0) }
	}
}

impl From<__m128i> for M128 {
	#[inline(always)]
	fn from(value: __m128i) -> Self {
		Self(value)
	}
}

impl From<u128> for M128 {
	#[inline(always)]
	fn from(value: u128) -> Self {
		Self::from_u128(value)
	}
}

impl From<M128> for u128 {
	#[inline(always)]
	fn from(value: M128) -> Self {
		value.to_u128()
	}
}

impl From<M128> for __m128i {
	#[inline(always)]
	fn from(value: M128) -> Self {
		value.0
	}
}

impl Default for M128 {
	#[inline(always)]
	fn default() -> Self {
		Self(unsafe { _mm_setzero_si128() })
	}
}

impl BitAnd for M128 {
	type Output = Self;

	#[inline(always)]
	fn bitand(self, rhs: Self) -> Self::Output {
		Self(unsafe { _mm_and_si128(self.0, rhs.0) })
	}
}

impl BitAndAssign for M128 {
	#[inline(always)]
	fn bitand_assign(&mut self, rhs: Self) {
		*self = *self & rhs
	}
}

impl BitOr for M128 {
	type Output = Self;

	#[inline(always)]
	fn bitor(self, rhs: Self) -> Self::Output {
		Self(unsafe { _mm_or_si128(self.0, rhs.0) })
	}
}

impl BitOrAssign for M128 {
	#[inline(always)]
	fn bitor_assign(&mut self, rhs: Self) {
		*self = *self | rhs
	}
}

impl BitXor for M128 {
	type Output = Self;

	#[inline(always)]
	fn bitxor(self, rhs: Self) -> Self::Output {
		Self(unsafe { _mm_xor_si128(self.0, rhs.0) })
	}
}

impl BitXorAssign for M128 {
	#[inline(always)]
	fn bitxor_assign(&mut self, rhs: Self) {
		*self = *self ^ rhs;
	}
}

impl Not for M128 {
	type Output = Self;

	#[inline(always)]
	fn not(self) -> Self::Output {
		self ^ Self::ONES
	}
}

impl PartialEq for M128 {
	fn eq(&self, other: &Self) -> bool {
		self.to_u128() == other.to_u128()
	}
}

impl Eq for M128 {}

impl Random for M128 {
	fn random(mut rng: impl RngCore) -> Self {
		let val: u128 = rng.gen();
		val.into()
	}
}

impl std::fmt::Display for M128 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let data: u128 = (*self).into();
		write!(f, "{data:032X}")
	}
}

impl std::fmt::Debug for M128 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "M128({})", self)
	}
}

unsafe impl Zeroable for M128 {}

unsafe impl Pod for M128 {}

unsafe impl Send for M128 {}

unsafe impl Sync for M128 {}

impl BitContainer for M128 {
	const BITS: usize = 128;

	const ZERO: Self = Self::from_u128(0);
	const ONES: Self = Self::from_u128(u128::MAX);

	#[cfg(all(feature = "nightly_features", target_feature = "avx512vl"))]
	const HAS_NATIVE_TERNARY_LOGIC: bool = true;

	#[inline(always)]
	fn broadcast_byte(byte: u8) -> Self {
		Self(unsafe { _mm_set1_epi8(byte as i8) })
	}

	#[cfg(all(feature = "nightly_features", target_feature = "avx512vl"))]
	#[inline(always)]
	fn ternary_logic_native(a: Self, b: Self, c: Self, code: u8) -> Option<Self> {
		Some(Self(super::ternary_logic_dispatch!(_mm_ternarylogic_epi64, a.0, b.0, c.0, code)))
	}
}

#[cfg(test)]
mod tests {
	use proptest::{arbitrary::any, proptest};

	use super::*;

	#[test]
	fn test_constants() {
		assert_eq!(M128::default(), M128::ZERO);
		assert_eq!(u128::from(M128::ONES), u128::MAX);
		assert_eq!(M128::broadcast_byte(0x5a), M128::from(u128::from_le_bytes([0x5a; 16])));
	}

	#[test]
	fn test_byte_order() {
		let value = M128::from(0x0100u128);
		assert_eq!(value.to_bytes()[1], 1);
		assert!(value.lane(8));
	}

	proptest! {
		#[test]
		fn test_conversion(a in any::<u128>()) {
			assert_eq!(u128::from(M128::from(a)), a);
		}

		#[test]
		fn test_binary_bit_operations(a in any::<u128>(), b in any::<u128>()) {
			assert_eq!(M128::from(a & b), M128::from(a) & M128::from(b));
			assert_eq!(M128::from(a | b), M128::from(a) | M128::from(b));
			assert_eq!(M128::from(a ^ b), M128::from(a) ^ M128::from(b));
		}

		#[test]
		fn test_negate(a in any::<u128>()) {
			assert_eq!(M128::from(!a), !M128::from(a))
		}
	}
}
