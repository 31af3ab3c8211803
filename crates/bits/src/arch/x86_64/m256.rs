// Copyright 2024 Irreducible Inc.

use std::{
	arch::x86_64::*,
	mem::transmute,
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

use bytemuck::{Pod, Zeroable};
use rand::{Rng, RngCore};

use super::m128::M128;
use crate::container::{BitContainer, Random};

/// 256-bit value that is used for 256-bit SIMD operations
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct M256(pub(super) __m256i);

impl M256 {
	pub const fn from_u128s(val: [u128; 2]) -> Self {
		Self(unsafe { transmute::<[u128; 2], __m256i>(val) })
	}

	pub const fn from_equal_u128s(val: u128) -> Self {
		Self::from_u128s([val, val])
	}

	pub const fn to_u128s(self) -> [u128; 2] {
		unsafe { transmute::<__m256i, [u128; 2]>(self.0) }
	}
}

impl From<__m256i> for M256 {
	#[inline(always)]
	fn from(value: __m256i) -> Self {
		Self(value)
	}
}

impl From<[u128; 2]> for M256 {
	fn from(value: [u128; 2]) -> Self {
		Self::from_u128s(value)
	}
}

impl From<[M128; 2]> for M256 {
	fn from(value: [M128; 2]) -> Self {
		Self::from_u128s(value.map(u128::from))
	}
}

impl From<u128> for M256 {
	fn from(value: u128) -> Self {
		Self::from_u128s([value, 0])
	}
}

impl From<M256> for [u128; 2] {
	fn from(value: M256) -> Self {
		value.to_u128s()
	}
}

impl From<M256> for __m256i {
	#[inline(always)]
	fn from(value: M256) -> Self {
		value.0
	}
}

impl Default for M256 {
	#[inline(always)]
	fn default() -> Self {
		Self(unsafe { _mm256_setzero_si256() })
	}
}

impl BitAnd for M256 {
	type Output = Self;

	#[inline(always)]
	fn bitand(self, rhs: Self) -> Self::Output {
		Self(unsafe { _mm256_and_si256(self.0, rhs.0) })
	}
}

impl BitAndAssign for M256 {
	#[inline(always)]
	fn bitand_assign(&mut self, rhs: Self) {
		*self = *self & rhs
	}
}

impl BitOr for M256 {
	type Output = Self;

	#[inline(always)]
	fn bitor(self, rhs: Self) -> Self::Output {
		Self(unsafe { _mm256_or_si256(self.0, rhs.0) })
	}
}

impl BitOrAssign for M256 {
	#[inline(always)]
	fn bitor_assign(&mut self, rhs: Self) {
		*self = *self | rhs
	}
}

impl BitXor for M256 {
	type Output = Self;

	#[inline(always)]
	fn bitxor(self, rhs: Self) -> Self::Output {
		Self(unsafe { _mm256_xor_si256(self.0, rhs.0) })
	}
}

impl BitXorAssign for M256 {
	#[inline(always)]
	fn bitxor_assign(&mut self, rhs: Self) {
		*self = *self ^ rhs;
	}
}

impl Not for M256 {
	type Output = Self;

	#[inline(always)]
	fn not(self) -> Self::Output {
		self ^ Self::ONES
	}
}

impl PartialEq for M256 {
	fn eq(&self, other: &Self) -> bool {
		self.to_u128s() == other.to_u128s()
	}
}

impl Eq for M256 {}

impl Random for M256 {
	fn random(mut rng: impl RngCore) -> Self {
		let val: [u128; 2] = rng.gen();
		val.into()
	}
}

impl std::fmt::Display for M256 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let [low, high] = self.to_u128s();
		write!(f, "{high:032X}{low:032X}")
	}
}

impl std::fmt::Debug for M256 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "M256({})", self)
	}
}

unsafe impl Zeroable for M256 {}

unsafe impl Pod for M256 {}

unsafe impl Send for M256 {}

unsafe impl Sync for M256 {}

impl BitContainer for M256 {
	const BITS: usize = 256;

	const ZERO: Self = Self::from_equal_u128s(0);
	const ONES: Self = Self::from_equal_u128s(u128::MAX);

	#[cfg(all(feature = "nightly_features", target_feature = "avx512vl"))]
	const HAS_NATIVE_TERNARY_LOGIC: bool = true;

	#[inline(always)]
	fn broadcast_byte(byte: u8) -> Self {
		Self(unsafe { _mm256_set1_epi8(byte as i8) })
	}

	#[cfg(all(feature = "nightly_features", target_feature = "avx512vl"))]
	#[inline(always)]
	fn ternary_logic_native(a: Self, b: Self, c: Self, code: u8) -> Option<Self> {
		Some(Self(super::ternary_logic_dispatch!(_mm256_ternarylogic_epi64, a.0, b.0, c.0, code)))
	}
}

#[cfg(test)]
mod tests {
	use proptest::{arbitrary::any, proptest};

	use super::*;

	#[test]
	fn test_constants() {
		assert_eq!(M256::default(), M256::ZERO);
		assert_eq!(M256::from(0u128), M256::ZERO);
		assert_eq!(M256::ONES.to_u128s(), [u128::MAX; 2]);
		assert_eq!(M256::broadcast_byte(0xc3), M256::from_equal_u128s(u128::from_le_bytes([0xc3; 16])));
	}

	#[test]
	fn test_halves() {
		let value = M256::from([M128::from(1u128), M128::from(2u128)]);
		assert_eq!(value.to_u128s(), [1, 2]);
		assert!(value.lane(0));
		assert!(value.lane(129));
		assert!(!value.lane(128));
	}

	proptest! {
		#[test]
		fn test_binary_bit_operations([a, b, c, d] in any::<[u128;4]>()) {
			assert_eq!(M256::from([a & b, c & d]), M256::from([a, c]) & M256::from([b, d]));
			assert_eq!(M256::from([a | b, c | d]), M256::from([a, c]) | M256::from([b, d]));
			assert_eq!(M256::from([a ^ b, c ^ d]), M256::from([a, c]) ^ M256::from([b, d]));
		}

		#[test]
		fn test_negate(a in any::<u128>(), b in any::<u128>()) {
			assert_eq!(M256::from([!a, !b]), !M256::from([a, b]))
		}
	}
}
