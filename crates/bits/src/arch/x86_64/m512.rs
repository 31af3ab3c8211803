// Copyright 2024-2025 Irreducible Inc.

use std::{
	arch::x86_64::*,
	mem::transmute,
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

use bytemuck::{Pod, Zeroable};
use rand::{Rng, RngCore};

use super::m256::M256;
use crate::container::{BitContainer, Random};

/// 512-bit value that is used for 512-bit SIMD operations
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct M512(pub(super) __m512i);

impl M512 {
	pub const fn from_u128s(val: [u128; 4]) -> Self {
		Self(unsafe { transmute::<[u128; 4], __m512i>(val) })
	}

	pub const fn from_equal_u128s(val: u128) -> Self {
		Self::from_u128s([val, val, val, val])
	}

	pub const fn to_u128s(self) -> [u128; 4] {
		unsafe { transmute::<__m512i, [u128; 4]>(self.0) }
	}
}

impl From<__m512i> for M512 {
	#[inline(always)]
	fn from(value: __m512i) -> Self {
		Self(value)
	}
}

impl From<[u128; 4]> for M512 {
	fn from(value: [u128; 4]) -> Self {
		Self::from_u128s(value)
	}
}

impl From<[M256; 2]> for M512 {
	fn from(value: [M256; 2]) -> Self {
		let [[a, b], [c, d]] = value.map(M256::to_u128s);
		Self::from_u128s([a, b, c, d])
	}
}

impl From<u128> for M512 {
	fn from(value: u128) -> Self {
		Self::from_u128s([value, 0, 0, 0])
	}
}

impl From<M512> for [u128; 4] {
	fn from(value: M512) -> Self {
		value.to_u128s()
	}
}

impl From<M512> for __m512i {
	#[inline(always)]
	fn from(value: M512) -> Self {
		value.0
	}
}

impl Default for M512 {
	#[inline(always)]
	fn default() -> Self {
		Self(unsafe { _mm512_setzero_si512() })
	}
}

impl BitAnd for M512 {
	type Output = Self;

	#[inline(always)]
	fn bitand(self, rhs: Self) -> Self::Output {
		Self(unsafe { _mm512_and_si512(self.0, rhs.0) })
	}
}

impl BitAndAssign for M512 {
	#[inline(always)]
	fn bitand_assign(&mut self, rhs: Self) {
		*self = *self & rhs
	}
}

impl BitOr for M512 {
	type Output = Self;

	#[inline(always)]
	fn bitor(self, rhs: Self) -> Self::Output {
		Self(unsafe { _mm512_or_si512(self.0, rhs.0) })
	}
}

impl BitOrAssign for M512 {
	#[inline(always)]
	fn bitor_assign(&mut self, rhs: Self) {
		*self = *self | rhs
	}
}

impl BitXor for M512 {
	type Output = Self;

	#[inline(always)]
	fn bitxor(self, rhs: Self) -> Self::Output {
		Self(unsafe { _mm512_xor_si512(self.0, rhs.0) })
	}
}

impl BitXorAssign for M512 {
	#[inline(always)]
	fn bitxor_assign(&mut self, rhs: Self) {
		*self = *self ^ rhs;
	}
}

impl Not for M512 {
	type Output = Self;

	#[inline(always)]
	fn not(self) -> Self::Output {
		// 0x55 is the truth table of "not a"
		Self(unsafe { _mm512_ternarylogic_epi64::<0x55>(self.0, self.0, self.0) })
	}
}

impl PartialEq for M512 {
	fn eq(&self, other: &Self) -> bool {
		unsafe { _mm512_cmpneq_epi64_mask(self.0, other.0) == 0 }
	}
}

impl Eq for M512 {}

impl Random for M512 {
	fn random(mut rng: impl RngCore) -> Self {
		let val: [u128; 4] = rng.gen();
		val.into()
	}
}

impl std::fmt::Display for M512 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for value in self.to_u128s().iter().rev() {
			write!(f, "{value:032X}")?;
		}

		Ok(())
	}
}

impl std::fmt::Debug for M512 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "M512({})", self)
	}
}

unsafe impl Zeroable for M512 {}

unsafe impl Pod for M512 {}

unsafe impl Send for M512 {}

unsafe impl Sync for M512 {}

impl BitContainer for M512 {
	const BITS: usize = 512;

	const ZERO: Self = Self::from_equal_u128s(0);
	const ONES: Self = Self::from_equal_u128s(u128::MAX);

	const HAS_NATIVE_TERNARY_LOGIC: bool = true;

	#[inline(always)]
	fn broadcast_byte(byte: u8) -> Self {
		Self(unsafe { _mm512_set1_epi8(byte as i8) })
	}

	#[inline(always)]
	fn ternary_logic_native(a: Self, b: Self, c: Self, code: u8) -> Option<Self> {
		Some(Self(super::ternary_logic_dispatch!(_mm512_ternarylogic_epi64, a.0, b.0, c.0, code)))
	}
}

#[cfg(test)]
mod tests {
	use proptest::{arbitrary::any, proptest};

	use super::*;

	#[test]
	fn test_constants() {
		assert_eq!(M512::default(), M512::ZERO);
		assert_eq!(M512::ONES.to_u128s(), [u128::MAX; 4]);
		assert_eq!(!M512::ZERO, M512::ONES);
	}

	#[test]
	fn test_halves() {
		let value = M512::from([M256::from([1u128, 2]), M256::from([3u128, 4])]);
		assert_eq!(value.to_u128s(), [1, 2, 3, 4]);
		assert!(value.lane(256));
		assert!(value.lane(257));
		assert!(!value.lane(258));
		assert!(!value.lane(384));
		assert!(value.lane(386));
	}

	#[test]
	fn test_native_fixed_points() {
		let a = M512::broadcast_byte(0xf0);
		let b = M512::broadcast_byte(0xcc);
		let c = M512::broadcast_byte(0xaa);
		for code in 0..=255u8 {
			assert_eq!(M512::ternary_logic_native(a, b, c, code), Some(M512::broadcast_byte(code)));
		}
	}

	proptest! {
		#[test]
		fn test_binary_bit_operations(a in any::<[u128; 4]>(), b in any::<[u128; 4]>()) {
			assert_eq!(M512::from(a) & M512::from(b), M512::from([0, 1, 2, 3].map(|i| a[i] & b[i])));
			assert_eq!(M512::from(a) | M512::from(b), M512::from([0, 1, 2, 3].map(|i| a[i] | b[i])));
			assert_eq!(M512::from(a) ^ M512::from(b), M512::from([0, 1, 2, 3].map(|i| a[i] ^ b[i])));
		}

		#[test]
		fn test_negate(a in any::<[u128; 4]>()) {
			assert_eq!(M512::from(a.map(|x| !x)), !M512::from(a))
		}
	}
}
