// Copyright 2024-2025 Irreducible Inc.

use std::{
	array,
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

use bytemuck::{Pod, Zeroable};
use rand::RngCore;

use super::{BitContainer, Random};

/// A container made of `N` containers of the same type, operated on element-wise.
/// This is the portable fallback for register widths the target has no instructions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ScaledContainer<U, const N: usize>(pub [U; N]);

impl<U: Default, const N: usize> Default for ScaledContainer<U, N> {
	fn default() -> Self {
		Self(array::from_fn(|_| U::default()))
	}
}

impl<U: Random, const N: usize> Random for ScaledContainer<U, N> {
	fn random(mut rng: impl RngCore) -> Self {
		Self(array::from_fn(|_| U::random(&mut rng)))
	}
}

impl<U, const N: usize> From<ScaledContainer<U, N>> for [U; N] {
	fn from(val: ScaledContainer<U, N>) -> Self {
		val.0
	}
}

impl<T, U: From<T>, const N: usize> From<[T; N]> for ScaledContainer<U, N> {
	fn from(value: [T; N]) -> Self {
		Self(value.map(U::from))
	}
}

unsafe impl<U: Zeroable, const N: usize> Zeroable for ScaledContainer<U, N> {}

unsafe impl<U: Pod, const N: usize> Pod for ScaledContainer<U, N> {}

impl<U: BitAnd<Output = U> + Copy, const N: usize> BitAnd for ScaledContainer<U, N> {
	type Output = Self;

	#[inline]
	fn bitand(self, rhs: Self) -> Self::Output {
		Self(array::from_fn(|i| self.0[i] & rhs.0[i]))
	}
}

impl<U: BitAndAssign + Copy, const N: usize> BitAndAssign for ScaledContainer<U, N> {
	#[inline]
	fn bitand_assign(&mut self, rhs: Self) {
		for i in 0..N {
			self.0[i] &= rhs.0[i];
		}
	}
}

impl<U: BitOr<Output = U> + Copy, const N: usize> BitOr for ScaledContainer<U, N> {
	type Output = Self;

	#[inline]
	fn bitor(self, rhs: Self) -> Self::Output {
		Self(array::from_fn(|i| self.0[i] | rhs.0[i]))
	}
}

impl<U: BitOrAssign + Copy, const N: usize> BitOrAssign for ScaledContainer<U, N> {
	#[inline]
	fn bitor_assign(&mut self, rhs: Self) {
		for i in 0..N {
			self.0[i] |= rhs.0[i];
		}
	}
}

impl<U: BitXor<Output = U> + Copy, const N: usize> BitXor for ScaledContainer<U, N> {
	type Output = Self;

	#[inline]
	fn bitxor(self, rhs: Self) -> Self::Output {
		Self(array::from_fn(|i| self.0[i] ^ rhs.0[i]))
	}
}

impl<U: BitXorAssign + Copy, const N: usize> BitXorAssign for ScaledContainer<U, N> {
	#[inline]
	fn bitxor_assign(&mut self, rhs: Self) {
		for i in 0..N {
			self.0[i] ^= rhs.0[i];
		}
	}
}

impl<U: Not<Output = U>, const N: usize> Not for ScaledContainer<U, N> {
	type Output = Self;

	#[inline]
	fn not(self) -> Self::Output {
		Self(self.0.map(U::not))
	}
}

impl<U: BitContainer, const N: usize> BitContainer for ScaledContainer<U, N> {
	const BITS: usize = U::BITS * N;

	const ZERO: Self = Self([U::ZERO; N]);
	const ONES: Self = Self([U::ONES; N]);

	const HAS_NATIVE_TERNARY_LOGIC: bool = U::HAS_NATIVE_TERNARY_LOGIC;

	#[inline]
	fn fill_with_bit(val: u8) -> Self {
		Self([U::fill_with_bit(val); N])
	}

	#[inline]
	fn broadcast_byte(byte: u8) -> Self {
		Self([U::broadcast_byte(byte); N])
	}

	#[inline]
	fn ternary_logic_native(a: Self, b: Self, c: Self, code: u8) -> Option<Self> {
		if !U::HAS_NATIVE_TERNARY_LOGIC {
			return None;
		}

		let mut result = Self::ZERO;
		for i in 0..N {
			result.0[i] = U::ternary_logic_native(a.0[i], b.0[i], c.0[i], code)?;
		}

		Some(result)
	}
}

#[cfg(test)]
mod tests {
	use proptest::{arbitrary::any, proptest};

	use super::*;

	#[test]
	fn test_byte_layout() {
		let value = ScaledContainer::<u16, 2>([0x0201, 0x0403]);
		assert_eq!(value.to_bytes(), &[1, 2, 3, 4]);
		assert!(value.lane(0));
		assert!(!value.lane(1));
		assert!(value.lane(17));
	}

	proptest! {
		#[test]
		fn test_elementwise_bit_operations(a in any::<[u64; 3]>(), b in any::<[u64; 3]>()) {
			let (x, y) = (ScaledContainer(a), ScaledContainer(b));
			for i in 0..3 {
				assert_eq!((x & y).0[i], a[i] & b[i]);
				assert_eq!((x | y).0[i], a[i] | b[i]);
				assert_eq!((x ^ y).0[i], a[i] ^ b[i]);
				assert_eq!((!x).0[i], !a[i]);
			}
		}
	}
}
