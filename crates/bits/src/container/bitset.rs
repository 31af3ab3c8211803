// Copyright 2024-2025 Irreducible Inc.

use std::{
	array,
	fmt::{Debug, Formatter},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

use bytemuck::{Pod, Zeroable};
use rand::{Rng, RngCore};

use super::{BitContainer, Random};

/// Fixed-size set of `64 * WORDS` bits.
///
/// This is the generic N-bit backend: it makes no use of SIMD registers and works for widths
/// that have no dedicated register type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BitSet<const WORDS: usize>(pub [u64; WORDS]);

impl<const WORDS: usize> BitSet<WORDS> {
	pub const fn new() -> Self {
		Self([0; WORDS])
	}

	/// Number of bits in the set
	pub const fn len(&self) -> usize {
		WORDS * 64
	}

	pub const fn is_empty(&self) -> bool {
		WORDS == 0
	}

	#[inline]
	pub fn get(&self, i: usize) -> bool {
		(self.0[i / 64] >> (i % 64)) & 1 == 1
	}

	#[inline]
	pub fn set(&mut self, i: usize, val: bool) {
		self.0[i / 64] &= !(1 << (i % 64));
		self.0[i / 64] |= (val as u64) << (i % 64);
	}

	/// Number of set bits
	pub fn count_ones(&self) -> usize {
		self.0.iter().map(|word| word.count_ones() as usize).sum()
	}

	pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
		(0..self.len()).map(|i| self.get(i))
	}
}

impl<const WORDS: usize> Default for BitSet<WORDS> {
	fn default() -> Self {
		Self::new()
	}
}

impl<const WORDS: usize> Debug for BitSet<WORDS> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "BitSet<{}>(", self.len())?;
		for word in self.0.iter().rev() {
			write!(f, "{word:016x}")?;
		}
		write!(f, ")")
	}
}

impl<const WORDS: usize> FromIterator<bool> for BitSet<WORDS> {
	/// Bits past the end of the set are ignored.
	fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
		let mut result = Self::new();
		for (i, bit) in iter.into_iter().take(WORDS * 64).enumerate() {
			result.set(i, bit);
		}

		result
	}
}

impl<const WORDS: usize> From<[u64; WORDS]> for BitSet<WORDS> {
	fn from(value: [u64; WORDS]) -> Self {
		Self(value)
	}
}

impl<const WORDS: usize> Random for BitSet<WORDS> {
	fn random(mut rng: impl RngCore) -> Self {
		Self(array::from_fn(|_| rng.gen()))
	}
}

unsafe impl<const WORDS: usize> Zeroable for BitSet<WORDS> {}

unsafe impl<const WORDS: usize> Pod for BitSet<WORDS> {}

impl<const WORDS: usize> BitAnd for BitSet<WORDS> {
	type Output = Self;

	#[inline]
	fn bitand(self, rhs: Self) -> Self::Output {
		Self(array::from_fn(|i| self.0[i] & rhs.0[i]))
	}
}

impl<const WORDS: usize> BitAndAssign for BitSet<WORDS> {
	#[inline]
	fn bitand_assign(&mut self, rhs: Self) {
		*self = *self & rhs
	}
}

impl<const WORDS: usize> BitOr for BitSet<WORDS> {
	type Output = Self;

	#[inline]
	fn bitor(self, rhs: Self) -> Self::Output {
		Self(array::from_fn(|i| self.0[i] | rhs.0[i]))
	}
}

impl<const WORDS: usize> BitOrAssign for BitSet<WORDS> {
	#[inline]
	fn bitor_assign(&mut self, rhs: Self) {
		*self = *self | rhs
	}
}

impl<const WORDS: usize> BitXor for BitSet<WORDS> {
	type Output = Self;

	#[inline]
	fn bitxor(self, rhs: Self) -> Self::Output {
		Self(array::from_fn(|i| self.0[i] ^ rhs.0[i]))
	}
}

impl<const WORDS: usize> BitXorAssign for BitSet<WORDS> {
	#[inline]
	fn bitxor_assign(&mut self, rhs: Self) {
		*self = *self ^ rhs
	}
}

impl<const WORDS: usize> Not for BitSet<WORDS> {
	type Output = Self;

	#[inline]
	fn not(self) -> Self::Output {
		Self(self.0.map(|word| !word))
	}
}

impl<const WORDS: usize> BitContainer for BitSet<WORDS> {
	const BITS: usize = WORDS * 64;

	const ZERO: Self = Self([0; WORDS]);
	const ONES: Self = Self([u64::MAX; WORDS]);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_get_set() {
		let mut set = BitSet::<2>::new();
		set.set(0, true);
		set.set(65, true);
		set.set(127, true);
		set.set(127, false);

		assert!(set.get(0));
		assert!(set.get(65));
		assert!(!set.get(127));
		assert_eq!(set.count_ones(), 2);
		assert_eq!(set.0, [1, 2]);
		assert!(set.lane(65));
	}

	#[test]
	fn test_from_iter() {
		let set: BitSet<1> = [true, false, true, true].into_iter().collect();
		assert_eq!(set.0, [0b1101]);

		let set: BitSet<1> = std::iter::repeat(true).take(100).collect();
		assert_eq!(set, BitSet::ONES);
	}

	#[test]
	fn test_debug() {
		let set = BitSet::<2>([0xab, 1]);
		assert_eq!(format!("{set:?}"), "BitSet<128>(000000000000000100000000000000ab)");
	}
}
