// Copyright 2024-2025 Irreducible Inc.

mod bitset;
mod primitive_impls;
mod scaled;

use std::{
	fmt::Debug,
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

pub use bitset::BitSet;
use bytemuck::Pod;
use rand::{
	distributions::{Distribution, Standard},
	Rng, RngCore,
};
pub use scaled::ScaledContainer;

/// A value that can be randomly generated
pub trait Random {
	/// Generate random value
	fn random(rng: impl RngCore) -> Self;
}

impl<T> Random for T
where
	Standard: Distribution<T>,
{
	fn random(mut rng: impl RngCore) -> Self {
		rng.gen()
	}
}

/// Operand type of a ternary logic evaluation.
///
/// Every bit position ("lane") of the container is independent: the bitwise operators act on all
/// lanes in parallel. Implementations exist for the primitive unsigned integers, SIMD registers of
/// the supported architectures, lane-wise arrays of other containers and word-backed bit sets.
///
/// The byte view provided by [`Pod`] is little-endian lane order: lane `i` is bit `i % 8` of byte
/// `i / 8`.
pub trait BitContainer:
	Debug
	+ Default
	+ PartialEq
	+ Eq
	+ Copy
	+ Pod
	+ Random
	+ Send
	+ Sync
	+ 'static
	+ BitAnd<Self, Output = Self>
	+ BitAndAssign<Self>
	+ BitOr<Self, Output = Self>
	+ BitOrAssign<Self>
	+ BitXor<Self, Output = Self>
	+ BitXorAssign<Self>
	+ Not<Output = Self>
{
	/// Number of lanes
	const BITS: usize;

	/// All lanes cleared
	const ZERO: Self;
	/// All lanes set
	const ONES: Self;

	/// Whether [`BitContainer::ternary_logic_native`] is backed by a hardware instruction.
	const HAS_NATIVE_TERNARY_LOGIC: bool = false;

	/// Fill value with the given bit
	/// `val` must be 0 or 1.
	#[inline]
	fn fill_with_bit(val: u8) -> Self {
		debug_assert!(val == 0 || val == 1);
		if val == 0 {
			Self::ZERO
		} else {
			Self::ONES
		}
	}

	/// Replicate `byte` into every byte of the container.
	#[inline]
	fn broadcast_byte(byte: u8) -> Self {
		let mut result = Self::ZERO;
		bytemuck::bytes_of_mut(&mut result).fill(byte);

		result
	}

	/// Lane bytes in little-endian lane order.
	#[inline]
	fn to_bytes(&self) -> &[u8] {
		bytemuck::bytes_of(self)
	}

	/// Returns the value of lane `i`.
	/// Function panics in case when index is out of range.
	#[inline]
	fn lane(&self, i: usize) -> bool {
		assert!(i < Self::BITS, "lane {i} is out of range 0..{}", Self::BITS);
		(self.to_bytes()[i / 8] >> (i % 8)) & 1 == 1
	}

	/// Evaluate the 3-input truth table `code` on every lane with a dedicated instruction.
	///
	/// Returns `None` when the container has no such instruction. Lane `i` of the result is bit
	/// `(a_i << 2) | (b_i << 1) | c_i` of `code`.
	#[inline(always)]
	fn ternary_logic_native(_a: Self, _b: Self, _c: Self, _code: u8) -> Option<Self> {
		None
	}
}
