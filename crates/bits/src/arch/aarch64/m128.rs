// Copyright 2024 Irreducible Inc.

use std::{
	arch::aarch64::*,
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign},
};

use bytemuck::{Pod, Zeroable};
use derive_more::Not;
use rand::RngCore;

use crate::container::{BitContainer, Random};

/// 128-bit value that is used for 128-bit SIMD operations
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Pod, Zeroable, Not)]
#[repr(transparent)]
pub struct M128(pub u128);

impl From<M128> for u128 {
	fn from(value: M128) -> Self {
		value.0
	}
}

impl From<M128> for uint8x16_t {
	fn from(value: M128) -> Self {
		unsafe { vreinterpretq_u8_p128(value.0) }
	}
}

impl From<u128> for M128 {
	fn from(value: u128) -> Self {
		Self(value)
	}
}

impl From<uint8x16_t> for M128 {
	fn from(value: uint8x16_t) -> Self {
		Self(unsafe { vreinterpretq_p128_u8(value) })
	}
}

impl BitAnd for M128 {
	type Output = Self;

	#[inline]
	fn bitand(self, rhs: Self) -> Self::Output {
		unsafe { vandq_u8(self.into(), rhs.into()).into() }
	}
}

impl BitAndAssign for M128 {
	fn bitand_assign(&mut self, rhs: Self) {
		*self = *self & rhs;
	}
}

impl BitOr for M128 {
	type Output = Self;

	#[inline]
	fn bitor(self, rhs: Self) -> Self::Output {
		unsafe { vorrq_u8(self.into(), rhs.into()).into() }
	}
}

impl BitOrAssign for M128 {
	fn bitor_assign(&mut self, rhs: Self) {
		*self = *self | rhs;
	}
}

impl BitXor for M128 {
	type Output = Self;

	#[inline]
	fn bitxor(self, rhs: Self) -> Self::Output {
		unsafe { veorq_u8(self.into(), rhs.into()).into() }
	}
}

impl BitXorAssign for M128 {
	fn bitxor_assign(&mut self, rhs: Self) {
		*self = *self ^ rhs;
	}
}

impl Random for M128 {
	fn random(rng: impl RngCore) -> Self {
		Self(u128::random(rng))
	}
}

impl std::fmt::Display for M128 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:032X}", self.0)
	}
}

impl std::fmt::Debug for M128 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "M128({})", self)
	}
}

impl BitContainer for M128 {
	const BITS: usize = 128;

	const ZERO: Self = Self(0);
	const ONES: Self = Self(u128::MAX);

	#[inline]
	fn broadcast_byte(byte: u8) -> Self {
		unsafe { vdupq_n_u8(byte).into() }
	}
}
