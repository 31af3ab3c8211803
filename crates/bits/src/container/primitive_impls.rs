// Copyright 2024 Irreducible Inc.

use super::BitContainer;

macro_rules! impl_bit_container {
	($name:ty) => {
		impl BitContainer for $name {
			const BITS: usize = <$name>::BITS as usize;

			const ZERO: Self = 0;
			const ONES: Self = <$name>::MAX;

			#[inline(always)]
			fn fill_with_bit(val: u8) -> Self {
				debug_assert!(val == 0 || val == 1);
				(val as Self).wrapping_neg()
			}

			#[inline(always)]
			fn broadcast_byte(byte: u8) -> Self {
				Self::from_le_bytes([byte; std::mem::size_of::<$name>()])
			}
		}
	};
	() => {};
	($name:ty, $($tail:ty),+) => {
		impl_bit_container!($name);
		impl_bit_container!($($tail),+);
	}
}

impl_bit_container!(u8, u16, u32, u64, u128);
