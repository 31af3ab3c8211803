// Copyright 2023-2025 Irreducible Inc.

//! Bit containers: the operand types a ternary logic evaluation works on.
//!
//! A [`BitContainer`] is any value whose bits ("lanes") can be combined with the bitwise
//! AND, OR, XOR and NOT operators, and which has all-zero and all-one constants. This crate
//! provides implementations for the primitive unsigned integers, the SIMD registers of the
//! compilation target, arrays of containers ([`ScaledContainer`]) and plain word-backed bit sets
//! ([`BitSet`]).
//!
//! Register types are selected at compile time from the enabled target features. The
//! [`Bits128`], [`Bits256`] and [`Bits512`] aliases always name the best implementation of the
//! given width available on the target, falling back to portable compositions.

#![cfg_attr(all(feature = "nightly_features", target_arch = "x86_64"), feature(stdarch_x86_avx512))]

pub mod arch;
pub mod container;

pub use arch::*;
pub use container::*;
