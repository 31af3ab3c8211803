// Copyright 2024 Irreducible Inc.

use std::fmt::{self, Debug, Display, Formatter};

use crate::error::Error;

/// An 8-bit truth table identifying a Boolean function of three inputs.
///
/// Bit `i` of the code is the function output for the input combination
/// `i = (a << 2) | (b << 1) | c`. Equivalently, the code is the value the function produces
/// when evaluated bitwise on the operands `a = 0xF0`, `b = 0xCC` and `c = 0xAA`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct TruthTableCode(u8);

impl TruthTableCode {
	pub const ZERO: Self = Self(0x00);
	pub const ONES: Self = Self(0xFF);
	/// The projection on the first operand.
	pub const A: Self = Self(0xF0);
	/// The projection on the second operand.
	pub const B: Self = Self(0xCC);
	/// The projection on the third operand.
	pub const C: Self = Self(0xAA);

	#[inline]
	pub const fn new(code: u8) -> Self {
		Self(code)
	}

	#[inline]
	pub const fn value(self) -> u8 {
		self.0
	}

	/// The function output for the input combination with index `index`.
	///
	/// ## Preconditions
	///
	/// * `index` must be less than 8
	#[inline]
	pub const fn bit(self, index: usize) -> bool {
		assert!(index < 8);
		(self.0 >> index) & 1 == 1
	}

	/// Evaluates the function on a single triple of bits.
	#[inline]
	pub const fn evaluate_bits(self, a: bool, b: bool, c: bool) -> bool {
		self.bit(input_index(a, b, c))
	}

	/// The code of the negated function.
	#[inline]
	pub const fn complement(self) -> Self {
		Self(!self.0)
	}

	/// All 256 codes in increasing order.
	pub fn all() -> impl Iterator<Item = Self> + Clone {
		(0..=u8::MAX).map(Self)
	}
}

/// Index of the truth table bit selected by the input combination `(a, b, c)`.
#[inline]
pub const fn input_index(a: bool, b: bool, c: bool) -> usize {
	((a as usize) << 2) | ((b as usize) << 1) | c as usize
}

impl From<u8> for TruthTableCode {
	fn from(value: u8) -> Self {
		Self(value)
	}
}

impl From<TruthTableCode> for u8 {
	fn from(value: TruthTableCode) -> Self {
		value.0
	}
}

/// An integer rejected as a truth table code, kept at full width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectedCode {
	Signed(i128),
	Unsigned(u128),
}

impl Display for RejectedCode {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Signed(value) => write!(f, "{value}"),
			Self::Unsigned(value) => write!(f, "{value}"),
		}
	}
}

macro_rules! impl_try_from_int {
	($variant:ident($wide:ty): $($t:ty),*) => {
		$(
			impl TryFrom<$t> for TruthTableCode {
				type Error = Error;

				fn try_from(value: $t) -> Result<Self, Self::Error> {
					u8::try_from(value).map(Self).map_err(|_| Error::InvalidCode {
						code: RejectedCode::$variant(value as $wide),
					})
				}
			}
		)*
	};
}

impl_try_from_int!(Unsigned(u128): u16, u32, u64, u128, usize);
impl_try_from_int!(Signed(i128): i8, i16, i32, i64, i128, isize);

impl Display for TruthTableCode {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{:#04x}", self.0)
	}
}

impl Debug for TruthTableCode {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "TruthTableCode({:#04x})", self.0)
	}
}

/// A set of truth table codes, stored as a 256-bit mask.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CodeSet([u64; 4]);

impl CodeSet {
	pub const EMPTY: Self = Self([0; 4]);
	pub const FULL: Self = Self([u64::MAX; 4]);

	pub const fn new() -> Self {
		Self::EMPTY
	}

	/// Returns a copy of the set that also contains `code`. Usable in constant expressions.
	pub const fn with(mut self, code: TruthTableCode) -> Self {
		let (word, offset) = Self::position(code);
		self.0[word] |= 1 << offset;
		self
	}

	/// Adds a code to the set, returning whether it was newly inserted.
	pub fn insert(&mut self, code: TruthTableCode) -> bool {
		let inserted = !self.contains(code);
		*self = self.with(code);
		inserted
	}

	/// Removes a code from the set, returning whether it was present.
	pub fn remove(&mut self, code: TruthTableCode) -> bool {
		let (word, offset) = Self::position(code);
		let present = self.contains(code);
		self.0[word] &= !(1 << offset);
		present
	}

	#[inline]
	pub const fn contains(&self, code: TruthTableCode) -> bool {
		let (word, offset) = Self::position(code);
		(self.0[word] >> offset) & 1 == 1
	}

	pub const fn len(&self) -> usize {
		let mut count = 0;
		let mut i = 0;
		while i < self.0.len() {
			count += self.0[i].count_ones() as usize;
			i += 1;
		}
		count
	}

	pub const fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Iterates over the codes in increasing order.
	pub fn iter(&self) -> impl Iterator<Item = TruthTableCode> + '_ {
		TruthTableCode::all().filter(|&code| self.contains(code))
	}

	const fn position(code: TruthTableCode) -> (usize, u32) {
		((code.value() >> 6) as usize, (code.value() & 63) as u32)
	}
}

impl FromIterator<TruthTableCode> for CodeSet {
	fn from_iter<I: IntoIterator<Item = TruthTableCode>>(iter: I) -> Self {
		let mut set = Self::new();
		set.extend(iter);
		set
	}
}

impl Extend<TruthTableCode> for CodeSet {
	fn extend<I: IntoIterator<Item = TruthTableCode>>(&mut self, iter: I) {
		for code in iter {
			self.insert(code);
		}
	}
}

impl Debug for CodeSet {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.iter()).finish()
	}
}
