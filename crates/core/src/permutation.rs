// Copyright 2024 Irreducible Inc.

//! Permutations of the three operands and their action on truth table codes.

use std::fmt::{self, Display, Formatter};

use crate::code::TruthTableCode;

/// One of the six reorderings of the operand triple `(a, b, c)`.
///
/// The name spells which original operand ends up in each position, so `Cab` turns
/// `(a, b, c)` into `(c, a, b)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VariablePermutation {
	#[default]
	Abc,
	Bac,
	Acb,
	Cba,
	Cab,
	Bca,
}

impl VariablePermutation {
	pub const ALL: [Self; 6] = [Self::Abc, Self::Bac, Self::Acb, Self::Cba, Self::Cab, Self::Bca];

	/// Non-identity permutations in the order they are tried when reducing a code to a primary
	/// representative. The first match wins.
	pub const SEARCH_ORDER: [Self; 5] = [Self::Bac, Self::Acb, Self::Cba, Self::Cab, Self::Bca];

	/// For each position of the permuted triple, the index of the original operand placed there
	/// (0 for `a`, 1 for `b`, 2 for `c`).
	pub const fn sources(self) -> [usize; 3] {
		match self {
			Self::Abc => [0, 1, 2],
			Self::Bac => [1, 0, 2],
			Self::Acb => [0, 2, 1],
			Self::Cba => [2, 1, 0],
			Self::Cab => [2, 0, 1],
			Self::Bca => [1, 2, 0],
		}
	}

	pub const fn from_sources(sources: [usize; 3]) -> Option<Self> {
		let mut i = 0;
		while i < Self::ALL.len() {
			let candidate = Self::ALL[i].sources();
			if candidate[0] == sources[0] && candidate[1] == sources[1] && candidate[2] == sources[2]
			{
				return Some(Self::ALL[i]);
			}
			i += 1;
		}
		None
	}

	/// Reorders the operands.
	#[inline]
	pub fn permute_operands<T: Copy>(self, a: T, b: T, c: T) -> (T, T, T) {
		let operands = [a, b, c];
		let [x, y, z] = self.sources();
		(operands[x], operands[y], operands[z])
	}

	/// For each bit of a permuted code, the bit of the original code it is taken from.
	pub const fn bit_sources(self) -> [u8; 8] {
		let sources = self.sources();
		let mut result = [0u8; 8];
		let mut i = 0;
		while i < 8 {
			let inputs = [(i >> 2) & 1, (i >> 1) & 1, i & 1];
			let target = (inputs[sources[0]] << 2) | (inputs[sources[1]] << 1) | inputs[sources[2]];
			result[target] = i as u8;
			i += 1;
		}
		result
	}

	/// Computes the code `k'` with `f_k(a, b, c) == f_k'(self.permute_operands(a, b, c))`.
	pub const fn permute_code(self, code: TruthTableCode) -> TruthTableCode {
		let bit_sources = self.bit_sources();
		let mut result = 0u8;
		let mut i = 0;
		while i < 8 {
			if code.bit(bit_sources[i] as usize) {
				result |= 1 << i;
			}
			i += 1;
		}
		TruthTableCode::new(result)
	}

	/// The permutation that undoes this one.
	pub const fn inverse(self) -> Self {
		match self {
			Self::Cab => Self::Bca,
			Self::Bca => Self::Cab,
			other => other,
		}
	}

	/// The permutation equal to applying `self` first and `next` second.
	pub const fn then(self, next: Self) -> Self {
		let first = self.sources();
		let second = next.sources();
		match Self::from_sources([first[second[0]], first[second[1]], first[second[2]]]) {
			Some(composed) => composed,
			None => unreachable!(),
		}
	}

	pub const fn name(self) -> &'static str {
		match self {
			Self::Abc => "abc",
			Self::Bac => "bac",
			Self::Acb => "acb",
			Self::Cba => "cba",
			Self::Cab => "cab",
			Self::Bca => "bca",
		}
	}
}

impl Display for VariablePermutation {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
