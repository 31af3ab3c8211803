// Copyright 2024 Irreducible Inc.

//! The primary formula library and the canonical evaluator.
//!
//! Every truth table code lies in an orbit of at most six codes related by operand permutations.
//! The library stores one hand-minimized formula per orbit, for the smallest code of the orbit.
//! All other codes are evaluated through a primary formula after permuting the operands, see
//! [`crate::reduction`].

use static_assertions::const_assert;
use ternlog_bits::BitContainer;

use crate::{
	code::{CodeSet, TruthTableCode},
	formula::{formula, Formula},
};

/// A set of formulas indexed by the truth table code they compute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimaryLibrary {
	formulas: [Option<Formula>; 256],
}

impl PrimaryLibrary {
	/// Builds a library from `(code, formula)` pairs.
	///
	/// ## Preconditions
	///
	/// * every code appears at most once
	pub const fn new(entries: &[(u8, Formula)]) -> Self {
		let mut formulas = [None; 256];
		let mut i = 0;
		while i < entries.len() {
			let (code, formula) = entries[i];
			assert!(formulas[code as usize].is_none(), "duplicate formula in primary library");
			formulas[code as usize] = Some(formula);
			i += 1;
		}
		Self { formulas }
	}

	#[inline]
	pub const fn contains(&self, code: TruthTableCode) -> bool {
		self.formulas[code.value() as usize].is_some()
	}

	#[inline]
	pub const fn formula(&self, code: TruthTableCode) -> Option<Formula> {
		self.formulas[code.value() as usize]
	}

	/// The set of codes that have a formula.
	pub const fn codes(&self) -> CodeSet {
		let mut set = CodeSet::new();
		let mut i = 0;
		while i < self.formulas.len() {
			if self.formulas[i].is_some() {
				set = set.with(TruthTableCode::new(i as u8));
			}
			i += 1;
		}
		set
	}

	/// The first code whose formula is malformed or computes a different truth table.
	pub const fn first_inconsistency(&self) -> Option<TruthTableCode> {
		let mut i = 0;
		while i < self.formulas.len() {
			if let Some(formula) = self.formulas[i] {
				if !formula.is_well_formed() || formula.truth_table().value() != i as u8 {
					return Some(TruthTableCode::new(i as u8));
				}
			}
			i += 1;
		}
		None
	}

	pub fn iter(&self) -> impl Iterator<Item = (TruthTableCode, &Formula)> + '_ {
		TruthTableCode::all()
			.zip(self.formulas.iter())
			.filter_map(|(code, formula)| formula.as_ref().map(|formula| (code, formula)))
	}

	/// Evaluates the formula stored for `code`, if there is one.
	pub fn evaluate<T: BitContainer>(&self, code: TruthTableCode, a: T, b: T, c: T) -> Option<T> {
		self.formula(code).map(|formula| formula.evaluate(a, b, c))
	}

	/// Total number of instructions over all formulas.
	pub fn instruction_count(&self) -> usize {
		self.iter()
			.map(|(_, formula)| formula.instruction_count())
			.sum()
	}
}

pub(crate) const PRIMARY: PrimaryLibrary = PrimaryLibrary::new(&[
	(0x00, formula!(ZERO)),
	(0x01, formula!(B | C, A | t0, !t1)),
	(0x02, formula!(A | B, !t0, C & t1)),
	(0x03, formula!(A | B, !t0)),
	(0x06, formula!(!A, B ^ C, t0 & t1)),
	(0x07, formula!(B & C, A | t0, !t1)),
	(0x08, formula!(!A, B & C, t0 & t1)),
	(0x09, formula!(B ^ C, A | t0, !t1)),
	(0x0a, formula!(A | C, A ^ t0)),
	(0x0b, formula!(!B, A | C, t0 | t1, A ^ t2)),
	(0x0e, formula!(!A, B | C, t0 & t1)),
	(0x0f, formula!(!A)),
	(0x16, formula!(A & B, B ^ C, t0 | t1, A ^ t2)),
	(0x17, formula!(!A, A ^ B, A ^ C, t1 & t2, t0 ^ t3)),
	(0x18, formula!(A ^ B, A ^ C, t0 & t1)),
	(0x19, formula!(A & B, B ^ C, t0 | t1, !t2)),
	(0x1a, formula!(A & B, C | t0, A ^ t1)),
	(0x1b, formula!(!B, A ^ B, C & t1, t0 ^ t2)),
	(0x1e, formula!(B | C, A ^ t0)),
	(0x1f, formula!(B | C, A & t0, !t1)),
	(0x28, formula!(A ^ B, C & t0)),
	(0x29, formula!(A | B, !C, A & B, t1 | t2, t0 ^ t3)),
	(0x2a, formula!(A & B, !t0, C & t1)),
	(0x2b, formula!(!A, A ^ B, B ^ C, t1 & t2, t0 ^ t3)),
	(0x2c, formula!(A ^ B, B | C, t0 & t1)),
	(0x2d, formula!(!C, B | t0, A ^ t1)),
	(0x2e, formula!(A & B, B | C, t0 ^ t1)),
	(0x2f, formula!(!A, B | C, B ^ t1, t0 | t2)),
	(0x3c, formula!(A ^ B)),
	(0x3d, formula!(A ^ B, A | C, !t1, t0 | t2)),
	(0x3e, formula!(A & B, B | C, A | t1, t0 ^ t2)),
	(0x3f, formula!(A & B, !t0)),
	(0x68, formula!(A & B, A | B, C & t1, t0 ^ t2)),
	(0x69, formula!(!A, B ^ C, t0 ^ t1)),
	(0x6a, formula!(A & B, C ^ t0)),
	(0x6b, formula!(!A, A | B, B ^ C, t1 & t2, t0 ^ t3)),
	(0x6e, formula!(B | C, B & C, A & t1, t0 ^ t2)),
	(0x6f, formula!(!A, B ^ C, t0 | t1)),
	(0x7e, formula!(A ^ B, A ^ C, t0 | t1)),
	(0x7f, formula!(B & C, A & t0, !t1)),
	(0x80, formula!(B & C, A & t0)),
	(0x81, formula!(A ^ B, A ^ C, t0 | t1, !t2)),
	(0x82, formula!(A ^ B, !t0, C & t1)),
	(0x83, formula!(A | B, !t0, B & C, A & t2, t1 | t3)),
	(0x86, formula!(A ^ C, B | C, t0 & t1, B ^ t2)),
	(0x87, formula!(!A, B & C, t0 ^ t1)),
	(0x88, formula!(B & C)),
	(0x89, formula!(B ^ C, !A, B | C, t1 | t2, t0 ^ t3)),
	(0x8a, formula!(!A, B | t0, C & t1)),
	(0x8b, formula!(A | B, B & C, t0 ^ t1, !t2)),
	(0x8e, formula!(A ^ B, A ^ C, t0 | t1, A ^ t2)),
	(0x8f, formula!(!A, B & C, t0 | t1)),
	(0x96, formula!(B ^ C, A ^ t0)),
	(0x97, formula!(A & B, !t0, A | B, C & t2, t1 ^ t3)),
	(0x98, formula!(!C, A | B, t0 & t1, B ^ t2)),
	(0x99, formula!(B ^ C, !t0)),
	(0x9a, formula!(A & B, A ^ C, t0 ^ t1)),
	(0x9b, formula!(A | B, B ^ C, t0 & t1, !t2)),
	(0x9e, formula!(B & C, B | C, A ^ t1, t0 | t2)),
	(0x9f, formula!(B ^ C, A & t0, !t1)),
	(0xa8, formula!(A | B, C & t0)),
	(0xa9, formula!(!C, A | B, t0 ^ t1)),
	(0xaa, formula!(C)),
	(0xab, formula!(A | B, !t0, C | t1)),
	(0xac, formula!(B ^ C, A & t0, B ^ t1)),
	(0xad, formula!(!C, B & C, A | t1, t0 ^ t2)),
	(0xae, formula!(A | B, A ^ t0, C | t1)),
	(0xaf, formula!(!A, C | t0)),
	(0xbc, formula!(A ^ B, A & C, t0 | t1)),
	(0xbd, formula!(A ^ C, B ^ C, t0 & t1, !t2)),
	(0xbe, formula!(A ^ B, C | t0)),
	(0xbf, formula!(A & B, !t0, C | t1)),
	(0xe8, formula!(A ^ B, A ^ C, t0 & t1, A ^ t2)),
	(0xe9, formula!(!A, A & B, B ^ C, t1 | t2, t0 ^ t3)),
	(0xea, formula!(A & B, C | t0)),
	(0xeb, formula!(A ^ B, !t0, C | t1)),
	(0xee, formula!(B | C)),
	(0xef, formula!(!A, B | C, t0 | t1)),
	(0xfe, formula!(B | C, A | t0)),
	(0xff, formula!(ONES)),
]);

const_assert!(PRIMARY.first_inconsistency().is_none());

/// Formulas for the smallest code of every permutation orbit.
pub static PRIMARY_LIBRARY: PrimaryLibrary = PRIMARY;

/// Evaluates any code as the disjunction of its minterms.
///
/// This does not depend on the primary library or on the reduction table and serves as the
/// reference the optimized paths are checked against.
pub fn evaluate_canonical<T: BitContainer>(code: TruthTableCode, a: T, b: T, c: T) -> T {
	let (not_a, not_b, not_c) = (!a, !b, !c);

	(0..8)
		.filter(|&index| code.bit(index))
		.fold(T::ZERO, |acc, index| {
			let x = if index & 4 != 0 { a } else { not_a };
			let y = if index & 2 != 0 { b } else { not_b };
			let z = if index & 1 != 0 { c } else { not_c };
			acc | (x & y & z)
		})
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::permutation::VariablePermutation;

	#[test]
	fn test_one_representative_per_orbit() {
		let codes = PRIMARY_LIBRARY.codes();
		assert_eq!(codes.len(), 80);
		for code in codes.iter() {
			for permutation in VariablePermutation::ALL {
				let image = permutation.permute_code(code);
				assert!(image >= code, "{code} is not the smallest code of its orbit");
			}
		}
	}

	#[test]
	fn test_formulas_compute_their_code() {
		for (code, formula) in PRIMARY_LIBRARY.iter() {
			assert!(formula.is_well_formed(), "{code}");
			assert_eq!(formula.truth_table(), code, "{code}: {formula}");
			assert_eq!(PRIMARY_LIBRARY.evaluate(code, 0xF0u8, 0xCC, 0xAA), Some(code.value()));
		}
	}

	#[test]
	fn test_instruction_budget() {
		for (code, formula) in PRIMARY_LIBRARY.iter() {
			assert!(formula.instruction_count() <= 5, "{code}: {formula}");
		}
		assert_eq!(PRIMARY_LIBRARY.formula(TruthTableCode::C), Some(formula!(C)));
		assert_eq!(PRIMARY_LIBRARY.formula(TruthTableCode::new(0x96)), Some(formula!(B ^ C, A ^ t0)));
		assert!(PRIMARY_LIBRARY.instruction_count() > 0);
	}

	#[test]
	fn test_lookup_of_missing_code() {
		let code = TruthTableCode::new(0x05);
		assert!(!PRIMARY_LIBRARY.contains(code));
		assert_eq!(PRIMARY_LIBRARY.formula(code), None);
		assert_eq!(PRIMARY_LIBRARY.evaluate(code, 1u8, 2, 3), None);
	}

	#[test]
	#[should_panic(expected = "duplicate formula")]
	fn test_duplicate_code() {
		PrimaryLibrary::new(&[(0x3c, formula!(A ^ B)), (0x3c, formula!(B ^ A))]);
	}

	#[test]
	fn test_canonical_truth_tables() {
		for code in TruthTableCode::all() {
			assert_eq!(evaluate_canonical(code, 0xF0u8, 0xCC, 0xAA), code.value());
		}
	}

	proptest! {
		#[test]
		fn test_formulas_match_canonical(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
			for (code, formula) in PRIMARY_LIBRARY.iter() {
				prop_assert_eq!(formula.evaluate(a, b, c), evaluate_canonical(code, a, b, c));
			}
		}
	}
}
