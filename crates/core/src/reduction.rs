// Copyright 2024 Irreducible Inc.

//! Reduction of arbitrary truth table codes to primary codes.
//!
//! For a code `k` that is not primary, the table stores a permutation `π` and the primary code
//! `π(k)` such that `f_k(a, b, c) == f_π(k)(π(a, b, c))`. The permutations are tried in
//! [`VariablePermutation::SEARCH_ORDER`] and the first one that reaches a primary code wins.

use itertools::Itertools;
use tracing::instrument;

use crate::{
	code::{CodeSet, TruthTableCode},
	error::Error,
	library::{PrimaryLibrary, PRIMARY},
	permutation::VariablePermutation,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReductionEntry {
	pub representative: TruthTableCode,
	pub permutation: VariablePermutation,
}

impl ReductionEntry {
	pub const fn identity(code: TruthTableCode) -> Self {
		Self {
			representative: code,
			permutation: VariablePermutation::Abc,
		}
	}

	#[inline]
	pub const fn is_identity(&self) -> bool {
		matches!(self.permutation, VariablePermutation::Abc)
	}
}

/// Maps every truth table code to a primary representative and the permutation leading to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReductionTable {
	entries: [ReductionEntry; 256],
}

impl ReductionTable {
	/// Builds the table for the given set of primary codes.
	///
	/// Fails with [`Error::IncompleteCoverage`] for the first code that is neither primary nor
	/// one permutation away from a primary code.
	pub const fn try_build(primary: &CodeSet) -> Result<Self, Error> {
		let mut entries = [ReductionEntry::identity(TruthTableCode::ZERO); 256];
		let mut i = 0;
		while i < entries.len() {
			let code = TruthTableCode::new(i as u8);
			match find_representative(primary, code) {
				Some(entry) => entries[i] = entry,
				None => return Err(Error::IncompleteCoverage { code }),
			}
			i += 1;
		}
		Ok(Self { entries })
	}

	/// Same as [`Self::try_build`], but panics on incomplete coverage. When used to initialize a
	/// constant this turns a gap in the primary set into a compilation error.
	pub const fn build(primary: &CodeSet) -> Self {
		match Self::try_build(primary) {
			Ok(table) => table,
			Err(_) => panic!("primary codes do not cover every truth table code"),
		}
	}

	#[inline]
	pub const fn entry(&self, code: TruthTableCode) -> ReductionEntry {
		self.entries[code.value() as usize]
	}

	pub fn entries(&self) -> &[ReductionEntry; 256] {
		&self.entries
	}

	/// The distinct representatives the table points to.
	pub fn representatives(&self) -> CodeSet {
		self.entries
			.iter()
			.map(|entry| entry.representative)
			.collect()
	}

	/// Checks every entry against `library` by evaluating on the projection operands.
	#[instrument(skip_all, level = "debug")]
	pub fn verify(&self, library: &PrimaryLibrary) -> Result<(), Error> {
		for (code, entry) in TruthTableCode::all().zip(self.entries.iter()) {
			let formula = library
				.formula(entry.representative)
				.ok_or(Error::MissingFormula {
					code: entry.representative,
				})?;
			let (a, b, c) = entry.permutation.permute_operands(
				TruthTableCode::A.value(),
				TruthTableCode::B.value(),
				TruthTableCode::C.value(),
			);
			let actual = formula.evaluate_u8(a, b, c);
			ternlog_utils::ensure!(
				actual == code.value(),
				Error::Mismatch {
					code,
					expected: code.value(),
					actual,
				}
			);
		}
		tracing::debug!(representatives = self.representatives().len(), "reduction table verified");
		Ok(())
	}
}

const fn find_representative(primary: &CodeSet, code: TruthTableCode) -> Option<ReductionEntry> {
	if primary.contains(code) {
		return Some(ReductionEntry::identity(code));
	}
	let mut i = 0;
	while i < VariablePermutation::SEARCH_ORDER.len() {
		let permutation = VariablePermutation::SEARCH_ORDER[i];
		let representative = permutation.permute_code(code);
		if primary.contains(representative) {
			return Some(ReductionEntry {
				representative,
				permutation,
			});
		}
		i += 1;
	}
	None
}

pub(crate) const REDUCTION: ReductionTable = ReductionTable::build(&PRIMARY.codes());

/// The reduction table of the primary library, built at compile time.
pub static REDUCTION_TABLE: ReductionTable = REDUCTION;

/// All codes reachable from `code` by permuting the operands, including `code` itself.
pub fn orbit(code: TruthTableCode) -> CodeSet {
	VariablePermutation::ALL
		.iter()
		.map(|permutation| permutation.permute_code(code))
		.collect()
}

/// Partitions the 256 codes into permutation orbits, ordered by their smallest code.
#[instrument(level = "debug")]
pub fn orbits() -> Vec<CodeSet> {
	let orbits = TruthTableCode::all().map(orbit).unique().collect_vec();
	tracing::debug!(count = orbits.len(), "enumerated permutation orbits");
	orbits
}
