// Copyright 2024 Irreducible Inc.

//! Evaluation entry points.
//!
//! [`evaluate`] looks up the code in a dense table that combines the reduction table with the
//! primary formulas, reorders the operands and runs the formula. Containers with a native
//! ternary logic instruction skip the table unless that is disabled through [`Config`].

use ternlog_bits::BitContainer;

use crate::{
	code::TruthTableCode,
	config::Config,
	error::Error,
	formula::{Formula, Operand},
	library::{evaluate_canonical, PrimaryLibrary, PRIMARY, PRIMARY_LIBRARY},
	permutation::VariablePermutation,
	reduction::{ReductionTable, REDUCTION, REDUCTION_TABLE},
};

/// How a code is evaluated for a given container type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
	/// The container's native ternary logic instruction. Containers without one fall back to
	/// [`Strategy::Reduced`].
	Native,
	/// Operand permutation followed by the primary formula of the representative.
	Reduced,
	/// Disjunction of minterms, see [`evaluate_canonical`].
	Canonical,
}

impl Strategy {
	/// The fastest strategy available for `T` under `config`.
	pub fn select<T: BitContainer>(config: &Config) -> Self {
		if T::HAS_NATIVE_TERNARY_LOGIC && config.native() {
			Self::Native
		} else {
			Self::Reduced
		}
	}

	/// [`Strategy::select`] under the global configuration.
	///
	/// The global configuration is only resolved for containers with a native instruction.
	#[inline]
	pub fn current<T: BitContainer>() -> Self {
		if T::HAS_NATIVE_TERNARY_LOGIC {
			Self::select::<T>(Config::global())
		} else {
			Self::Reduced
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DispatchEntry {
	permutation: VariablePermutation,
	formula: Formula,
}

impl DispatchEntry {
	#[inline(always)]
	fn evaluate<T: BitContainer>(self, a: T, b: T, c: T) -> T {
		let (a, b, c) = self.permutation.permute_operands(a, b, c);
		self.formula.evaluate(a, b, c)
	}
}

const fn build_dispatch(library: &PrimaryLibrary, table: &ReductionTable) -> [DispatchEntry; 256] {
	let mut entries = [DispatchEntry {
		permutation: VariablePermutation::Abc,
		formula: Formula::operand(Operand::Zero),
	}; 256];
	let mut i = 0;
	while i < entries.len() {
		let entry = table.entry(TruthTableCode::new(i as u8));
		match library.formula(entry.representative) {
			Some(formula) => {
				entries[i] = DispatchEntry {
					permutation: entry.permutation,
					formula,
				}
			}
			None => panic!("reduction table refers to a code without a primary formula"),
		}
		i += 1;
	}
	entries
}

const DISPATCH: [DispatchEntry; 256] = build_dispatch(&PRIMARY, &REDUCTION);

static DISPATCH_TABLE: [DispatchEntry; 256] = DISPATCH;

/// Evaluates the Boolean function with truth table `code` on every bit lane of the operands.
#[inline]
pub fn evaluate<T: BitContainer>(code: u8, a: T, b: T, c: T) -> T {
	evaluate_with(Strategy::current::<T>(), TruthTableCode::new(code), a, b, c)
}

/// Same as [`evaluate`] with an explicit configuration instead of the global one.
#[inline]
pub fn evaluate_with_config<T: BitContainer>(config: &Config, code: u8, a: T, b: T, c: T) -> T {
	evaluate_with(Strategy::select::<T>(config), TruthTableCode::new(code), a, b, c)
}

/// Same as [`evaluate`] for codes of a wider integer type.
///
/// Returns [`Error::InvalidCode`] if `code` is outside `0..=255`.
pub fn evaluate_checked<K, T>(code: K, a: T, b: T, c: T) -> Result<T, Error>
where
	K: TryInto<TruthTableCode>,
	Error: From<K::Error>,
	T: BitContainer,
{
	let code = code.try_into()?;
	Ok(evaluate_with(Strategy::current::<T>(), code, a, b, c))
}

#[inline]
pub fn evaluate_with<T: BitContainer>(
	strategy: Strategy,
	code: TruthTableCode,
	a: T,
	b: T,
	c: T,
) -> T {
	match strategy {
		Strategy::Native => T::ternary_logic_native(a, b, c, code.value())
			.unwrap_or_else(|| evaluate_reduced(code, a, b, c)),
		Strategy::Reduced => evaluate_reduced(code, a, b, c),
		Strategy::Canonical => evaluate_canonical(code, a, b, c),
	}
}

/// Evaluates through the reduction table, ignoring native instructions.
#[inline]
pub fn evaluate_reduced<T: BitContainer>(code: TruthTableCode, a: T, b: T, c: T) -> T {
	DISPATCH_TABLE[code.value() as usize].evaluate(a, b, c)
}

struct StaticDispatch<const CODE: u8>;

impl<const CODE: u8> StaticDispatch<CODE> {
	const ENTRY: DispatchEntry = DISPATCH[CODE as usize];
}

/// Evaluates a code known at compile time.
///
/// The table lookup happens during compilation, so only the operand reordering and the primary
/// formula remain at runtime.
#[inline]
pub fn evaluate_static<const CODE: u8, T: BitContainer>(a: T, b: T, c: T) -> T {
	if T::HAS_NATIVE_TERNARY_LOGIC && Config::global().native() {
		if let Some(result) = T::ternary_logic_native(a, b, c, CODE) {
			return result;
		}
	}
	StaticDispatch::<CODE>::ENTRY.evaluate(a, b, c)
}

/// Re-checks the compiled tables: the primary formulas against their codes and every reduction
/// entry against the formula it points to.
pub fn verify_tables() -> Result<(), Error> {
	if let Some(code) = PRIMARY_LIBRARY.first_inconsistency() {
		let actual = PRIMARY_LIBRARY
			.formula(code)
			.map_or(0, |formula| formula.truth_table().value());
		return Err(Error::Mismatch {
			code,
			expected: code.value(),
			actual,
		});
	}
	REDUCTION_TABLE.verify(&PRIMARY_LIBRARY)
}
