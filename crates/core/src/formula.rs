// Copyright 2024 Irreducible Inc.

//! Straight-line Boolean programs over the operands `a`, `b` and `c`.
//!
//! A [`Formula`] is a short list of two-address instructions. Instruction `i` writes temporary
//! `t{i}`, which later instructions and the result may read. Formulas are written with the
//! `formula!` macro, e.g. `formula!(A ^ B, C & t0)` computes `c & (a ^ b)`.

use std::fmt::{self, Display, Formatter};

use ternlog_bits::BitContainer;

use crate::code::TruthTableCode;

/// Maximum number of instructions a formula may contain.
pub const MAX_INSTRUCTIONS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
	A,
	B,
	C,
	Zero,
	Ones,
	/// Result of the instruction with the given index.
	Temp(u8),
}

impl Operand {
	#[inline(always)]
	fn resolve<T: BitContainer>(self, a: T, b: T, c: T, temps: &[T; MAX_INSTRUCTIONS]) -> T {
		match self {
			Self::A => a,
			Self::B => b,
			Self::C => c,
			Self::Zero => T::ZERO,
			Self::Ones => T::ONES,
			Self::Temp(i) => temps[i as usize],
		}
	}

	const fn resolve_u8(self, a: u8, b: u8, c: u8, temps: &[u8; MAX_INSTRUCTIONS]) -> u8 {
		match self {
			Self::A => a,
			Self::B => b,
			Self::C => c,
			Self::Zero => 0,
			Self::Ones => u8::MAX,
			Self::Temp(i) => temps[i as usize],
		}
	}

	/// Whether the operand only refers to temporaries below `bound`.
	const fn is_available(self, bound: usize) -> bool {
		match self {
			Self::Temp(i) => (i as usize) < bound,
			_ => true,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
	Not(Operand),
	And(Operand, Operand),
	Or(Operand, Operand),
	Xor(Operand, Operand),
}

impl Instruction {
	#[inline(always)]
	fn evaluate<T: BitContainer>(self, a: T, b: T, c: T, temps: &[T; MAX_INSTRUCTIONS]) -> T {
		match self {
			Self::Not(x) => !x.resolve(a, b, c, temps),
			Self::And(x, y) => x.resolve(a, b, c, temps) & y.resolve(a, b, c, temps),
			Self::Or(x, y) => x.resolve(a, b, c, temps) | y.resolve(a, b, c, temps),
			Self::Xor(x, y) => x.resolve(a, b, c, temps) ^ y.resolve(a, b, c, temps),
		}
	}

	const fn evaluate_u8(self, a: u8, b: u8, c: u8, temps: &[u8; MAX_INSTRUCTIONS]) -> u8 {
		match self {
			Self::Not(x) => !x.resolve_u8(a, b, c, temps),
			Self::And(x, y) => x.resolve_u8(a, b, c, temps) & y.resolve_u8(a, b, c, temps),
			Self::Or(x, y) => x.resolve_u8(a, b, c, temps) | y.resolve_u8(a, b, c, temps),
			Self::Xor(x, y) => x.resolve_u8(a, b, c, temps) ^ y.resolve_u8(a, b, c, temps),
		}
	}

	const fn reads_only_below(self, bound: usize) -> bool {
		match self {
			Self::Not(x) => x.is_available(bound),
			Self::And(x, y) | Self::Or(x, y) | Self::Xor(x, y) => {
				x.is_available(bound) && y.is_available(bound)
			}
		}
	}
}

/// A Boolean formula over three operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Formula {
	instructions: &'static [Instruction],
	result: Operand,
}

impl Formula {
	/// A formula without instructions that returns an operand or a constant.
	pub const fn operand(result: Operand) -> Self {
		Self {
			instructions: &[],
			result,
		}
	}

	/// A formula returning the result of its last instruction.
	///
	/// ## Preconditions
	///
	/// * `instructions` must be non-empty and contain at most [`MAX_INSTRUCTIONS`] entries
	/// * instruction `i` may only read temporaries `t0..t{i}`
	pub const fn program(instructions: &'static [Instruction]) -> Self {
		assert!(!instructions.is_empty() && instructions.len() <= MAX_INSTRUCTIONS);
		let formula = Self {
			instructions,
			result: Operand::Temp((instructions.len() - 1) as u8),
		};
		assert!(formula.is_well_formed(), "instruction reads a temporary before it is written");
		formula
	}

	pub const fn instructions(&self) -> &'static [Instruction] {
		self.instructions
	}

	pub const fn result(&self) -> Operand {
		self.result
	}

	/// Number of Boolean operations performed by one evaluation.
	pub const fn instruction_count(&self) -> usize {
		self.instructions.len()
	}

	/// Whether every temporary is written before it is read.
	pub const fn is_well_formed(&self) -> bool {
		if self.instructions.len() > MAX_INSTRUCTIONS {
			return false;
		}
		let mut i = 0;
		while i < self.instructions.len() {
			if !self.instructions[i].reads_only_below(i) {
				return false;
			}
			i += 1;
		}
		self.result.is_available(self.instructions.len())
	}

	#[inline]
	pub fn evaluate<T: BitContainer>(&self, a: T, b: T, c: T) -> T {
		let mut temps = [T::ZERO; MAX_INSTRUCTIONS];
		for (i, instruction) in self.instructions.iter().enumerate() {
			temps[i] = instruction.evaluate(a, b, c, &temps);
		}
		self.result.resolve(a, b, c, &temps)
	}

	/// Bytewise evaluation, usable in constant expressions.
	pub const fn evaluate_u8(&self, a: u8, b: u8, c: u8) -> u8 {
		let mut temps = [0u8; MAX_INSTRUCTIONS];
		let mut i = 0;
		while i < self.instructions.len() {
			temps[i] = self.instructions[i].evaluate_u8(a, b, c, &temps);
			i += 1;
		}
		self.result.resolve_u8(a, b, c, &temps)
	}

	/// The truth table of the function this formula computes.
	pub const fn truth_table(&self) -> TruthTableCode {
		TruthTableCode::new(self.evaluate_u8(
			TruthTableCode::A.value(),
			TruthTableCode::B.value(),
			TruthTableCode::C.value(),
		))
	}

	fn fmt_operand(&self, operand: Operand, f: &mut Formatter<'_>) -> fmt::Result {
		match operand {
			Operand::A => f.write_str("a"),
			Operand::B => f.write_str("b"),
			Operand::C => f.write_str("c"),
			Operand::Zero => f.write_str("0"),
			Operand::Ones => f.write_str("1"),
			Operand::Temp(i) => match self.instructions[i as usize] {
				Instruction::Not(x) => {
					f.write_str("!")?;
					self.fmt_operand(x, f)
				}
				Instruction::And(x, y) => self.fmt_binary(x, "&", y, f),
				Instruction::Or(x, y) => self.fmt_binary(x, "|", y, f),
				Instruction::Xor(x, y) => self.fmt_binary(x, "^", y, f),
			},
		}
	}

	fn fmt_binary(&self, x: Operand, op: &str, y: Operand, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("(")?;
		self.fmt_operand(x, f)?;
		write!(f, " {op} ")?;
		self.fmt_operand(y, f)?;
		f.write_str(")")
	}
}

/// Prints the formula as a single infix expression, e.g. `(c & (a ^ b))`.
impl Display for Formula {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if !self.is_well_formed() {
			return write!(f, "<malformed formula>");
		}
		self.fmt_operand(self.result, f)
	}
}

/// Builds a [`Formula`] from a comma-separated list of instructions.
///
/// Operands are `A`, `B`, `C`, `ZERO`, `ONES` and the temporaries `t0` to `t7`. Each instruction
/// is either `!x` or `x op y` with `op` one of `&`, `|` and `^`. A single operand with no
/// instructions is also accepted.
macro_rules! formula {
	($x:ident) => {
		$crate::formula::Formula::operand($crate::formula::operand!($x))
	};
	($($body:tt)+) => {
		$crate::formula::Formula::program(&$crate::formula::instructions!([] $($body)+))
	};
}

macro_rules! instructions {
	([$($done:expr,)*]) => {
		[$($done,)*]
	};
	([$($done:expr,)*] ! $x:ident $(, $($rest:tt)*)?) => {
		$crate::formula::instructions!(
			[$($done,)* $crate::formula::Instruction::Not($crate::formula::operand!($x)),]
			$($($rest)*)?
		)
	};
	([$($done:expr,)*] $x:ident & $y:ident $(, $($rest:tt)*)?) => {
		$crate::formula::instructions!(
			[$($done,)* $crate::formula::Instruction::And(
				$crate::formula::operand!($x),
				$crate::formula::operand!($y),
			),]
			$($($rest)*)?
		)
	};
	([$($done:expr,)*] $x:ident | $y:ident $(, $($rest:tt)*)?) => {
		$crate::formula::instructions!(
			[$($done,)* $crate::formula::Instruction::Or(
				$crate::formula::operand!($x),
				$crate::formula::operand!($y),
			),]
			$($($rest)*)?
		)
	};
	([$($done:expr,)*] $x:ident ^ $y:ident $(, $($rest:tt)*)?) => {
		$crate::formula::instructions!(
			[$($done,)* $crate::formula::Instruction::Xor(
				$crate::formula::operand!($x),
				$crate::formula::operand!($y),
			),]
			$($($rest)*)?
		)
	};
}

macro_rules! operand {
	(A) => { $crate::formula::Operand::A };
	(B) => { $crate::formula::Operand::B };
	(C) => { $crate::formula::Operand::C };
	(ZERO) => { $crate::formula::Operand::Zero };
	(ONES) => { $crate::formula::Operand::Ones };
	(t0) => { $crate::formula::Operand::Temp(0) };
	(t1) => { $crate::formula::Operand::Temp(1) };
	(t2) => { $crate::formula::Operand::Temp(2) };
	(t3) => { $crate::formula::Operand::Temp(3) };
	(t4) => { $crate::formula::Operand::Temp(4) };
	(t5) => { $crate::formula::Operand::Temp(5) };
	(t6) => { $crate::formula::Operand::Temp(6) };
	(t7) => { $crate::formula::Operand::Temp(7) };
}

pub(crate) use formula;
pub(crate) use instructions;
pub(crate) use operand;

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_operand_formulas() {
		assert_eq!(formula!(A).truth_table(), TruthTableCode::A);
		assert_eq!(formula!(B).truth_table(), TruthTableCode::B);
		assert_eq!(formula!(C).truth_table(), TruthTableCode::C);
		assert_eq!(formula!(ZERO).truth_table(), TruthTableCode::ZERO);
		assert_eq!(formula!(ONES).truth_table(), TruthTableCode::ONES);
		assert_eq!(formula!(A).instruction_count(), 0);
	}

	#[test]
	fn test_macro_expansion() {
		let formula = formula!(A ^ B, !C, t0 & t1);
		assert_eq!(
			formula.instructions(),
			&[
				Instruction::Xor(Operand::A, Operand::B),
				Instruction::Not(Operand::C),
				Instruction::And(Operand::Temp(0), Operand::Temp(1)),
			]
		);
		assert_eq!(formula.result(), Operand::Temp(2));
		assert_eq!(formula.truth_table(), TruthTableCode::new(0x3c & 0x55));
	}

	#[test]
	fn test_majority() {
		let majority = formula!(A ^ B, A ^ C, t0 & t1, A ^ t2);
		assert_eq!(majority.truth_table(), TruthTableCode::new(0xe8));
		assert_eq!(majority.to_string(), "(a ^ ((a ^ b) & (a ^ c)))");
	}

	#[test]
	fn test_well_formed() {
		assert!(formula!(B | C, A | t0).is_well_formed());
		let forward_reference = Formula {
			instructions: &[Instruction::Not(Operand::Temp(0))],
			result: Operand::Temp(0),
		};
		assert!(!forward_reference.is_well_formed());
		assert_eq!(forward_reference.to_string(), "<malformed formula>");
		let dangling_result = Formula {
			instructions: &[Instruction::Not(Operand::A)],
			result: Operand::Temp(1),
		};
		assert!(!dangling_result.is_well_formed());
	}

	#[test]
	#[should_panic]
	fn test_empty_program() {
		Formula::program(&[]);
	}

	#[test]
	#[should_panic(expected = "reads a temporary before it is written")]
	fn test_program_out_of_range_temp() {
		Formula::program(&[Instruction::Not(Operand::Temp(9))]);
	}

	#[test]
	#[should_panic(expected = "reads a temporary before it is written")]
	fn test_program_forward_temp() {
		Formula::program(&[
			Instruction::And(Operand::A, Operand::Temp(1)),
			Instruction::Not(Operand::B),
		]);
	}

	proptest! {
		#[test]
		fn test_generic_matches_bytewise(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
			let formula = formula!(!A, A | B, B ^ C, t1 & t2, t0 ^ t3);
			prop_assert_eq!(formula.evaluate(a, b, c), formula.evaluate_u8(a, b, c));
			let wide = formula.evaluate(
				u64::broadcast_byte(a),
				u64::broadcast_byte(b),
				u64::broadcast_byte(c),
			);
			prop_assert_eq!(wide, u64::broadcast_byte(formula.evaluate_u8(a, b, c)));
		}
	}
}
