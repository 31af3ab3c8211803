// Copyright 2024 Irreducible Inc.

use std::convert::Infallible;

use crate::code::{RejectedCode, TruthTableCode};

/// Error thrown when a ternary logic operation fails.
#[derive(Clone, Copy, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
	/// The value cannot be interpreted as an 8-bit truth table code.
	#[error("truth table code {code} is out of range 0..=255")]
	InvalidCode { code: RejectedCode },
	/// No primary representative is reachable from the code by the fixed search order.
	#[error("code {code} is neither primary nor reachable from a primary code")]
	IncompleteCoverage { code: TruthTableCode },
	#[error("no formula is registered for primary code {code}")]
	MissingFormula { code: TruthTableCode },
	#[error("evaluation of code {code} produced {actual:#04x}, expected {expected:#04x}")]
	Mismatch {
		code: TruthTableCode,
		expected: u8,
		actual: u8,
	},
	#[error("operand length {actual} does not match expected length {expected}")]
	LengthMismatch { expected: usize, actual: usize },
}

impl From<Infallible> for Error {
	fn from(value: Infallible) -> Self {
		match value {}
	}
}
