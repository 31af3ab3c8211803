// Copyright 2024 Irreducible Inc.

//! Evaluation of arbitrary three-input Boolean functions over bit containers.
//!
//! A function is identified by its 8-bit truth table, the same encoding used by the x86
//! `vpternlog` instructions. Only one hand-minimized formula is stored per orbit of the symmetric
//! group acting on the operands; every other code is evaluated by permuting the operands and
//! running the formula of its orbit representative.
//!
//! ```
//! use ternlog_core::evaluate;
//!
//! // Majority of three.
//! assert_eq!(evaluate(0xE8, 0b1100u8, 0b1010, 0b0110), 0b1110);
//! ```

pub mod bulk;
pub mod code;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod formula;
pub mod library;
pub mod permutation;
pub mod reduction;

pub use bulk::*;
pub use code::*;
pub use config::*;
pub use dispatch::*;
pub use error::*;
pub use formula::{Formula, Instruction, Operand, MAX_INSTRUCTIONS};
pub use library::*;
pub use permutation::*;
pub use reduction::*;
pub use ternlog_bits::BitContainer;
