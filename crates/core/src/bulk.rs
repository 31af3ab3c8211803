// Copyright 2024 Irreducible Inc.

//! Evaluation over slices of containers and raw byte buffers.

use std::mem::size_of;

use bytemuck::{bytes_of, pod_read_unaligned};
use ternlog_bits::{BitContainer, OptimalContainer};
use ternlog_maybe_rayon::prelude::*;
use tracing::instrument;

use crate::{
	code::TruthTableCode,
	dispatch::{evaluate_with, Strategy},
	error::Error,
};

/// Parallel splits never go below this many elements.
const PARALLEL_THRESHOLD: usize = 1 << 12;

fn check_lengths(expected: usize, actual: [usize; 3]) -> Result<(), Error> {
	for actual in actual {
		ternlog_utils::ensure!(actual == expected, Error::LengthMismatch { expected, actual });
	}
	Ok(())
}

/// Writes `f_code(a[i], b[i], c[i])` to `out[i]` for every index.
///
/// All four slices must have the same length.
#[instrument(skip_all, level = "trace", fields(len = out.len()))]
pub fn evaluate_slices<T: BitContainer>(
	code: TruthTableCode,
	a: &[T],
	b: &[T],
	c: &[T],
	out: &mut [T],
) -> Result<(), Error> {
	check_lengths(a.len(), [b.len(), c.len(), out.len()])?;

	let strategy = Strategy::current::<T>();
	tracing::trace!(threads = ternlog_maybe_rayon::current_num_threads(), ?strategy);
	out.par_iter_mut()
		.zip(a.par_iter())
		.zip(b.par_iter())
		.zip(c.par_iter())
		.with_min_len(PARALLEL_THRESHOLD)
		.for_each(|(((out, a), b), c)| {
			*out = evaluate_with(strategy, code, *a, *b, *c);
		});
	Ok(())
}

/// Evaluates `code` bitwise over byte buffers of equal length.
///
/// The bulk of the buffers is processed in chunks of [`OptimalContainer`], the remaining bytes
/// one at a time.
#[instrument(skip_all, level = "trace", fields(len = out.len()))]
pub fn evaluate_bytes(
	code: TruthTableCode,
	a: &[u8],
	b: &[u8],
	c: &[u8],
	out: &mut [u8],
) -> Result<(), Error> {
	check_lengths(a.len(), [b.len(), c.len(), out.len()])?;

	let width = size_of::<OptimalContainer>();
	let split = a.len() - a.len() % width;
	let (a, a_tail) = a.split_at(split);
	let (b, b_tail) = b.split_at(split);
	let (c, c_tail) = c.split_at(split);
	let (out, out_tail) = out.split_at_mut(split);

	tracing::trace!(chunks = out.len() / width, tail = out_tail.len(), "split byte buffers");

	let strategy = Strategy::current::<OptimalContainer>();
	out.par_chunks_exact_mut(width)
		.zip(a.par_chunks_exact(width))
		.zip(b.par_chunks_exact(width))
		.zip(c.par_chunks_exact(width))
		.with_min_len(PARALLEL_THRESHOLD)
		.for_each(|(((out, a), b), c)| {
			let result: OptimalContainer = evaluate_with(
				strategy,
				code,
				pod_read_unaligned(a),
				pod_read_unaligned(b),
				pod_read_unaligned(c),
			);
			out.copy_from_slice(bytes_of(&result));
		});

	let tail_strategy = Strategy::current::<u8>();
	for (((out, &a), &b), &c) in out_tail.iter_mut().zip(a_tail).zip(b_tail).zip(c_tail) {
		*out = evaluate_with(tail_strategy, code, a, b, c);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::library::evaluate_canonical;

	#[test]
	fn test_length_mismatch() {
		let a = [0u64; 4];
		let mut out = [0u64; 3];
		assert_eq!(
			evaluate_slices(TruthTableCode::new(0x96), &a, &a, &a, &mut out),
			Err(Error::LengthMismatch {
				expected: 4,
				actual: 3
			})
		);
		let mut bytes = [0u8; 4];
		assert_eq!(
			evaluate_bytes(TruthTableCode::new(0x96), &[0; 4], &[0; 5], &[0; 4], &mut bytes),
			Err(Error::LengthMismatch {
				expected: 4,
				actual: 5
			})
		);
	}

	#[test]
	fn test_empty_input() {
		let mut out: [u32; 0] = [];
		evaluate_slices(TruthTableCode::ONES, &[], &[], &[], &mut out).unwrap();
		evaluate_bytes(TruthTableCode::ONES, &[], &[], &[], &mut []).unwrap();
	}

	#[test]
	fn test_large_slices() {
		let len = (1 << 12) + 7;
		let a = (0..len as u64).collect::<Vec<_>>();
		let b = a.iter().map(|x| x.rotate_left(17)).collect::<Vec<_>>();
		let c = a.iter().map(|x| !x.wrapping_mul(0x9e37_79b9)).collect::<Vec<_>>();
		let mut out = vec![0u64; len];
		let code = TruthTableCode::new(0xca);
		evaluate_slices(code, &a, &b, &c, &mut out).unwrap();
		for i in 0..len {
			assert_eq!(out[i], evaluate_canonical(code, a[i], b[i], c[i]));
		}
	}

	#[test]
	fn test_large_byte_buffers() {
		let len = (PARALLEL_THRESHOLD + 3) * size_of::<OptimalContainer>() + 5;
		let a = (0..len).map(|i| i as u8).collect::<Vec<_>>();
		let b = (0..len).map(|i| (i >> 8) as u8 ^ 0x5a).collect::<Vec<_>>();
		let c = (0..len).map(|i| (i as u8).wrapping_mul(37)).collect::<Vec<_>>();
		let mut out = vec![0u8; len];
		let code = TruthTableCode::new(0x6b);
		evaluate_bytes(code, &a, &b, &c, &mut out).unwrap();
		for i in 0..len {
			assert_eq!(out[i], evaluate_canonical(code, a[i], b[i], c[i]), "byte {i}");
		}
	}

	proptest! {
		#[test]
		fn test_bytes_match_canonical(
			code in any::<u8>(),
			operands in prop::collection::vec(any::<(u8, u8, u8)>(), 0..300),
		) {
			let code = TruthTableCode::new(code);
			let a = operands.iter().map(|x| x.0).collect::<Vec<_>>();
			let b = operands.iter().map(|x| x.1).collect::<Vec<_>>();
			let c = operands.iter().map(|x| x.2).collect::<Vec<_>>();
			let mut out = vec![0u8; operands.len()];
			evaluate_bytes(code, &a, &b, &c, &mut out).unwrap();
			for (i, &(a, b, c)) in operands.iter().enumerate() {
				prop_assert_eq!(out[i], evaluate_canonical(code, a, b, c));
			}
		}
	}
}
