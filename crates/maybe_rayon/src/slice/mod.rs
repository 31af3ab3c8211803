// Copyright 2025 Irreducible Inc.
// The code is initially based on `maybe-rayon` crate, https://github.com/shssoichiro/maybe-rayon

use crate::iter::ParallelWrapper;

pub trait ParallelSlice<T: Sync> {
	fn as_parallel_slice(&self) -> &[T];

	#[inline(always)]
	fn par_chunks_exact(
		&self,
		chunk_size: usize,
	) -> ParallelWrapper<std::slice::ChunksExact<'_, T>> {
		ParallelWrapper::new(self.as_parallel_slice().chunks_exact(chunk_size))
	}
}

impl<T: Sync> ParallelSlice<T> for [T] {
	#[inline(always)]
	fn as_parallel_slice(&self) -> &[T] {
		self
	}
}

pub trait ParallelSliceMut<T: Send> {
	fn as_parallel_slice_mut(&mut self) -> &mut [T];

	#[inline(always)]
	fn par_chunks_exact_mut(
		&mut self,
		chunk_size: usize,
	) -> ParallelWrapper<std::slice::ChunksExactMut<'_, T>> {
		ParallelWrapper::new(self.as_parallel_slice_mut().chunks_exact_mut(chunk_size))
	}
}

impl<T: Send> ParallelSliceMut<T> for [T] {
	#[inline(always)]
	fn as_parallel_slice_mut(&mut self) -> &mut [T] {
		self
	}
}

#[cfg(test)]
mod tests {
	use crate::prelude::*;

	#[test]
	fn check_chunks_exact() {
		let out: &mut [u8] = &mut [0; 6];
		let a: &[u8] = &[1, 2, 3, 4, 5, 6, 7];
		out.par_chunks_exact_mut(2)
			.zip(a.par_chunks_exact(2))
			.for_each(|(out, a)| out.copy_from_slice(&[a[1], a[0]]));
		assert_eq!(out, [2, 1, 4, 3, 6, 5]);
	}
}
