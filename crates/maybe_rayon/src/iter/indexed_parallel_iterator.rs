// Copyright 2025 Irreducible Inc.
// The code is initially based on `maybe-rayon` crate, https://github.com/shssoichiro/maybe-rayon

use super::{parallel_wrapper::ParallelWrapper, IntoParallelIterator, ParallelIterator};

/// Marks the `std` iterators that know their exact length, the counterpart of rayon's indexed
/// producers.
pub(crate) trait IndexedParallelIteratorInner: Iterator {}

impl<T> IndexedParallelIteratorInner for std::slice::Iter<'_, T> {}
impl<T> IndexedParallelIteratorInner for std::slice::IterMut<'_, T> {}
impl<'a, T: 'a> IndexedParallelIteratorInner for std::slice::ChunksExact<'a, T> {}
impl<'a, T: 'a> IndexedParallelIteratorInner for std::slice::ChunksExactMut<'a, T> {}
impl<L: IndexedParallelIteratorInner, R: IndexedParallelIteratorInner> IndexedParallelIteratorInner
	for std::iter::Zip<L, R>
{
}

#[allow(private_bounds)]
pub trait IndexedParallelIterator: ParallelIterator {
	type Inner: IndexedParallelIteratorInner<Item = Self::Item>;

	fn into_inner(self) -> <Self as IndexedParallelIterator>::Inner;

	/// Without a thread pool there is nothing to split.
	#[inline(always)]
	fn with_min_len(self, _min: usize) -> Self {
		self
	}

	#[inline]
	fn zip<Z>(
		self,
		zip_op: Z,
	) -> ParallelWrapper<
		std::iter::Zip<
			<Self as IndexedParallelIterator>::Inner,
			<Z::Iter as IndexedParallelIterator>::Inner,
		>,
	>
	where
		Z: IntoParallelIterator,
		Z::Iter: IndexedParallelIterator,
	{
		ParallelWrapper::new(Iterator::zip(
			IndexedParallelIterator::into_inner(self),
			IndexedParallelIterator::into_inner(zip_op.into_par_iter()),
		))
	}
}

impl<I: IndexedParallelIteratorInner> IndexedParallelIterator for ParallelWrapper<I> {
	type Inner = I;

	#[inline(always)]
	fn into_inner(self) -> I {
		self.0
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use crate::prelude::*;

	#[test]
	fn check_zip_mut() {
		let out: &mut [u32] = &mut [0; 4];
		let a: &[u32] = &[1, 2, 3, 4];
		let b: &[u32] = &[10, 20, 30, 40];
		out.par_iter_mut()
			.zip(a.par_iter())
			.zip(b.par_iter())
			.with_min_len(2)
			.for_each(|((out, a), b)| *out = a + b);
		assert_eq!(out, [11, 22, 33, 44]);
	}

	#[test]
	fn check_zip_runs_in_order() {
		let seen = Mutex::new(Vec::new());
		let a: &[u8] = &[5, 6, 7];
		let b: &[u8] = &[1, 2, 3];
		a.par_iter()
			.zip(b.par_iter())
			.for_each(|(a, b)| seen.lock().unwrap().push(a * b));
		assert_eq!(seen.into_inner().unwrap(), vec![5, 12, 21]);
	}
}
