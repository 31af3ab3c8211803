// Copyright 2025 Irreducible Inc.
// The code is initially based on `maybe-rayon` crate, https://github.com/shssoichiro/maybe-rayon

use super::parallel_wrapper::ParallelWrapper;

pub trait ParallelIterator: Sized {
	type Inner: Iterator<Item = Self::Item>;
	type Item;

	fn into_inner(self) -> Self::Inner;

	#[inline]
	fn for_each<OP>(self, op: OP)
	where
		OP: Fn(Self::Item) + Sync + Send,
	{
		Iterator::for_each(self.into_inner(), op)
	}
}

impl<I: Iterator> ParallelIterator for ParallelWrapper<I> {
	type Inner = I;
	type Item = I::Item;

	#[inline(always)]
	fn into_inner(self) -> I {
		self.0
	}
}
