// Copyright 2025 Irreducible Inc.

/// Wraps a `std` iterator so that the parallel iterator traits can be implemented for it without
/// clashing with the methods of `std::iter::Iterator` that share their names.
pub struct ParallelWrapper<I>(pub(crate) I);

impl<I> ParallelWrapper<I> {
	#[inline(always)]
	pub(crate) const fn new(iter: I) -> Self {
		Self(iter)
	}
}
