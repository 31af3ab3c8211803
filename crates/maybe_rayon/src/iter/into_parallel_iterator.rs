// Copyright 2025 Irreducible Inc.
// The code is initially based on `maybe-rayon` crate, https://github.com/shssoichiro/maybe-rayon

use super::{ParallelIterator, ParallelWrapper};

pub trait IntoParallelIterator {
	type Iter: ParallelIterator<Item = Self::Item>;
	type Item;

	fn into_par_iter(self) -> Self::Iter;
}

impl<I: ParallelIterator> IntoParallelIterator for I {
	type Iter = I;
	type Item = I::Item;

	#[inline(always)]
	fn into_par_iter(self) -> Self::Iter {
		self
	}
}

impl<'a, T> IntoParallelIterator for &'a [T] {
	type Item = &'a T;
	type Iter = ParallelWrapper<std::slice::Iter<'a, T>>;

	#[inline(always)]
	fn into_par_iter(self) -> Self::Iter {
		ParallelWrapper::new(self.iter())
	}
}

impl<'a, T> IntoParallelIterator for &'a mut [T] {
	type Item = &'a mut T;
	type Iter = ParallelWrapper<std::slice::IterMut<'a, T>>;

	#[inline(always)]
	fn into_par_iter(self) -> Self::Iter {
		ParallelWrapper::new(self.iter_mut())
	}
}

pub trait IntoParallelRefIterator<'data> {
	type Iter: ParallelIterator<Item = Self::Item>;
	type Item: 'data;

	fn par_iter(&'data self) -> Self::Iter;
}

impl<'data, I: 'data + ?Sized> IntoParallelRefIterator<'data> for I
where
	&'data I: IntoParallelIterator,
{
	type Iter = <&'data I as IntoParallelIterator>::Iter;
	type Item = <&'data I as IntoParallelIterator>::Item;

	#[inline(always)]
	fn par_iter(&'data self) -> Self::Iter {
		self.into_par_iter()
	}
}

pub trait IntoParallelRefMutIterator<'data> {
	type Iter: ParallelIterator<Item = Self::Item>;
	type Item: 'data;

	fn par_iter_mut(&'data mut self) -> Self::Iter;
}

impl<'data, I: 'data + ?Sized> IntoParallelRefMutIterator<'data> for I
where
	&'data mut I: IntoParallelIterator,
{
	type Iter = <&'data mut I as IntoParallelIterator>::Iter;
	type Item = <&'data mut I as IntoParallelIterator>::Item;

	#[inline(always)]
	fn par_iter_mut(&'data mut self) -> Self::Iter {
		self.into_par_iter()
	}
}
