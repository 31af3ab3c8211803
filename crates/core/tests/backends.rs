// Copyright 2024 Irreducible Inc.

//! Every container backend must produce the same lanes for the same code and operands.

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use ternlog_bits::{BitSet, Bits128, Bits256, Bits512, OptimalContainer, Random, ScaledContainer};
use ternlog_core::{
	evaluate, evaluate_slices, evaluate_with, BitContainer, Strategy, TruthTableCode,
};

/// Evaluates `code` on operands that repeat the given bytes in every byte and returns the first
/// byte of the result.
fn broadcast_result<T: BitContainer>(code: u8, a: u8, b: u8, c: u8) -> u8 {
	let result = evaluate(
		code,
		T::broadcast_byte(a),
		T::broadcast_byte(b),
		T::broadcast_byte(c),
	);
	assert_eq!(result, T::broadcast_byte(result.to_bytes()[0]), "lanes diverge");
	result.to_bytes()[0]
}

fn all_backends(code: u8, a: u8, b: u8, c: u8) -> Vec<u8> {
	vec![
		broadcast_result::<u8>(code, a, b, c),
		broadcast_result::<u32>(code, a, b, c),
		broadcast_result::<u64>(code, a, b, c),
		broadcast_result::<u128>(code, a, b, c),
		broadcast_result::<Bits128>(code, a, b, c),
		broadcast_result::<Bits256>(code, a, b, c),
		broadcast_result::<Bits512>(code, a, b, c),
		broadcast_result::<OptimalContainer>(code, a, b, c),
		broadcast_result::<ScaledContainer<u64, 3>>(code, a, b, c),
		broadcast_result::<BitSet<5>>(code, a, b, c),
	]
}

#[test]
fn test_projection_operands_on_every_backend() {
	for code in 0..=u8::MAX {
		for result in all_backends(code, 0xF0, 0xCC, 0xAA) {
			assert_eq!(result, code);
		}
	}
}

/// Compares the dispatcher with the canonical evaluator on random full-width operands, which
/// exercises the native instruction where the target has one.
fn check_against_canonical<T: BitContainer>() {
	let mut rng = StdRng::seed_from_u64(0);
	for code in TruthTableCode::all() {
		let (a, b, c) = (T::random(&mut rng), T::random(&mut rng), T::random(&mut rng));
		assert_eq!(
			evaluate(code.value(), a, b, c),
			evaluate_with(Strategy::Canonical, code, a, b, c),
			"code {code}"
		);
		assert_eq!(
			evaluate_with(Strategy::Native, code, a, b, c),
			evaluate_with(Strategy::Reduced, code, a, b, c),
			"code {code}"
		);
	}
}

#[test]
fn test_wide_backends_match_canonical() {
	check_against_canonical::<Bits128>();
	check_against_canonical::<Bits256>();
	check_against_canonical::<Bits512>();
	check_against_canonical::<ScaledContainer<Bits128, 2>>();
	check_against_canonical::<BitSet<3>>();
}

#[test]
fn test_slices_of_wide_containers() {
	let mut rng = StdRng::seed_from_u64(2);
	let len = 33;
	let a = (0..len).map(|_| Bits256::random(&mut rng)).collect::<Vec<_>>();
	let b = (0..len).map(|_| Bits256::random(&mut rng)).collect::<Vec<_>>();
	let c = (0..len).map(|_| Bits256::random(&mut rng)).collect::<Vec<_>>();
	let mut out = vec![Bits256::ZERO; len];
	let code = TruthTableCode::new(0x6b);
	evaluate_slices(code, &a, &b, &c, &mut out).unwrap();
	for i in 0..len {
		assert_eq!(out[i], evaluate_with(Strategy::Canonical, code, a[i], b[i], c[i]));
	}
}

proptest! {
	#[test]
	fn test_backends_agree(code in any::<u8>(), a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
		let results = all_backends(code, a, b, c);
		let expected = TruthTableCode::new(code);
		for result in results {
			prop_assert_eq!(result, evaluate_with(Strategy::Canonical, expected, a, b, c));
		}
	}
}
