// Copyright 2024 Irreducible Inc.

//! Runs in its own process so that nothing else resolves the global configuration first.

use ternlog_bits::{BitSet, Bits512};
use ternlog_core::{
	evaluate, evaluate_checked, evaluate_slices, BitContainer, Config, TruthTableCode,
};

#[test]
fn test_portable_containers_leave_global_config_unresolved() {
	assert_eq!(evaluate(0xE8, 0b1100u8, 0b1010, 0b0110), 0b1110);
	assert_eq!(evaluate(0x96, u64::MAX, 0, 0), u64::MAX);
	assert_eq!(evaluate_checked(0x80u32, 0xF0u16, 0xCC, 0xAA), Ok(0x80));
	let set = BitSet::<2>::fill_with_bit(1);
	assert_eq!(evaluate(0xF0, set, BitSet::ZERO, BitSet::ZERO), set);

	let operands = [0x0123_4567u32, 0x89ab_cdef, 0xdead_beef];
	let mut out = [0u32; 3];
	evaluate_slices(TruthTableCode::new(0xCA), &operands, &operands, &operands, &mut out).unwrap();
	assert_eq!(out, operands);

	let config = Config::new().with_native(false);
	assert!(config.install().is_ok(), "global configuration resolved by a portable container");
	assert_eq!(*Config::global(), config);

	let a = Bits512::broadcast_byte(0xF0);
	let b = Bits512::broadcast_byte(0xCC);
	let c = Bits512::broadcast_byte(0xAA);
	assert_eq!(evaluate(0x1B, a, b, c), Bits512::broadcast_byte(0x1B));
}
