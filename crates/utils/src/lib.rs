// Copyright 2024 Irreducible Inc.

//! Ambient helpers shared by the ternlog crates: environment flags, error shortcuts, tracing
//! setup and rayon thread pool tuning.

pub mod env;
pub mod error_utils;
#[cfg(feature = "rayon")]
pub mod rayon;
pub mod tracing;
