// Copyright 2024-2025 Irreducible Inc.

#[cfg(target_feature = "neon")]
pub(super) mod m128;
