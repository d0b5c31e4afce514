// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core padding zeroization machinery: layout shapes, the padding analyzer,
//! compiled zeroing procedures, and the process-wide procedure cache.
//!
//! The pipeline is:
//!
//! 1. A type describes its own memory layout through [`FixedLayout::SHAPE`]
//!    (usually via `#[derive(PadZero)]` from the `padzero-derive` crate).
//! 2. [`analyze`] walks the shape recursively and locates every padding
//!    region — internal gaps, tail padding, and padding inside nested
//!    aggregate fields, arbitrarily deep.
//! 3. [`ZeroProcedure::build`] compiles the region list into a compact
//!    instruction sequence (fixed-width stores for 1/2/4/8-byte regions,
//!    block fills for everything else).
//! 4. [`procedure_for`] memoizes the compiled procedure per type for the
//!    process lifetime; [`zero_padding`] and [`zero_padding_slice`] execute
//!    it against instance memory.
//!
//! Only padding bytes are ever written. Field bytes are never read or
//! modified, so zeroization is idempotent and preserves all field values.

mod cache;
mod layout;
mod procedure;
mod shape;
mod zero;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;

#[cfg(test)]
mod tests;

pub use cache::procedure_for;
pub use layout::{PaddingRegion, TypeLayout, analyze};
pub use procedure::ZeroProcedure;
pub use shape::{FieldDescriptor, FixedLayout, TypeShape};
pub use zero::{PadZeroExt, zero_padding, zero_padding_slice};
