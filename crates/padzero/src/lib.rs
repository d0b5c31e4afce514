// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # PadZero
//!
//! Deterministic zeroization of alignment padding in fixed-layout types.
//!
//! Compiler-inserted padding bytes are never written by field accesses, so
//! they carry whatever garbage the memory held before — which breaks
//! byte-wise hashing and comparison of logically equal values and can leak
//! residual data. PadZero locates every padding region of a type
//! (recursively, nested aggregates included), compiles a per-type zeroing
//! procedure on first use, caches it for the process lifetime, and applies
//! it to single instances or contiguous runs. Field bytes are never read
//! or modified.
//!
//! This is a re-export crate that combines [`padzero-core`] and
//! [`padzero-derive`] for convenience.
//!
//! ## Quick Start
//!
//! ```rust
//! use padzero::{PadZero, PadZeroExt, zero_padding};
//!
//! #[derive(PadZero)]
//! #[repr(C)]
//! struct Sample {
//!     tag: u8,
//!     // 3 bytes of padding here
//!     value: u32,
//! }
//!
//! let mut sample = Sample { tag: 1, value: 2 };
//! zero_padding(&mut sample);
//!
//! let mut batch = [Sample { tag: 1, value: 2 }, Sample { tag: 3, value: 4 }];
//! batch.zero_padding();
//! ```
//!
//! ## What's Included
//!
//! - **Trait**: [`FixedLayout`] — static layout description of a type
//! - **Operations**: [`zero_padding`], [`zero_padding_slice`], and the
//!   [`PadZeroExt`] method sugar for sequences
//! - **Derive macro**: `#[derive(PadZero)]` for `#[repr(C)]` structs and
//!   fieldless enums
//! - **Building blocks**: [`analyze`], [`ZeroProcedure`], [`procedure_for`]
//!   for callers that want the layout or the compiled procedure directly
//!
//! ## Documentation
//!
//! See [`padzero-core`] for detailed documentation and examples.
//!
//! [`padzero-core`]: https://docs.rs/padzero-core
//! [`padzero-derive`]: https://docs.rs/padzero-derive
//! [`FixedLayout`]: padzero_core::FixedLayout
//! [`zero_padding`]: padzero_core::zero_padding
//! [`zero_padding_slice`]: padzero_core::zero_padding_slice
//! [`PadZeroExt`]: padzero_core::PadZeroExt
//! [`analyze`]: padzero_core::analyze
//! [`ZeroProcedure`]: padzero_core::ZeroProcedure
//! [`procedure_for`]: padzero_core::procedure_for

#[cfg(test)]
mod tests;

pub use padzero_core::*;
pub use padzero_derive::*;
