// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Compiled zeroing procedures.
//!
//! A [`ZeroProcedure`] is the executable form of a padding layout: a fixed,
//! ordered sequence of zero-write instructions closed over the region list.
//! It is compiled once per type and interpreted by a tight loop per call.
//! Execution performs only writes — no reads, no branching on data.

use core::ptr;

use smallvec::SmallVec;

use crate::layout::PaddingRegion;

/// One zero-write instruction of a compiled procedure.
///
/// Regions of exactly 1, 2, 4, or 8 bytes get a single fixed-width store;
/// every other length falls back to a generic block fill. The fixed-width
/// stores are unaligned so no assumption about region alignment is needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum WriteOp {
    /// Store a zero `u8` at `base + offset`.
    Store1(usize),
    /// Store a zero `u16` at `base + offset`.
    Store2(usize),
    /// Store a zero `u32` at `base + offset`.
    Store4(usize),
    /// Store a zero `u64` at `base + offset`.
    Store8(usize),
    /// Fill `len` bytes with zero starting at `base + offset`.
    Fill { offset: usize, len: usize },
}

/// A type-specific zeroing routine compiled from a padding layout.
#[derive(Debug)]
pub struct ZeroProcedure {
    pub(crate) ops: SmallVec<[WriteOp; 4]>,
}

impl ZeroProcedure {
    /// Compiles a region list into a procedure.
    ///
    /// Returns `None` for an empty region list, so callers skip even the
    /// indirect dispatch on the hot path when a type has no padding.
    pub fn build(regions: &[PaddingRegion]) -> Option<Self> {
        if regions.is_empty() {
            return None;
        }

        let ops = regions
            .iter()
            .map(|region| match region.len {
                1 => WriteOp::Store1(region.offset),
                2 => WriteOp::Store2(region.offset),
                4 => WriteOp::Store4(region.offset),
                8 => WriteOp::Store8(region.offset),
                len => WriteOp::Fill {
                    offset: region.offset,
                    len,
                },
            })
            .collect();

        Some(Self { ops })
    }

    /// Number of write instructions in the procedure.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if the procedure contains no instructions.
    ///
    /// Never the case for a procedure returned by [`ZeroProcedure::build`].
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Executes the procedure against one instance's memory.
    ///
    /// # Safety
    ///
    /// `base` must point to writable memory at least as large as the type
    /// whose padding layout this procedure was built from, and every
    /// region the procedure writes must be padding of that memory (the
    /// guarantee of [`FixedLayout::SHAPE`](crate::FixedLayout::SHAPE)).
    pub unsafe fn apply(&self, base: *mut u8) {
        for op in &self.ops {
            match *op {
                WriteOp::Store1(offset) => unsafe { base.add(offset).write(0) },
                WriteOp::Store2(offset) => unsafe {
                    base.add(offset).cast::<u16>().write_unaligned(0)
                },
                WriteOp::Store4(offset) => unsafe {
                    base.add(offset).cast::<u32>().write_unaligned(0)
                },
                WriteOp::Store8(offset) => unsafe {
                    base.add(offset).cast::<u64>().write_unaligned(0)
                },
                WriteOp::Fill { offset, len } => unsafe {
                    ptr::write_bytes(base.add(offset), 0, len)
                },
            }
        }
    }
}
