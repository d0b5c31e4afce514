// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Recursive padding-layout analysis.
//!
//! [`analyze`] walks a [`TypeShape`] and computes every byte range of the
//! type that is alignment padding rather than field storage. Offsets in
//! the result are absolute within the outermost analyzed type, including
//! regions found inside nested aggregate fields.

use smallvec::SmallVec;

use crate::shape::{FieldDescriptor, TypeShape};

/// A contiguous run of padding bytes within the outermost analyzed type.
///
/// Invariants: `len >= 1`; regions never overlap each other and never
/// overlap any field's byte range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaddingRegion {
    /// Absolute byte offset of the region within the outermost type.
    pub offset: usize,
    /// Length of the region in bytes.
    pub len: usize,
}

/// The analysis result for one type: total size plus all padding regions.
///
/// An empty region list is the valid "no padding" terminal state; zeroing
/// such a type is a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeLayout {
    /// Total size of the analyzed type in bytes.
    pub size: usize,
    /// Every padding region of the type, nested regions included.
    pub regions: Vec<PaddingRegion>,
}

/// Computes the full padding layout of a type.
///
/// Pure and deterministic for a given shape. Internal gaps between
/// adjacent fields, tail padding after the last field, and padding inside
/// nested aggregate fields (arbitrarily deep, offset-translated) are all
/// reported. A shape with zero fields yields an empty region list.
///
/// # Example
///
/// ```rust
/// use padzero_core::{FixedLayout, analyze};
///
/// // `[u8; 4]` is gap-free: every byte is field storage.
/// let layout = analyze(<[u8; 4] as FixedLayout>::SHAPE);
/// assert_eq!(layout.size, 4);
/// assert!(layout.regions.is_empty());
/// ```
pub fn analyze(shape: &TypeShape) -> TypeLayout {
    let mut regions = Vec::new();
    collect(shape, 0, &mut regions);

    TypeLayout {
        size: shape.size,
        regions,
    }
}

/// Emits all padding regions of `shape`, translated by `base`, into `out`.
fn collect(shape: &TypeShape, base: usize, out: &mut Vec<PaddingRegion>) {
    if shape.is_leaf() {
        return;
    }

    let mut fields: SmallVec<[FieldDescriptor; 16]> = shape.fields.iter().copied().collect();
    fields.sort_unstable_by_key(|field| field.offset);

    let mut cursor = 0usize;

    for field in &fields {
        // Gap between the end of the previous field and this one.
        if field.offset > cursor {
            out.push(PaddingRegion {
                offset: base + cursor,
                len: field.offset - cursor,
            });
        }

        cursor = field.offset + field.size();

        if !field.shape.is_leaf() {
            collect(field.shape, base + field.offset, out);
        }
    }

    // Tail padding after the last field.
    if cursor < shape.size {
        out.push(PaddingRegion {
            offset: base + cursor,
            len: shape.size - cursor,
        });
    }
}
