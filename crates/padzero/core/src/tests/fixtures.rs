// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hand-implemented fixture types shared by the core test suite.
//!
//! Shapes are written out manually here (instead of using the derive) so
//! the core crate's tests stay independent of `padzero-derive`.

use core::mem::offset_of;

use crate::{FieldDescriptor, FixedLayout, TypeShape};

/// `u8` then `u32` at natural alignment: 3 bytes of internal padding.
#[repr(C)]
#[derive(Clone, Copy)]
pub(crate) struct Gapped {
    pub a: u8,
    pub b: u32,
}

unsafe impl FixedLayout for Gapped {
    const SHAPE: &'static TypeShape = &TypeShape {
        size: size_of::<Gapped>(),
        fields: &[
            FieldDescriptor {
                offset: offset_of!(Gapped, a),
                shape: <u8 as FixedLayout>::SHAPE,
            },
            FieldDescriptor {
                offset: offset_of!(Gapped, b),
                shape: <u32 as FixedLayout>::SHAPE,
            },
        ],
    };
}

/// `u64` then `u8`: 7 bytes of tail padding.
#[repr(C)]
#[derive(Clone, Copy)]
pub(crate) struct Tailed {
    pub a: u64,
    pub b: u8,
}

unsafe impl FixedLayout for Tailed {
    const SHAPE: &'static TypeShape = &TypeShape {
        size: size_of::<Tailed>(),
        fields: &[
            FieldDescriptor {
                offset: offset_of!(Tailed, a),
                shape: <u64 as FixedLayout>::SHAPE,
            },
            FieldDescriptor {
                offset: offset_of!(Tailed, b),
                shape: <u8 as FixedLayout>::SHAPE,
            },
        ],
    };
}

/// Embeds [`Gapped`] plus one trailing byte field: nested internal padding
/// at bytes 1..4 and outer tail padding at bytes 9..12.
#[repr(C)]
#[derive(Clone, Copy)]
pub(crate) struct Nested {
    pub inner: Gapped,
    pub c: u8,
}

unsafe impl FixedLayout for Nested {
    const SHAPE: &'static TypeShape = &TypeShape {
        size: size_of::<Nested>(),
        fields: &[
            FieldDescriptor {
                offset: offset_of!(Nested, inner),
                shape: Gapped::SHAPE,
            },
            FieldDescriptor {
                offset: offset_of!(Nested, c),
                shape: <u8 as FixedLayout>::SHAPE,
            },
        ],
    };
}

/// Two `u32` fields back to back: no padding at all.
#[repr(C)]
#[derive(Clone, Copy)]
pub(crate) struct Dense {
    pub a: u32,
    pub b: u32,
}

unsafe impl FixedLayout for Dense {
    const SHAPE: &'static TypeShape = &TypeShape {
        size: size_of::<Dense>(),
        fields: &[
            FieldDescriptor {
                offset: offset_of!(Dense, a),
                shape: <u32 as FixedLayout>::SHAPE,
            },
            FieldDescriptor {
                offset: offset_of!(Dense, b),
                shape: <u32 as FixedLayout>::SHAPE,
            },
        ],
    };
}

/// Sums leaf field sizes of a shape, recursing into nested aggregates.
pub(crate) fn total_field_bytes(shape: &TypeShape) -> usize {
    if shape.is_leaf() {
        return shape.size;
    }

    shape
        .fields
        .iter()
        .map(|field| total_field_bytes(field.shape))
        .sum()
}
