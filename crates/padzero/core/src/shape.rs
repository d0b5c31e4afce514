// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Static layout descriptions for fixed-layout types.
//!
//! Every type participating in padding zeroization exposes a [`TypeShape`]:
//! its total byte size plus one [`FieldDescriptor`] per declared field.
//! Leaf types (primitives and fieldless enums) have an empty field list.
//! Shapes are `'static` data built entirely at compile time, so layout
//! lookup never walks runtime metadata.

/// Static description of one type's declared memory layout.
///
/// `fields` lists every declared field of the type. Leaf types carry an
/// empty list; so does a zero-field aggregate, which correctly yields no
/// padding regions during analysis.
#[derive(Debug)]
pub struct TypeShape {
    /// Total size of the type in bytes, `size_of::<T>()`.
    pub size: usize,
    /// Descriptors for every declared field, in declaration order.
    pub fields: &'static [FieldDescriptor],
}

impl TypeShape {
    /// Returns `true` if this shape has no fields to recurse into.
    ///
    /// Leaves are primitives, enumerations, and zero-field aggregates;
    /// none of them can contain padding.
    #[inline(always)]
    pub const fn is_leaf(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One field within an enclosing [`TypeShape`].
///
/// `offset` is relative to the immediate enclosing type; the analyzer
/// translates nested offsets to absolute positions while recursing.
#[derive(Clone, Copy, Debug)]
pub struct FieldDescriptor {
    /// Byte offset of the field within its enclosing type.
    pub offset: usize,
    /// Shape of the field's own type (size, and fields when it is a
    /// nested aggregate).
    pub shape: &'static TypeShape,
}

impl FieldDescriptor {
    /// Byte size of the field.
    #[inline(always)]
    pub const fn size(&self) -> usize {
        self.shape.size
    }
}

/// Types with a fixed, sequential, offset-queryable memory layout.
///
/// Implemented for all primitives, for arrays of fixed-layout types, and
/// via `#[derive(PadZero)]` for `#[repr(C)]` structs and fieldless enums
/// with an explicit primitive representation.
///
/// # Safety
///
/// `SHAPE` must describe the implementing type's actual memory layout
/// exactly: `SHAPE.size == size_of::<Self>()`, every declared field must
/// appear with its true offset and shape, and every byte not covered by a
/// field must be alignment padding that can be overwritten with zero
/// without invalidating the value. Types with overlapping (union-style)
/// layout, reference-bearing fields, or compiler-chosen field order must
/// not implement this trait.
pub unsafe trait FixedLayout: Sized + 'static {
    /// The static layout description for this type.
    const SHAPE: &'static TypeShape;
}

macro_rules! impl_fixed_layout_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            // SAFETY: primitives have no fields and no padding; any byte
            // of the value is field storage.
            unsafe impl FixedLayout for $ty {
                const SHAPE: &'static TypeShape = &TypeShape {
                    size: core::mem::size_of::<$ty>(),
                    fields: &[],
                };
            }
        )*
    };
}

impl_fixed_layout_leaf!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char,
);

struct ArrayFields<T, const N: usize>(core::marker::PhantomData<T>);

impl<T: FixedLayout, const N: usize> ArrayFields<T, N> {
    const FIELDS: [FieldDescriptor; N] = {
        let mut fields = [FieldDescriptor {
            offset: 0,
            shape: T::SHAPE,
        }; N];

        let mut i = 0;
        while i < N {
            fields[i].offset = i * core::mem::size_of::<T>();
            i += 1;
        }

        fields
    };
}

// SAFETY: arrays place element `i` at offset `i * size_of::<T>()` with no
// gaps between elements; all padding lives inside the elements themselves.
// Arrays of leaves therefore contain no padding at all and collapse to a
// leaf shape instead of carrying N redundant descriptors.
unsafe impl<T: FixedLayout, const N: usize> FixedLayout for [T; N] {
    const SHAPE: &'static TypeShape = &TypeShape {
        size: core::mem::size_of::<[T; N]>(),
        fields: if T::SHAPE.is_leaf() {
            &[]
        } else {
            &ArrayFields::<T, N>::FIELDS
        },
    };
}
