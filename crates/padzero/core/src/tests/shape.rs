// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use pastey::paste;

use crate::FixedLayout;

use super::fixtures::Gapped;

macro_rules! leaf_shape_tests {
    ($($ty:ty),* $(,)?) => {
        paste! {
            $(
                #[test]
                fn [<test_ $ty _shape_is_leaf>]() {
                    let shape = <$ty as FixedLayout>::SHAPE;

                    assert!(shape.is_leaf());
                    assert_eq!(shape.size, size_of::<$ty>());
                }
            )*
        }
    };
}

leaf_shape_tests!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char,
);

#[test]
fn test_array_of_leaves_collapses_to_leaf() {
    let shape = <[u32; 4] as FixedLayout>::SHAPE;

    assert!(shape.is_leaf());
    assert_eq!(shape.size, 16);
}

#[test]
fn test_array_of_aggregates_lists_elements() {
    let shape = <[Gapped; 2] as FixedLayout>::SHAPE;

    assert_eq!(shape.size, 16);
    assert_eq!(shape.fields.len(), 2);
    assert_eq!(shape.fields[0].offset, 0);
    assert_eq!(shape.fields[1].offset, 8);
    assert_eq!(shape.fields[0].size(), 8);
    // Element descriptors carry the element type's own shape.
    assert_eq!(shape.fields[0].shape.fields.len(), Gapped::SHAPE.fields.len());
}

#[test]
fn test_fixture_shape_matches_real_layout() {
    let shape = Gapped::SHAPE;

    assert_eq!(shape.size, size_of::<Gapped>());
    assert_eq!(shape.fields.len(), 2);
    assert_eq!(shape.fields[0].offset, 0);
    assert_eq!(shape.fields[1].offset, 4);
}
