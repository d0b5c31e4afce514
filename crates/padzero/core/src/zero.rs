// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Applying compiled procedures to instances and contiguous runs.
//!
//! These are the public entry points. Both resolve the cached procedure
//! (building it on first use of the type), write zero bytes only inside
//! padding regions, and leave every field byte untouched.

use crate::cache::procedure_for;
use crate::shape::FixedLayout;

/// Zeroes all padding bytes of one instance in place.
///
/// Field values are preserved; after the call, two instances with equal
/// field values have byte-identical memory images. A type with no padding
/// is a guaranteed no-op. Idempotent.
///
/// # Example
///
/// ```rust
/// use padzero_core::zero_padding;
///
/// let mut value: u64 = 42;
/// zero_padding(&mut value); // primitives have no padding; no-op
/// assert_eq!(value, 42);
/// ```
pub fn zero_padding<T: FixedLayout>(value: &mut T) {
    if let Some(procedure) = procedure_for::<T>() {
        // SAFETY: `value` is a valid, writable instance of `T`, and the
        // procedure only writes inside padding regions of `T::SHAPE`.
        unsafe { procedure.apply((value as *mut T).cast::<u8>()) }
    }
}

/// Zeroes all padding bytes of every element of a contiguous run in place.
///
/// The procedure is resolved once and applied per element at stride
/// `size_of::<T>()`, amortizing the cache lookup across the whole run.
/// An empty slice is a valid no-op, never an error.
pub fn zero_padding_slice<T: FixedLayout>(values: &mut [T]) {
    if values.is_empty() {
        return;
    }

    let Some(procedure) = procedure_for::<T>() else {
        return;
    };

    let stride = core::mem::size_of::<T>();
    let mut base = values.as_mut_ptr().cast::<u8>();

    for _ in 0..values.len() {
        // SAFETY: `base` walks the elements of a valid `&mut [T]`; each
        // application writes only inside that element's padding regions.
        // The final `add` lands one past the end, which is allowed.
        unsafe {
            procedure.apply(base);
            base = base.add(stride);
        }
    }
}

/// Method-call sugar for sequences.
///
/// Pure delegation to [`zero_padding_slice`], so the operation composes as
/// a trailing call on a sequence value.
///
/// # Example
///
/// ```rust
/// use padzero_core::PadZeroExt;
///
/// let mut values = [1u32, 2, 3];
/// values.zero_padding();
/// assert_eq!(values, [1, 2, 3]);
/// ```
pub trait PadZeroExt {
    /// Zeroes padding in every element, in place.
    fn zero_padding(&mut self);
}

impl<T: FixedLayout> PadZeroExt for [T] {
    #[inline(always)]
    fn zero_padding(&mut self) {
        zero_padding_slice(self);
    }
}
