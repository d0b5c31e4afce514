// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Helpers for inspecting instance memory in tests.
//!
//! Only built under `cfg(test)` or the `test-utils` feature; test suites in
//! dependent crates enable the feature through their dev-dependency.

use core::mem::MaybeUninit;

use crate::shape::FixedLayout;

/// Views an instance's full memory, padding included, as bytes.
///
/// # Safety
///
/// Every byte of `value`, padding included, must have been initialized —
/// e.g. the value came from [`garbage_filled`], or its padding was already
/// zeroed. Viewing uninitialized padding as `u8` is undefined behavior.
pub unsafe fn bytes_of<T: FixedLayout>(value: &T) -> &[u8] {
    // SAFETY: `value` is a valid instance and the caller guarantees all
    // of its bytes are initialized.
    unsafe { core::slice::from_raw_parts((value as *const T).cast::<u8>(), size_of::<T>()) }
}

/// Copies an instance's full memory image into a `Vec<u8>`.
///
/// # Safety
///
/// Same contract as [`bytes_of`].
pub unsafe fn image_of<T: FixedLayout>(value: &T) -> Vec<u8> {
    unsafe { bytes_of(value) }.to_vec()
}

/// Returns an instance whose entire memory, padding included, is `0xFF`.
///
/// Lets tests prove that zeroization cleared padding (rather than the
/// padding having happened to be zero already) and that field bytes were
/// left alone.
///
/// # Safety
///
/// The all-ones bit pattern must be a valid value of every field of `T`
/// (true for integer and float fields; not true for `bool`, `char`, or
/// enum fields).
pub unsafe fn garbage_filled<T: FixedLayout>() -> T {
    let mut value = MaybeUninit::<T>::uninit();

    // SAFETY: the buffer is fully written before `assume_init`, and the
    // caller guarantees all-ones is a valid bit pattern for `T`'s fields.
    unsafe {
        core::ptr::write_bytes(value.as_mut_ptr().cast::<u8>(), 0xFF, size_of::<T>());
        value.assume_init()
    }
}

/// Overwrites `len` bytes at `offset` within an instance with `byte`.
///
/// Used to plant garbage in a specific padding region of an already
/// constructed value when a whole-instance fill would be invalid (e.g.
/// the type carries enum or `bool` fields).
///
/// # Safety
///
/// `offset + len` must not exceed `size_of::<T>()`, and the written range
/// must be padding of `T` — overwriting field bytes with arbitrary values
/// may produce an invalid value.
pub unsafe fn poke_bytes<T: FixedLayout>(value: &mut T, offset: usize, len: usize, byte: u8) {
    debug_assert!(offset + len <= size_of::<T>());

    // SAFETY: caller guarantees the range lies within the instance.
    unsafe {
        core::ptr::write_bytes((value as *mut T).cast::<u8>().add(offset), byte, len);
    }
}
