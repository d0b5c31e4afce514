// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process-wide memoization of compiled procedures.
//!
//! Layout is a compile-time property of a type, so a procedure is built at
//! most effectively once per type and cached for the process lifetime.
//! Entries are never mutated after publication and never evicted.

use std::any::TypeId;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::layout::analyze;
use crate::procedure::ZeroProcedure;
use crate::shape::FixedLayout;

/// `None` is the "no padding" sentinel: zeroing that type is a no-op.
type ProcedureMap = HashMap<TypeId, Option<&'static ZeroProcedure>>;

static PROCEDURES: OnceLock<RwLock<ProcedureMap>> = OnceLock::new();

fn procedures() -> &'static RwLock<ProcedureMap> {
    PROCEDURES.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Looks up or builds the compiled zeroing procedure for `T`.
///
/// Returns `None` when `T` has no padding, distinguishing "nothing to do"
/// from any unsupported-type condition (unsupported types cannot implement
/// [`FixedLayout`] in the first place).
///
/// Safe for unbounded concurrent callers. Threads racing on the same miss
/// may analyze and build redundantly; the first publish wins and the
/// results are identical, so which one survives is unobservable. Entries
/// are leaked into the cache and live for the process lifetime.
pub fn procedure_for<T: FixedLayout>() -> Option<&'static ZeroProcedure> {
    let key = TypeId::of::<T>();

    if let Some(&cached) = procedures()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        return cached;
    }

    // Miss: analyze and build outside the write lock so the critical
    // section stays a map insert.
    let built = ZeroProcedure::build(&analyze(T::SHAPE).regions);

    let mut map = procedures().write().unwrap_or_else(PoisonError::into_inner);
    match map.entry(key) {
        // Another thread published first; its result is identical.
        Entry::Occupied(entry) => *entry.get(),
        Entry::Vacant(entry) => {
            let published = built.map(|procedure| &*Box::leak(Box::new(procedure)));
            *entry.insert(published)
        }
    }
}
