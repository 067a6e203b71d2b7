//! Stack growth for deep trees.
//!
//! Flattening, layout, comparison and teardown of instances recurse once per
//! nesting level. Long right-leaning chains would otherwise exhaust the
//! thread stack.
//!
//! - **Native targets**: `stacker` grows the stack on demand
//! - **WASM targets**: passthrough

/// Remaining stack below which we grow.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment.
#[cfg(not(target_arch = "wasm32"))]
const STACK_GROWTH: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_GROWTH, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
