//! Shared domain types of the BPP maintenance board.
//!
//! Kept free of any web dependency so the types can be unit-tested natively
//! and reused by the wasm frontend.

pub mod domain;
pub mod enums;
