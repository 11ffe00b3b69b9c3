// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage collaborator for the hireflow recruitment portal.
//!
//! Transitions themselves are pure functions in the core crate; this crate
//! owns what purity cannot: ID allocation, serialized commits against the
//! latest committed state, and the atomic candidate-plus-record write the
//! deployment email requires. [`MemoryStore`] is the in-memory reference
//! implementation of the [`Store`] contract.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod memory;
mod store;

#[cfg(test)]
mod tests;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{CandidateCommitted, Store};
