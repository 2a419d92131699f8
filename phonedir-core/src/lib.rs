//! # phonedir-core
//!
//! In-memory phone directory with a bounded top-K call ranking.
//!
//! This crate provides:
//! - `number`: Bulgarian phone number validation and normalization
//! - `entry`: directory entries with identity and ranking comparators
//! - `directory`: ordered name → entry store with insert-only semantics
//! - `cache`: generic bounded top-K cache with a valid/invalidated
//!   lifecycle
//! - `registry`: composition root keeping directory and cache consistent
//!
//! ## Design Principles
//!
//! 1. **Single-writer**: no internal locking; callers serialize access
//! 2. **Cheap common path**: O(K) ranking maintenance per mutation
//! 3. **Correct recovery path**: removals that touch the cached top-K
//!    invalidate the cache, and the next ranking read rebuilds it from
//!    one full directory scan

pub mod cache;
pub mod directory;
pub mod entry;
pub mod number;
pub mod registry;

pub use cache::{CacheError, RankFn, TopKCache};
pub use directory::{Directory, DirectoryError};
pub use entry::{cmp_by_calls, Entry};
pub use number::{parse, NormalizedNumber, NumberError};
pub use registry::{AddError, Registry, RegistryConfig, DEFAULT_TOP_K};
