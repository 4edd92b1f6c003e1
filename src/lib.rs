//! # maybers
//!
//! An explicit optional value type for Rust with lazy, memoized variants
//! and composable combinators.
//!
//! ## Overview
//!
//! - **Options**: [`Maybe`](option::Maybe), the eager option, and
//!   [`LazyOption`](option::LazyOption), computed on first demand
//! - **Contract**: [`OptionLike`](option::OptionLike) provides `map`,
//!   `flat_map`, `filter`, `fold_left`, `or_else` and the rest for every
//!   variant
//! - **Type Classes**: `Functor` and `Monad` instances for `Maybe`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and instances (Functor, Monad)
//! - `concurrent`: `ConcurrentLazyOption`, a thread-safe lazy option
//! - `serde`: Serialization of `Maybe` as a standard `Option`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybers::prelude::*;
//!
//! let greeting = Maybe::some("world")
//!     .filter(|name| !name.is_empty())
//!     .map(|name| format!("hello, {name}"))
//!     .get_or_else("hello, nobody".to_string());
//! assert_eq!(greeting, "hello, world");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the option types and the [`OptionLike`](crate::option::OptionLike)
/// contract. The type class traits are not included: `Monad::flat_map` and
/// `OptionLike::flat_map` would both apply to `Maybe`.
///
/// # Usage
///
/// ```rust
/// use maybers::prelude::*;
/// ```
pub mod prelude {
    pub use crate::option::*;
}

pub mod option;

#[cfg(feature = "typeclass")]
pub mod typeclass;
