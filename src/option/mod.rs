//! Optional values and their combinators.
//!
//! This module provides an explicit optional value type and the combinators
//! that compose computations which may or may not produce a value:
//!
//! - [`Maybe`]: the eager option, `Maybe::Some(value)` or `Maybe::None`
//! - [`LazyOption`]: an option computed on first demand and memoized
//! - `ConcurrentLazyOption`: a thread-safe [`LazyOption`] (feature
//!   `concurrent`)
//! - [`OptionLike`]: the contract shared by all of them
//!
//! # Examples
//!
//! ## Chaining Combinators
//!
//! ```rust
//! use maybers::option::{Maybe, OptionLike};
//!
//! fn find_user(name: &str) -> Maybe<String> {
//!     if name == "foo" { Maybe::some(name.to_uppercase()) } else { Maybe::none() }
//! }
//!
//! let user = Maybe::some("foo")
//!     .flat_map(find_user)
//!     .get_or_call(|| "GUEST".to_string());
//! assert_eq!(user, "FOO");
//! ```
//!
//! ## Deferring Work
//!
//! ```rust
//! use maybers::option::{LazyOption, Maybe, OptionLike};
//!
//! let cached = Maybe::some(1);
//! let expensive = LazyOption::new(|| -> Maybe<i32> { unreachable!() });
//!
//! assert_eq!(cached.or_else(expensive).get_or_else(0), 1);
//! ```

mod contract;
mod error;
mod iter;
mod lazy_option;
mod maybe;
mod or_else;
mod type_tag;

#[cfg(feature = "concurrent")]
mod concurrent_lazy;

pub use contract::OptionLike;
pub use error::{
    INVALID_CALLBACK, NONE_HAS_NO_VALUE, OptionError, OptionErrorKind, POISONED, REENTRANT,
};
pub use iter::{IntoIter, Iter};
pub use lazy_option::{
    BoxedComputation, Computation, Dynamic, DynamicValue, LazyOption, LazyState, WithArguments,
};
pub use maybe::{Maybe, lift};
pub use or_else::OrElse;
pub use type_tag::{Iterated, RuntimeType, TypeSelector, TypeTag, TypeTree, is_one_of};

#[cfg(feature = "concurrent")]
pub use concurrent_lazy::ConcurrentLazyOption;
