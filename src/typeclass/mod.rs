//! Type class traits and their instances for [`Maybe`](crate::option::Maybe).
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Functor`]: mapping over container values
//! - [`Monad`]: sequencing computations with dependency
//!
//! These traits are not part of the prelude. Their methods overlap the
//! [`OptionLike`](crate::option::OptionLike) combinators, so import them
//! where generic code needs them.
//!
//! # Examples
//!
//! ```rust
//! use maybers::option::Maybe;
//! use maybers::typeclass::{Functor, Monad};
//!
//! fn double_all<M>(value: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     value.fmap(|n| n * 2)
//! }
//!
//! assert_eq!(double_all(Maybe::some(21)), Maybe::some(42));
//! assert_eq!(<Maybe<i32> as Monad>::pure(1).then(Maybe::some('a')), Maybe::some('a'));
//! ```

mod functor;
mod higher;
mod monad;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
