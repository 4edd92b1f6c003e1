//! The result of [`OptionLike::or_else`].
//!
//! [`OrElse`] holds either the defined receiver or the alternative exactly as
//! it was passed in. A lazy alternative therefore stays unresolved until the
//! result itself is observed.
//!
//! # Examples
//!
//! ```rust
//! use maybers::option::{LazyOption, Maybe, OptionLike};
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let fallback = LazyOption::new(|| {
//!     calls.set(calls.get() + 1);
//!     Maybe::some("fallback")
//! });
//!
//! let result = Maybe::<&str>::none().or_else(fallback);
//! assert_eq!(calls.get(), 0);
//! assert_eq!(result.get(), Ok(&"fallback"));
//! assert_eq!(calls.get(), 1);
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::contract::OptionLike;
use super::error::OptionError;
use super::iter::{IntoIter, Iter};
use super::maybe::Maybe;

#[derive(Clone)]
enum Branch<P, A> {
    Receiver(P),
    Alternative(A),
}

/// Either the defined receiver of `or_else` or its untouched alternative.
///
/// Implements [`OptionLike`], so it chains like any other option and
/// compares equal to the [`Maybe`] it resolves to.
pub struct OrElse<T, P, A> {
    branch: Branch<P, A>,
    marker: PhantomData<fn() -> T>,
}

impl<T, P, A> OrElse<T, P, A> {
    pub(crate) const fn receiver(receiver: P) -> Self {
        Self {
            branch: Branch::Receiver(receiver),
            marker: PhantomData,
        }
    }

    pub(crate) const fn alternative(alternative: A) -> Self {
        Self {
            branch: Branch::Alternative(alternative),
            marker: PhantomData,
        }
    }

    /// Returns `true` if the alternative was chosen.
    ///
    /// Choosing the alternative does not resolve it.
    pub const fn is_alternative(&self) -> bool {
        matches!(self.branch, Branch::Alternative(_))
    }
}

impl<T, P, A> OptionLike<T> for OrElse<T, P, A>
where
    P: OptionLike<T>,
    A: OptionLike<T>,
{
    #[inline]
    fn is_defined(&self) -> bool {
        match &self.branch {
            Branch::Receiver(receiver) => receiver.is_defined(),
            Branch::Alternative(alternative) => alternative.is_defined(),
        }
    }

    #[inline]
    fn get(&self) -> Result<&T, OptionError> {
        match &self.branch {
            Branch::Receiver(receiver) => receiver.get(),
            Branch::Alternative(alternative) => alternative.get(),
        }
    }

    fn into_maybe(self) -> Maybe<T> {
        match self.branch {
            Branch::Receiver(receiver) => receiver.into_maybe(),
            Branch::Alternative(alternative) => alternative.into_maybe(),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T, P, A> PartialEq<Maybe<T>> for OrElse<T, P, A>
where
    T: PartialEq,
    P: OptionLike<T>,
    A: OptionLike<T>,
{
    fn eq(&self, other: &Maybe<T>) -> bool {
        self.iter().next() == other.iter().next()
    }
}

impl<T, P, A> IntoIterator for OrElse<T, P, A>
where
    P: OptionLike<T>,
    A: OptionLike<T>,
{
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_maybe().into_iter()
    }
}

impl<'a, T, P, A> IntoIterator for &'a OrElse<T, P, A>
where
    P: OptionLike<T>,
    A: OptionLike<T>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, P: Clone, A: Clone> Clone for OrElse<T, P, A> {
    fn clone(&self) -> Self {
        Self {
            branch: self.branch.clone(),
            marker: PhantomData,
        }
    }
}

impl<T, P: fmt::Debug, A: fmt::Debug> fmt::Debug for OrElse<T, P, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.branch {
            Branch::Receiver(receiver) => formatter.debug_tuple("Receiver").field(receiver).finish(),
            Branch::Alternative(alternative) => {
                formatter.debug_tuple("Alternative").field(alternative).finish()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::{DynamicValue, LazyOption};
    use rstest::rstest;

    #[rstest]
    fn defined_receiver_is_kept() {
        let result = Maybe::some(1).or_else(Maybe::some(2));
        assert!(!result.is_alternative());
        assert_eq!(result.into_maybe(), Maybe::some(1));
    }

    #[rstest]
    fn lazy_alternative_is_held_unresolved() {
        let result = Maybe::<i32>::none().or_else(LazyOption::new(|| Maybe::some(2)));
        assert!(result.is_alternative());
        assert_eq!(format!("{result:?}"), "Alternative(LazyOption(\"<unresolved>\"))");

        assert_eq!(result.get(), Ok(&2));
        assert_eq!(format!("{result:?}"), "Alternative(LazyOption(Some(2)))");
    }

    #[rstest]
    fn failed_alternative_surfaces_on_observation() {
        let failing: LazyOption<i32, _> =
            LazyOption::dynamic(|| Box::new(()) as Box<dyn DynamicValue>);
        let result = Maybe::<i32>::none().or_else(failing);
        assert!(result.get().is_err());
    }

    #[rstest]
    fn compares_with_the_resolved_option() {
        let empty: Maybe<u8> = Maybe::none();
        assert_eq!(empty.or_else(Maybe::none()), Maybe::none());
        assert_ne!(empty.or_else(Maybe::some(1)), Maybe::none());
    }
}
