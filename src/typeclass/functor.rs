//! Functor type class - mapping over the contents of a container.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybers::option::Maybe;
//! use maybers::typeclass::Functor;
//!
//! let transformed = Maybe::some(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::some("5".to_string()));
//!
//! let empty: Maybe<i32> = Maybe::none();
//! assert_eq!(empty.fmap(|n| n.to_string()), Maybe::none());
//! ```

use super::higher::TypeConstructor;
use crate::option::Maybe;

/// A type class for types whose contents can be mapped over.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the contained value(s).
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference of the contained value(s).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::Maybe;
    /// use maybers::typeclass::Functor;
    ///
    /// let text = Maybe::some("hello".to_string());
    /// assert_eq!(text.fmap_ref(String::len), Maybe::some(5));
    /// assert_eq!(text, Maybe::some("hello".to_string()));
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the contained value with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the contained value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().fmap(function)
    }
}
