//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over `Maybe<_>` as a type constructor directly.
//! [`TypeConstructor`] names the applied type and the same constructor
//! applied to another type, which is enough to state [`Functor`] and
//! [`Monad`] generically.
//!
//! [`Functor`]: super::Functor
//! [`Monad`]: super::Monad

use crate::option::Maybe;

/// A type constructor applied to some type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
///
/// # Example
///
/// ```rust
/// use maybers::option::Maybe;
/// use maybers::typeclass::TypeConstructor;
///
/// fn reapply<T: TypeConstructor>(_: &T) -> T::WithType<String>
/// where
///     T::WithType<String>: Default,
/// {
///     Default::default()
/// }
///
/// let empty: Maybe<String> = reapply(&Maybe::some(1));
/// assert_eq!(empty, Maybe::none());
/// ```
pub trait TypeConstructor {
    /// The type this constructor is applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}
