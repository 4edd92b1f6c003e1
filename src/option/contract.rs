//! The shared contract of every optional value.
//!
//! [`OptionLike`] is implemented by [`Maybe`], [`LazyOption`] and
//! `ConcurrentLazyOption`. Implementors provide three primitives:
//!
//! - [`is_defined`](OptionLike::is_defined)
//! - [`get`](OptionLike::get)
//! - [`into_maybe`](OptionLike::into_maybe)
//!
//! Every combinator is a provided method written only in terms of those
//! primitives, so a lazy option resolves on the first combinator call and
//! behaves exactly like the option it produced afterwards.
//!
//! [`LazyOption`]: super::LazyOption
//!
//! # Examples
//!
//! ```rust
//! use maybers::option::{Maybe, OptionLike};
//!
//! let length = Maybe::some("hello")
//!     .filter(|text| !text.is_empty())
//!     .map(str::len)
//!     .get_or_else(0);
//! assert_eq!(length, 5);
//! ```

use super::error::OptionError;
use super::iter::Iter;
use super::maybe::Maybe;
use super::or_else::OrElse;
use super::type_tag::{RuntimeType, TypeSelector, TypeTag, is_one_of};

/// Returns the contained value when `option` is defined.
///
/// Goes through `is_defined` first so that a lazy option that failed to
/// resolve panics instead of silently looking empty.
fn defined_value<T, O: OptionLike<T>>(option: &O) -> Option<&T> {
    if option.is_defined() {
        option.get().ok()
    } else {
        None
    }
}

/// Keeps `option` when `keep` holds, otherwise returns an empty option.
fn keep_if<T, O: OptionLike<T>>(option: O, keep: bool) -> Maybe<T> {
    if keep { option.into_maybe() } else { Maybe::None }
}

/// A container holding either exactly one value or nothing.
///
/// # Laws
///
/// For every implementor:
///
/// ```text
/// option.is_empty() == !option.is_defined()
/// option.is_defined() == option.get().is_ok()
/// option.into_maybe().is_defined() == option.is_defined()
/// ```
///
/// # Examples
///
/// ```rust
/// use maybers::option::{Maybe, OptionLike};
///
/// fn describe<O: OptionLike<i32>>(option: O) -> String {
///     option
///         .map(|value| format!("got {value}"))
///         .get_or_call(|| "nothing".to_string())
/// }
///
/// assert_eq!(describe(Maybe::some(1)), "got 1");
/// assert_eq!(describe(Maybe::none()), "nothing");
/// ```
pub trait OptionLike<T>: Sized {
    // =========================================================================
    // Primitives
    // =========================================================================

    /// Returns `true` if the option holds a value.
    fn is_defined(&self) -> bool;

    /// Returns a reference to the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::UnsupportedOperation`] with the message
    /// `None has no value` when the option is empty.
    fn get(&self) -> Result<&T, OptionError>;

    /// Converts the option into its eager form.
    fn into_maybe(self) -> Maybe<T>;

    // =========================================================================
    // Observers
    // =========================================================================

    /// Returns `true` if the option holds no value.
    #[inline]
    fn is_empty(&self) -> bool {
        !self.is_defined()
    }

    /// Moves the contained value out.
    ///
    /// # Errors
    ///
    /// Returns the same error as [`get`](OptionLike::get) when empty.
    fn into_inner(self) -> Result<T, OptionError> {
        match self.into_maybe() {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(OptionError::none_has_no_value()),
        }
    }

    /// Converts the option into a standard library [`Option`].
    fn into_option(self) -> Option<T> {
        self.into_maybe().into()
    }

    /// Returns the contained value or `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{Maybe, OptionLike};
    ///
    /// assert_eq!(Maybe::some(1).get_or_else(2), 1);
    /// assert_eq!(Maybe::none().get_or_else(2), 2);
    /// ```
    fn get_or_else(self, default: T) -> T {
        match self.into_maybe() {
            Maybe::Some(value) => value,
            Maybe::None => default,
        }
    }

    /// Returns the contained value or the result of `producer`.
    ///
    /// `producer` is only called when the option is empty.
    fn get_or_call<F>(self, producer: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.into_maybe() {
            Maybe::Some(value) => value,
            Maybe::None => producer(),
        }
    }

    /// Returns the contained value or hands `error` back unchanged.
    ///
    /// # Errors
    ///
    /// Returns `error` when the option is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{Maybe, OptionLike};
    ///
    /// let missing: Maybe<u32> = Maybe::none();
    /// assert_eq!(missing.get_or_throw("not found"), Err("not found"));
    /// ```
    fn get_or_throw<E>(self, error: E) -> Result<T, E> {
        match self.into_maybe() {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(error),
        }
    }

    /// Returns an iterator over the contained value, if any.
    fn iter(&self) -> Iter<'_, T> {
        Iter::new(defined_value(self))
    }

    // =========================================================================
    // Alternatives and side effects
    // =========================================================================

    /// Returns this option if it is defined, otherwise `alternative`.
    ///
    /// The alternative is returned as is: a lazy `alternative` stays
    /// unresolved until the result is observed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{LazyOption, Maybe, OptionLike};
    ///
    /// let fallback = LazyOption::new(|| -> Maybe<i32> { panic!("not needed") });
    /// assert_eq!(Maybe::some(1).or_else(fallback), Maybe::some(1));
    ///
    /// let deferred = Maybe::<i32>::none().or_else(LazyOption::new(|| Maybe::some(2)));
    /// assert!(deferred.is_alternative());
    /// assert_eq!(deferred.get_or_else(0), 2);
    /// ```
    fn or_else<O>(self, alternative: O) -> OrElse<T, Self, O>
    where
        O: OptionLike<T>,
    {
        if self.is_defined() {
            OrElse::receiver(self)
        } else {
            OrElse::alternative(alternative)
        }
    }

    /// Returns this option if it is defined, otherwise the option built by
    /// `producer`.
    ///
    /// `producer` is only called when this option is empty; the option it
    /// builds is returned unresolved.
    fn or_else_with<O, F>(self, producer: F) -> OrElse<T, Self, O>
    where
        O: OptionLike<T>,
        F: FnOnce() -> O,
    {
        if self.is_defined() {
            OrElse::receiver(self)
        } else {
            OrElse::alternative(producer())
        }
    }

    /// Calls `consumer` with the contained value, if any.
    fn if_defined<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = defined_value(self) {
            consumer(value);
        }
    }

    /// Calls `consumer` with the contained value, if any, and returns the
    /// option itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{Maybe, OptionLike};
    ///
    /// let mut seen = Vec::new();
    /// let option = Maybe::some(3).for_all(|value| seen.push(*value));
    ///
    /// assert_eq!(option, Maybe::some(3));
    /// assert_eq!(seen, vec![3]);
    /// ```
    fn for_all<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&T),
    {
        self.if_defined(consumer);
        self
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies `function` to the contained value.
    ///
    /// `function` is not called on an empty option.
    fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.into_maybe() {
            Maybe::Some(value) => Maybe::Some(function(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// Applies `function` to the contained value and returns its result as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{Maybe, OptionLike};
    ///
    /// let half = |value: i32| if value % 2 == 0 { Maybe::some(value / 2) } else { Maybe::none() };
    ///
    /// assert_eq!(Maybe::some(4).flat_map(half), Maybe::some(2));
    /// assert_eq!(Maybe::some(3).flat_map(half), Maybe::none());
    /// ```
    fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.into_maybe() {
            Maybe::Some(value) => function(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Keeps the option if its value satisfies `predicate`.
    ///
    /// `predicate` is not called on an empty option.
    fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        let keep = defined_value(&self).is_some_and(predicate);
        keep_if(self, keep)
    }

    /// Keeps the option if its value does not satisfy `predicate`.
    ///
    /// `predicate` is not called on an empty option.
    fn filter_not<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        let keep = defined_value(&self).is_some_and(|value| !predicate(value));
        keep_if(self, keep)
    }

    /// Keeps the option if its value is an instance of the tagged type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{Maybe, OptionLike, TypeTag};
    ///
    /// let text = Maybe::some("foo".to_string());
    /// assert!(text.clone().filter_is_a(&TypeTag::of::<String>()).is_defined());
    /// assert!(text.filter_is_a(&TypeTag::of::<i32>()).is_empty());
    /// ```
    fn filter_is_a(self, tag: &TypeTag) -> Maybe<T>
    where
        T: RuntimeType,
    {
        let keep = defined_value(&self).is_some_and(|value| value.is_a(tag));
        keep_if(self, keep)
    }

    /// Keeps the option if its value is an instance of any type named by
    /// `selector`.
    ///
    /// The selector may be a single tag, a tuple of selectors, or slices,
    /// arrays and vectors of selectors nested to any depth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{Maybe, OptionLike, TypeTag};
    /// use maybers::type_tags;
    ///
    /// let number = Maybe::some(7_u8);
    /// assert!(number.filter_is_one_of(&[type_tags![String], type_tags![u8]]).is_defined());
    /// assert!(number.filter_is_one_of(&(TypeTag::of::<i8>(), type_tags![i16])).is_empty());
    /// ```
    fn filter_is_one_of<S>(self, selector: &S) -> Maybe<T>
    where
        T: RuntimeType,
        S: TypeSelector + ?Sized,
    {
        let keep = defined_value(&self).is_some_and(|value| is_one_of(value, selector));
        keep_if(self, keep)
    }

    /// Keeps the option if its value equals `value`.
    fn select(self, value: &T) -> Maybe<T>
    where
        T: PartialEq,
    {
        let keep = defined_value(&self).is_some_and(|current| current == value);
        keep_if(self, keep)
    }

    /// Keeps the option unless its value equals `value`.
    ///
    /// Passing `None` as the target never rejects: the option is returned
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{Maybe, OptionLike};
    ///
    /// let option = Maybe::some("foo");
    /// assert_eq!(option.reject(&"bar"), Maybe::some("foo"));
    /// assert_eq!(option.reject(&"foo"), Maybe::none());
    /// assert_eq!(option.reject(None::<&&str>), Maybe::some("foo"));
    /// ```
    fn reject<'a, V>(self, value: V) -> Maybe<T>
    where
        T: PartialEq + 'a,
        V: Into<Option<&'a T>>,
    {
        let Some(target) = value.into() else {
            return self.into_maybe();
        };
        let keep = defined_value(&self).is_some_and(|current| current != target);
        keep_if(self, keep)
    }

    // =========================================================================
    // Folds
    // =========================================================================

    /// Combines `initial` with the contained value, value on the right.
    ///
    /// Returns `initial` unchanged when empty.
    fn fold_left<B, F>(self, initial: B, function: F) -> B
    where
        F: FnOnce(B, T) -> B,
    {
        match self.into_maybe() {
            Maybe::Some(value) => function(initial, value),
            Maybe::None => initial,
        }
    }

    /// Combines the contained value with `initial`, value on the left.
    ///
    /// Returns `initial` unchanged when empty.
    fn fold_right<B, F>(self, initial: B, function: F) -> B
    where
        F: FnOnce(T, B) -> B,
    {
        match self.into_maybe() {
            Maybe::Some(value) => function(value, initial),
            Maybe::None => initial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    /// A minimal implementor that only supplies the primitives.
    struct MinimalOption {
        value: Option<i32>,
        observed: Cell<usize>,
    }

    impl MinimalOption {
        fn new(value: Option<i32>) -> Self {
            Self {
                value,
                observed: Cell::new(0),
            }
        }
    }

    impl OptionLike<i32> for MinimalOption {
        fn is_defined(&self) -> bool {
            self.observed.set(self.observed.get() + 1);
            self.value.is_some()
        }

        fn get(&self) -> Result<&i32, OptionError> {
            self.value.as_ref().ok_or_else(OptionError::none_has_no_value)
        }

        fn into_maybe(self) -> Maybe<i32> {
            self.value.into()
        }
    }

    #[rstest]
    #[case(Some(1), false)]
    #[case(None, true)]
    fn is_empty_negates_is_defined(#[case] value: Option<i32>, #[case] expected: bool) {
        assert_eq!(MinimalOption::new(value).is_empty(), expected);
    }

    #[rstest]
    fn derived_combinators_work_from_primitives() {
        assert_eq!(MinimalOption::new(Some(2)).map(|value| value * 10), Maybe::Some(20));
        assert_eq!(MinimalOption::new(Some(2)).filter(|value| *value > 5), Maybe::None);
        assert_eq!(MinimalOption::new(None).get_or_else(9), 9);
        assert_eq!(MinimalOption::new(Some(5)).fold_left(1, |a, b| a + b), 6);
    }

    #[rstest]
    fn for_all_returns_the_receiver() {
        let minimal = MinimalOption::new(Some(4)).for_all(|_| ());
        assert_eq!(minimal.observed.get(), 1);
        assert_eq!(minimal.value, Some(4));
    }

    #[rstest]
    fn iter_on_empty_is_empty() {
        assert_eq!(MinimalOption::new(None).iter().count(), 0);
    }
}
