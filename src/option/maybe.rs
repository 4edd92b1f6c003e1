//! The eager optional value.
//!
//! [`Maybe<T>`] is either `Maybe::Some(value)` or `Maybe::None`. `Maybe::None`
//! carries no state, so an empty option of any type can be built freely
//! wherever one is needed.
//!
//! # Examples
//!
//! ```rust
//! use maybers::option::{Maybe, OptionLike};
//!
//! let some = Maybe::some(5);
//! assert!(some.is_defined());
//! assert_eq!(some.get(), Ok(&5));
//!
//! let none: Maybe<i32> = Maybe::none();
//! assert!(none.is_empty());
//! assert_eq!(none.get().unwrap_err().to_string(), "None has no value");
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::contract::OptionLike;
use super::error::OptionError;
use super::iter::{IntoIter, Iter};
use super::type_tag::RuntimeType;

/// An optional value: either exactly one value or nothing.
///
/// The payload is never reinterpreted; `Maybe::Some(Maybe::<i32>::None)` is
/// a defined option whose value happens to be empty.
///
/// Like the standard library's [`Option`], `Maybe::None` orders before any
/// `Maybe::Some`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// The absent value.
    None,
    /// The present value.
    Some(T),
}

impl<T> Maybe<T> {
    /// Creates a defined option holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an empty option.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Creates an option that is empty when `value` equals `none_value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::Maybe;
    ///
    /// assert_eq!(Maybe::from_value(3, &0), Maybe::some(3));
    /// assert_eq!(Maybe::from_value(0, &0), Maybe::none());
    /// ```
    pub fn from_value(value: T, none_value: &T) -> Self
    where
        T: PartialEq,
    {
        if value == *none_value {
            Self::None
        } else {
            Self::Some(value)
        }
    }

    /// Looks `key` up in `map` and clones the value when present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::Maybe;
    /// use std::collections::HashMap;
    ///
    /// let ports = HashMap::from([("http", 80)]);
    /// assert_eq!(Maybe::from_map_value(&ports, "http"), Maybe::some(80));
    /// assert_eq!(Maybe::from_map_value(&ports, "ftp"), Maybe::none());
    /// ```
    pub fn from_map_value<K, Q, S>(map: &HashMap<K, T, S>, key: &Q) -> Self
    where
        T: Clone,
        K: Borrow<Q> + Hash + Eq,
        Q: Hash + Eq + ?Sized,
        S: BuildHasher,
    {
        map.get(key).cloned().into()
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Maybe::None,
        }
    }
}

impl<T> OptionLike<T> for Maybe<T> {
    #[inline]
    fn is_defined(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    #[inline]
    fn get(&self) -> Result<&T, OptionError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(OptionError::none_has_no_value()),
        }
    }

    #[inline]
    fn into_maybe(self) -> Self {
        self
    }
}

/// Turns `function` into one that returns an empty option whenever its
/// result equals `none_value`.
///
/// # Examples
///
/// ```rust
/// use maybers::option::{Maybe, lift};
///
/// let find = lift(|text: &str| text.find('x').map_or(-1, |index| index as i64), -1);
///
/// assert_eq!(find("abx"), Maybe::some(2));
/// assert_eq!(find("abc"), Maybe::none());
/// ```
pub fn lift<A, R, F>(function: F, none_value: R) -> impl Fn(A) -> Maybe<R>
where
    F: Fn(A) -> R,
    R: PartialEq,
{
    move |argument| Maybe::from_value(function(argument), &none_value)
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.into())
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Maybe<T> {
    /// Keeps the last element of the iterator, mirroring "last registered"
    /// lookups.
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        iterable.into_iter().last().into()
    }
}

impl<T: 'static> RuntimeType for Maybe<T> {}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Maybe<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Some(value) => serializer.serialize_some(value),
            Self::None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    static_assertions::assert_eq_size!(Maybe<u8>, Option<u8>);
    static_assertions::assert_eq_size!(Maybe<&u8>, &u8);

    #[rstest]
    fn none_is_the_default() {
        assert_eq!(Maybe::<String>::default(), Maybe::None);
    }

    #[rstest]
    fn none_orders_before_some() {
        assert!(Maybe::None < Maybe::Some(i32::MIN));
    }

    #[rstest]
    fn nested_none_is_still_defined() {
        let nested = Maybe::some(Maybe::<i32>::none());
        assert!(nested.is_defined());
        assert!(nested.flatten().is_empty());
    }

    #[rstest]
    fn debug_matches_std_option() {
        assert_eq!(format!("{:?}", Maybe::some(1)), format!("{:?}", Some(1)));
        assert_eq!(format!("{:?}", Maybe::<i32>::none()), "None");
        assert_eq!(
            format!("{:#?}", Maybe::some((1, "foo"))),
            format!("{:#?}", Some((1, "foo")))
        );
    }

    #[rstest]
    fn std_option_round_trips() {
        let maybe: Maybe<u8> = Some(4).into();
        let option: Option<u8> = maybe.into();
        assert_eq!(option, Some(4));
    }

    #[rstest]
    fn from_iterator_keeps_last_element() {
        let last: Maybe<&str> = ["a", "b", "c"].into_iter().collect();
        assert_eq!(last, Maybe::some("c"));

        let empty: Maybe<&str> = std::iter::empty().collect();
        assert_eq!(empty, Maybe::none());
    }

    #[rstest]
    fn as_mut_updates_in_place() {
        let mut maybe = Maybe::some(1);
        if let Maybe::Some(value) = maybe.as_mut() {
            *value += 1;
        }
        assert_eq!(maybe, Maybe::some(2));
    }
}
