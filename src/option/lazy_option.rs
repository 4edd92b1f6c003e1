//! Lazily computed optional values with memoization.
//!
//! [`LazyOption<T, C>`] holds a deferred computation that produces a
//! [`Maybe<T>`]. The computation runs on the first observation (`get`,
//! `is_defined`, `is_empty` or any combinator) and its result is cached for
//! the lifetime of the lazy option.
//!
//! # State Machine
//!
//! ```text
//! Unresolved --first observation--> Defined | Empty | Failed
//! ```
//!
//! The resolved states are terminal. `Failed` is reached when a dynamically
//! typed computation returns something other than an option, or when the
//! computation panicked; the failure is memoized like any other result.
//!
//! # Thread Safety
//!
//! `LazyOption` is `Send` but not `Sync`. Use `ConcurrentLazyOption` to share
//! a lazy option between threads.
//!
//! # Examples
//!
//! ```rust
//! use maybers::option::{LazyOption, Maybe, OptionLike};
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let lazy = LazyOption::new(|| {
//!     calls.set(calls.get() + 1);
//!     Maybe::some("foo")
//! });
//!
//! assert_eq!(calls.get(), 0);
//! assert!(lazy.is_defined());
//! assert_eq!(lazy.get(), Ok(&"foo"));
//! assert_eq!(lazy.map(str::len), Maybe::some(3));
//! assert_eq!(calls.get(), 1);
//! ```

use std::any::Any;
use std::cell::{Cell, OnceCell};
use std::fmt;

use super::contract::OptionLike;
use super::error::OptionError;
use super::iter::{IntoIter, Iter};
use super::maybe::Maybe;

// =============================================================================
// Computations
// =============================================================================

/// A deferred computation that produces an option.
///
/// Implemented for every `FnOnce() -> Maybe<T>`, for [`WithArguments`] and
/// for [`Dynamic`].
pub trait Computation<T> {
    /// Runs the computation.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::UnsupportedOperation`] when the computation
    /// cannot produce an option.
    fn compute(self) -> Result<Maybe<T>, OptionError>;
}

impl<T, F> Computation<T> for F
where
    F: FnOnce() -> Maybe<T>,
{
    #[inline]
    fn compute(self) -> Result<Maybe<T>, OptionError> {
        Ok(self())
    }
}

/// A one-argument function paired with the argument it will be called with.
#[derive(Debug, Clone)]
pub struct WithArguments<F, A> {
    function: F,
    arguments: A,
}

impl<F, A> WithArguments<F, A> {
    /// Pairs `function` with `arguments`.
    pub const fn new(function: F, arguments: A) -> Self {
        Self {
            function,
            arguments,
        }
    }
}

impl<T, F, A> Computation<T> for WithArguments<F, A>
where
    F: FnOnce(A) -> Maybe<T>,
{
    fn compute(self) -> Result<Maybe<T>, OptionError> {
        Ok((self.function)(self.arguments))
    }
}

/// A value whose concrete type is only known at runtime.
///
/// Implemented for every `'static` type.
pub trait DynamicValue: Any {
    /// Returns the name of the value's concrete type.
    fn value_type_name(&self) -> &'static str;

    /// Erases the value into a `Box<dyn Any>` for downcasting.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<V: Any> DynamicValue for V {
    fn value_type_name(&self) -> &'static str {
        std::any::type_name::<V>()
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A computation whose result type is checked when it runs.
///
/// Resolution fails with `Expected instance of Option. Got: <type>` when the
/// returned value is not a `Maybe<T>`.
pub struct Dynamic<F>(F);

impl<F> Dynamic<F> {
    /// Wraps `function`.
    pub const fn new(function: F) -> Self {
        Self(function)
    }
}

impl<T, F> Computation<T> for Dynamic<F>
where
    T: 'static,
    F: FnOnce() -> Box<dyn DynamicValue>,
{
    fn compute(self) -> Result<Maybe<T>, OptionError> {
        let value = (self.0)();
        let type_name = (*value).value_type_name();
        value
            .into_any()
            .downcast::<Maybe<T>>()
            .map(|maybe| *maybe)
            .map_err(|_| OptionError::unexpected_result(type_name))
    }
}

/// A type-erased computation, as accepted by [`LazyOption::from_any`].
pub type BoxedComputation<T> = Box<dyn FnOnce() -> Maybe<T>>;

// =============================================================================
// LazyState
// =============================================================================

/// The observable state of a lazy option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LazyState {
    /// The computation has not run yet.
    Unresolved,
    /// The computation produced a defined option.
    Defined,
    /// The computation produced an empty option.
    Empty,
    /// The computation failed; every observation reports the same error.
    Failed,
}

impl LazyState {
    pub(crate) const fn of<T>(resolved: Option<&Result<Maybe<T>, OptionError>>) -> Self {
        match resolved {
            None => Self::Unresolved,
            Some(Ok(Maybe::Some(_))) => Self::Defined,
            Some(Ok(Maybe::None)) => Self::Empty,
            Some(Err(_)) => Self::Failed,
        }
    }
}

// =============================================================================
// LazyOption
// =============================================================================

/// An option computed on first demand and memoized.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
/// * `C` - The deferred computation (defaults to `fn() -> Maybe<T>`)
///
/// # Panics
///
/// The infallible observers ([`is_defined`](OptionLike::is_defined),
/// [`into_maybe`](OptionLike::into_maybe) and every combinator built on
/// them) panic with the stored error message when resolution failed. Use
/// [`try_resolve`](LazyOption::try_resolve) or
/// [`get`](OptionLike::get) to observe the failure as a `Result`.
///
/// Observing a lazy option from inside its own computation reports
/// [`OptionError::reentrant`] to that inner observer; the outer resolution
/// completes normally.
pub struct LazyOption<T, C = fn() -> Maybe<T>> {
    resolved: OnceCell<Result<Maybe<T>, OptionError>>,
    computation: Cell<Option<C>>,
    resolving: Cell<bool>,
}

/// Marks a lazy option as resolving until dropped, including on unwind.
struct ResolvingFlag<'a>(&'a Cell<bool>);

impl<'a> ResolvingFlag<'a> {
    fn raise(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for ResolvingFlag<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<T, C: Computation<T>> LazyOption<T, C> {
    /// Creates a lazy option that runs `computation` on first observation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{LazyOption, LazyState, Maybe};
    ///
    /// let lazy = LazyOption::new(|| Maybe::some(42));
    /// assert_eq!(lazy.state(), LazyState::Unresolved);
    /// ```
    #[inline]
    pub const fn new(computation: C) -> Self {
        Self {
            resolved: OnceCell::new(),
            computation: Cell::new(Some(computation)),
            resolving: Cell::new(false),
        }
    }

    /// Resolves the lazy option and returns the produced option.
    ///
    /// The computation runs at most once; later calls return the memoized
    /// result, including a memoized failure.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::UnsupportedOperation`] when the computation did
    /// not produce an option or panicked, and [`OptionError::reentrant`]
    /// (without storing it) when called from inside the running computation.
    pub fn try_resolve(&self) -> Result<&Maybe<T>, OptionError> {
        if self.resolving.get() {
            return Err(OptionError::reentrant());
        }
        self.resolved
            .get_or_init(|| {
                let _resolving = ResolvingFlag::raise(&self.resolving);
                match self.computation.take() {
                    Some(computation) => computation.compute(),
                    None => Err(OptionError::poisoned()),
                }
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Consumes the lazy option and returns the produced option.
    ///
    /// # Errors
    ///
    /// Same as [`try_resolve`](LazyOption::try_resolve).
    pub fn try_into_maybe(self) -> Result<Maybe<T>, OptionError> {
        match self.resolved.into_inner() {
            Some(result) => result,
            None => match self.computation.into_inner() {
                Some(computation) => computation.compute(),
                None => Err(OptionError::poisoned()),
            },
        }
    }

    fn resolve(&self) -> &Maybe<T> {
        match self.try_resolve() {
            Ok(maybe) => maybe,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T, C> LazyOption<T, C> {
    /// Returns the current state without resolving.
    #[inline]
    pub fn state(&self) -> LazyState {
        LazyState::of(self.resolved.get())
    }

    /// Returns `true` once the computation has run.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }
}

impl<T, F, A> LazyOption<T, WithArguments<F, A>>
where
    F: FnOnce(A) -> Maybe<T>,
{
    /// Creates a lazy option that calls `function(arguments)` on first
    /// observation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{LazyOption, Maybe, OptionLike};
    ///
    /// let lazy = LazyOption::create(|(name, age): (&str, u8)| Maybe::some(format!("{name}:{age}")), ("foo", 3));
    /// assert_eq!(lazy.get_or_else(String::new()), "foo:3");
    /// ```
    #[inline]
    pub const fn create(function: F, arguments: A) -> Self {
        Self::new(WithArguments::new(function, arguments))
    }
}

impl<T, F> LazyOption<T, Dynamic<F>>
where
    T: 'static,
    F: FnOnce() -> Box<dyn DynamicValue>,
{
    /// Creates a lazy option from a computation whose result type is only
    /// checked at resolution.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{DynamicValue, LazyOption, Maybe};
    ///
    /// let lazy: LazyOption<i32, _> = LazyOption::dynamic(|| Box::new(()) as Box<dyn DynamicValue>);
    /// let error = lazy.try_resolve().unwrap_err();
    /// assert_eq!(error.to_string(), "Expected instance of Option. Got: ()");
    /// ```
    #[inline]
    pub const fn dynamic(function: F) -> Self {
        Self::new(Dynamic::new(function))
    }
}

impl<T: 'static> LazyOption<T, BoxedComputation<T>> {
    /// Creates a lazy option from a type-erased target.
    ///
    /// Accepts a boxed [`BoxedComputation<T>`] or a `fn() -> Maybe<T>`
    /// pointer. Nothing is invoked here.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::InvalidArgument`] (`Invalid callback given`)
    /// when `target` is neither.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{LazyOption, OptionErrorKind};
    /// use std::any::Any;
    ///
    /// let target: Box<dyn Any> = Box::new("invalidCallback");
    /// let error = LazyOption::<i32, _>::from_any(target).unwrap_err();
    /// assert_eq!(error.kind(), OptionErrorKind::InvalidArgument);
    /// ```
    pub fn from_any(target: Box<dyn Any>) -> Result<Self, OptionError> {
        let target = match target.downcast::<BoxedComputation<T>>() {
            Ok(computation) => return Ok(Self::new(*computation)),
            Err(target) => target,
        };
        match target.downcast::<fn() -> Maybe<T>>() {
            Ok(function) => Ok(Self::new(Box::new(*function))),
            Err(_) => Err(OptionError::invalid_callback()),
        }
    }
}

impl<T> LazyOption<T> {
    /// Creates a lazy option already resolved to `Maybe::Some(value)`.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self::from_maybe(Maybe::Some(value))
    }

    /// Creates a lazy option already resolved to `maybe`.
    #[inline]
    pub fn from_maybe(maybe: Maybe<T>) -> Self {
        Self {
            resolved: OnceCell::from(Ok(maybe)),
            computation: Cell::new(None),
            resolving: Cell::new(false),
        }
    }

    /// Creates a lazy option that calls `function` on first observation and
    /// treats a result equal to `none_value` as empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::{LazyOption, OptionLike};
    ///
    /// let position = LazyOption::from_return(|| "abc".find('z').map_or(-1, |index| index as i64), -1);
    /// assert!(position.is_empty());
    /// ```
    pub fn from_return<F>(function: F, none_value: T) -> LazyOption<T, impl FnOnce() -> Maybe<T>>
    where
        F: FnOnce() -> T,
        T: PartialEq,
    {
        LazyOption::new(move || Maybe::from_value(function(), &none_value))
    }
}

impl<T, C: Computation<T>> OptionLike<T> for LazyOption<T, C> {
    #[inline]
    fn is_defined(&self) -> bool {
        self.resolve().is_defined()
    }

    #[inline]
    fn get(&self) -> Result<&T, OptionError> {
        self.try_resolve()?.get()
    }

    fn into_maybe(self) -> Maybe<T> {
        match self.try_into_maybe() {
            Ok(maybe) => maybe,
            Err(error) => panic!("{error}"),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> From<Maybe<T>> for LazyOption<T> {
    fn from(maybe: Maybe<T>) -> Self {
        Self::from_maybe(maybe)
    }
}

impl<T, C: Computation<T>> IntoIterator for LazyOption<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_maybe().into_iter()
    }
}

impl<'a, T, C: Computation<T>> IntoIterator for &'a LazyOption<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for LazyOption<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = formatter.debug_tuple("LazyOption");
        match self.resolved.get() {
            Some(Ok(maybe)) => tuple.field(maybe),
            Some(Err(_)) => tuple.field(&"<failed>"),
            None => tuple.field(&"<unresolved>"),
        };
        tuple.finish()
    }
}

static_assertions::assert_impl_all!(LazyOption<i32>: Send);
static_assertions::assert_not_impl_any!(LazyOption<i32>: Sync);
