//! Thread-safe lazily computed optional values.
//!
//! [`ConcurrentLazyOption<T, C>`] has the same contract as
//! [`LazyOption`](super::LazyOption) but can be shared between threads. When
//! several threads observe an unresolved option at the same time, exactly
//! one of them runs the computation; the others block until the result is
//! stored and then read the memoized option.
//!
//! # Examples
//!
//! ```rust
//! use maybers::option::{ConcurrentLazyOption, Maybe, OptionLike};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::thread;
//!
//! let calls = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&calls);
//! let lazy = Arc::new(ConcurrentLazyOption::new(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     Maybe::some(42)
//! }));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let lazy = Arc::clone(&lazy);
//!         thread::spawn(move || *lazy.get().unwrap())
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     assert_eq!(handle.join().unwrap(), 42);
//! }
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;
use std::sync::OnceLock;

use parking_lot::Mutex;

use super::contract::OptionLike;
use super::error::OptionError;
use super::iter::{IntoIter, Iter};
use super::lazy_option::{Computation, LazyState, WithArguments};
use super::maybe::Maybe;

/// A thread-safe option computed on first demand and memoized.
///
/// `ConcurrentLazyOption<T, C>` is `Send + Sync` when `T: Send + Sync` and
/// `C: Send`.
///
/// # Panics
///
/// Infallible observers panic when resolution failed. A computation that
/// panics leaves the option poisoned for every thread.
///
/// Unlike [`LazyOption`](super::LazyOption), observing the option from
/// inside its own computation is not detected. The observing call blocks on
/// the resolution it is part of and never returns.
pub struct ConcurrentLazyOption<T, C = fn() -> Maybe<T>> {
    resolved: OnceLock<Result<Maybe<T>, OptionError>>,
    computation: Mutex<Option<C>>,
}

impl<T, C: Computation<T>> ConcurrentLazyOption<T, C> {
    /// Creates a lazy option that runs `computation` on first observation.
    #[inline]
    pub const fn new(computation: C) -> Self {
        Self {
            resolved: OnceLock::new(),
            computation: Mutex::new(Some(computation)),
        }
    }

    /// Resolves the lazy option and returns the produced option.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::UnsupportedOperation`] when the computation did
    /// not produce an option or panicked.
    pub fn try_resolve(&self) -> Result<&Maybe<T>, OptionError> {
        self.resolved
            .get_or_init(|| {
                // OnceLock admits a single initializer, so the lock is never
                // contended here.
                let computation = self.computation.lock().take();
                match computation {
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
    /// Same as [`try_resolve`](ConcurrentLazyOption::try_resolve).
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

impl<T, C> ConcurrentLazyOption<T, C> {
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

impl<T, F, A> ConcurrentLazyOption<T, WithArguments<F, A>>
where
    F: FnOnce(A) -> Maybe<T>,
{
    /// Creates a lazy option that calls `function(arguments)` on first
    /// observation.
    #[inline]
    pub const fn create(function: F, arguments: A) -> Self {
        Self::new(WithArguments::new(function, arguments))
    }
}

impl<T> ConcurrentLazyOption<T> {
    /// Creates a lazy option already resolved to `Maybe::Some(value)`.
    pub fn from_value(value: T) -> Self {
        Self::from_maybe(Maybe::Some(value))
    }

    /// Creates a lazy option already resolved to `maybe`.
    pub fn from_maybe(maybe: Maybe<T>) -> Self {
        Self {
            resolved: OnceLock::from(Ok(maybe)),
            computation: Mutex::new(None),
        }
    }
}

impl<T, C: Computation<T>> OptionLike<T> for ConcurrentLazyOption<T, C> {
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

impl<T> From<Maybe<T>> for ConcurrentLazyOption<T> {
    fn from(maybe: Maybe<T>) -> Self {
        Self::from_maybe(maybe)
    }
}

impl<T, C: Computation<T>> IntoIterator for ConcurrentLazyOption<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_maybe().into_iter()
    }
}

impl<'a, T, C: Computation<T>> IntoIterator for &'a ConcurrentLazyOption<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for ConcurrentLazyOption<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = formatter.debug_tuple("ConcurrentLazyOption");
        match self.resolved.get() {
            Some(Ok(maybe)) => tuple.field(maybe),
            Some(Err(_)) => tuple.field(&"<failed>"),
            None => tuple.field(&"<unresolved>"),
        };
        tuple.finish()
    }
}

static_assertions::assert_impl_all!(ConcurrentLazyOption<i32>: Send, Sync);
static_assertions::assert_impl_all!(ConcurrentLazyOption<String, Box<dyn FnOnce() -> Maybe<String> + Send>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn resolves_once_on_a_single_thread() {
        let lazy = ConcurrentLazyOption::new(|| Maybe::some("foo"));
        assert_eq!(lazy.state(), LazyState::Unresolved);
        assert!(lazy.is_defined());
        assert_eq!(lazy.state(), LazyState::Defined);
        assert_eq!(lazy.get_or_else("bar"), "foo");
    }

    #[rstest]
    fn create_passes_arguments() {
        let lazy = ConcurrentLazyOption::create(|value: i32| Maybe::some(value * 2), 21);
        assert_eq!(lazy.into_maybe(), Maybe::some(42));
    }

    #[rstest]
    fn from_maybe_none_is_empty() {
        let lazy: ConcurrentLazyOption<u8> = Maybe::none().into();
        assert!(lazy.is_resolved());
        assert!(lazy.is_empty());
    }
}
