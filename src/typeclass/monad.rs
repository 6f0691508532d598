//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optunion::control::Union;
//! use optunion::typeclass::Monad;
//!
//! let parsed: Union<String, i32> = Union::right(10);
//! let halved = parsed.and_then(|n| {
//!     if n % 2 == 0 {
//!         Union::right(n / 2)
//!     } else {
//!         Union::left(format!("{n} is odd"))
//!     }
//! });
//! assert_eq!(halved, Union::right(5));
//! ```

use super::applicative::Applicative;
use crate::control::{Optional, Union};

/// A type class for applicatives whose next step can depend on the previous
/// value.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Optional;
    /// use optunion::typeclass::Monad;
    ///
    /// let x = Optional::present(5);
    /// assert_eq!(Monad::flat_map(x, |n| Optional::present(n * 2)), Optional::present(10));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        Monad::flat_map(self, function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Optional;
    /// use optunion::typeclass::Monad;
    ///
    /// assert_eq!(Optional::present(5).then(Optional::present("hello")), Optional::present("hello"));
    /// assert_eq!(Optional::<i32>::empty().then(Optional::present("hello")), Optional::empty());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        Monad::flat_map(self, |_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        Self::flat_map(self, function)
    }
}

impl<L: Clone, R> Monad for Union<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Union<L, B>
    where
        F: FnOnce(R) -> Union<L, B>,
    {
        Self::flat_map(self, function)
    }
}
