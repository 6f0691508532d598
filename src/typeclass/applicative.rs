//! Applicative type class - combining independent values in a context.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(x).map2(fa, |_, a| a) == fa
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(a).map2(pure(b), f) == pure(f(a, b))
//! ```

use super::functor::Functor;
use crate::control::{Optional, Union};

/// A type class for functors that can lift plain values and combine two
/// independent computations.
///
/// # Examples
///
/// ```rust
/// use optunion::control::Optional;
/// use optunion::typeclass::Applicative;
///
/// let lifted: Optional<i32> = <Optional<()>>::pure(42);
/// assert_eq!(lifted, Optional::present(42));
///
/// let sum = Optional::present(3).map2(Optional::present(4), |x, y| x + y);
/// assert_eq!(sum, Optional::present(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// When either side has no value the function is not called. For
    /// `Union`, the first `Left` encountered (checking `self` before
    /// `other`) is the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Union;
    /// use optunion::typeclass::Applicative;
    ///
    /// let a: Union<&str, i32> = Union::left("first");
    /// let b: Union<&str, i32> = Union::left("second");
    /// assert_eq!(a.map2(b, |x, y| x + y), Union::left("first"));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Optional::Present(b)) => Optional::Present(function(a, b)),
            _ => Optional::Empty,
        }
    }
}

impl<L: Clone, R> Applicative for Union<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Union<L, B> {
        Union::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Union<L, B>, function: F) -> Union<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Union::Right(b)) => Union::Right(function(a, b)),
            (Self::Left(error), _) | (Self::Right(_), Union::Left(error)) => Union::Left(error),
        }
    }
}
