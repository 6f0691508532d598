//! Functor type class - mapping over container values.
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
//! use optunion::control::{Optional, Union};
//! use optunion::typeclass::Functor;
//!
//! let present: Optional<i32> = Optional::present(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Optional::present("5".to_string()));
//!
//! let failed: Union<String, i32> = Union::left("no".to_string());
//! assert_eq!(failed.fmap(|n| n + 1), Union::left("no".to_string()));
//! ```

use super::higher::TypeConstructor;
use crate::control::{Optional, Union};

/// A type class for types that can have a function mapped over their contents.
///
/// Implementations must not call the function when there is no value to
/// apply it to (`Empty`, `Left`).
///
/// # Examples
///
/// ```rust
/// use optunion::control::Optional;
/// use optunion::typeclass::Functor;
///
/// let x: Optional<i32> = Optional::present(5);
/// let y: Optional<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Optional::present("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Optional;
    /// use optunion::typeclass::Functor;
    ///
    /// let x = Optional::present("hello".to_string());
    /// let y: Optional<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Optional::present(5));
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Optional;
    /// use optunion::typeclass::Functor;
    ///
    /// assert_eq!(Optional::present(5).replace("replaced"), Optional::present("replaced"));
    /// assert_eq!(Optional::<i32>::empty().replace("replaced"), Optional::empty());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Union<L, R> Implementation
// =============================================================================

impl<L: Clone, R> Functor for Union<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Union<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Union<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Union::Left(value.clone()),
            Self::Right(value) => Union::Right(function(value)),
        }
    }
}
