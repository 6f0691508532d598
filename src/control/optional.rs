//! Optional type - a value that may be absent.
//!
//! This module provides `Optional<A>`, which is either `Present(A)` or
//! `Empty`. Every combinator short-circuits on `Empty` without calling the
//! function it was given, so expensive or side-effecting work is skipped when
//! there is nothing to work on.
//!
//! `Optional` is also the only bridge to [`Union`]: [`Optional::to_left`] and
//! [`Optional::to_right`] turn presence into one alternative and absence into
//! the other.
//!
//! # Examples
//!
//! ```rust
//! use optunion::control::{Optional, Union};
//!
//! let middle_name: Optional<&str> = Optional::from(None);
//! assert_eq!(middle_name.get_or_else(|| "-"), "-");
//!
//! let age = Optional::from(Some(5)).map(|x| x + 1);
//! assert_eq!(age.get(), Ok(6));
//!
//! let lookup: Union<&str, i32> = Optional::present(3).to_right(|| "missing");
//! assert_eq!(lookup, Union::right(3));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::EmptyValueError;
use super::union::Union;

/// Discriminant written to the hasher for `Empty`; nothing else follows it.
const EMPTY_TAG: u8 = 0;
/// Discriminant written to the hasher ahead of a `Present` payload.
const PRESENT_TAG: u8 = 1;

/// A value of type `A` that may be absent.
///
/// `Empty` carries no payload, so the type parameter has no run-time
/// representation: every `Empty` is the same logical value and hashes to the
/// same bytes whatever `A` is.
///
/// # Examples
///
/// ```rust
/// use optunion::control::Optional;
///
/// let present = Optional::present(1);
/// let empty: Optional<i32> = Optional::empty();
///
/// assert!(present.is_present());
/// assert!(empty.is_empty());
/// assert_eq!(Optional::from(Some(1)), present);
/// assert_eq!(Optional::from(None), empty);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<A> {
    /// No value.
    Empty,
    /// A value that is known to exist.
    Present(A),
}

impl<A> Optional<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Returns the canonical absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Optional;
    ///
    /// let first: Optional<String> = Optional::empty();
    /// let second: Optional<String> = Optional::empty();
    /// assert_eq!(first, second);
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Wraps a value that is known to exist.
    #[inline]
    pub const fn present(value: A) -> Self {
        Self::Present(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this holds a value.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Empty`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Borrows the payload, producing an `Optional<&A>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Optional;
    ///
    /// let name = Optional::present("Dick".to_string());
    /// assert_eq!(name.as_ref().map(|s| s.len()), Optional::present(4));
    /// assert!(name.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&A> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Empty => Optional::Empty,
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the payload.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] if this is `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::{EmptyValueError, Optional};
    ///
    /// assert_eq!(Optional::present(1).get(), Ok(1));
    /// assert_eq!(Optional::<i32>::empty().get(), Err(EmptyValueError));
    /// ```
    #[inline]
    pub fn get(self) -> Result<A, EmptyValueError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => Err(EmptyValueError),
        }
    }

    /// Returns the payload, or the supplier's result if this is `Empty`.
    ///
    /// The supplier is not called when a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Optional;
    ///
    /// assert_eq!(Optional::present(1).get_or_else(|| 2), 1);
    /// assert_eq!(Optional::empty().get_or_else(|| 2), 2);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Present(value) => value,
            Self::Empty => default(),
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Returns an iterator over the payload, yielding zero or one item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Optional;
    ///
    /// let results = vec![Optional::present(1), Optional::empty(), Optional::present(3)];
    /// let collected: Vec<&i32> = results.iter().flat_map(Optional::iter).collect();
    /// assert_eq!(collected, vec![&1, &3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&A> {
        self.as_ref().into_option().into_iter()
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies a function to the payload.
    ///
    /// `Empty` stays `Empty` and the function is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Optional;
    ///
    /// assert_eq!(Optional::present(5).map(|x| x + 1), Optional::present(6));
    /// assert_eq!(Optional::<i32>::empty().map(|x| x + 1), Optional::empty());
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Empty => Optional::Empty,
        }
    }

    /// Chains a computation that may itself produce `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Optional;
    ///
    /// let digits = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    /// let index = |i: usize| Optional::from(digits.get(i).copied());
    ///
    /// assert_eq!(Optional::present(3).flat_map(index), Optional::present(3));
    /// assert_eq!(Optional::present(10).flat_map(index), Optional::empty());
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Keeps the payload only if the predicate accepts it.
    ///
    /// The predicate is not called for `Empty`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Empty
                }
            }
            Self::Empty => Self::Empty,
        }
    }

    /// Returns `self` if present, otherwise the supplier's `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Optional;
    ///
    /// let fallback = Optional::<i32>::empty().or_else(|| Optional::present(9));
    /// assert_eq!(fallback, Optional::present(9));
    /// ```
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Empty => alternative(),
        }
    }

    // =========================================================================
    // Conversion to Union
    // =========================================================================

    /// Turns a present value into `Left`, and absence into `Right` built by
    /// the supplier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::{Optional, Union};
    ///
    /// assert_eq!(Optional::present(1).to_left(|| "none"), Union::left(1));
    /// assert_eq!(Optional::<i32>::empty().to_left(|| "none"), Union::right("none"));
    /// ```
    #[inline]
    pub fn to_left<B, F>(self, right_value: F) -> Union<A, B>
    where
        F: FnOnce() -> B,
    {
        match self {
            Self::Present(value) => Union::Left(value),
            Self::Empty => Union::Right(right_value()),
        }
    }

    /// Turns a present value into `Right`, and absence into `Left` built by
    /// the supplier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::{Optional, Union};
    ///
    /// assert_eq!(Optional::present(1).to_right(|| "none"), Union::right(1));
    /// assert_eq!(Optional::<i32>::empty().to_right(|| "none"), Union::left("none"));
    /// ```
    #[inline]
    pub fn to_right<B, F>(self, left_value: F) -> Union<B, A>
    where
        F: FnOnce() -> B,
    {
        match self {
            Self::Present(value) => Union::Right(value),
            Self::Empty => Union::Left(left_value()),
        }
    }
}

impl<L, R> Union<L, R> {
    /// Keeps the left value, discarding a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::{Optional, Union};
    ///
    /// let left: Union<i32, &str> = Union::left(1);
    /// assert_eq!(left.left_optional(), Optional::present(1));
    /// ```
    #[inline]
    pub fn left_optional(self) -> Optional<L> {
        match self {
            Self::Left(value) => Optional::Present(value),
            Self::Right(_) => Optional::Empty,
        }
    }

    /// Keeps the right value, discarding a `Left`.
    #[inline]
    pub fn right_optional(self) -> Optional<R> {
        match self {
            Self::Left(_) => Optional::Empty,
            Self::Right(value) => Optional::Present(value),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<A> Default for Optional<A> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<A: Hash> Hash for Optional<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Empty => state.write_u8(EMPTY_TAG),
            Self::Present(value) => {
                state.write_u8(PRESENT_TAG);
                value.hash(state);
            }
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Optional<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => formatter.write_str("Empty"),
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
        }
    }
}

impl<A: fmt::Display> fmt::Display for Optional<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => formatter.write_str("Empty"),
            Self::Present(value) => write!(formatter, "Present({value})"),
        }
    }
}

impl<A> From<Option<A>> for Optional<A> {
    /// `Some(a)` becomes `Present(a)`; `None` becomes `Empty`.
    #[inline]
    fn from(option: Option<A>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Empty,
        }
    }
}

impl<A> From<Optional<A>> for Option<A> {
    #[inline]
    fn from(optional: Optional<A>) -> Self {
        optional.into_option()
    }
}

impl<A> IntoIterator for Optional<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Optional<A> {
    type Item = &'a A;
    type IntoIter = std::option::IntoIter<&'a A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
