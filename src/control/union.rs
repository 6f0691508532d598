//! Union type - exactly one of two typed alternatives.
//!
//! This module provides `Union<L, R>`, a closed sum type holding either a
//! `Left(L)` or a `Right(R)`. The combinators are right-biased: `map` and
//! `flat_map` act on `Right` and pass `Left` through untouched, so `Left` is
//! the natural carrier for failures that should short-circuit a chain.
//!
//! # Examples
//!
//! ```rust
//! use optunion::control::Union;
//!
//! fn divide(dividend: i32, divisor: i32) -> Union<String, i32> {
//!     if divisor == 0 {
//!         Union::left("div by zero".to_string())
//!     } else {
//!         Union::right(dividend / divisor)
//!     }
//! }
//!
//! let chained = divide(100, 5).flat_map(|n| divide(n, 2));
//! assert_eq!(chained, Union::right(10));
//!
//! let failed = divide(100, 0).flat_map(|n| divide(n, 2));
//! assert_eq!(failed, Union::left("div by zero".to_string()));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

/// Discriminant written to the hasher ahead of a `Left` payload.
const LEFT_TAG: u8 = 0;
/// Discriminant written to the hasher ahead of a `Right` payload.
const RIGHT_TAG: u8 = 1;

/// A value that is exactly one of `Left(L)` or `Right(R)`.
///
/// The variant is fixed at construction. Equality is structural and the
/// variant participates in it: `Left(x)` never equals `Right(x)`.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use optunion::control::Union;
///
/// let success: Union<String, i32> = Union::right(42);
/// assert_eq!(success.map(|x| x * 2), Union::right(84));
///
/// let failure: Union<String, i32> = Union::left("error".to_string());
/// assert_eq!(failure.map(|x| x * 2), Union::left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Union<L, R> {
    /// The left alternative, conventionally the failure or short-circuit path.
    Left(L),
    /// The right alternative, conventionally the success path.
    Right(R),
}

impl<L, R> Union<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value as the `Left` alternative.
    ///
    /// The right type is inferred from context, or given with a turbofish
    /// when nothing else pins it down.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Union;
    ///
    /// let inferred: Union<&str, i32> = Union::left("text");
    /// let explicit = Union::<&str, i32>::left("text");
    /// assert_eq!(inferred, explicit);
    /// ```
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Wraps a value as the `Right` alternative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Union;
    ///
    /// let value = Union::<String, i32>::right(1);
    /// assert!(value.is_right());
    /// ```
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Reference Access
    // =========================================================================

    /// Returns a reference to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Union;
    ///
    /// let left: Union<i32, String> = Union::left(42);
    /// assert_eq!(left.left_ref(), Some(&42));
    /// assert_eq!(left.right_ref(), None);
    /// ```
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows both alternatives, producing a `Union<&L, &R>`.
    ///
    /// Useful for running combinators without giving up ownership.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Union;
    ///
    /// let value: Union<i32, String> = Union::right("hello".to_string());
    /// let length = value.as_ref().map(|s| s.len());
    /// assert_eq!(length, Union::right(5));
    /// assert!(value.is_right());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Union<&L, &R> {
        match self {
            Self::Left(value) => Union::Left(value),
            Self::Right(value) => Union::Right(value),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the left value, or the supplier's result if this is a `Right`.
    ///
    /// The supplier runs only when it is needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Union;
    ///
    /// let left: Union<&str, i32> = Union::left("err");
    /// assert_eq!(left.get_left_or(|| "default"), "err");
    ///
    /// let right: Union<&str, i32> = Union::right(10);
    /// assert_eq!(right.get_left_or(|| "default"), "default");
    /// ```
    #[inline]
    pub fn get_left_or<F>(self, default: F) -> L
    where
        F: FnOnce() -> L,
    {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => default(),
        }
    }

    /// Returns the right value, or the supplier's result if this is a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Union;
    ///
    /// let left: Union<&str, i32> = Union::left("err");
    /// assert_eq!(left.get_right_or(|| 0), 0);
    /// ```
    #[inline]
    pub fn get_right_or<F>(self, default: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Left(_) => default(),
            Self::Right(value) => value,
        }
    }

    /// Returns the left value, or hands `error` back unchanged if this is a
    /// `Right`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` when this is a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Union;
    ///
    /// let right: Union<i32, &str> = Union::right("oops");
    /// assert_eq!(right.get_left_or_err("not a left"), Err("not a left"));
    /// ```
    #[inline]
    pub fn get_left_or_err<E>(self, error: E) -> Result<L, E> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(error),
        }
    }

    /// Returns the right value, or hands `error` back unchanged if this is a
    /// `Left`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` when this is a `Left`.
    #[inline]
    pub fn get_right_or_err<E>(self, error: E) -> Result<R, E> {
        match self {
            Self::Left(_) => Err(error),
            Self::Right(value) => Ok(value),
        }
    }

    /// Like [`get_left_or_err`](Self::get_left_or_err), but builds the error
    /// from the right value, and only when it is needed.
    ///
    /// # Errors
    ///
    /// Returns `Err(build_error(right))` when this is a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Union;
    ///
    /// let right: Union<i32, u8> = Union::right(7);
    /// assert_eq!(
    ///     right.get_left_or_else_err(|n| format!("got right {n}")),
    ///     Err("got right 7".to_string())
    /// );
    /// ```
    #[inline]
    pub fn get_left_or_else_err<E, F>(self, build_error: F) -> Result<L, E>
    where
        F: FnOnce(R) -> E,
    {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(value) => Err(build_error(value)),
        }
    }

    /// Like [`get_right_or_err`](Self::get_right_or_err), but builds the
    /// error from the left value, and only when it is needed.
    ///
    /// # Errors
    ///
    /// Returns `Err(build_error(left))` when this is a `Left`.
    #[inline]
    pub fn get_right_or_else_err<E, F>(self, build_error: F) -> Result<R, E>
    where
        F: FnOnce(L) -> E,
    {
        match self {
            Self::Left(value) => Err(build_error(value)),
            Self::Right(value) => Ok(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the right value, leaving a `Left` untouched.
    ///
    /// The function is not called for a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Union;
    ///
    /// let right: Union<String, f64> = Union::right(4.0);
    /// assert_eq!(right.map(f64::sqrt), Union::right(2.0));
    ///
    /// let left: Union<String, f64> = Union::left("nan".to_string());
    /// assert_eq!(left.map(f64::sqrt), Union::left("nan".to_string()));
    /// ```
    #[inline]
    pub fn map<C, F>(self, function: F) -> Union<L, C>
    where
        F: FnOnce(R) -> C,
    {
        match self {
            Self::Left(value) => Union::Left(value),
            Self::Right(value) => Union::Right(function(value)),
        }
    }

    /// Applies a function to the left value, leaving a `Right` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Union;
    ///
    /// let left: Union<&str, i32> = Union::left("boom");
    /// assert_eq!(left.map_left(str::len), Union::left(4));
    /// ```
    #[inline]
    pub fn map_left<C, F>(self, function: F) -> Union<C, R>
    where
        F: FnOnce(L) -> C,
    {
        match self {
            Self::Left(value) => Union::Left(function(value)),
            Self::Right(value) => Union::Right(value),
        }
    }

    /// Chains a computation that may itself produce a `Left`.
    ///
    /// A `Left` short-circuits: the function is not called and the left
    /// value is carried through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Union;
    ///
    /// let zero: Union<&str, i32> = Union::right(0);
    /// let result = zero.flat_map(|n| {
    ///     if n == 0 {
    ///         Union::left("div by zero")
    ///     } else {
    ///         Union::right(100 / n)
    ///     }
    /// });
    /// assert_eq!(result, Union::left("div by zero"));
    /// ```
    #[inline]
    pub fn flat_map<C, F>(self, function: F) -> Union<L, C>
    where
        F: FnOnce(R) -> Union<L, C>,
    {
        match self {
            Self::Left(value) => Union::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Transforms whichever side is present, keeping the variant.
    ///
    /// Exactly one of the two functions runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Union;
    ///
    /// let left: Union<i32, String> = Union::left(42);
    /// assert_eq!(left.fold(|x| x * 2, |s: String| s.len()), Union::left(84));
    ///
    /// let right: Union<i32, String> = Union::right("hello".to_string());
    /// assert_eq!(right.fold(|x: i32| x * 2, |s| s.len()), Union::right(5));
    /// ```
    #[inline]
    pub fn fold<C, D, F, G>(self, left_function: F, right_function: G) -> Union<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        match self {
            Self::Left(value) => Union::Left(left_function(value)),
            Self::Right(value) => Union::Right(right_function(value)),
        }
    }

    /// Eliminates the union by mapping both sides into a common type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optunion::control::Union;
    ///
    /// let left: Union<i32, String> = Union::left(42);
    /// assert_eq!(left.reduce(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn reduce<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the alternatives: `Left(l)` becomes `Right(l)` and vice versa.
    #[inline]
    pub fn swap(self) -> Union<R, L> {
        match self {
            Self::Left(value) => Union::Right(value),
            Self::Right(value) => Union::Left(value),
        }
    }
}

// =============================================================================
// Hashing
// =============================================================================

impl<L: Hash, R: Hash> Hash for Union<L, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Left(value) => {
                state.write_u8(LEFT_TAG);
                value.hash(state);
            }
            Self::Right(value) => {
                state.write_u8(RIGHT_TAG);
                value.hash(state);
            }
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Union<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Union<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Union<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Union<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(union: Union<L, R>) -> Self {
        match union {
            Union::Left(value) => Err(value),
            Union::Right(value) => Ok(value),
        }
    }
}
