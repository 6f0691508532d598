//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>` on its
//! own. [`TypeConstructor`] works around this with a GAT that re-applies the
//! same constructor to a different type, which is all the type classes in
//! this module need.
//!
//! # Example
//!
//! ```rust
//! use optunion::control::Optional;
//! use optunion::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Optional<String> = reset(Optional::present(42));
//! assert!(emptied.is_empty());
//! ```

use crate::control::{Optional, Union};

/// A trait representing a type constructor applied to some type.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// `Union<L, R>` is treated as the constructor `Union<L, _>`: its `Inner` is
/// the right type, matching the right-biased combinators.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<L, R> TypeConstructor for Union<L, R> {
    type Inner = R;
    type WithType<B> = Union<L, B>;
}
