//! # optunion
//!
//! Two closed sum types and the combinators needed to compose optional and
//! fallible computations without null checks or panics.
//!
//! ## Overview
//!
//! - **[`Optional<A>`](control::Optional)**: a value that is `Present` or `Empty`
//! - **[`Union<L, R>`](control::Union)**: a value that is `Left` or `Right`
//! - **Type Classes**: `Functor`, `Applicative`, `Monad`, `Bifunctor`
//!   instances for both types
//!
//! Every value is immutable after construction. Combinators short-circuit on
//! `Empty` and `Left` without calling the function they were given, and
//! default suppliers run only when their value is actually needed.
//!
//! ## Feature Flags
//!
//! - `control`: `Optional`, `Union` and `EmptyValueError`
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `serde`: `Serialize`/`Deserialize` for `Optional` and `Union`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optunion::prelude::*;
//!
//! fn reciprocal(n: f64) -> Union<String, f64> {
//!     Optional::present(n)
//!         .filter(|n| *n != 0.0)
//!         .to_right(|| "div by zero".to_string())
//!         .map(|n| 1.0 / n)
//! }
//!
//! assert_eq!(reciprocal(4.0), Union::right(0.25));
//! assert_eq!(reciprocal(0.0).get_left_or(String::new), "div by zero");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use optunion::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;
