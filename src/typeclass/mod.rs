//! Type class traits for the crate's sum types.
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Functor`]: Mapping over the carried value
//! - [`Applicative`]: Lifting values and combining independent computations
//! - [`Monad`]: Sequencing dependent computations
//! - [`Bifunctor`]: Mapping over both sides of a [`Union`](crate::control::Union)
//!
//! `Optional<A>` and `Union<L, R>` implement all of them (`Bifunctor` only
//! for `Union`). `Union` is right-biased: its functor, applicative and monad
//! instances act on `Right` and carry `Left` through unchanged.
//!
//! # Examples
//!
//! Code written against the traits works for both types:
//!
//! ```rust
//! use optunion::control::{Optional, Union};
//! use optunion::typeclass::Functor;
//!
//! fn describe<F: Functor<Inner = i32>>(value: F) -> F::WithType<String> {
//!     value.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Optional::present(1)), Optional::present("#1".to_string()));
//! assert_eq!(
//!     describe(Union::<&str, i32>::left("no")),
//!     Union::left("no")
//! );
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
