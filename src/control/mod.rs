//! Sum types for composing optional and fallible computations.
//!
//! This module provides the two value types of the crate:
//!
//! - [`Optional`]: a value that is either `Present` or `Empty`
//! - [`Union`]: a value that is either `Left` or `Right`
//! - [`EmptyValueError`]: returned by [`Optional::get`] on `Empty`
//!
//! Both types are immutable once built and are `Send`/`Sync` whenever their
//! payloads are.
//!
//! # Examples
//!
//! ## Validation Without Early Returns
//!
//! ```rust
//! use optunion::control::{Optional, Union};
//!
//! fn parse_age(input: &str) -> Union<String, u8> {
//!     Optional::from(input.parse::<u8>().ok())
//!         .to_right(|| format!("not an age: {input}"))
//! }
//!
//! let adult = parse_age("42").flat_map(|age| {
//!     if age >= 18 {
//!         Union::right(age)
//!     } else {
//!         Union::left(format!("{age} is a minor"))
//!     }
//! });
//! assert_eq!(adult, Union::right(42));
//! assert_eq!(parse_age("x").get_right_or(|| 0), 0);
//! ```

mod error;
mod optional;
mod union;

pub use error::EmptyValueError;
pub use optional::Optional;
pub use union::Union;

static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Optional<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Union<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(EmptyValueError: std::error::Error, Send, Sync);
static_assertions::assert_not_impl_any!(Optional<std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(Union<i32, std::cell::Cell<i32>>: Sync);
