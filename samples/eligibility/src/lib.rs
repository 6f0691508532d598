//! # Eligibility Sample Application
//!
//! Checks people against an ordered list of business rules using
//! `optunion`'s `Optional` and `Union`.
//!
//! ## Module Structure
//!
//! - `domain`: `Person`, `Gender` and the `RequirementNotMet` violation record
//! - `requirements`: the rules themselves and `check`, which aggregates them
//! - `error`: errors raised while reading subjects from the command line

#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod requirements;

pub use domain::{Gender, Person, RequirementNotMet};
pub use error::EligibilityError;
pub use requirements::{Requirement, check, female, senior};
