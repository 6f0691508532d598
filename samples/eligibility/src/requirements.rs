//! Business rules and their aggregation.
//!
//! A rule inspects a [`Person`] and returns `Present(violation)` when the
//! person fails it, or `Empty` when the rule is satisfied. [`check`] runs a
//! list of rules in order and keeps every violation.
//!
//! # Examples
//!
//! ```
//! use eligibility_sample::{check, female, senior, Gender, Person, Requirement};
//! use optunion::control::Optional;
//!
//! let requirements: [Requirement; 2] = [senior, female];
//! let mary = Person::new("Mary", Optional::empty(), "Murphy", 66, Gender::Female);
//!
//! assert!(check(&requirements, mary).is_right());
//! ```

use optunion::control::{Optional, Union};

use crate::domain::{Gender, Person, RequirementNotMet};

/// Minimum age accepted by [`senior`].
pub const SENIOR_AGE: u32 = 65;

/// A rule: `Empty` when satisfied, `Present(violation)` otherwise.
pub type Requirement = fn(&Person) -> Optional<RequirementNotMet>;

/// Requires the person to be at least [`SENIOR_AGE`].
pub fn senior(person: &Person) -> Optional<RequirementNotMet> {
    Optional::present(person.age())
        .filter(|age| *age < SENIOR_AGE)
        .map(|_| RequirementNotMet::new("age", format!("less than {SENIOR_AGE}")))
}

/// Requires the person to be female.
pub fn female(person: &Person) -> Optional<RequirementNotMet> {
    match person.gender() {
        Gender::Male => Optional::present(RequirementNotMet::new("gender", "is male")),
        Gender::Female => Optional::empty(),
    }
}

/// Runs every requirement against `person`, in order.
///
/// Returns `Right(person)` when no requirement reported a violation, or
/// `Left(violations)` with every violation in requirement order.
pub fn check(
    requirements: &[Requirement],
    person: Person,
) -> Union<Vec<RequirementNotMet>, Person> {
    let unmet: Vec<RequirementNotMet> = requirements
        .iter()
        .flat_map(|requirement| requirement(&person))
        .collect();

    tracing::debug!(
        subject = %person.full_name(),
        checked = requirements.len(),
        unmet = unmet.len(),
        "requirements evaluated"
    );

    if unmet.is_empty() {
        Union::right(person)
    } else {
        Union::left(unmet)
    }
}
