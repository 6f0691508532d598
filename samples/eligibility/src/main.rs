//! eligibility
//!
//! Checks two reference subjects (and optionally one given on the command
//! line) against the `senior` and `female` requirements, then prints each
//! outcome as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin eligibility
//! cargo run --bin eligibility -- Jane Doe 70 female Ann
//! RUST_LOG=eligibility_sample=debug cargo run --bin eligibility
//! ```

use std::process::ExitCode;

use eligibility_sample::{
    EligibilityError, Gender, Person, Requirement, RequirementNotMet, check, female, senior,
};
use optunion::control::{Optional, Union};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn parse_person(arguments: &[String]) -> Result<Person, EligibilityError> {
    let [first_name, last_name, age, gender, rest @ ..] = arguments else {
        return Err(EligibilityError::WrongArgumentCount(arguments.len()));
    };
    if rest.len() > 1 {
        return Err(EligibilityError::WrongArgumentCount(arguments.len()));
    }

    let age = age.parse::<u32>().map_err(|source| EligibilityError::InvalidAge {
        input: age.clone(),
        source,
    })?;
    let gender: Gender = gender.parse()?;
    let middle_name = Optional::from(rest.first().cloned());

    Ok(Person::new(first_name.as_str(), middle_name, last_name.as_str(), age, gender))
}

fn report(outcome: &Union<Vec<RequirementNotMet>, Person>) -> Result<(), EligibilityError> {
    match outcome {
        Union::Right(person) => {
            tracing::info!(subject = %person.full_name(), "all requirements met");
        }
        Union::Left(unmet) => {
            for violation in unmet {
                tracing::warn!(
                    field = violation.field(),
                    reason = violation.reason(),
                    "requirement not met"
                );
            }
        }
    }
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}

fn reference_subjects() -> Vec<Person> {
    vec![
        Person::new("Mary", Optional::empty(), "Murphy", 66, Gender::Female),
        Person::new(
            "Tom",
            Optional::present("Dick".to_string()),
            "Harry",
            18,
            Gender::Male,
        ),
    ]
}

fn run() -> Result<(), EligibilityError> {
    let requirements: [Requirement; 2] = [senior, female];

    let mut subjects = reference_subjects();

    let arguments: Vec<String> = std::env::args().skip(1).collect();
    if !arguments.is_empty() {
        subjects.push(parse_person(&arguments)?);
    }

    for subject in subjects {
        report(&check(&requirements, subject))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eligibility=info,eligibility_sample=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "eligibility check failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn arguments(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    fn reference_subjects_render_expected_outcomes() {
        let requirements: [Requirement; 2] = [senior, female];
        let rendered: Vec<serde_json::Value> = reference_subjects()
            .into_iter()
            .map(|subject| serde_json::to_value(check(&requirements, subject)).unwrap())
            .collect();

        assert_eq!(rendered[0]["Right"]["first_name"], "Mary");
        assert_eq!(
            rendered[1],
            serde_json::json!({
                "Left": [
                    { "field": "age", "reason": "less than 65" },
                    { "field": "gender", "reason": "is male" }
                ]
            })
        );
    }

    #[rstest]
    fn parse_person_without_middle_name() {
        let person = parse_person(&arguments(&["Jane", "Doe", "70", "female"])).unwrap();
        assert_eq!(person.full_name(), "Jane Doe");
        assert_eq!(person.age(), 70);
    }

    #[rstest]
    fn parse_person_with_middle_name() {
        let person = parse_person(&arguments(&["Jane", "Doe", "70", "F", "Ann"])).unwrap();
        assert_eq!(person.middle_name(), &Optional::present("Ann".to_string()));
    }

    #[rstest]
    #[case(&["Jane"])]
    #[case(&["Jane", "Doe", "70", "female", "Ann", "extra"])]
    fn parse_person_rejects_wrong_argument_count(#[case] values: &[&str]) {
        assert!(matches!(
            parse_person(&arguments(values)),
            Err(EligibilityError::WrongArgumentCount(_))
        ));
    }

    #[rstest]
    fn parse_person_rejects_bad_age() {
        let result = parse_person(&arguments(&["Jane", "Doe", "old", "female"]));
        assert!(matches!(result, Err(EligibilityError::InvalidAge { .. })));
    }
}
