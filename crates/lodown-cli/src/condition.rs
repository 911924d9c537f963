//! `--where` conditions: the predicates the command line can express.

use std::str::FromStr;

use lodown::json::strict_eq;
use lodown::{Record, Truthy};
use serde_json::Value;

use crate::error::CliError;
use crate::input::parse_literal;

/// A predicate over one JSON element.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// The element itself is truthy (the default test).
    Truthy,
    /// `field`: the named field is truthy.
    FieldTruthy(String),
    /// `field=VALUE`: the named field is strictly equal to `VALUE`.
    FieldEquals(String, Value),
    /// `field!=VALUE`: the named field is missing or not strictly equal.
    FieldNotEquals(String, Value),
}

impl Condition {
    /// Parse an optional `--where` argument; absent means [`Condition::Truthy`].
    pub fn parse(arg: Option<&str>) -> Result<Condition, CliError> {
        match arg {
            Some(text) => text.parse(),
            None => Ok(Condition::Truthy),
        }
    }

    pub fn test(&self, element: &Value) -> bool {
        match self {
            Condition::Truthy => element.is_truthy(),
            Condition::FieldTruthy(field) => element.field(field).is_truthy(),
            Condition::FieldEquals(field, expected) => element
                .field(field)
                .is_some_and(|actual| strict_eq(actual, expected)),
            Condition::FieldNotEquals(field, expected) => !element
                .field(field)
                .is_some_and(|actual| strict_eq(actual, expected)),
        }
    }
}

impl FromStr for Condition {
    type Err = CliError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || CliError::InvalidCondition(text.to_string());

        let (field, rest) = match text.split_once("!=") {
            Some((field, value)) => (field, Some((false, value))),
            None => match text.split_once('=') {
                Some((field, value)) => (field, Some((true, value))),
                None => (text, None),
            },
        };

        let field = field.trim();
        if field.is_empty() {
            return Err(invalid());
        }

        Ok(match rest {
            None => Condition::FieldTruthy(field.to_string()),
            Some((true, value)) => Condition::FieldEquals(field.to_string(), parse_literal(value)),
            Some((false, value)) => {
                Condition::FieldNotEquals(field.to_string(), parse_literal(value))
            }
        })
    }
}
