//! Command implementations. Each takes parsed documents and returns the
//! JSON (or text lines) to print.

use clap::ValueEnum;
use lodown::json;
use lodown::{each, filter, partition, reduce, reject, type_of, Taken};
use serde_json::{Number, Value};
use tracing::debug;

use crate::condition::Condition;
use crate::error::CliError;
use crate::input::parse_literal;

/// What a command produces.
#[derive(Debug, PartialEq)]
pub enum Output {
    Json(Value),
    Lines(Vec<String>),
}

/// Folding operations available to `lodown reduce`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReduceOp {
    Sum,
    Product,
    Concat,
    Min,
    Max,
}

impl ReduceOp {
    pub fn as_str(self) -> &'static str {
        match self {
            ReduceOp::Sum => "sum",
            ReduceOp::Product => "product",
            ReduceOp::Concat => "concat",
            ReduceOp::Min => "min",
            ReduceOp::Max => "max",
        }
    }
}

pub fn type_of_command(doc: &Value) -> Output {
    Output::Json(Value::from(type_of(doc).as_str()))
}

/// One `key<TAB>value` line per entry, in traversal order.
pub fn entries(doc: &Value) -> Output {
    let mut lines = Vec::new();
    each(doc, |value, key, _| lines.push(format!("{key}\t{value}")));
    Output::Lines(lines)
}

pub fn first(doc: &Value, count: Option<&str>) -> Output {
    let count = count.map(parse_literal);
    Output::Json(taken_to_value(json::first(doc, count.as_ref())))
}

pub fn last(doc: &Value, count: Option<&str>) -> Output {
    let count = count.map(parse_literal);
    Output::Json(taken_to_value(json::last(doc, count.as_ref())))
}

/// The index as a number, `-1` when absent.
pub fn index_of(doc: &Value, value: &str) -> Output {
    let needle = parse_literal(value);
    let found = json::index_of(json::as_sequence(doc), &needle);
    Output::Json(found.map_or(Value::from(-1), Value::from))
}

pub fn contains(doc: &Value, value: &str) -> Output {
    let needle = parse_literal(value);
    Output::Json(Value::Bool(json::contains(json::as_sequence(doc), &needle)))
}

pub fn filter_command(doc: &Value, condition: &Condition) -> Output {
    let kept = filter(json::as_sequence(doc), |element, _, _| condition.test(element));
    Output::Json(Value::Array(kept))
}

pub fn reject_command(doc: &Value, condition: &Condition) -> Output {
    let kept = reject(json::as_sequence(doc), |element, _, _| condition.test(element));
    Output::Json(Value::Array(kept))
}

pub fn partition_command(doc: &Value, condition: &Condition) -> Output {
    let (passed, failed) = partition(json::as_sequence(doc), |element, _, _| {
        condition.test(element)
    });
    Output::Json(Value::Array(vec![Value::Array(passed), Value::Array(failed)]))
}

pub fn unique(doc: &Value) -> Output {
    Output::Json(Value::Array(json::unique(json::as_sequence(doc))))
}

pub fn pluck(doc: &Value, key: &str) -> Output {
    Output::Json(Value::Array(json::pluck(json::as_sequence(doc), key)))
}

/// `every` over arrays by index and objects by key. Primitives print `false`.
pub fn every_command(doc: &Value, condition: &Condition) -> Output {
    Output::Json(Value::Bool(json::every(doc, |element, _, _| condition.test(element))))
}

pub fn some_command(doc: &Value, condition: &Condition) -> Output {
    Output::Json(Value::Bool(json::some(doc, |element, _, _| condition.test(element))))
}

/// Fold the elements of an array with `op`, optionally seeded.
///
/// Numeric operations require numbers and `concat` requires strings, in both
/// the elements and the seed. An empty unseeded array reduces to `null`.
pub fn reduce_command(doc: &Value, op: ReduceOp, seed: Option<&str>) -> Result<Output, CliError> {
    let sequence = json::as_sequence(doc);
    let seed = seed.map(parse_literal);
    debug!(op = op.as_str(), len = sequence.len(), seeded = seed.is_some(), "reduce");

    let result = match op {
        ReduceOp::Concat => {
            let strings = sequence
                .iter()
                .chain(seed.iter())
                .map(|v| expect_string(v, op))
                .collect::<Result<Vec<_>, _>>()?;
            let (elements, seed) = split_seed(strings, seed.is_some());
            reduce(&elements, |acc, s, _| acc + s, seed).map(Value::String)
        }
        _ => {
            let numbers = sequence
                .iter()
                .chain(seed.iter())
                .map(|v| expect_number(v, op))
                .collect::<Result<Vec<_>, _>>()?;
            let (elements, seed) = split_seed(numbers, seed.is_some());
            let func: fn(f64, &f64, usize) -> f64 = match op {
                ReduceOp::Sum => |a, b, _| a + b,
                ReduceOp::Product => |a, b, _| a * b,
                ReduceOp::Min => |a, b, _| a.min(*b),
                _ => |a, b, _| a.max(*b),
            };
            reduce(&elements, func, seed).map(number_to_value)
        }
    };
    Ok(Output::Json(result.unwrap_or(Value::Null)))
}

/// Merge every source document into the target and return the target.
pub fn extend(mut target: Value, sources: &[Value]) -> Output {
    json::extend(&mut target, sources);
    Output::Json(target)
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn taken_to_value(taken: Taken<Value>) -> Value {
    match taken {
        Taken::One(element) => element.unwrap_or(Value::Null),
        Taken::Many(elements) => Value::Array(elements),
    }
}

/// The seed was chained onto the end of the converted values; pop it back off.
fn split_seed<T>(mut values: Vec<T>, seeded: bool) -> (Vec<T>, Option<T>) {
    let seed = if seeded { values.pop() } else { None };
    (values, seed)
}

fn expect_number(value: &Value, op: ReduceOp) -> Result<f64, CliError> {
    value.as_f64().ok_or_else(|| {
        CliError::InvalidArgument(format!("{} needs numbers, found {}", op.as_str(), type_of(value)))
    })
}

fn expect_string(value: &Value, op: ReduceOp) -> Result<String, CliError> {
    value.as_str().map(str::to_owned).ok_or_else(|| {
        CliError::InvalidArgument(format!("{} needs strings, found {}", op.as_str(), type_of(value)))
    })
}

/// Whole numbers come back as JSON integers; non-finite results become null.
fn number_to_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn json_of(output: Output) -> Value {
        match output {
            Output::Json(value) => value,
            Output::Lines(lines) => panic!("expected JSON, got lines {lines:?}"),
        }
    }

    #[test]
    fn type_of_names_the_kind() {
        assert_eq!(json_of(type_of_command(&json!([1]))), json!("array"));
        assert_eq!(json_of(type_of_command(&json!(null))), json!("null"));
    }

    #[test]
    fn entries_list_keys_and_values() {
        assert_eq!(
            entries(&json!({"a": 1, "b": [2]})),
            Output::Lines(vec!["a\t1".into(), "b\t[2]".into()])
        );
        assert_eq!(
            entries(&json!(["x"])),
            Output::Lines(vec!["0\t\"x\"".into()])
        );
    }

    #[test]
    fn first_and_last_shapes() {
        let doc = json!([1, 2, 3]);
        assert_eq!(json_of(first(&doc, None)), json!(1));
        assert_eq!(json_of(first(&doc, Some("2"))), json!([1, 2]));
        assert_eq!(json_of(first(&doc, Some("hi"))), json!(1));
        assert_eq!(json_of(last(&doc, Some("-1"))), json!([]));
        assert_eq!(json_of(last(&json!("str"), Some("1"))), json!([]));
    }

    #[test]
    fn index_of_reports_minus_one() {
        let doc = json!([3, 5, 7]);
        assert_eq!(json_of(index_of(&doc, "7")), json!(2));
        assert_eq!(json_of(index_of(&doc, "8")), json!(-1));
        assert_eq!(json_of(contains(&doc, "5")), json!(true));
    }

    #[test]
    fn filtering_commands() {
        let doc = json!([{"n": 1}, {"n": 2}, {"m": 3}]);
        let cond: Condition = "n".parse().unwrap();
        assert_eq!(json_of(filter_command(&doc, &cond)), json!([{"n": 1}, {"n": 2}]));
        assert_eq!(json_of(reject_command(&doc, &cond)), json!([{"m": 3}]));
        assert_eq!(
            json_of(partition_command(&doc, &cond)),
            json!([[{"n": 1}, {"n": 2}], [{"m": 3}]])
        );
    }

    #[test]
    fn quantifiers_over_objects() {
        let doc = json!({"a": 1, "b": 0});
        assert_eq!(json_of(every_command(&doc, &Condition::Truthy)), json!(false));
        assert_eq!(json_of(some_command(&doc, &Condition::Truthy)), json!(true));
    }

    #[test]
    fn quantifiers_on_primitives_are_false() {
        for doc in [json!("hello"), json!(5), json!(null)] {
            assert_eq!(json_of(every_command(&doc, &Condition::Truthy)), json!(false));
            assert_eq!(json_of(some_command(&doc, &Condition::Truthy)), json!(false));
        }
    }

    #[test]
    fn last_rounds_fractional_counts_up() {
        let doc = json!([1, 2, 3, 4, 5]);
        assert_eq!(json_of(last(&doc, Some("1.5"))), json!([4, 5]));
        assert_eq!(json_of(first(&doc, Some("1.5"))), json!([1]));
    }

    #[test]
    fn reduce_ops() {
        let doc = json!([1, 2, 3, 4]);
        let run = |op, seed| json_of(reduce_command(&doc, op, seed).unwrap());
        assert_eq!(run(ReduceOp::Sum, None), json!(10));
        assert_eq!(run(ReduceOp::Sum, Some("5")), json!(15));
        assert_eq!(run(ReduceOp::Product, None), json!(24));
        assert_eq!(run(ReduceOp::Min, None), json!(1));
        assert_eq!(run(ReduceOp::Max, Some("10")), json!(10));
    }

    #[test]
    fn reduce_concat_and_empty() {
        let words = json!(["a", "b", "c"]);
        assert_eq!(
            json_of(reduce_command(&words, ReduceOp::Concat, Some(">")).unwrap()),
            json!(">abc")
        );
        assert_eq!(
            json_of(reduce_command(&json!([]), ReduceOp::Sum, None).unwrap()),
            json!(null)
        );
        assert_eq!(
            json_of(reduce_command(&json!([]), ReduceOp::Sum, Some("0")).unwrap()),
            json!(0)
        );
    }

    #[test]
    fn reduce_rejects_mixed_types() {
        let err = reduce_command(&json!([1, "x"]), ReduceOp::Sum, None).unwrap_err();
        assert_eq!(err.to_string(), "invalid argument: sum needs numbers, found string");
    }

    #[test]
    fn fractional_results_stay_fractional() {
        assert_eq!(number_to_value(2.5), json!(2.5));
        assert_eq!(number_to_value(4.0), json!(4));
        assert_eq!(number_to_value(f64::NAN), json!(null));
    }

    #[test]
    fn extend_merges_sources() {
        let out = extend(json!({"a": 1}), &[json!({"b": 2}), json!({"a": 3})]);
        assert_eq!(json_of(out), json!({"a": 3, "b": 2}));
    }
}
