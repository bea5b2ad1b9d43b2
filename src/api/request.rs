// Request validation and dispatch
// Turns the dynamic JSON body into a typed operation, then runs it.

use serde_json::{Number, Value};

use super::error::{ComputeError, ValidationError};
use crate::math;

/// Upper bound for the `fibonacci` operand.
pub const FIBONACCI_MAX: i64 = 1000;

/// A validated `/bfhl` operation.
///
/// Validation happens once, here; downstream code works with typed values
/// instead of re-checking the JSON shape per branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// First n Fibonacci numbers, `0 <= n <= 1000`
    Fibonacci(usize),
    /// Filter the inputs down to primes, order preserved
    Prime(Vec<i64>),
    /// LCM reduction over a non-empty list
    Lcm(Vec<i64>),
    /// GCD reduction over a non-empty list
    Hcf(Vec<i64>),
}

impl Operation {
    /// Validate a decoded request body.
    ///
    /// The body must be an object with exactly one key, and that key must
    /// name one of the four operations with a well-formed value.
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        let Value::Object(map) = body else {
            return Err(ValidationError::InvalidJson);
        };
        if map.len() != 1 {
            return Err(ValidationError::NotExactlyOneKey);
        }
        let (key, value) = match map.iter().next() {
            Some(entry) => entry,
            None => return Err(ValidationError::NotExactlyOneKey),
        };

        match key.as_str() {
            "fibonacci" => parse_fibonacci(value),
            "prime" => parse_int_array(value, true)
                .map(Self::Prime)
                .ok_or(ValidationError::PrimeNotIntegerArray),
            "lcm" => parse_int_array(value, false)
                .map(Self::Lcm)
                .ok_or(ValidationError::LcmNotIntegerArray),
            "hcf" => parse_int_array(value, false)
                .map(Self::Hcf)
                .ok_or(ValidationError::HcfNotIntegerArray),
            _ => Err(ValidationError::InvalidKey),
        }
    }

    /// Run the operation, producing the payload for the envelope's `data`
    /// field. Purely computational; any fault maps to a 500 at the boundary.
    pub fn execute(&self) -> Result<Value, ComputeError> {
        match self {
            Self::Fibonacci(n) => fibonacci_values(*n),
            Self::Prime(values) => Ok(Value::Array(
                values
                    .iter()
                    .copied()
                    .filter(|&v| math::is_prime(v))
                    .map(Value::from)
                    .collect(),
            )),
            Self::Lcm(values) => math::lcm_list(values)
                .map(Value::from)
                .ok_or(ComputeError::Overflow),
            Self::Hcf(values) => math::hcf_list(values)
                .map(Value::from)
                .ok_or(ComputeError::Overflow),
        }
    }
}

fn parse_fibonacci(value: &Value) -> Result<Operation, ValidationError> {
    let Value::Number(n) = value else {
        return Err(ValidationError::FibonacciNotInteger);
    };
    match n.as_i64() {
        Some(v) if (0..=FIBONACCI_MAX).contains(&v) => usize::try_from(v)
            .map(Operation::Fibonacci)
            .map_err(|_| ValidationError::FibonacciOutOfBounds),
        Some(_) => Err(ValidationError::FibonacciOutOfBounds),
        None => {
            // Integral but outside i64 is out of bounds; a fractional or
            // exponent form is not an integer at all.
            let text = n.to_string();
            if text.contains(['.', 'e', 'E']) {
                Err(ValidationError::FibonacciNotInteger)
            } else {
                Err(ValidationError::FibonacciOutOfBounds)
            }
        }
    }
}

/// Parse a JSON array of integers. `None` when the value is not an array,
/// contains a non-integer element, or is empty while emptiness is not allowed.
fn parse_int_array(value: &Value, allow_empty: bool) -> Option<Vec<i64>> {
    let Value::Array(items) = value else {
        return None;
    };
    if items.is_empty() && !allow_empty {
        return None;
    }
    items
        .iter()
        .map(|item| match item {
            Value::Number(n) => n.as_i64(),
            _ => None,
        })
        .collect()
}

/// Serialize the Fibonacci sequence as exact JSON integers. Values beyond
/// u64 rely on serde_json's arbitrary-precision numbers.
fn fibonacci_values(n: usize) -> Result<Value, ComputeError> {
    math::fibonacci(n)
        .into_iter()
        .map(|v| {
            serde_json::from_str::<Number>(&v.to_string())
                .map(Value::Number)
                .map_err(|_| ComputeError::Serialization)
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_key_dispatch() {
        assert_eq!(
            Operation::from_body(&json!({"fibonacci": 5})),
            Ok(Operation::Fibonacci(5))
        );
        assert_eq!(
            Operation::from_body(&json!({"prime": [2, 3, 4]})),
            Ok(Operation::Prime(vec![2, 3, 4]))
        );
        assert_eq!(
            Operation::from_body(&json!({"lcm": [4, 6]})),
            Ok(Operation::Lcm(vec![4, 6]))
        );
        assert_eq!(
            Operation::from_body(&json!({"hcf": [12, 18]})),
            Ok(Operation::Hcf(vec![12, 18]))
        );
    }

    #[test]
    fn test_body_shape_errors() {
        assert_eq!(
            Operation::from_body(&json!([1, 2])),
            Err(ValidationError::InvalidJson)
        );
        assert_eq!(
            Operation::from_body(&json!("fibonacci")),
            Err(ValidationError::InvalidJson)
        );
        assert_eq!(
            Operation::from_body(&json!({})),
            Err(ValidationError::NotExactlyOneKey)
        );
        assert_eq!(
            Operation::from_body(&json!({"fibonacci": 5, "prime": [2]})),
            Err(ValidationError::NotExactlyOneKey)
        );
        assert_eq!(
            Operation::from_body(&json!({"unknown": 1})),
            Err(ValidationError::InvalidKey)
        );
    }

    #[test]
    fn test_fibonacci_validation() {
        assert_eq!(
            Operation::from_body(&json!({"fibonacci": 0})),
            Ok(Operation::Fibonacci(0))
        );
        assert_eq!(
            Operation::from_body(&json!({"fibonacci": 1000})),
            Ok(Operation::Fibonacci(1000))
        );
        assert_eq!(
            Operation::from_body(&json!({"fibonacci": -1})),
            Err(ValidationError::FibonacciOutOfBounds)
        );
        assert_eq!(
            Operation::from_body(&json!({"fibonacci": 1001})),
            Err(ValidationError::FibonacciOutOfBounds)
        );
        assert_eq!(
            Operation::from_body(&json!({"fibonacci": 5.5})),
            Err(ValidationError::FibonacciNotInteger)
        );
        assert_eq!(
            Operation::from_body(&json!({"fibonacci": "5"})),
            Err(ValidationError::FibonacciNotInteger)
        );
        assert_eq!(
            Operation::from_body(&json!({"fibonacci": true})),
            Err(ValidationError::FibonacciNotInteger)
        );
        assert_eq!(
            Operation::from_body(&json!({"fibonacci": null})),
            Err(ValidationError::FibonacciNotInteger)
        );
    }

    #[test]
    fn test_array_validation() {
        // prime accepts an empty array, lcm/hcf do not
        assert_eq!(
            Operation::from_body(&json!({"prime": []})),
            Ok(Operation::Prime(vec![]))
        );
        assert_eq!(
            Operation::from_body(&json!({"lcm": []})),
            Err(ValidationError::LcmNotIntegerArray)
        );
        assert_eq!(
            Operation::from_body(&json!({"hcf": []})),
            Err(ValidationError::HcfNotIntegerArray)
        );
        assert_eq!(
            Operation::from_body(&json!({"prime": [2, "3"]})),
            Err(ValidationError::PrimeNotIntegerArray)
        );
        assert_eq!(
            Operation::from_body(&json!({"prime": [2, 3.5]})),
            Err(ValidationError::PrimeNotIntegerArray)
        );
        assert_eq!(
            Operation::from_body(&json!({"lcm": 12})),
            Err(ValidationError::LcmNotIntegerArray)
        );
        assert_eq!(
            Operation::from_body(&json!({"hcf": {"a": 1}})),
            Err(ValidationError::HcfNotIntegerArray)
        );
    }

    #[test]
    fn test_execute_fibonacci() {
        assert_eq!(
            Operation::Fibonacci(5).execute().unwrap(),
            json!([0, 1, 1, 2, 3])
        );
        assert_eq!(Operation::Fibonacci(0).execute().unwrap(), json!([]));
        assert_eq!(Operation::Fibonacci(1).execute().unwrap(), json!([0]));
    }

    #[test]
    fn test_execute_fibonacci_big() {
        // Entries past index 93 no longer fit u64; the serialized numbers
        // must still be exact
        let data = Operation::Fibonacci(101).execute().unwrap();
        let last = data.as_array().unwrap().last().unwrap();
        assert_eq!(last.to_string(), "354224848179261915075");
    }

    #[test]
    fn test_execute_prime() {
        assert_eq!(
            Operation::Prime(vec![2, 3, 4, 5, 9, 11]).execute().unwrap(),
            json!([2, 3, 5, 11])
        );
        assert_eq!(Operation::Prime(vec![]).execute().unwrap(), json!([]));
    }

    #[test]
    fn test_execute_lcm_and_hcf() {
        assert_eq!(Operation::Lcm(vec![4, 6]).execute().unwrap(), json!(12));
        assert_eq!(Operation::Lcm(vec![0, 5]).execute().unwrap(), json!(0));
        assert_eq!(Operation::Hcf(vec![12, 18]).execute().unwrap(), json!(6));
        assert_eq!(Operation::Hcf(vec![7]).execute().unwrap(), json!(7));
    }

    #[test]
    fn test_execute_overflow_is_internal() {
        let result = Operation::Lcm(vec![i64::MAX, i64::MAX - 1]).execute();
        assert_eq!(result, Err(ComputeError::Overflow));
    }

    #[test]
    fn test_idempotence() {
        let op = Operation::from_body(&json!({"lcm": [4, 6, 21]})).unwrap();
        assert_eq!(op.execute().unwrap(), op.execute().unwrap());
    }
}
