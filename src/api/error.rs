// API error types
// Validation failures carry the stable error codes of the /bfhl contract.

use std::fmt;

/// Validation failure for a `/bfhl` request body.
///
/// Every variant maps to a stable string code surfaced verbatim in the
/// response envelope. All of these are caller errors and map to HTTP 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Body was unreadable, not valid JSON, or not a JSON object
    InvalidJson,
    /// Object had zero or more than one top-level key
    NotExactlyOneKey,
    /// The single key is not one of the recognized operations
    InvalidKey,
    FibonacciNotInteger,
    FibonacciOutOfBounds,
    PrimeNotIntegerArray,
    LcmNotIntegerArray,
    HcfNotIntegerArray,
}

impl ValidationError {
    /// Stable error code for the response envelope.
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidJson => "invalid_json",
            Self::NotExactlyOneKey => "request_must_contain_exactly_one_key",
            Self::InvalidKey => "invalid_key",
            Self::FibonacciNotInteger => "fibonacci_must_be_integer",
            Self::FibonacciOutOfBounds => "fibonacci_out_of_bounds",
            Self::PrimeNotIntegerArray => "prime_must_be_integer_array",
            Self::LcmNotIntegerArray => "lcm_must_be_nonempty_integer_array",
            Self::HcfNotIntegerArray => "hcf_must_be_nonempty_integer_array",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Fault inside a computation. Never exposed with detail: the handler
/// boundary converts any of these to the generic 500 envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeError {
    /// An LCM/HCF reduction left the i64 range
    Overflow,
    /// A computed value could not be represented as a JSON number
    Serialization,
}

impl fmt::Display for ComputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow => f.write_str("arithmetic overflow during reduction"),
            Self::Serialization => f.write_str("result not representable as JSON"),
        }
    }
}
