//! Integer math routines backing the `/bfhl` operations.
//!
//! Everything here is pure and side-effect free. Validation happens in the
//! API layer; these functions only assume what their signatures state.

use num_bigint::BigUint;

/// First `n` Fibonacci numbers, starting `0, 1, 1, 2, ...`.
///
/// The allowed maximum of n = 1000 produces values far beyond any machine
/// integer (fib(1000) has 209 decimal digits), so the sequence is built
/// with arbitrary-precision integers.
pub fn fibonacci(n: usize) -> Vec<BigUint> {
    let mut seq: Vec<BigUint> = Vec::with_capacity(n);
    if n == 0 {
        return seq;
    }
    seq.push(BigUint::from(0_u8));
    if n == 1 {
        return seq;
    }
    seq.push(BigUint::from(1_u8));
    while seq.len() < n {
        let next = &seq[seq.len() - 1] + &seq[seq.len() - 2];
        seq.push(next);
    }
    seq
}

/// Deterministic primality test by trial division.
///
/// `n <= 1` is not prime; 2 and 3 are prime; even numbers above 2 are not;
/// odd candidates are checked up to the square root.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i: i64 = 3;
    // `i <= n / i` avoids overflowing `i * i` near i64::MAX
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Iterative Euclidean GCD. Operands are magnitudes, so the result is
/// always non-negative.
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// LCM of two values: 0 if either operand is 0, otherwise `|a / gcd(a,b) * b|`.
///
/// Returns `None` when the result does not fit in `i64`; the caller treats
/// that as an internal fault rather than returning a wrong answer.
pub fn lcm(a: i64, b: i64) -> Option<i64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    let g = gcd(a.unsigned_abs(), b.unsigned_abs());
    let result = (a.unsigned_abs() / g).checked_mul(b.unsigned_abs())?;
    i64::try_from(result).ok()
}

/// LCM of a list, reduced left to right from seed 1.
///
/// A single-element list yields `|element|` (0 for 0). `None` on overflow.
pub fn lcm_list(values: &[i64]) -> Option<i64> {
    values.iter().try_fold(1_i64, |acc, &v| lcm(acc, v))
}

/// HCF (GCD) of a list, reduced left to right with no seed: the first
/// element becomes the initial accumulator, so a single-element list yields
/// the element itself, sign included.
///
/// Returns `None` for an empty list (excluded upstream by validation) or
/// when an intermediate magnitude does not fit in `i64`.
pub fn hcf_list(values: &[i64]) -> Option<i64> {
    let (&first, rest) = values.split_first()?;
    rest.iter().try_fold(first, |acc, &v| {
        i64::try_from(gcd(acc.unsigned_abs(), v.unsigned_abs())).ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fib_u64(n: usize) -> Vec<u64> {
        fibonacci(n)
            .into_iter()
            .map(|v| u64::try_from(v).unwrap())
            .collect()
    }

    #[test]
    fn test_fibonacci_small() {
        assert!(fib_u64(0).is_empty());
        assert_eq!(fib_u64(1), vec![0]);
        assert_eq!(fib_u64(2), vec![0, 1]);
        assert_eq!(fib_u64(5), vec![0, 1, 1, 2, 3]);
        assert_eq!(fib_u64(10), vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn test_fibonacci_big_values() {
        // fib(100) = 354224848179261915075, past u64 range
        let seq = fibonacci(101);
        let expected: BigUint = "354224848179261915075".parse().unwrap();
        assert_eq!(seq[100], expected);
    }

    #[test]
    fn test_fibonacci_length() {
        assert_eq!(fibonacci(1000).len(), 1000);
    }

    #[test]
    fn test_is_prime() {
        assert!(!is_prime(-7));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(9));
        assert!(is_prime(11));
        assert!(is_prime(7919));
        assert!(!is_prime(7917));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(17, 13), 1);
    }

    #[test]
    fn test_lcm_pairs() {
        assert_eq!(lcm(4, 6), Some(12));
        assert_eq!(lcm(0, 5), Some(0));
        assert_eq!(lcm(5, 0), Some(0));
        assert_eq!(lcm(-4, 6), Some(12));
        assert_eq!(lcm(i64::MAX, i64::MAX - 1), None);
    }

    #[test]
    fn test_lcm_list() {
        assert_eq!(lcm_list(&[4, 6]), Some(12));
        assert_eq!(lcm_list(&[0, 5]), Some(0));
        assert_eq!(lcm_list(&[2, 3, 4]), Some(12));
        assert_eq!(lcm_list(&[7]), Some(7));
        assert_eq!(lcm_list(&[-7]), Some(7));
        // Empty list stays at the seed; validation rejects it before here
        assert_eq!(lcm_list(&[]), Some(1));
    }

    #[test]
    fn test_hcf_list() {
        assert_eq!(hcf_list(&[12, 18]), Some(6));
        assert_eq!(hcf_list(&[7]), Some(7));
        assert_eq!(hcf_list(&[-7]), Some(-7));
        assert_eq!(hcf_list(&[12, 18, 24]), Some(6));
        assert_eq!(hcf_list(&[0, 5]), Some(5));
        assert_eq!(hcf_list(&[]), None);
    }
}
