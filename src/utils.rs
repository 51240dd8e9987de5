use alloc::vec::Vec;

/// Check if `n` is a prime number.
///
/// Uses trial division up to sqrt(n). The arithmetic in this crate never
/// calls it: callers validate `p` once, up front.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Distinct prime factors of `n` in increasing order.
///
/// `prime_factors(1)` and `prime_factors(0)` are empty.
///
/// # Example
///
/// ```
/// use gfpk::prime_factors;
///
/// assert_eq!(prime_factors(12), vec![2, 3]);
/// assert!(prime_factors(1).is_empty());
/// ```
pub fn prime_factors(mut n: usize) -> Vec<usize> {
    let mut primes = Vec::new();
    if n < 2 {
        return primes;
    }
    let mut d = 2;

    while d <= n / d {
        if n % d == 0 {
            primes.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }

    if n > 1 {
        primes.push(n);
    }

    primes
}

/// `base^exp`, or `None` on overflow.
pub(crate) fn checked_pow(base: u64, exp: usize) -> Option<u64> {
    let mut result: u64 = 1;
    for _ in 0..exp {
        result = result.checked_mul(base)?;
    }
    Some(result)
}
