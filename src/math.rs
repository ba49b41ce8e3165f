use tracing::trace;

use crate::error::{positive, Error};

/// Returns all positive divisors of `n` in ascending order.
///
/// Candidates are only tried up to the square root of `n`, every hit `i` also
/// contributes its cofactor `n / i`. For perfect squares the root is only added once.
///
/// ```
/// use cyclic_peptides::math::divisors;
/// assert_eq!(divisors(12).unwrap(), vec![1, 2, 3, 4, 6, 12]);
/// assert!(divisors(0).is_err());
/// ```
pub fn divisors(n: u64) -> Result<Vec<u64>, Error> {
    let n = positive("n", n)?;
    let mut out = Vec::new();

    let mut i = 1u64;
    while i <= n / i {
        if n % i == 0 {
            out.push(i);
            if i != n / i {
                out.push(n / i);
            }
        }
        i += 1;
    }
    out.sort_unstable();

    trace!("divisors of {n} are {out:?}");
    Ok(out)
}

/// Computes Euler's totient function, i.e. the number of integers in `1..=n` that are
/// coprime to `n`.
///
/// The value is obtained from a trial division factorization as `n` multiplied with
/// `(1 - 1/p)` for every distinct prime `p` dividing `n`. Since the accumulated result
/// stays a multiple of every prime that is still to be processed, all divisions are exact.
pub fn totient(n: u64) -> Result<u64, Error> {
    let n = positive("n", n)?;
    let mut result = n;
    let mut m = n;

    let mut p = 2u64;
    while p <= m / p {
        if m % p == 0 {
            while m % p == 0 {
                m /= p;
            }
            result -= result / p;
        }
        p += 1;
    }
    if m > 1 {
        result -= result / m;
    }

    Ok(result)
}

/// Decomposes `n` into its prime factors, returning pairs of prime and exponent sorted
/// by the prime. The factorization of `1` is empty.
pub fn prime_factorization(n: u64) -> Result<Vec<(u64, u32)>, Error> {
    let mut m = positive("n", n)?;
    let mut factors = vec![];

    let mut p = 2u64;
    while p <= m / p {
        let mut exponent = 0;
        while m % p == 0 {
            m /= p;
            exponent += 1;
        }
        if exponent > 0 {
            factors.push((p, exponent));
        }
        p += 1;
    }
    if m > 1 {
        factors.push((m, 1));
    }

    Ok(factors)
}

/// The divisor counting function, which is the product of `e + 1` over all exponents `e`
/// in the prime factorization of `n`.
pub fn divisor_count(n: u64) -> Result<u64, Error> {
    Ok(prime_factorization(n)?
        .into_iter()
        .map(|(_, e)| e as u64 + 1)
        .product())
}

/// Greatest common divisor of `a` and `b`, where `gcd(0, b) = b`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
