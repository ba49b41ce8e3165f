use num_bigint::BigUint;
use num_traits::{Pow, Zero};
use tracing::{debug, trace};

use crate::{
    error::{positive, Error},
    math::{divisors, gcd, totient},
    Show,
};

/// Counts the cyclic sequences of the given `length` over an alphabet with `alphabet_size`
/// distinguishable symbols, where two sequences are identified if one is a rotation of the other.
///
/// This is Burnside's lemma for the cyclic group of order `length`, which gives
/// `(1/L) × Σ φ(d) × U^(L/d)` where `d` ranges over the divisors of `L`. All arithmetic
/// is done on arbitrary precision integers, so the result is exact for every input.
///
/// ```
/// use cyclic_peptides::{count_cyclic_sequences, BigUint};
/// assert_eq!(count_cyclic_sequences(6, 4).unwrap(), BigUint::from(700u32));
/// assert!(count_cyclic_sequences(0, 4).is_err());
/// ```
pub fn count_cyclic_sequences(length: u64, alphabet_size: u64) -> Result<BigUint, Error> {
    Ok(BurnsideSum::new(length, alphabet_size)?.orbit_count())
}

/// A single summand of the Burnside sum, which groups all rotations whose
/// order is the divisor `d`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnsideTerm {
    /// The divisor `d` of the length.
    pub divisor: u64,
    /// The number of rotations of order `d`, which is `φ(d)`.
    pub totient: u64,
    /// The number of cycles `L/d` that each of these rotations decomposes the positions into.
    pub exponent: u64,
    /// Number of sequences fixed by one such rotation, `U^(L/d)`.
    pub fixed_points: BigUint,
    /// `φ(d) × U^(L/d)`.
    pub contribution: BigUint,
}

/// The itemized Burnside sum for a length and alphabet size, holding one [`BurnsideTerm`]
/// per divisor of the length in ascending order of the divisor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnsideSum {
    length: u64,
    alphabet_size: u64,
    terms: Vec<BurnsideTerm>,
}

impl BurnsideSum {
    /// Computes all terms of the sum. Fails if either argument is zero.
    pub fn new(length: u64, alphabet_size: u64) -> Result<Self, Error> {
        let length = positive("length", length)?;
        let alphabet_size = positive("alphabet size", alphabet_size)?;
        let base = BigUint::from(alphabet_size);

        let terms = divisors(length)?
            .into_iter()
            .map(|divisor| {
                let totient = totient(divisor)?;
                let exponent = length / divisor;
                let fixed_points: BigUint = Pow::pow(&base, exponent);
                let contribution = &fixed_points * BigUint::from(totient);
                trace!("φ({divisor}) × {alphabet_size}^{exponent} = {contribution}");
                Ok(BurnsideTerm {
                    divisor,
                    totient,
                    exponent,
                    fixed_points,
                    contribution,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        debug!(
            "computed Burnside sum for length {length} and alphabet size {alphabet_size} with {} terms",
            terms.len()
        );
        Ok(Self {
            length,
            alphabet_size,
            terms,
        })
    }

    /// The length `L` of the sequences.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// The number `U` of available symbols.
    pub fn alphabet_size(&self) -> u64 {
        self.alphabet_size
    }

    /// Gives the terms, one per divisor of the length.
    pub fn terms(&self) -> &[BurnsideTerm] {
        &self.terms
    }

    /// The sum of all contributions before dividing by the length.
    pub fn raw_sum(&self) -> BigUint {
        self.terms.iter().map(|t| &t.contribution).sum()
    }

    /// Remainder of the raw sum modulo the length, by Burnside's lemma this is always zero.
    pub fn remainder(&self) -> BigUint {
        self.raw_sum() % self.length
    }

    /// The number of orbits, i.e. of rotation-distinct sequences.
    pub fn orbit_count(&self) -> BigUint {
        let raw = self.raw_sum();
        debug_assert!((&raw % self.length).is_zero());
        raw / self.length
    }
}

impl Show for BurnsideSum {
    fn show(&self) -> String {
        use owo_colors::OwoColorize;
        let mut b = tabled::builder::Builder::default();

        b.push_record(["d", "φ(d)", "L/d", "U^(L/d)", "φ(d) × U^(L/d)"]);
        for term in &self.terms {
            b.push_record([
                term.divisor.bold().to_string(),
                term.totient.to_string(),
                term.exponent.to_string(),
                term.fixed_points.to_string(),
                term.contribution.blue().to_string(),
            ]);
        }
        b.push_record([
            "Σ".to_string(),
            String::new(),
            String::new(),
            String::new(),
            self.raw_sum().to_string(),
        ]);
        b.push_record([
            format!("Σ / {}", self.length),
            String::new(),
            String::new(),
            String::new(),
            self.orbit_count().green().bold().to_string(),
        ]);

        b.build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

/// Computes the same count as [`count_cyclic_sequences`] but averages over every single
/// rotation instead of grouping them by divisor. A rotation by `k` positions fixes exactly
/// `U^gcd(k, L)` sequences. This takes time linear in the length and is mostly useful as an
/// independent reference.
pub fn count_by_rotations(length: u64, alphabet_size: u64) -> Result<BigUint, Error> {
    let length = positive("length", length)?;
    let base = BigUint::from(positive("alphabet size", alphabet_size)?);

    let sum: BigUint = (0..length)
        .map(|k| -> BigUint { Pow::pow(&base, gcd(k, length)) })
        .sum();
    Ok(sum / length)
}

/// Determines how non-positive inputs are treated by a caller of the counting function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClampPolicy {
    /// Non-positive inputs are rejected with [`Error::InvalidArgument`].
    #[default]
    Strict,
    /// Non-positive inputs yield a count of zero, the empty set.
    Zero,
}

impl ClampPolicy {
    /// Counts the cyclic sequences for possibly non-positive inputs, handling them
    /// according to `self`.
    pub fn count(&self, length: i64, alphabet_size: i64) -> Result<BigUint, Error> {
        match (u64::try_from(length), u64::try_from(alphabet_size)) {
            (Ok(l), Ok(u)) if l > 0 && u > 0 => count_cyclic_sequences(l, u),
            _ if *self == ClampPolicy::Zero => {
                debug!("clamping count for length {length} and alphabet size {alphabet_size} to zero");
                Ok(BigUint::zero())
            }
            _ if length <= 0 => Err(Error::invalid_argument("length", length)),
            _ => Err(Error::invalid_argument("alphabet size", alphabet_size)),
        }
    }
}

/// Counts like [`count_cyclic_sequences`] but returns zero if either input is not
/// positive instead of failing.
pub fn count_or_zero(length: i64, alphabet_size: i64) -> BigUint {
    ClampPolicy::Zero
        .count(length, alphabet_size)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn known_values() {
        assert_eq!(count_cyclic_sequences(6, 4).unwrap(), big(700));
        assert_eq!(count_cyclic_sequences(5, 4).unwrap(), big(208));
        assert_eq!(count_cyclic_sequences(4, 2).unwrap(), big(6));
        assert_eq!(count_cyclic_sequences(3, 3).unwrap(), big(11));
        assert_eq!(count_cyclic_sequences(12, 2).unwrap(), big(352));
        assert_eq!(count_cyclic_sequences(6, 20).unwrap(), big(10668140));
        assert_eq!(count_cyclic_sequences(1, 1).unwrap(), big(1));
    }

    #[test_log::test]
    fn exact_for_large_inputs() {
        let expected: BigUint = "274877906944000000000000002621440000000514560336088"
            .parse()
            .unwrap();
        let sum = BurnsideSum::new(40, 20).unwrap();
        assert_eq!(
            sum.raw_sum(),
            "10995116277760000000000000104857600000020582413443520"
                .parse::<BigUint>()
                .unwrap()
        );
        assert_eq!(sum.orbit_count(), expected);
        assert_eq!(count_by_rotations(40, 20).unwrap(), expected);

        // 13 is prime and 20^13 is well beyond the exact integer range of a double
        assert_eq!(count_cyclic_sequences(13, 20).unwrap(), big(6301538461538480));
    }

    #[test]
    fn raw_sum_divisible_by_length() {
        for length in 1..=40 {
            for alphabet_size in 1..=12 {
                let sum = BurnsideSum::new(length, alphabet_size).unwrap();
                assert!(sum.remainder().is_zero(), "L = {length}, U = {alphabet_size}");
                assert_eq!(
                    sum.orbit_count(),
                    count_by_rotations(length, alphabet_size).unwrap()
                );
            }
        }
    }

    #[test]
    fn trivial_alphabet_and_length() {
        for n in 1..=50 {
            assert_eq!(count_cyclic_sequences(n, 1).unwrap(), big(1));
            assert_eq!(count_cyclic_sequences(1, n).unwrap(), big(n));
        }
    }

    #[test]
    fn terms_follow_divisors() {
        let sum = BurnsideSum::new(6, 4).unwrap();
        let divisors: Vec<_> = sum.terms().iter().map(|t| t.divisor).collect();
        let totients: Vec<_> = sum.terms().iter().map(|t| t.totient).collect();
        let exponents: Vec<_> = sum.terms().iter().map(|t| t.exponent).collect();
        assert_eq!(divisors, vec![1, 2, 3, 6]);
        assert_eq!(totients, vec![1, 1, 2, 2]);
        assert_eq!(exponents, vec![6, 3, 2, 1]);
        assert_eq!(sum.raw_sum(), big(4200));
        assert!(sum.show().contains("4200"));
    }

    #[test]
    fn invalid_inputs() {
        assert_eq!(
            count_cyclic_sequences(0, 3),
            Err(Error::invalid_argument("length", 0u64))
        );
        assert_eq!(
            count_cyclic_sequences(3, 0),
            Err(Error::invalid_argument("alphabet size", 0u64))
        );
        assert!(count_by_rotations(0, 1).is_err());
    }

    #[test]
    fn clamping() {
        assert_eq!(count_or_zero(-1, 4), BigUint::zero());
        assert_eq!(count_or_zero(6, 0), BigUint::zero());
        assert_eq!(count_or_zero(6, 4), big(700));

        assert_eq!(
            ClampPolicy::Strict.count(-2, 4),
            Err(Error::invalid_argument("length", -2i64))
        );
        assert_eq!(
            ClampPolicy::Strict.count(3, -5),
            Err(Error::invalid_argument("alphabet size", -5i64))
        );
        assert_eq!(ClampPolicy::default().count(3, 3), Ok(big(11)));
    }
}
