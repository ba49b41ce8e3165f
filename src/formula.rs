use std::fmt::Display;

use itertools::Itertools;

use crate::{
    burnside::BurnsideSum,
    error::Error,
    math::{divisors, totient},
};

/// Short explanation of the counting method, suitable for displaying next to a result.
pub const EXPLANATION: &str = "Calculated using Burnside's lemma for rotational symmetry. \
Peptides that are identical when rotated are counted as one unique structure, \
which is standard for the combinatorial analysis of head-to-tail cyclized peptides.";

/// The counting formula, instantiated for a concrete length and alphabet size.
///
/// Its [`Display`] implementation renders the generic formula, a legend naming the
/// parameters and the sum expanded over all divisors of the length:
/// ```text
/// (1/L) × Σ[φ(d) × U^(L/d)] for all divisors d of L
/// where φ(d) is Euler's totient function, L = 4, U = 2
/// (1/4) × [φ(1)×2^4 + φ(2)×2^2 + φ(4)×2^1]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    length: u64,
    alphabet_size: u64,
    /// Pairs of divisor and its totient.
    terms: Vec<(u64, u64)>,
}

impl Formula {
    /// The formula in terms of `L` and `U`.
    pub const GENERIC: &'static str = "(1/L) × Σ[φ(d) × U^(L/d)] for all divisors d of L";

    /// Instantiates the formula, fails if either parameter is zero.
    pub fn for_params(length: u64, alphabet_size: u64) -> Result<Self, Error> {
        let divs = divisors(length).map_err(|_| Error::invalid_argument("length", length))?;
        if alphabet_size == 0 {
            return Err(Error::invalid_argument("alphabet size", alphabet_size));
        }
        let terms = divs
            .into_iter()
            .map(|d| Ok((d, totient(d)?)))
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Self {
            length,
            alphabet_size,
            terms,
        })
    }

    /// Names the totient function and the values of the parameters.
    pub fn legend(&self) -> String {
        format!(
            "where φ(d) is Euler's totient function, L = {}, U = {}",
            self.length, self.alphabet_size
        )
    }

    /// Writes out every summand symbolically, e.g. `(1/4) × [φ(1)×2^4 + φ(2)×2^2 + φ(4)×2^1]`.
    pub fn expanded(&self) -> String {
        format!(
            "(1/{}) × [{}]",
            self.length,
            self.terms
                .iter()
                .map(|(d, _)| format!("φ({d})×{}^{}", self.alphabet_size, self.length / d))
                .join(" + ")
        )
    }

    /// Like [`Self::expanded`] but with the totients evaluated, e.g. `(1/4) × [1×2^4 + 1×2^2 + 2×2^1]`.
    pub fn with_totients(&self) -> String {
        format!(
            "(1/{}) × [{}]",
            self.length,
            self.terms
                .iter()
                .map(|(d, phi)| format!("{phi}×{}^{}", self.alphabet_size, self.length / d))
                .join(" + ")
        )
    }
}

impl From<&BurnsideSum> for Formula {
    fn from(sum: &BurnsideSum) -> Self {
        Self {
            length: sum.length(),
            alphabet_size: sum.alphabet_size(),
            terms: sum.terms().iter().map(|t| (t.divisor, t.totient)).collect(),
        }
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", Self::GENERIC)?;
        writeln!(f, "{}", self.legend())?;
        write!(f, "{}", self.expanded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_formula() {
        let formula = Formula::for_params(6, 4).unwrap();
        assert_eq!(
            formula.expanded(),
            "(1/6) × [φ(1)×4^6 + φ(2)×4^3 + φ(3)×4^2 + φ(6)×4^1]"
        );
        assert_eq!(
            formula.with_totients(),
            "(1/6) × [1×4^6 + 1×4^3 + 2×4^2 + 2×4^1]"
        );
        assert_eq!(
            formula.legend(),
            "where φ(d) is Euler's totient function, L = 6, U = 4"
        );

        let shown = formula.to_string();
        assert!(shown.starts_with(Formula::GENERIC));
        assert_eq!(shown.lines().count(), 3);
    }

    #[test]
    fn agrees_with_burnside_sum() {
        let sum = BurnsideSum::new(12, 3).unwrap();
        assert_eq!(Formula::from(&sum), Formula::for_params(12, 3).unwrap());
        assert_eq!(Formula::for_params(1, 1).unwrap().expanded(), "(1/1) × [φ(1)×1^1]");
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(
            Formula::for_params(0, 2),
            Err(Error::invalid_argument("length", 0u64))
        );
        assert_eq!(
            Formula::for_params(2, 0),
            Err(Error::invalid_argument("alphabet size", 0u64))
        );
    }
}
