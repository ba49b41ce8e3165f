//! Library for counting cyclic peptides, that is sequences of amino acids whose ends are
//! joined, so that two sequences are considered identical if one is a rotation of the other.
//!
//! Combinatorially these are necklaces of length $L$ over an alphabet of $U$ symbols. Their
//! number follows from Burnside's lemma applied to the cyclic group of order $L$: a rotation
//! whose order is $d$ (there are $\varphi(d)$ of them) fixes exactly $U^{L/d}$ sequences, and
//! averaging over the group yields
//! $$ N(L, U) = \frac{1}{L} \sum_{d \mid L} \varphi(d) \cdot U^{L/d}. $$
//!
//! The entry point is [`count_cyclic_sequences`], which computes this value exactly using
//! arbitrary precision integers. It is built from the primitives in [`math`], namely
//! [`math::divisors`] and [`math::totient`]. For presentation purposes, [`BurnsideSum`] gives
//! access to the individual summands and [`Formula`] renders the computation as text. The
//! [`necklace`] module enumerates necklaces explicitly, which is feasible for small parameters
//! only but serves as an independent check.
//!
//! All functions are pure and hold no state, so they can be called concurrently without any
//! synchronization. Inputs that are not positive are rejected with
//! [`Error::InvalidArgument`]; callers that prefer to map those to zero may use
//! [`ClampPolicy::Zero`].
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use cyclic_peptides::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        burnside::{count_by_rotations, count_or_zero, BurnsideSum, BurnsideTerm, ClampPolicy},
        count_cyclic_sequences,
        formula::Formula,
        math,
        necklace::{Necklace, Rotate},
        presets, BigUint, Error, Show,
    };
}

/// Number theoretic helpers, most importantly divisor enumeration and Euler's totient function.
pub mod math;

/// Contains the Burnside sum over the rotation group and the counting function built on it.
pub mod burnside;
pub use burnside::{count_cyclic_sequences, BurnsideSum, ClampPolicy};

/// Defines the error type of this crate.
pub mod error;
pub use error::Error;

/// Renders the counting formula for display.
pub mod formula;
pub use formula::Formula;

/// Explicit representation and enumeration of necklaces.
pub mod necklace;

/// Named peptide lengths and amino acid alphabets.
pub mod presets;

pub use num_bigint::BigUint;

use itertools::Itertools;

/// Helper trait which can be used to display results on a terminal.
pub trait Show {
    /// Returns a human readable representation of `self`, this may span multiple lines
    /// and contain ANSI color codes.
    fn show(&self) -> String;
    /// Shows a collection of the thing, by default this is `{a, b, c}`.
    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        format!("{{{}}}", iter.into_iter().map(|x| x.show()).join(", "))
    }
}

impl<S: Show> Show for [S] {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn show_collection() {
        let necklaces = vec![Necklace::new(vec![1, 0]), Necklace::new(vec![0, 0])];
        assert_eq!(necklaces.as_slice().show(), "{AC, AA}");
        assert_eq!(Necklace::show_collection(&necklaces), "{AC, AA}");
    }

    #[test]
    fn prelude_is_sufficient() {
        let sum = BurnsideSum::new(4, 2).unwrap();
        assert_eq!(sum.orbit_count(), count_cyclic_sequences(4, 2).unwrap());
        assert_eq!(math::divisors(4).unwrap(), vec![1, 2, 4]);
        assert_eq!(Formula::from(&sum), Formula::for_params(4, 2).unwrap());
    }
}
