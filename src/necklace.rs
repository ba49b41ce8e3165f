use itertools::Itertools;
use tracing::debug;

use crate::{
    error::{positive, Error},
    Show,
};

/// Default bound on the number of words that [`enumerate`] is willing to inspect.
pub const DEFAULT_ENUMERATION_LIMIT: u64 = 1 << 20;

/// One letter codes of the 20 standard amino acids followed by selenocysteine, used to
/// display the first 21 symbols.
const AMINO_ACID_CODES: &[u8; 21] = b"ACDEFGHIKLMNPQRSTVWYU";

/// A symbol is simply the index of an amino acid (or any other residue) in the alphabet.
pub type Symbol = u32;

/// Implementors can be rotated, which for a cyclic sequence means choosing a different
/// position as its start.
pub trait Rotate {
    /// Rotates left by the given number of positions, so rotating "ACDE" by 1 yields "CDEA".
    /// Numbers larger than the length wrap around.
    fn rotate_left(&mut self, number: usize);

    /// Clones `self` and then calls [`Self::rotate_left`] on the clone.
    fn cloned_rotate_left(&self, number: usize) -> Self
    where
        Self: Clone,
    {
        let mut out = self.clone();
        out.rotate_left(number);
        out
    }

    /// Returns an iterator over all rotations, starting with the unrotated sequence.
    /// For "ACDE" this gives "ACDE", "CDEA", "DEAC" and "EACD".
    fn rotations(&self) -> Rotations;
}

impl Rotate for Vec<Symbol> {
    fn rotate_left(&mut self, number: usize) {
        if !self.is_empty() {
            let mid = number % self.len();
            self.as_mut_slice().rotate_left(mid)
        }
    }

    fn rotations(&self) -> Rotations {
        Rotations {
            repr: self.repeat(2),
            start: 0,
            len: self.len(),
        }
    }
}

/// Iterator over the rotations of a sequence, see [`Rotate::rotations`].
#[derive(Debug, Clone)]
pub struct Rotations {
    repr: Vec<Symbol>,
    start: usize,
    len: usize,
}

impl Iterator for Rotations {
    type Item = Vec<Symbol>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.len {
            let out = self.repr[self.start..(self.start + self.len)].to_vec();
            self.start += 1;
            Some(out)
        } else {
            None
        }
    }
}

/// A cyclic sequence, stored as its lexicographically least rotation. Two sequences give
/// equal necklaces if and only if one is a rotation of the other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Necklace(Vec<Symbol>);

impl Necklace {
    /// Creates the necklace that contains `word`.
    pub fn new(word: Vec<Symbol>) -> Self {
        Self(canonical(&word))
    }

    /// The canonical representative.
    pub fn representative(&self) -> &[Symbol] {
        &self.0
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the necklace has no positions at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The smallest positive rotation that maps the necklace onto itself. This is also the
    /// number of distinct linear sequences that the necklace represents.
    pub fn period(&self) -> usize {
        (1..=self.len())
            .find(|p| self.len() % p == 0 && self.0.cloned_rotate_left(*p) == self.0)
            .unwrap_or(0)
    }
}

impl Show for Necklace {
    fn show(&self) -> String {
        self.0
            .iter()
            .map(|s| match AMINO_ACID_CODES.get(*s as usize) {
                Some(code) => (*code as char).to_string(),
                None => format!("[{s}]"),
            })
            .join("")
    }
}

/// Returns the lexicographically least rotation of `word`.
pub fn canonical(word: &[Symbol]) -> Vec<Symbol> {
    word.to_vec()
        .rotations()
        .min()
        .unwrap_or_default()
}

/// Explicitly lists all necklaces of the given length over `alphabet_size` symbols in
/// ascending order, by inspecting every single word. Fails with [`Error::TooLarge`] if
/// there are more than `limit` words.
///
/// The number of returned necklaces coincides with [`crate::count_cyclic_sequences`].
pub fn enumerate(length: u64, alphabet_size: u64, limit: u64) -> Result<Vec<Necklace>, Error> {
    let length = positive("length", length)?;
    let alphabet_size = positive("alphabet size", alphabet_size)?;
    let too_large = Error::TooLarge {
        length,
        alphabet_size,
        limit,
    };

    let words = u32::try_from(length)
        .ok()
        .and_then(|l| alphabet_size.checked_pow(l))
        .filter(|w| *w <= limit)
        .ok_or(too_large.clone())?;
    let symbols = Symbol::try_from(alphabet_size).map_err(|_| too_large)?;
    debug!("enumerating {words} words of length {length} over {alphabet_size} symbols");

    let mut out = vec![];
    let mut word = vec![0 as Symbol; length as usize];
    loop {
        if word.rotations().all(|rotation| word <= rotation) {
            out.push(Necklace(word.clone()));
        }
        // advance the odometer, the last position moves fastest
        match word.iter().rposition(|s| *s + 1 < symbols) {
            Some(pos) => {
                word[pos] += 1;
                word[pos + 1..].iter_mut().for_each(|s| *s = 0);
            }
            None => break,
        }
    }

    debug!("found {} necklaces", out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count_cyclic_sequences;
    use num_bigint::BigUint;

    #[test]
    fn rotations() {
        let word: Vec<Symbol> = vec![0, 1, 2, 3];
        let all: Vec<_> = word.rotations().collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1, 2, 3],
                vec![1, 2, 3, 0],
                vec![2, 3, 0, 1],
                vec![3, 0, 1, 2]
            ]
        );
        assert_eq!(word.cloned_rotate_left(6), vec![2, 3, 0, 1]);
        assert_eq!(Vec::<Symbol>::new().rotations().count(), 0);
    }

    #[test]
    fn canonical_representative() {
        let necklace = Necklace::new(vec![2, 0, 1, 0]);
        assert_eq!(necklace.representative(), &[0, 1, 0, 2]);
        assert_eq!(necklace, Necklace::new(vec![1, 0, 2, 0]));
        assert_eq!(necklace.show(), "ACAD");
        assert_eq!(necklace.period(), 4);
        assert_eq!(Necklace::new(vec![1, 0, 1, 0]).period(), 2);
        assert_eq!(Necklace::new(vec![25, 0]).show(), "A[25]");
    }

    #[test_log::test]
    fn enumeration_matches_count() {
        for length in 1..=8u64 {
            for alphabet_size in 1..=4u64 {
                let necklaces = enumerate(length, alphabet_size, DEFAULT_ENUMERATION_LIMIT).unwrap();
                assert_eq!(
                    count_cyclic_sequences(length, alphabet_size).unwrap(),
                    BigUint::from(necklaces.len()),
                    "L = {length}, U = {alphabet_size}"
                );
                assert!(necklaces.windows(2).all(|w| w[0] < w[1]));
                // every word lies in exactly one necklace, whose size is its period
                let words: usize = necklaces.iter().map(Necklace::period).sum();
                assert_eq!(words as u64, alphabet_size.pow(length as u32));
            }
        }
    }

    #[test]
    fn binary_necklaces_of_length_four() {
        let shown: Vec<_> = enumerate(4, 2, 16)
            .unwrap()
            .iter()
            .map(Show::show)
            .collect();
        assert_eq!(shown, vec!["AAAA", "AAAC", "AACC", "ACAC", "ACCC", "CCCC"]);
    }

    #[test]
    fn enumeration_limit() {
        assert_eq!(
            enumerate(4, 2, 15),
            Err(Error::TooLarge {
                length: 4,
                alphabet_size: 2,
                limit: 15
            })
        );
        assert!(matches!(enumerate(200, 20, u64::MAX), Err(Error::TooLarge { .. })));
        assert!(enumerate(0, 2, 16).is_err());
    }
}
