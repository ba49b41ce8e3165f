use std::ops::RangeInclusive;

/// Peptide lengths for which the count is usually displayed.
pub const LENGTH_RANGE: RangeInclusive<u64> = 1..=50;
/// Alphabet sizes for which the count is usually displayed.
pub const ALPHABET_RANGE: RangeInclusive<u64> = 1..=25;

/// A named value for either the peptide length or the alphabet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Preset {
    /// Short identifier, used on the command line.
    pub name: &'static str,
    /// The value of the parameter.
    pub value: u64,
    /// Human readable description.
    pub description: &'static str,
}

/// Ring sizes of well known cyclic peptides.
pub const LENGTH_PRESETS: &[Preset] = &[
    Preset {
        name: "small",
        value: 5,
        description: "Small cycles",
    },
    Preset {
        name: "hexapeptide",
        value: 6,
        description: "Hexapeptides",
    },
    Preset {
        name: "oxytocin",
        value: 9,
        description: "Oxytocin/Vasopressin",
    },
    Preset {
        name: "gramicidin",
        value: 10,
        description: "Gramicidin S",
    },
    Preset {
        name: "voclosporin",
        value: 11,
        description: "Voclosporin (FDA approved)",
    },
    Preset {
        name: "daptomycin",
        value: 13,
        description: "MK-0616 (Merck, phase 3)/Daptomycin",
    },
];

/// Commonly used amino acid alphabets.
pub const ALPHABET_PRESETS: &[Preset] = &[
    Preset {
        name: "standard",
        value: 20,
        description: "Standard proteinogenic amino acids",
    },
    Preset {
        name: "selenocysteine",
        value: 21,
        description: "Standard amino acids and selenocysteine",
    },
    Preset {
        name: "basic",
        value: 4,
        description: "Basic set",
    },
    Preset {
        name: "subset",
        value: 8,
        description: "Subset",
    },
];

/// Looks up a preset by its name, ignoring case.
pub fn find<'a>(presets: &'a [Preset], name: &str) -> Option<&'a Preset> {
    presets.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count_cyclic_sequences;

    #[test]
    fn lookup() {
        assert_eq!(find(LENGTH_PRESETS, "Gramicidin").map(|p| p.value), Some(10));
        assert_eq!(find(ALPHABET_PRESETS, "standard").map(|p| p.value), Some(20));
        assert!(find(ALPHABET_PRESETS, "unknown").is_none());
    }

    #[test]
    fn presets_within_ranges() {
        for length in LENGTH_PRESETS {
            assert!(LENGTH_RANGE.contains(&length.value));
            for alphabet in ALPHABET_PRESETS {
                assert!(ALPHABET_RANGE.contains(&alphabet.value));
                assert!(count_cyclic_sequences(length.value, alphabet.value).is_ok());
            }
        }
    }
}
