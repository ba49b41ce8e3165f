use thiserror::Error;

/// Errors that can occur when counting or enumerating cyclic sequences.
///
/// All of them are caused by the input that the caller supplied, the computation
/// itself performs no I/O and can not fail otherwise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was not a positive integer.
    #[error("invalid argument: {name} must be a positive integer, got {value}")]
    InvalidArgument {
        /// Name of the offending argument, e.g. `"length"`.
        name: &'static str,
        /// The value that was passed.
        value: i128,
    },
    /// Explicit enumeration was requested for more words than the given limit allows.
    #[error("refusing to enumerate {alphabet_size}^{length} words, the limit is {limit}")]
    TooLarge {
        /// Length of the words.
        length: u64,
        /// Number of available symbols.
        alphabet_size: u64,
        /// Maximal number of words that may be enumerated.
        limit: u64,
    },
}

impl Error {
    /// Builds an [`Error::InvalidArgument`] for the argument `name`.
    pub fn invalid_argument<V: Into<i128>>(name: &'static str, value: V) -> Self {
        Error::InvalidArgument {
            name,
            value: value.into(),
        }
    }
}

/// Returns `value` if it is positive and an [`Error::InvalidArgument`] mentioning `name`
/// otherwise.
pub(crate) fn positive(name: &'static str, value: u64) -> Result<u64, Error> {
    if value == 0 {
        Err(Error::invalid_argument(name, value))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message() {
        let err = Error::invalid_argument("length", -3i64);
        assert_eq!(
            err.to_string(),
            "invalid argument: length must be a positive integer, got -3"
        );
        assert_eq!(positive("n", 4), Ok(4));
        assert!(matches!(
            positive("n", 0),
            Err(Error::InvalidArgument { name: "n", value: 0 })
        ));
    }
}
