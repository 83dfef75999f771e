use std::num::ParseIntError;

/// Problems found while reading an edge list or a pair list.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("line {line}: expected {expected}, got {content:?}")]
    Malformed {
        line: usize,
        expected: &'static str,
        content: String,
    },
    #[error("line {line}: bad weight {value:?}")]
    BadWeight {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
