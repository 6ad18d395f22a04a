use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("invalid symbol {character:?} in sequence {sequence_index} at position {position}")]
    InvalidSymbol {
        character: char,
        sequence_index: usize,
        position: usize,
    },

    #[error("the input contains no sequences")]
    EmptyInput,

    #[error("the given motif length {k} is out of range [1, {maximum}]")]
    MotifLength { k: usize, maximum: usize },

    #[error("sequence {sequence_index} has length {actual}, but the first sequence has length {expected}")]
    UnequalSequenceLengths {
        sequence_index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("motif {motif_index} has length {actual}, but the first motif has length {expected}")]
    MotifLengthMismatch {
        motif_index: usize,
        expected: usize,
        actual: usize,
    },
}
