use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::debug;

use crate::{
    dna::DnaSequence,
    error::{Error, Result},
};

/// Reads one sequence per line from a plain-text file.
pub fn read_sequence_file(path: impl AsRef<Path>) -> Result<Vec<DnaSequence>> {
    let path = path.as_ref();
    let sequences = read_sequences(BufReader::new(File::open(path)?))?;
    debug!("Read {} sequences from {path:?}", sequences.len());
    Ok(sequences)
}

/// Reads one sequence per line, ignoring surrounding whitespace and blank lines.
pub fn read_sequences(reader: impl BufRead) -> Result<Vec<DnaSequence>> {
    let mut sequences = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        sequences.push(DnaSequence::parse(line, sequences.len())?);
    }

    Ok(sequences)
}

/// Checks that the sequences are non-empty, have the same length, and
/// contain at least one window of length `motif_length`.
pub fn validate_sequences(sequences: &[DnaSequence], motif_length: usize) -> Result<()> {
    let expected = sequences.first().ok_or(Error::EmptyInput)?.len();
    for (sequence_index, sequence) in sequences.iter().enumerate() {
        if sequence.len() != expected {
            return Err(Error::UnequalSequenceLengths {
                sequence_index,
                expected,
                actual: sequence.len(),
            });
        }
    }

    if motif_length == 0 || motif_length > expected {
        return Err(Error::MotifLength {
            k: motif_length,
            maximum: expected,
        });
    }

    Ok(())
}

/// Checks that the motifs are non-empty and have the same length, and returns that length.
pub fn validate_motifs(motifs: &[DnaSequence]) -> Result<usize> {
    let expected = motifs.first().ok_or(Error::EmptyInput)?.len();
    for (motif_index, motif) in motifs.iter().enumerate() {
        if motif.len() != expected {
            return Err(Error::MotifLengthMismatch {
                motif_index,
                expected,
                actual: motif.len(),
            });
        }
    }

    Ok(expected)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{read_sequences, validate_motifs, validate_sequences};
    use crate::error::Error;

    #[test]
    fn test_read_sequences() {
        let sequences = read_sequences(Cursor::new("AACC\r\nATCT\n\nGGAC  \nTCAC")).unwrap();
        let texts: Vec<String> = sequences.iter().map(ToString::to_string).collect();
        assert_eq!(texts, ["AACC", "ATCT", "GGAC", "TCAC"]);
    }

    #[test]
    fn test_read_invalid_symbol() {
        match read_sequences(Cursor::new("AACC\nATXT\n")) {
            Err(Error::InvalidSymbol {
                character,
                sequence_index,
                position,
            }) => assert_eq!((character, sequence_index, position), ('X', 1, 2)),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_validate_sequences() {
        let sequences = read_sequences(Cursor::new("AACC\nATCT\n")).unwrap();
        assert!(validate_sequences(&sequences, 1).is_ok());
        assert!(validate_sequences(&sequences, 4).is_ok());
        assert!(matches!(
            validate_sequences(&sequences, 5),
            Err(Error::MotifLength { k: 5, maximum: 4 })
        ));
        assert!(matches!(
            validate_sequences(&[], 2),
            Err(Error::EmptyInput)
        ));

        let uneven = read_sequences(Cursor::new("AACC\nATCTA\n")).unwrap();
        assert!(matches!(
            validate_sequences(&uneven, 2),
            Err(Error::UnequalSequenceLengths {
                sequence_index: 1,
                expected: 4,
                actual: 5,
            })
        ));
    }

    #[test]
    fn test_validate_motifs() {
        let motifs = read_sequences(Cursor::new("AC\nAT\n")).unwrap();
        assert_eq!(validate_motifs(&motifs).unwrap(), 2);

        let motifs = read_sequences(Cursor::new("AC\nATT\n")).unwrap();
        assert!(matches!(
            validate_motifs(&motifs),
            Err(Error::MotifLengthMismatch { motif_index: 1, .. })
        ));
        assert!(matches!(validate_motifs(&[]), Err(Error::EmptyInput)));
    }
}
