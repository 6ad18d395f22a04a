use std::fmt::{self, Display, Formatter};

use crate::error::{Error, Result};

/// A nucleotide of the closed DNA alphabet.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    pub const SIZE: usize = 4;

    pub const ALL: [Base; Base::SIZE] = [Base::A, Base::C, Base::G, Base::T];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn to_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
        }
    }
}

impl TryFrom<char> for Base {
    type Error = char;

    /// Only upper-case bases are accepted.
    fn try_from(character: char) -> std::result::Result<Self, Self::Error> {
        match character {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'T' => Ok(Base::T),
            other => Err(other),
        }
    }
}

impl Display for Base {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A validated DNA sequence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DnaSequence {
    bases: Vec<Base>,
}

impl DnaSequence {
    /// Parses `text`, reporting the first character outside of the alphabet.
    ///
    /// `sequence_index` only serves the error message.
    pub fn parse(text: &str, sequence_index: usize) -> Result<Self> {
        text.chars()
            .enumerate()
            .map(|(position, character)| {
                Base::try_from(character).map_err(|character| Error::InvalidSymbol {
                    character,
                    sequence_index,
                    position,
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn as_slice(&self) -> &[Base] {
        &self.bases
    }

    /// The window of length `length` starting at `offset`.
    pub fn window(&self, offset: usize, length: usize) -> &[Base] {
        &self.as_slice()[offset..offset + length]
    }

    /// All windows of length `length`, ordered by offset.
    pub fn windows(&self, length: usize) -> impl Iterator<Item = &[Base]> {
        self.bases.windows(length)
    }

    /// The number of windows of length `length`.
    pub fn window_count(&self, length: usize) -> usize {
        (self.len() + 1).saturating_sub(length)
    }
}

impl FromIterator<Base> for DnaSequence {
    fn from_iter<T: IntoIterator<Item = Base>>(iter: T) -> Self {
        Self {
            bases: iter.into_iter().collect(),
        }
    }
}

impl<'base> FromIterator<&'base Base> for DnaSequence {
    fn from_iter<T: IntoIterator<Item = &'base Base>>(iter: T) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl Display for DnaSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_bases(f, &self.bases)
    }
}

pub(crate) fn write_bases(f: &mut Formatter<'_>, bases: &[Base]) -> fmt::Result {
    for base in bases {
        write!(f, "{base}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Base, DnaSequence};
    use crate::error::Error;

    #[test]
    fn test_base_index_order() {
        for (index, base) in Base::ALL.into_iter().enumerate() {
            assert_eq!(base.index(), index);
            assert_eq!(Base::try_from(base.to_char()), Ok(base));
        }
        assert_eq!(Base::try_from('U'), Err('U'));
    }

    #[test]
    fn test_parse_valid() {
        let sequence = DnaSequence::parse("GATTACA", 0).unwrap();
        assert_eq!(sequence.len(), 7);
        assert_eq!(sequence.as_slice()[1], Base::A);
        assert_eq!(sequence.to_string(), "GATTACA");
    }

    #[test]
    fn test_parse_rejects_lower_case_and_ambiguous() {
        match DnaSequence::parse("ACgT", 3) {
            Err(Error::InvalidSymbol {
                character,
                sequence_index,
                position,
            }) => {
                assert_eq!(character, 'g');
                assert_eq!(sequence_index, 3);
                assert_eq!(position, 2);
            }
            other => panic!("unexpected result {other:?}"),
        }

        assert!(matches!(
            DnaSequence::parse("ACNT", 0),
            Err(Error::InvalidSymbol { character: 'N', .. })
        ));
    }

    #[test]
    fn test_windows() {
        let sequence = DnaSequence::parse("AACC", 0).unwrap();
        assert_eq!(sequence.window_count(2), 3);
        assert_eq!(sequence.window_count(4), 1);
        assert_eq!(sequence.window_count(5), 0);

        let windows: Vec<String> = sequence
            .windows(2)
            .map(|window| window.iter().collect::<DnaSequence>().to_string())
            .collect();
        assert_eq!(windows, ["AA", "AC", "CC"]);
        assert_eq!(sequence.window(1, 3), &[Base::A, Base::C, Base::C]);
    }
}
