use std::fmt::{self, Display, Formatter};

use rand::Rng;

use crate::{
    count_matrix::CountMatrix,
    dna::{write_bases, Base, DnaSequence},
    profile::ProfileMatrix,
};

/// A window of a parent sequence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Motif {
    offset: usize,
    bases: Vec<Base>,
}

impl Motif {
    pub fn from_window(sequence: &DnaSequence, offset: usize, length: usize) -> Self {
        Self {
            offset,
            bases: sequence.window(offset, length).to_vec(),
        }
    }

    /// The offset of this motif in its parent sequence.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }
}

impl Display for Motif {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_bases(f, &self.bases)
    }
}

/// One motif per input sequence, all of the same length.
///
/// The motif at index `i` is always a window of sequence `i`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MotifSet {
    motifs: Vec<Motif>,
    motif_length: usize,
}

impl MotifSet {
    /// Chooses a window uniformly at random from each sequence.
    ///
    /// Every sequence must have at least `motif_length` bases.
    pub fn random(sequences: &[DnaSequence], motif_length: usize, rng: &mut impl Rng) -> Self {
        Self::from_offsets(
            sequences,
            sequences
                .iter()
                .map(|sequence| rng.gen_range(0..sequence.window_count(motif_length)))
                .collect::<Vec<_>>(),
            motif_length,
        )
    }

    pub fn from_offsets(
        sequences: &[DnaSequence],
        offsets: impl IntoIterator<Item = usize>,
        motif_length: usize,
    ) -> Self {
        let motifs: Vec<_> = sequences
            .iter()
            .zip(offsets)
            .map(|(sequence, offset)| Motif::from_window(sequence, offset, motif_length))
            .collect();
        debug_assert_eq!(motifs.len(), sequences.len());

        Self {
            motifs,
            motif_length,
        }
    }

    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    pub fn motif_length(&self) -> usize {
        self.motif_length
    }

    pub fn motifs(&self) -> &[Motif] {
        &self.motifs
    }

    pub fn iter(&self) -> impl Iterator<Item = &Motif> {
        self.motifs.iter()
    }

    /// All motifs except the one at `index`.
    pub fn iter_without(&self, index: usize) -> impl Iterator<Item = &Motif> {
        self.motifs
            .iter()
            .enumerate()
            .filter(move |(current_index, _)| *current_index != index)
            .map(|(_, motif)| motif)
    }

    /// Replaces the motif at `index`, returning the old one.
    pub fn replace(&mut self, index: usize, motif: Motif) -> Motif {
        assert_eq!(motif.len(), self.motif_length);
        std::mem::replace(&mut self.motifs[index], motif)
    }

    pub fn counts(&self) -> CountMatrix {
        CountMatrix::from_motifs(self.iter().map(Motif::bases), self.motif_length)
    }

    /// The consensus mismatch score, lower is better.
    pub fn score(&self) -> usize {
        self.counts().score()
    }

    pub fn profile(&self) -> ProfileMatrix {
        self.counts().to_profile()
    }

    /// The profile of all motifs except the one at `index`.
    pub fn profile_without(&self, index: usize) -> ProfileMatrix {
        CountMatrix::from_motifs(
            self.iter_without(index).map(Motif::bases),
            self.motif_length,
        )
        .to_profile()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    use super::MotifSet;
    use crate::dna::DnaSequence;

    fn sequences(texts: &[&str]) -> Vec<DnaSequence> {
        texts
            .iter()
            .enumerate()
            .map(|(index, text)| DnaSequence::parse(text, index).unwrap())
            .collect()
    }

    #[test]
    fn test_random_windows_are_substrings() {
        let sequences = sequences(&["TTACCTTAAC", "GATGTCTGTC", "CCGGCGTTAG"]);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);

        for _ in 0..100 {
            let motif_set = MotifSet::random(&sequences, 4, &mut rng);
            assert_eq!(motif_set.len(), 3);
            for (motif, sequence) in motif_set.iter().zip(&sequences) {
                assert_eq!(motif.len(), 4);
                assert!(motif.offset() <= 6);
                assert_eq!(motif.bases(), sequence.window(motif.offset(), 4));
            }
        }
    }

    #[test]
    fn test_full_length_motifs_are_the_sequences() {
        let sequences = sequences(&["AACC", "ATCT", "GGAC", "TCAC"]);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let motif_set = MotifSet::random(&sequences, 4, &mut rng);

        for (motif, sequence) in motif_set.iter().zip(&sequences) {
            assert_eq!(motif.offset(), 0);
            assert_eq!(motif.to_string(), sequence.to_string());
        }
    }

    #[test]
    fn test_replace_and_iter_without() {
        let sequences = sequences(&["AACC", "ATCT", "GGAC"]);
        let mut motif_set = MotifSet::from_offsets(&sequences, [0, 1, 2], 2);
        let motifs: Vec<String> = motif_set.iter().map(ToString::to_string).collect();
        assert_eq!(motifs, ["AA", "TC", "AC"]);

        let others: Vec<String> = motif_set.iter_without(1).map(ToString::to_string).collect();
        assert_eq!(others, ["AA", "AC"]);

        let old = motif_set.replace(1, super::Motif::from_window(&sequences[1], 0, 2));
        assert_eq!(old.to_string(), "TC");
        assert_eq!(motif_set.motifs()[1].to_string(), "AT");
        assert_eq!(motif_set.motifs()[1].offset(), 0);
    }

    #[test]
    fn test_score_is_idempotent() {
        let sequences = sequences(&["AACC", "ATCT", "GGAC", "TCAC"]);
        let motif_set = MotifSet::from_offsets(&sequences, [1, 0, 2, 2], 2);
        let first = motif_set.score();
        assert_eq!(first, motif_set.score());
        assert_eq!(first, 1);
    }
}
