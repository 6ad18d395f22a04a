use crate::{dna::Base, profile::ProfileMatrix};

/// Occurrences of each base at each motif position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CountMatrix {
    rows: Vec<[u32; Base::SIZE]>,
    /// The number of motifs that were counted.
    motif_count: usize,
}

impl CountMatrix {
    /// Counts the bases of the given motifs, which must all have length `motif_length`.
    pub fn from_motifs<'motif>(
        motifs: impl IntoIterator<Item = &'motif [Base]>,
        motif_length: usize,
    ) -> Self {
        let mut rows = vec![[0; Base::SIZE]; motif_length];
        let mut motif_count = 0;

        for motif in motifs {
            debug_assert_eq!(motif.len(), motif_length);
            for (row, base) in rows.iter_mut().zip(motif) {
                row[base.index()] += 1;
            }
            motif_count += 1;
        }

        Self { rows, motif_count }
    }

    pub fn rows(&self) -> &[[u32; Base::SIZE]] {
        &self.rows
    }

    pub fn motif_length(&self) -> usize {
        self.rows.len()
    }

    pub fn motif_count(&self) -> usize {
        self.motif_count
    }

    /// The number of bases disagreeing with the most frequent base of their position,
    /// summed over all positions.
    pub fn score(&self) -> usize {
        self.rows
            .iter()
            .map(|row| self.motif_count - row.iter().copied().max().unwrap_or(0) as usize)
            .sum()
    }

    /// The most frequent base at each position.
    ///
    /// Ties go to the base that comes first in the alphabet.
    pub fn consensus(&self) -> Vec<Base> {
        self.rows
            .iter()
            .map(|row| {
                let mut best = 0;
                for (index, &count) in row.iter().enumerate() {
                    if count > row[best] {
                        best = index;
                    }
                }
                Base::ALL[best]
            })
            .collect()
    }

    /// Adds a pseudocount of one to each cell and divides by twice the motif count.
    ///
    /// Without any motifs, every base gets the same probability.
    pub fn to_profile(&self) -> ProfileMatrix {
        if self.motif_count == 0 {
            return ProfileMatrix::uniform(self.motif_length());
        }

        let denominator = (2 * self.motif_count) as f64;
        ProfileMatrix::from_rows(
            self.rows
                .iter()
                .map(|row| row.map(|count| (count as f64 + 1.0) / denominator))
                .collect(),
        )
    }
}
