use crate::dna::Base;

pub use window_scorer::{best_window, log_window_probabilities, window_probabilities};

mod window_scorer;

/// Position-specific base probabilities of a motif.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileMatrix {
    rows: Vec<[f64; Base::SIZE]>,
}

impl ProfileMatrix {
    pub fn from_rows(rows: Vec<[f64; Base::SIZE]>) -> Self {
        Self { rows }
    }

    pub fn uniform(length: usize) -> Self {
        Self::from_rows(vec![[1.0 / Base::SIZE as f64; Base::SIZE]; length])
    }

    pub fn rows(&self) -> &[[f64; Base::SIZE]] {
        &self.rows
    }

    /// The motif length this profile describes.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// The sum of the probabilities at `position`.
    ///
    /// Profiles built from counts share the same total across all rows,
    /// which is exactly one only for profiles of four motifs.
    pub fn row_total(&self, position: usize) -> f64 {
        self.rows[position].iter().sum()
    }

    /// A copy of this profile with each row rescaled to sum to one.
    pub fn normalized(&self) -> Self {
        Self::from_rows(
            self.rows
                .iter()
                .map(|row| {
                    let total: f64 = row.iter().sum();
                    row.map(|probability| probability / total)
                })
                .collect(),
        )
    }

    /// The product of the probabilities of the bases of `window`.
    pub fn window_probability(&self, window: &[Base]) -> f64 {
        debug_assert_eq!(window.len(), self.len());
        self.rows
            .iter()
            .zip(window)
            .map(|(row, base)| row[base.index()])
            .product()
    }

    /// Like [`Self::window_probability`], but accumulated in log space.
    pub fn log_window_probability(&self, window: &[Base]) -> f64 {
        debug_assert_eq!(window.len(), self.len());
        self.rows
            .iter()
            .zip(window)
            .map(|(row, base)| row[base.index()].ln())
            .sum()
    }
}
