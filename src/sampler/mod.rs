use log::trace;
use rand::Rng;
use rand_distr::{Distribution, WeightedIndex};

use crate::{
    dna::DnaSequence,
    motif_set::{Motif, MotifSet},
    profile::{best_window, log_window_probabilities, window_probabilities},
};

pub use restart::RestartDriver;

mod restart;

/// How a sampling step picks the new window of the left-out sequence.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WindowSelection {
    /// Take the most probable window, the first one on ties.
    #[default]
    ArgMax,
    /// Draw a window with probability proportional to its profile probability.
    ///
    /// This is the textbook Gibbs sampler and deviates from the default search.
    Weighted,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchParameters {
    pub motif_length: usize,
    /// Sampling steps per restart.
    pub iterations: usize,
    pub repeats: usize,
    pub selection: WindowSelection,
    /// Accumulate window probabilities in log space.
    pub log_space: bool,
}

impl SearchParameters {
    pub const DEFAULT_ITERATIONS: usize = 20;
    pub const DEFAULT_REPEATS: usize = 40;

    pub fn new(motif_length: usize) -> Self {
        Self {
            motif_length,
            iterations: Self::DEFAULT_ITERATIONS,
            repeats: Self::DEFAULT_REPEATS,
            selection: WindowSelection::default(),
            log_space: false,
        }
    }
}

/// The lowest-scoring motif set seen so far.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BestResult {
    motif_set: MotifSet,
    score: usize,
}

impl BestResult {
    pub fn new(motif_set: MotifSet) -> Self {
        let score = motif_set.score();
        Self { motif_set, score }
    }

    pub fn motif_set(&self) -> &MotifSet {
        &self.motif_set
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Takes a copy of `motif_set` if it scores strictly lower.
    pub fn offer(&mut self, motif_set: &MotifSet) -> bool {
        let score = motif_set.score();
        if score < self.score {
            *self = Self {
                motif_set: motif_set.clone(),
                score,
            };
            true
        } else {
            false
        }
    }

    /// Takes `other` if it scores strictly lower.
    pub fn merge(&mut self, other: BestResult) -> bool {
        if other.score < self.score {
            *self = other;
            true
        } else {
            false
        }
    }
}

/// A single run of leave-one-out resampling.
pub struct GibbsSampler<'sequences> {
    sequences: &'sequences [DnaSequence],
    motif_set: MotifSet,
    best: BestResult,
    selection: WindowSelection,
    log_space: bool,
}

impl<'sequences> GibbsSampler<'sequences> {
    /// Starts from a random window in each sequence.
    pub fn new(
        sequences: &'sequences [DnaSequence],
        parameters: &SearchParameters,
        rng: &mut impl Rng,
    ) -> Self {
        let motif_set = MotifSet::random(sequences, parameters.motif_length, rng);
        Self::from_motif_set(sequences, motif_set, parameters)
    }

    pub fn from_motif_set(
        sequences: &'sequences [DnaSequence],
        motif_set: MotifSet,
        parameters: &SearchParameters,
    ) -> Self {
        assert_eq!(motif_set.len(), sequences.len());
        Self {
            sequences,
            best: BestResult::new(motif_set.clone()),
            motif_set,
            selection: parameters.selection,
            log_space: parameters.log_space,
        }
    }

    pub fn motif_set(&self) -> &MotifSet {
        &self.motif_set
    }

    /// Replaces the motif of one random sequence by the window that fits the
    /// profile of all other motifs, and records the motif set if it improved.
    ///
    /// Returns true if the best result improved.
    pub fn step(&mut self, rng: &mut impl Rng) -> bool {
        let index = rng.gen_range(0..self.motif_set.len());
        let sequences = self.sequences;
        let sequence = &sequences[index];
        let motif_length = self.motif_set.motif_length();

        let profile = self.motif_set.profile_without(index);
        let offset = if self.log_space {
            let log_probabilities = log_window_probabilities(sequence, &profile);
            self.select_window(&log_probabilities, true, rng)
        } else {
            let probabilities = window_probabilities(sequence, &profile);
            self.select_window(&probabilities, false, rng)
        };

        let old = self
            .motif_set
            .replace(index, Motif::from_window(sequence, offset, motif_length));
        trace!(
            "Sequence {index}: moved motif from offset {} to {offset}",
            old.offset()
        );

        self.best.offer(&self.motif_set)
    }

    fn select_window(&self, scores: &[f64], log_space: bool, rng: &mut impl Rng) -> usize {
        let best = best_window(scores).unwrap_or(0);
        match self.selection {
            WindowSelection::ArgMax => best,
            WindowSelection::Weighted => {
                let weights: Vec<f64> = if log_space {
                    let maximum = scores[best];
                    scores.iter().map(|score| (score - maximum).exp()).collect()
                } else {
                    scores.to_vec()
                };
                match WeightedIndex::new(&weights) {
                    Ok(distribution) => distribution.sample(rng),
                    Err(error) => {
                        trace!("Cannot draw a weighted window ({error}), taking the best one");
                        best
                    }
                }
            }
        }
    }

    /// Performs `iterations` steps and returns the best motif set seen.
    pub fn run(mut self, iterations: usize, rng: &mut impl Rng) -> BestResult {
        for _ in 0..iterations {
            self.step(rng);
        }
        self.best
    }
}
