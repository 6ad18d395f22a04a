use log::{debug, info, trace};
use rand::Rng;

use crate::{dna::DnaSequence, error::Result, input::validate_sequences, motif_set::MotifSet};

use super::{BestResult, GibbsSampler, SearchParameters};

/// Repeats independent sampling runs and keeps the best result over all of them.
#[derive(Debug)]
pub struct RestartDriver<'sequences> {
    sequences: &'sequences [DnaSequence],
    parameters: SearchParameters,
}

impl<'sequences> RestartDriver<'sequences> {
    /// Fails if the sequences cannot be searched for motifs of the configured length.
    pub fn new(sequences: &'sequences [DnaSequence], parameters: SearchParameters) -> Result<Self> {
        validate_sequences(sequences, parameters.motif_length)?;
        Ok(Self {
            sequences,
            parameters,
        })
    }

    pub fn parameters(&self) -> &SearchParameters {
        &self.parameters
    }

    /// Runs all restarts.
    ///
    /// The incumbent starts out as one additional random motif set, and is only
    /// replaced by strictly better results, so earlier results win ties.
    pub fn run(&self, rng: &mut impl Rng) -> BestResult {
        let mut best = BestResult::new(MotifSet::random(
            self.sequences,
            self.parameters.motif_length,
            rng,
        ));
        debug!("Initial motif set has score {}", best.score());

        for restart in 0..self.parameters.repeats {
            let sampler = GibbsSampler::new(self.sequences, &self.parameters, rng);
            trace!(
                "Restart {restart} starts with score {}",
                sampler.motif_set().score()
            );
            let result = sampler.run(self.parameters.iterations, rng);
            let score = result.score();

            if best.merge(result) {
                debug!("Restart {restart} improved the score to {score}");
            } else {
                debug!("Restart {restart} finished with score {score}");
            }
        }

        info!(
            "Finished {} restarts of {} iterations with score {}",
            self.parameters.repeats,
            self.parameters.iterations,
            best.score()
        );
        best
    }
}
