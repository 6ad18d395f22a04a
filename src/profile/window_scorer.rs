use crate::dna::DnaSequence;

use super::ProfileMatrix;

/// The probability of each window of `sequence` under `profile`, ordered by offset.
pub fn window_probabilities(sequence: &DnaSequence, profile: &ProfileMatrix) -> Vec<f64> {
    sequence
        .windows(profile.len())
        .map(|window| profile.window_probability(window))
        .collect()
}

/// Log-space variant of [`window_probabilities`] for long motifs, where the plain
/// product underflows.
pub fn log_window_probabilities(sequence: &DnaSequence, profile: &ProfileMatrix) -> Vec<f64> {
    sequence
        .windows(profile.len())
        .map(|window| profile.log_window_probability(window))
        .collect()
}

/// The index of the largest value, or `None` if there are no values.
///
/// Ties resolve to the lowest index.
pub fn best_window(probabilities: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, &probability) in probabilities.iter().enumerate() {
        match best {
            Some((_, best_probability)) if probability <= best_probability => {}
            _ => best = Some((index, probability)),
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::{best_window, log_window_probabilities, window_probabilities};
    use crate::{dna::DnaSequence, profile::ProfileMatrix};

    #[test]
    fn test_one_probability_per_window() {
        let sequence = DnaSequence::parse("TTACCTTAAC", 0).unwrap();
        for length in 1..=sequence.len() {
            let profile = ProfileMatrix::uniform(length);
            let probabilities = window_probabilities(&sequence, &profile);
            assert_eq!(probabilities.len(), sequence.len() - length + 1);
            assert!(probabilities
                .iter()
                .all(|&probability| probability > 0.0 && probability <= 1.0));
        }
    }

    #[test]
    fn test_probabilities_follow_offsets() {
        let sequence = DnaSequence::parse("AACC", 0).unwrap();
        let profile = ProfileMatrix::from_rows(vec![
            [0.5, 0.125, 0.25, 0.125],
            [0.125, 0.5, 0.125, 0.25],
        ]);
        // AA, AC, CC
        assert_eq!(window_probabilities(&sequence, &profile), [0.0625, 0.25, 0.0625]);

        let log_probabilities = log_window_probabilities(&sequence, &profile);
        assert_eq!(log_probabilities.len(), 3);
        assert_eq!(best_window(&log_probabilities), Some(1));
    }

    #[test]
    fn test_best_window_ties_resolve_to_first() {
        assert_eq!(best_window(&[0.5, 0.7, 0.7, 0.1]), Some(1));
        assert_eq!(best_window(&[0.2, 0.2, 0.2]), Some(0));
        assert_eq!(best_window(&[0.1, 0.2, 0.3]), Some(2));
        assert_eq!(best_window(&[0.3]), Some(0));
        assert_eq!(best_window(&[]), None);
    }
}
