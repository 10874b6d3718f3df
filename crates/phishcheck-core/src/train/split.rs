//! Seeded stratified train/test split.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::TrainError;

/// Row indices of each side of a split, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Splits row indices so each class keeps its share on both sides.
///
/// Per class, `round(n * test_fraction)` rows go to the test side, clamped so
/// that both sides get at least one row. The same `seed` always produces the
/// same split.
pub fn stratified_split(
    labels: &[bool],
    test_fraction: f64,
    seed: u64,
) -> Result<Split, TrainError> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(TrainError::InvalidTestFraction(test_fraction));
    }
    if labels.is_empty() {
        return Err(TrainError::EmptyDataset);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train = Vec::with_capacity(labels.len());
    let mut test = Vec::new();

    for (class, name) in [(false, "legitimate"), (true, "phishing")] {
        let mut members: Vec<usize> = labels
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == class)
            .map(|(i, _)| i)
            .collect();
        match members.len() {
            0 => return Err(TrainError::MissingClass(name)),
            1 => {
                return Err(TrainError::ClassTooSmall {
                    label: name,
                    count: 1,
                })
            }
            _ => {}
        }
        members.shuffle(&mut rng);
        let n = members.len();
        let n_test = ((n as f64 * test_fraction).round() as usize).clamp(1, n - 1);
        test.extend_from_slice(&members[..n_test]);
        train.extend_from_slice(&members[n_test..]);
    }

    train.sort_unstable();
    test.sort_unstable();
    Ok(Split { train, test })
}
