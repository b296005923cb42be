//! A single train/test repetition.

use std::ops::Range;

/// One repetition of a resampling plan: a train index range and a test
/// index range into a dataset addressed by position.
///
/// Both ranges are half-open and ascending; the train range ends at or
/// before the start of the test range, and the two never overlap. The fold
/// is plain data: callers use the ranges to slice their own feature and
/// label containers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fold {
    /// Positions of the training samples.
    pub train: Range<usize>,
    /// Positions of the test samples.
    pub test: Range<usize>,
}

impl Fold {
    /// Number of training samples.
    pub fn train_len(&self) -> usize {
        self.train.len()
    }

    /// Number of test samples.
    pub fn test_len(&self) -> usize {
        self.test.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths() {
        let fold = Fold {
            train: 21..93,
            test: 93..104,
        };
        assert_eq!(fold.train_len(), 72);
        assert_eq!(fold.test_len(), 11);
    }

    #[test]
    fn slices_a_caller_container() {
        let data: Vec<u32> = (0..20).collect();
        let fold = Fold {
            train: 2..10,
            test: 12..16,
        };

        assert_eq!(&data[fold.train.clone()], &[2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(&data[fold.test.clone()], &[12, 13, 14, 15]);
    }
}
