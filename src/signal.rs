// =============================================================================
// Signal Set — input plus its two derived series
// =============================================================================
//
// A `SignalSet` is built once per run from a borrowed input slice and is
// read-only afterwards.  All three series always share the input's length.

use crate::transforms::{calculate_first_difference, calculate_running_sum};

/// Which of the three series a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Input,
    RunningSum,
    FirstDifference,
}

impl SignalKind {
    /// All kinds, in the order they are persisted.
    pub const ALL: [SignalKind; 3] = [Self::Input, Self::RunningSum, Self::FirstDifference];

    /// Default output file name for this series.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Input => "input_signal.dat",
            Self::RunningSum => "running_sum_signal.dat",
            Self::FirstDifference => "first_diff_signal.dat",
        }
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::RunningSum => write!(f, "running_sum"),
            Self::FirstDifference => write!(f, "first_difference"),
        }
    }
}

/// The input series and the two transforms computed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalSet {
    input: Vec<f64>,
    running_sum: Vec<f64>,
    first_difference: Vec<f64>,
}

impl SignalSet {
    /// Run both transforms over `input`.
    pub fn from_input(input: &[f64]) -> Self {
        Self {
            input: input.to_vec(),
            running_sum: calculate_running_sum(input),
            first_difference: calculate_first_difference(input),
        }
    }

    pub fn input(&self) -> &[f64] {
        &self.input
    }

    pub fn running_sum(&self) -> &[f64] {
        &self.running_sum
    }

    pub fn first_difference(&self) -> &[f64] {
        &self.first_difference
    }

    /// Number of samples in each series.
    pub fn len(&self) -> usize {
        self.input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// True when all three series have the same length.
    pub fn lengths_match(&self) -> bool {
        self.running_sum.len() == self.input.len()
            && self.first_difference.len() == self.input.len()
    }

    pub fn get(&self, kind: SignalKind) -> &[f64] {
        match kind {
            SignalKind::Input => self.input(),
            SignalKind::RunningSum => self.running_sum(),
            SignalKind::FirstDifference => self.first_difference(),
        }
    }

    /// Iterate over `(kind, series)` pairs in persistence order.
    pub fn iter(&self) -> impl Iterator<Item = (SignalKind, &[f64])> + '_ {
        SignalKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}
