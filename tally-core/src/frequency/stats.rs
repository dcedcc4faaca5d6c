//! Summary snapshots and consistency checks.

use crate::frequency::types::WordFrequencies;
use tally_types::AnalysisSummary;

impl WordFrequencies {
    /// Returns a snapshot of the headline counters.
    #[inline]
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary::new(self.total_word_count(), self.unique_word_count())
    }

    /// Checks that the per-word counts add up to the running total and that
    /// no count is zero.
    pub fn is_consistent(&self) -> bool {
        let mut sum = 0usize;
        for &count in self.counts.values() {
            if count == 0 {
                return false;
            }
            sum += count;
        }
        sum == self.total && self.total >= self.counts.len()
    }
}
