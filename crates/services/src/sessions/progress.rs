/// Position of the candidate within an assessment, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// 1-based question number.
    pub position: usize,
    pub total: usize,
    pub percent: u8,
}

impl SessionProgress {
    #[must_use]
    pub fn at(index: usize, total: usize) -> Self {
        Self {
            position: index + 1,
            total,
            percent: progress_percent(index, total),
        }
    }
}

/// `round(100 * (index + 1) / total)`, rounding halves up.
#[must_use]
pub fn progress_percent(index: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let position = index.saturating_add(1).min(total);
    let scaled = (position * 200 + total) / (total * 2);
    u8::try_from(scaled).unwrap_or(100)
}

/// Counts shown in the submit confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitSummary {
    pub total: usize,
    pub answered: usize,
    pub unanswered: usize,
    /// Non-blocking hint that some questions have no answer.
    pub warn_unanswered: bool,
}

impl SubmitSummary {
    #[must_use]
    pub fn new(total: usize, answered: usize) -> Self {
        let unanswered = total.saturating_sub(answered);
        Self {
            total,
            answered,
            unanswered,
            warn_unanswered: unanswered > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_like_the_progress_bar() {
        assert_eq!(progress_percent(0, 8), 13);
        assert_eq!(progress_percent(3, 8), 50);
        assert_eq!(progress_percent(7, 8), 100);
        assert_eq!(progress_percent(0, 3), 33);
        assert_eq!(progress_percent(1, 3), 67);
        assert_eq!(progress_percent(0, 1), 100);
    }

    #[test]
    fn percent_matches_float_rounding_for_small_sets() {
        for total in 1..=40_usize {
            for index in 0..total {
                #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let expected = ((index + 1) as f64 * 100.0 / total as f64).round() as u8;
                assert_eq!(progress_percent(index, total), expected, "{index}/{total}");
            }
        }
    }

    #[test]
    fn summary_counts_add_up() {
        let summary = SubmitSummary::new(8, 3);
        assert_eq!(summary.unanswered, 5);
        assert!(summary.warn_unanswered);
        assert_eq!(summary.answered + summary.unanswered, summary.total);

        let complete = SubmitSummary::new(8, 8);
        assert_eq!(complete.unanswered, 0);
        assert!(!complete.warn_unanswered);
    }
}
