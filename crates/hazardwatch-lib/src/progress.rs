//! In-memory per-user quiz progress with achievement flags.
//!
//! State lives for the lifetime of the process only; there is no
//! persistence layer behind this tracker.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;

use crate::quiz::QuizResult;

/// Quizzes needed for the veteran achievement.
const VETERAN_QUIZ_COUNT: u32 = 5;

/// Gamified flags derived from a user's quiz history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Achievements {
    /// Completed at least one quiz.
    pub first_quiz: bool,
    /// Answered every question of some quiz correctly.
    pub perfect_score: bool,
    /// Completed five or more quizzes.
    pub quiz_veteran: bool,
}

/// Summary of a user's progress, as returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub quizzes_completed: u32,
    pub average_score: f64,
    pub achievements: Achievements,
}

#[derive(Debug, Default, Clone)]
struct UserRecord {
    quizzes_completed: u32,
    total_score: u64,
    perfect_scores: u32,
}

/// Tracks quiz results per user id.
///
/// Interior mutability so the tracker can be shared behind an `Arc` across
/// concurrent request handlers.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    users: Mutex<HashMap<String, UserRecord>>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one scored quiz for a user.
    pub fn record_quiz(&self, user_id: &str, result: &QuizResult) {
        let mut users = self.lock();
        let record = users.entry(user_id.to_string()).or_default();
        record.quizzes_completed += 1;
        record.total_score += u64::from(result.score);
        if result.total > 0 && result.score == result.total {
            record.perfect_scores += 1;
        }
    }

    /// Progress summary for a user; an unknown user gets a zeroed summary.
    pub fn summary(&self, user_id: &str) -> ProgressSummary {
        let users = self.lock();
        let record = users.get(user_id).cloned().unwrap_or_default();

        let average_score = if record.quizzes_completed > 0 {
            record.total_score as f64 / f64::from(record.quizzes_completed)
        } else {
            0.0
        };

        ProgressSummary {
            quizzes_completed: record.quizzes_completed,
            average_score,
            achievements: Achievements {
                first_quiz: record.quizzes_completed >= 1,
                perfect_score: record.perfect_scores >= 1,
                quiz_veteran: record.quizzes_completed >= VETERAN_QUIZ_COUNT,
            },
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, UserRecord>> {
        // A poisoned lock only means a panicking scorer mid-update; the
        // tally data stays usable.
        self.users
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: u32, total: u32) -> QuizResult {
        QuizResult {
            score,
            total,
            feedback: String::new(),
        }
    }

    #[test]
    fn unknown_user_has_a_zeroed_summary() {
        let tracker = ProgressTracker::new();
        let summary = tracker.summary("nobody");
        assert_eq!(summary.quizzes_completed, 0);
        assert_eq!(summary.average_score, 0.0);
        assert_eq!(summary.achievements, Achievements::default());
    }

    #[test]
    fn first_quiz_sets_the_flag_and_average() {
        let tracker = ProgressTracker::new();
        tracker.record_quiz("ada", &result(3, 5));

        let summary = tracker.summary("ada");
        assert_eq!(summary.quizzes_completed, 1);
        assert_eq!(summary.average_score, 3.0);
        assert!(summary.achievements.first_quiz);
        assert!(!summary.achievements.perfect_score);
        assert!(!summary.achievements.quiz_veteran);
    }

    #[test]
    fn perfect_score_is_flagged_but_not_for_empty_quizzes() {
        let tracker = ProgressTracker::new();
        tracker.record_quiz("ada", &result(0, 0));
        assert!(!tracker.summary("ada").achievements.perfect_score);

        tracker.record_quiz("ada", &result(5, 5));
        assert!(tracker.summary("ada").achievements.perfect_score);
    }

    #[test]
    fn five_quizzes_earn_the_veteran_flag() {
        let tracker = ProgressTracker::new();
        for _ in 0..4 {
            tracker.record_quiz("ada", &result(2, 5));
        }
        assert!(!tracker.summary("ada").achievements.quiz_veteran);

        tracker.record_quiz("ada", &result(2, 5));
        assert!(tracker.summary("ada").achievements.quiz_veteran);
    }

    #[test]
    fn averages_accumulate_across_quizzes() {
        let tracker = ProgressTracker::new();
        tracker.record_quiz("ada", &result(2, 5));
        tracker.record_quiz("ada", &result(4, 5));

        let summary = tracker.summary("ada");
        assert_eq!(summary.quizzes_completed, 2);
        assert_eq!(summary.average_score, 3.0);
    }

    #[test]
    fn users_are_tracked_independently() {
        let tracker = ProgressTracker::new();
        tracker.record_quiz("ada", &result(5, 5));

        assert_eq!(tracker.summary("ada").quizzes_completed, 1);
        assert_eq!(tracker.summary("grace").quizzes_completed, 0);
    }
}
