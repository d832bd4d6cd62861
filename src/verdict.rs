//! Verdict types and determination logic

use serde::Serialize;

/// Outcome of comparing a run against the expected answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Output matches the expected answer
    Accepted,
    /// Output does not match expected
    WrongAnswer,
    /// Solution failed before producing output
    RuntimeError,
}

impl Verdict {
    /// Get short code for verdict
    pub fn code(&self) -> &'static str {
        match self {
            Verdict::Accepted => "AC",
            Verdict::WrongAnswer => "WA",
            Verdict::RuntimeError => "RE",
        }
    }

    /// Check if verdict is a failure (not accepted)
    pub fn is_failure(&self) -> bool {
        !matches!(self, Verdict::Accepted)
    }

    /// Compare produced output with the expected answer, ignoring surrounding whitespace
    pub fn judge(actual: &str, expected: &str) -> Self {
        if actual.trim() == expected.trim() {
            Verdict::Accepted
        } else {
            Verdict::WrongAnswer
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Structured summary of one judged run, emitted to the log
#[derive(Debug, Clone, Serialize)]
pub struct JudgeReport {
    pub solution: &'static str,
    pub verdict: Verdict,
    pub time_ms: u64,
    pub expected_output: String,
    pub actual_output: String,
}

impl JudgeReport {
    pub fn new(solution: &'static str, actual: &str, expected: &str, time_ms: u64) -> Self {
        Self {
            solution,
            verdict: Verdict::judge(actual, expected),
            time_ms,
            expected_output: expected.trim().to_string(),
            actual_output: actual.trim().to_string(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_judge_trims_surrounding_whitespace() {
        assert_eq!(Verdict::judge("2", "2\n"), Verdict::Accepted);
        assert_eq!(Verdict::judge("  -1 ", "-1"), Verdict::Accepted);
    }

    #[test]
    fn test_judge_keeps_inner_whitespace() {
        assert_eq!(Verdict::judge("1  2", "1 2"), Verdict::WrongAnswer);
        assert_eq!(Verdict::judge("3", "2"), Verdict::WrongAnswer);
    }

    #[test]
    fn test_verdict_codes() {
        assert_eq!(Verdict::Accepted.to_string(), "AC");
        assert_eq!(Verdict::WrongAnswer.code(), "WA");
        assert!(Verdict::RuntimeError.is_failure());
        assert!(!Verdict::Accepted.is_failure());
    }

    #[test]
    fn test_report_serializes_verdict_name() {
        let report = JudgeReport::new("binary_search", "2", "3\n", 4);
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();

        assert_eq!(json["verdict"], "WRONG_ANSWER");
        assert_eq!(json["expected_output"], "3");
        assert_eq!(json["time_ms"], 4);
    }
}
