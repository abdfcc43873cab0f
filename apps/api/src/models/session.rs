use serde::{Deserialize, Serialize};

/// In-memory state of the one interview session this process holds.
///
/// Invariant: after a successful generation, `answers.len() == questions.len()`
/// and `answers[i]` answers `questions[i]`. A new successful generation
/// replaces the whole session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterviewSession {
    pub job_description: String,
    pub resume_text: String,
    pub questions: Vec<String>,
    pub answers: Vec<String>,
}

impl InterviewSession {
    /// True once a generation action has succeeded.
    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }

    /// Replaces the session with freshly generated questions.
    /// Answers start blank, one per question.
    pub fn reset_with_questions(
        &mut self,
        job_description: String,
        resume_text: String,
        questions: Vec<String>,
    ) {
        self.answers = vec![String::new(); questions.len()];
        self.questions = questions;
        self.job_description = job_description;
        self.resume_text = resume_text;
    }

    /// Snapshot for persistence once scoring has produced output.
    pub fn to_record(&self, score_output: String) -> SessionRecord {
        SessionRecord {
            job_description: self.job_description.clone(),
            resume: self.resume_text.clone(),
            questions: self.questions.clone(),
            answers: self.answers.clone(),
            score_output,
        }
    }
}

/// One completed interview session as written to disk. Never updated after
/// the write; the record format is exactly these five fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub job_description: String,
    pub resume: String,
    pub questions: Vec<String>,
    pub answers: Vec<String>,
    pub score_output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_initializes_blank_answers_per_question() {
        let mut session = InterviewSession::default();
        session.reset_with_questions(
            "jd".to_string(),
            "resume".to_string(),
            vec!["Q1?".to_string(), "Q2?".to_string(), "Q3?".to_string()],
        );

        assert_eq!(session.answers.len(), session.questions.len());
        assert!(session.answers.iter().all(String::is_empty));
    }

    #[test]
    fn test_reset_overwrites_prior_session() {
        let mut session = InterviewSession {
            job_description: "old jd".to_string(),
            resume_text: "old resume".to_string(),
            questions: vec!["old?".to_string()],
            answers: vec!["old answer".to_string()],
        };

        session.reset_with_questions(
            "new jd".to_string(),
            "new resume".to_string(),
            vec!["new?".to_string(), "newer?".to_string()],
        );

        assert_eq!(session.job_description, "new jd");
        assert_eq!(session.questions, vec!["new?", "newer?"]);
        assert_eq!(session.answers, vec!["", ""]);
    }

    #[test]
    fn test_record_snapshot_carries_all_fields() {
        let session = InterviewSession {
            job_description: "jd".to_string(),
            resume_text: "resume".to_string(),
            questions: vec!["Q1?".to_string()],
            answers: vec!["A1".to_string()],
        };

        let record = session.to_record("8".to_string());
        assert_eq!(record.job_description, "jd");
        assert_eq!(record.resume, "resume");
        assert_eq!(record.questions, vec!["Q1?"]);
        assert_eq!(record.answers, vec!["A1"]);
        assert_eq!(record.score_output, "8");
    }
}
