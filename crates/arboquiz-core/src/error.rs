//! Quiz error types.
//!
//! Every variant except `EmptyCatalog` is recoverable: the caller keeps the
//! session and simply re-prompts. No variant leaves the session in a
//! corrupted state. Messages are French because they are shown to the
//! quiz-taker as-is.

use thiserror::Error;

/// Errors returned by the quiz contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuizError {
    /// The difficulty key is not one of the recognized levels.
    #[error("niveau de difficulté inconnu : {0}")]
    InvalidDifficulty(String),

    /// The submission carried no answer at all.
    #[error("veuillez entrer une réponse avant de valider")]
    EmptySubmission,

    /// `check_answer` was called before any question was generated.
    #[error("aucune question en cours")]
    NoActiveQuestion,

    /// The catalog contains no records; a random tree cannot be drawn.
    #[error("le catalogue d'arbres est vide")]
    EmptyCatalog,
}

impl QuizError {
    /// Returns `true` if this error should abort initialization rather than
    /// be retried.
    pub fn is_fatal(&self) -> bool {
        matches!(self, QuizError::EmptyCatalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatality_classification() {
        assert!(QuizError::EmptyCatalog.is_fatal());
        assert!(!QuizError::EmptySubmission.is_fatal());
        assert!(!QuizError::InvalidDifficulty("dur".into()).is_fatal());
        assert!(!QuizError::NoActiveQuestion.is_fatal());
    }

    #[test]
    fn display_carries_the_offending_key() {
        let err = QuizError::InvalidDifficulty("extrême".into());
        assert!(err.to_string().contains("extrême"));
    }
}
