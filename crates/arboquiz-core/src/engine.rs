//! Quiz session engine: question generation, answer checking, scoring.
//!
//! One `QuizEngine` owns one quiz-taker's session. Every operation is a
//! fast, synchronous computation over the in-memory catalog; hosts serving
//! several quiz-takers give each one their own engine.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{TreeCatalog, HELP_TEXT};
use crate::error::QuizError;
use crate::model::{Difficulty, FieldKind, TreeRecord};
use crate::normalize::normalize;

/// Attempts granted per question before the answers are revealed.
pub const MAX_ATTEMPTS: u32 = 3;

/// Answers submitted for grading, keyed by field kind. Keys outside the
/// current question's expected fields are ignored.
pub type Submission = BTreeMap<FieldKind, String>;

/// Mutable state of one quiz-taker's session.
///
/// Ground-truth values are captured at question-generation time, decoupled
/// from the catalog record, so an in-flight question can never change under
/// the quiz-taker.
#[derive(Debug, Clone, Default)]
struct QuizSession {
    difficulty: Difficulty,
    current_tree: Option<TreeRecord>,
    expected: Vec<(FieldKind, String)>,
    attempts: u32,
    correct_count: u32,
    total_count: u32,
}

/// A freshly generated question, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Full French prompt enumerating the fields to guess.
    pub prompt: String,
    /// Hint lines (`"{icon} {label}: {value}"`) for the fields not asked.
    pub hints: Vec<String>,
    /// How many fields the quiz-taker must supply.
    pub fields_to_guess: usize,
    /// Attempts already made on this question (always 0 on a new question).
    pub attempts: u32,
    /// Image reference of the quizzed tree, passed through unmodified.
    pub image_path: String,
}

/// Outcome of grading one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldResult {
    /// Whether the submitted answer matched after normalization.
    pub correct: bool,
    /// Raw ground-truth value, for display.
    pub ground_truth: String,
    /// Whether the answer should now be shown to the quiz-taker.
    pub revealed: bool,
}

/// Outcome of grading one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Per-field outcomes, keyed by field kind.
    pub per_field: BTreeMap<FieldKind, FieldResult>,
    /// Whether every expected field was answered correctly.
    pub all_correct: bool,
    /// Attempts remaining before the reveal; negative if grading continued
    /// past it.
    pub attempts_left: i32,
    /// True once the attempt budget is exhausted and answers are disclosed.
    pub reveal_answers: bool,
    /// Running score, formatted `"{correct}/{total} ({percent}%)"`.
    pub score_summary: String,
}

/// The quiz engine: owns one session's lifecycle of question generation and
/// answer checking against a catalog.
pub struct QuizEngine<R: Rng> {
    catalog: TreeCatalog,
    rng: R,
    session: QuizSession,
}

impl QuizEngine<rand::rngs::ThreadRng> {
    /// Engine backed by the thread-local random generator.
    pub fn new(catalog: TreeCatalog) -> Self {
        Self::with_rng(catalog, rand::thread_rng())
    }
}

impl<R: Rng> QuizEngine<R> {
    /// Engine with a caller-supplied random source. Seed it for
    /// deterministic question selection in tests.
    pub fn with_rng(catalog: TreeCatalog, rng: R) -> Self {
        Self {
            catalog,
            rng,
            session: QuizSession::default(),
        }
    }

    /// Set the difficulty from a level key (`"facile"`, `"moyen"`).
    ///
    /// Takes effect on the next `new_question`. An unrecognized key is
    /// rejected and the prior setting kept.
    pub fn set_difficulty(&mut self, key: &str) -> Result<(), QuizError> {
        let level: Difficulty = key
            .parse()
            .map_err(|_| QuizError::InvalidDifficulty(key.to_string()))?;
        self.session.difficulty = level;
        Ok(())
    }

    /// Generate a new question, fully superseding any in-flight one.
    ///
    /// Selects a record uniformly at random (draws are independent), then
    /// draws `min(difficulty, candidates)` fields to guess without
    /// replacement. Every unchosen candidate becomes a hint.
    pub fn new_question(&mut self) -> Question {
        self.session.attempts = 0;

        let index = self.rng.gen_range(0..self.catalog.len());
        let tree = self.catalog.trees()[index].clone();

        let candidates = self.candidate_fields(&tree);
        let k = self.session.difficulty.guess_count().min(candidates.len());
        let chosen: Vec<FieldKind> = candidates
            .choose_multiple(&mut self.rng, k)
            .copied()
            .collect();

        let mut asked = Vec::new();
        let mut hints = Vec::new();
        for &kind in &candidates {
            if chosen.contains(&kind) {
                asked.push(kind.label_with_article());
            } else {
                hints.push(format!(
                    "{} {}: {}",
                    kind.icon(),
                    kind.label(),
                    tree.field(kind)
                ));
            }
        }

        if asked.len() > 1 {
            let last = asked.len() - 1;
            asked[last] = format!("et {}", asked[last]);
        }
        let prompt = format!("Pour cet arbre, trouvez {} :", asked.join(", "));

        self.session.expected = candidates
            .iter()
            .filter(|kind| chosen.contains(kind))
            .map(|&kind| (kind, tree.field(kind).to_string()))
            .collect();
        let image_path = tree.image_path.clone();
        self.session.current_tree = Some(tree);

        Question {
            prompt,
            hints,
            fields_to_guess: self.session.expected.len(),
            attempts: 0,
            image_path,
        }
    }

    /// Grade a submission against the current question.
    ///
    /// An empty submission is rejected without consuming an attempt. The
    /// question resolves, and the score counters move, only when every field
    /// is correct or the attempt budget is exhausted; otherwise the same
    /// question stays live for another try.
    pub fn check_answer(&mut self, submitted: &Submission) -> Result<Feedback, QuizError> {
        if self.session.expected.is_empty() {
            return Err(QuizError::NoActiveQuestion);
        }
        if submitted.is_empty() || submitted.values().all(|v| v.trim().is_empty()) {
            return Err(QuizError::EmptySubmission);
        }

        self.session.attempts += 1;
        let reveal_answers = self.session.attempts >= MAX_ATTEMPTS;

        let mut per_field = BTreeMap::new();
        let mut correct_fields = 0usize;
        for (kind, truth) in &self.session.expected {
            let answer = submitted.get(kind).map(String::as_str).unwrap_or("");
            let correct = normalize(answer) == normalize(truth);
            if correct {
                correct_fields += 1;
            }
            per_field.insert(
                *kind,
                FieldResult {
                    correct,
                    ground_truth: truth.clone(),
                    revealed: reveal_answers,
                },
            );
        }

        let all_correct = correct_fields == self.session.expected.len();
        if all_correct || reveal_answers {
            self.session.total_count += 1;
            if all_correct {
                self.session.correct_count += 1;
            }
        }

        Ok(Feedback {
            per_field,
            all_correct,
            attempts_left: MAX_ATTEMPTS as i32 - self.session.attempts as i32,
            reveal_answers,
            score_summary: self.score_summary(),
        })
    }

    /// Running score, formatted `"{correct}/{total} ({percent}%)"` with a
    /// floored integer percentage.
    pub fn score_summary(&self) -> String {
        let percent = if self.session.total_count > 0 {
            self.session.correct_count * 100 / self.session.total_count
        } else {
            0
        };
        format!(
            "{}/{} ({percent}%)",
            self.session.correct_count, self.session.total_count
        )
    }

    /// Static French usage guide.
    pub fn help_text(&self) -> &'static str {
        HELP_TEXT
    }

    /// Current difficulty level.
    pub fn difficulty(&self) -> Difficulty {
        self.session.difficulty
    }

    /// Attempts made on the current question.
    pub fn attempts(&self) -> u32 {
        self.session.attempts
    }

    /// Questions answered fully correctly.
    pub fn correct_count(&self) -> u32 {
        self.session.correct_count
    }

    /// Questions resolved (answered correctly or revealed).
    pub fn total_count(&self) -> u32 {
        self.session.total_count
    }

    /// The record being quizzed, if a question is active.
    pub fn current_tree(&self) -> Option<&TreeRecord> {
        self.session.current_tree.as_ref()
    }

    /// Field kinds the quiz-taker must supply for the current question, in
    /// display order.
    pub fn expected_fields(&self) -> Vec<FieldKind> {
        self.session.expected.iter().map(|(kind, _)| *kind).collect()
    }

    /// The catalog this engine quizzes from.
    pub fn catalog(&self) -> &TreeCatalog {
        &self.catalog
    }

    /// Candidate fields for `tree`, in fixed order. Genus drops out entirely
    /// when shared by two or more catalog records: it neither identifies the
    /// tree as a question nor is shown as a hint.
    fn candidate_fields(&self, tree: &TreeRecord) -> Vec<FieldKind> {
        FieldKind::ALL
            .into_iter()
            .filter(|&kind| {
                kind != FieldKind::Genus || !self.catalog.genus_is_ambiguous(&tree.genus)
            })
            .collect()
    }
}
