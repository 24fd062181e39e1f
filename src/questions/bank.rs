/// Static trivia question bank
///
/// Loaded once at startup and never mutated afterwards.
use std::collections::HashSet;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::topic::{Topic, TopicFilter};
use crate::error::QuestionBankError;
use crate::game::RandomSource;

/// Point values a question may carry
pub const QUESTION_POINTS: [u32; 4] = [10, 20, 30, 50];

const EMBEDDED_QUESTIONS: &str = include_str!("../../assets/questions.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub topic: Topic,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub points: u32,
    pub explanation: String,
}

impl Question {
    /// Exact text comparison against the correct answer
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank, rejecting malformed questions
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(q.id.as_str()) {
                return Err(QuestionBankError::DuplicateId(q.id.clone()));
            }
            if q.options.is_empty() {
                return Err(QuestionBankError::NoOptions { id: q.id.clone() });
            }
            if !QUESTION_POINTS.contains(&q.points) {
                return Err(QuestionBankError::InvalidPoints {
                    id: q.id.clone(),
                    points: q.points,
                });
            }
            if q.options.iter().filter(|o| **o == q.correct_answer).count() != 1 {
                return Err(QuestionBankError::AnswerNotInOptions { id: q.id.clone() });
            }
        }

        Ok(Self { questions })
    }

    pub fn from_json(json: &str) -> Result<Self, QuestionBankError> {
        let questions: Vec<Question> =
            serde_json::from_str(json).map_err(QuestionBankError::ParseFailed)?;
        Self::new(questions)
    }

    /// The bank shipped with the application
    pub fn embedded() -> Result<Self, QuestionBankError> {
        let bank = Self::from_json(EMBEDDED_QUESTIONS)?;
        tracing::info!("Loaded {} embedded questions", bank.len());
        Ok(bank)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Questions matching the topic filter and point value
    pub fn filter(&self, topic: TopicFilter, points: u32) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.points == points && topic.matches(q.topic))
            .collect()
    }

    /// Uniformly pick one matching question, `None` when nothing matches
    pub fn pick(
        &self,
        topic: TopicFilter,
        points: u32,
        rng: &mut dyn RandomSource,
    ) -> Option<&Question> {
        self.filter(topic, points).choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScriptedSource;

    fn question(id: &str, topic: Topic, points: u32) -> Question {
        Question {
            id: id.to_string(),
            topic,
            question: format!("Question {}?", id),
            options: vec!["yes".to_string(), "no".to_string()],
            correct_answer: "yes".to_string(),
            points,
            explanation: "Because.".to_string(),
        }
    }

    #[test]
    fn test_embedded_bank_is_valid() {
        let bank = QuestionBank::embedded().unwrap();
        assert!(!bank.is_empty());
        for points in QUESTION_POINTS {
            assert!(!bank.filter(TopicFilter::All, points).is_empty());
        }
    }

    #[test]
    fn test_filter_by_topic_and_points() {
        let bank = QuestionBank::new(vec![
            question("a", Topic::Law, 10),
            question("b", Topic::Ethics, 10),
            question("c", Topic::Law, 20),
        ])
        .unwrap();

        assert_eq!(bank.filter(TopicFilter::All, 10).len(), 2);
        let law_10 = bank.filter(TopicFilter::Only(Topic::Law), 10);
        assert_eq!(law_10.len(), 1);
        assert_eq!(law_10[0].id, "a");
        assert!(bank.filter(TopicFilter::Only(Topic::Culture), 10).is_empty());
        assert!(bank.filter(TopicFilter::All, 50).is_empty());
    }

    #[test]
    fn test_pick_uses_random_source() {
        let bank = QuestionBank::new(vec![
            question("a", Topic::Law, 30),
            question("b", Topic::Ethics, 30),
            question("c", Topic::Culture, 30),
        ])
        .unwrap();

        let mut rng = ScriptedSource::from_picks(&[(2, 3), (0, 3)]);
        assert_eq!(bank.pick(TopicFilter::All, 30, &mut rng).unwrap().id, "c");
        assert_eq!(bank.pick(TopicFilter::All, 30, &mut rng).unwrap().id, "a");
        assert!(bank.pick(TopicFilter::All, 50, &mut rng).is_none());
    }

    #[test]
    fn test_rejects_answer_not_in_options() {
        let mut q = question("a", Topic::Law, 10);
        q.correct_answer = "maybe".to_string();
        assert!(matches!(
            QuestionBank::new(vec![q]),
            Err(QuestionBankError::AnswerNotInOptions { .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_points_and_duplicates() {
        assert!(matches!(
            QuestionBank::new(vec![question("a", Topic::Law, 15)]),
            Err(QuestionBankError::InvalidPoints { points: 15, .. })
        ));
        assert!(matches!(
            QuestionBank::new(vec![
                question("a", Topic::Law, 10),
                question("a", Topic::Ethics, 20)
            ]),
            Err(QuestionBankError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_exact_answer_comparison() {
        let q = question("a", Topic::Law, 10);
        assert!(q.is_correct("yes"));
        assert!(!q.is_correct("Yes"));
        assert!(!q.is_correct("yes "));
    }
}
