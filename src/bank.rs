// src/bank.rs

use std::collections::HashSet;

use crate::error::BankError;
use crate::model::{PLACEHOLDER, Question};

/// Banco de preguntas ya validado. Inmutable durante toda la sesión.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Valida el banco completo y falla en el primer defecto encontrado.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        let mut seen_ids = HashSet::new();
        for q in &questions {
            if q.id == 0 {
                return Err(BankError::ZeroQuestionId);
            }
            if !seen_ids.insert(q.id) {
                return Err(BankError::DuplicateQuestionId(q.id));
            }
            validate_question(q)?;
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

fn validate_question(q: &Question) -> Result<(), BankError> {
    let question_id = q.id;

    let found = q.sentence.matches(PLACEHOLDER).count();
    if found != 1 {
        return Err(BankError::Placeholder { question_id, found });
    }

    let required = [
        ("sentence", &q.sentence),
        ("explanation.correct_answer", &q.explanation.correct_answer),
        ("explanation.rule", &q.explanation.rule),
        ("explanation.example", &q.explanation.example),
        ("explanation.common_mistake", &q.explanation.common_mistake),
    ];
    if let Some(&(field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
        return Err(BankError::EmptyField { question_id, field });
    }

    if q.options.len() < 2 {
        return Err(BankError::TooFewOptions {
            question_id,
            count: q.options.len(),
        });
    }

    let mut option_ids = HashSet::new();
    for option in &q.options {
        if option.id.trim().is_empty() || option.text.trim().is_empty() {
            return Err(BankError::EmptyOption { question_id });
        }
        if !option_ids.insert(option.id.as_str()) {
            return Err(BankError::DuplicateOptionId {
                question_id,
                option_id: option.id.clone(),
            });
        }
    }

    if !q.has_option(&q.correct_option_id) {
        return Err(BankError::UnknownCorrectOption {
            question_id,
            option_id: q.correct_option_id.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizOption;
    use crate::model::tests::sample_question;

    #[test]
    fn accepts_a_well_formed_bank() {
        let bank = QuestionBank::new(vec![sample_question(1, "b"), sample_question(2, "a")])
            .expect("bank ok");
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.get(1).map(|q| q.id), Some(2));
    }

    #[test]
    fn rejects_empty_bank() {
        assert!(matches!(QuestionBank::new(vec![]), Err(BankError::Empty)));
    }

    #[test]
    fn rejects_zero_and_duplicate_question_ids() {
        let err = QuestionBank::new(vec![sample_question(0, "b")]).unwrap_err();
        assert!(matches!(err, BankError::ZeroQuestionId));

        let err =
            QuestionBank::new(vec![sample_question(3, "b"), sample_question(3, "a")]).unwrap_err();
        assert!(matches!(err, BankError::DuplicateQuestionId(3)));
    }

    #[test]
    fn rejects_correct_option_missing_from_options() {
        let err = QuestionBank::new(vec![sample_question(1, "z")]).unwrap_err();
        assert!(matches!(
            err,
            BankError::UnknownCorrectOption { question_id: 1, ref option_id } if option_id == "z"
        ));
    }

    #[test]
    fn rejects_duplicate_option_ids() {
        let mut q = sample_question(1, "b");
        q.options[2].id = "a".into();
        let err = QuestionBank::new(vec![q]).unwrap_err();
        assert!(matches!(err, BankError::DuplicateOptionId { question_id: 1, .. }));
    }

    #[test]
    fn rejects_single_option_questions() {
        let mut q = sample_question(1, "a");
        q.options.truncate(1);
        let err = QuestionBank::new(vec![q]).unwrap_err();
        assert!(matches!(err, BankError::TooFewOptions { question_id: 1, count: 1 }));
    }

    #[test]
    fn rejects_blank_option_text() {
        let mut q = sample_question(1, "b");
        q.options.push(QuizOption {
            id: "e".into(),
            text: "  ".into(),
        });
        let err = QuestionBank::new(vec![q]).unwrap_err();
        assert!(matches!(err, BankError::EmptyOption { question_id: 1 }));
    }

    #[test]
    fn sentence_needs_exactly_one_blank() {
        let mut q = sample_question(1, "b");
        q.sentence = "No blank here.".into();
        let err = QuestionBank::new(vec![q.clone()]).unwrap_err();
        assert!(matches!(err, BankError::Placeholder { found: 0, .. }));

        q.sentence = "____ and ____".into();
        let err = QuestionBank::new(vec![q]).unwrap_err();
        assert!(matches!(err, BankError::Placeholder { found: 2, .. }));
    }

    #[test]
    fn rejects_empty_explanation_fields() {
        let mut q = sample_question(1, "b");
        q.explanation.rule.clear();
        let err = QuestionBank::new(vec![q]).unwrap_err();
        assert!(matches!(
            err,
            BankError::EmptyField { field: "explanation.rule", .. }
        ));
    }
}
