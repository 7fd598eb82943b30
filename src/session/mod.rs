use crate::bank::QuestionBank;
use crate::model::UserAnswer;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod scoring;

pub use scoring::{EncouragementTier, encouragement_tier};

/// Fase de la pregunta actual dentro de la sesión
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Unanswered,
    Selected,
    Submitted,
    Finished,
}

/// Historial de respuestas: una por pregunta, alineado con el banco.
/// Cada hueco se escribe una sola vez.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: Vec<UserAnswer>,
}

impl AnswerSheet {
    pub fn for_bank(bank: &QuestionBank) -> Self {
        Self {
            answers: bank.iter().map(|q| UserAnswer::pending(q.id)).collect(),
        }
    }

    /// Rellena el hueco `index` si sigue pendiente. Devuelve `false` si ya estaba escrito.
    pub fn record(&mut self, index: usize, option_id: &str, is_correct: bool) -> bool {
        match self.answers.get_mut(index) {
            Some(slot) if !slot.is_answered() => {
                slot.selected_option_id = Some(option_id.to_owned());
                slot.is_correct = Some(is_correct);
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&UserAnswer> {
        self.answers.get(index)
    }

    pub fn as_slice(&self) -> &[UserAnswer] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn correct_count(&self) -> usize {
        self.answers
            .iter()
            .filter(|a| a.is_correct == Some(true))
            .count()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_answered()).count()
    }
}

/// Estado efímero de la pregunta actual; se limpia al avanzar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Turn {
    pub selected_option_id: Option<String>,
    pub submitted: bool,
}

/// Controlador de la sesión: único dueño del estado mutable del quiz.
#[derive(Clone, Debug)]
pub struct QuizSession {
    bank: QuestionBank,
    answers: AnswerSheet,
    turn: Turn,
    current_index: usize,
    finished: bool,
}

impl QuizSession {
    pub fn new(bank: QuestionBank) -> Self {
        let answers = AnswerSheet::for_bank(&bank);
        Self {
            bank,
            answers,
            turn: Turn::default(),
            current_index: 0,
            finished: false,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::tests::sample_question;

    /// Banco de `n` preguntas cuya respuesta correcta es siempre "b"
    pub(crate) fn bank_of(n: u32) -> QuestionBank {
        QuestionBank::new((1..=n).map(|id| sample_question(id, "b")).collect()).expect("bank ok")
    }

    #[test]
    fn answer_sheet_is_aligned_with_bank() {
        let bank = bank_of(3);
        let sheet = AnswerSheet::for_bank(&bank);
        assert_eq!(sheet.len(), bank.len());
        for (a, q) in sheet.as_slice().iter().zip(bank.iter()) {
            assert_eq!(a.question_id, q.id);
            assert!(!a.is_answered());
        }
    }

    #[test]
    fn answer_sheet_slots_are_write_once() {
        let mut sheet = AnswerSheet::for_bank(&bank_of(2));
        assert!(sheet.record(0, "b", true));
        assert!(!sheet.record(0, "a", false));
        assert_eq!(sheet.get(0).and_then(|a| a.is_correct), Some(true));
        assert_eq!(
            sheet.get(0).and_then(|a| a.selected_option_id.as_deref()),
            Some("b")
        );
        assert!(!sheet.record(7, "b", true));
        assert_eq!(sheet.correct_count(), 1);
        assert_eq!(sheet.answered_count(), 1);
    }

    #[test]
    fn new_session_starts_unanswered() {
        let session = QuizSession::new(bank_of(2));
        assert_eq!(session.phase(), Phase::Unanswered);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert!(!session.is_finished());
    }
}
