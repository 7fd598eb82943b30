use super::*;
use crate::model::{GrammarPoint, Question, QuizOption};

impl QuizSession {
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.bank.get(self.current_index)
    }

    pub fn selected_option_id(&self) -> Option<&str> {
        self.turn.selected_option_id.as_deref()
    }

    pub fn selected_option(&self) -> Option<&QuizOption> {
        let id = self.selected_option_id()?;
        self.current_question()?.option(id)
    }

    pub fn is_submitted(&self) -> bool {
        self.turn.submitted
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.bank.len()
    }

    pub fn phase(&self) -> Phase {
        if self.finished {
            Phase::Finished
        } else if self.turn.submitted {
            Phase::Submitted
        } else if self.turn.selected_option_id.is_some() {
            Phase::Selected
        } else {
            Phase::Unanswered
        }
    }

    pub fn answers(&self) -> &[UserAnswer] {
        self.answers.as_slice()
    }

    pub fn current_answer(&self) -> Option<&UserAnswer> {
        self.answers.get(self.current_index)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.answered_count()
    }

    /// Aciertos hasta el momento. Nunca baja dentro de una sesión.
    pub fn score(&self) -> usize {
        self.answers.correct_count()
    }

    /// Solo para la barra de progreso
    pub fn progress_ratio(&self) -> f32 {
        (self.current_index + 1) as f32 / self.bank.len() as f32
    }

    pub fn encouragement(&self) -> EncouragementTier {
        encouragement_tier(self.score(), self.question_count())
    }

    /// Temas de las preguntas falladas, en el orden del banco y sin repetir
    pub fn missed_categories(&self) -> Vec<GrammarPoint> {
        let mut topics = Vec::new();
        for (q, a) in self.bank.iter().zip(self.answers.as_slice()) {
            if a.is_correct == Some(false) && !topics.contains(&q.category) {
                topics.push(q.category);
            }
        }
        topics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::sample_question;
    use crate::session::tests::bank_of;

    fn answer(session: &mut QuizSession, option_id: &str) {
        session.select_option(option_id);
        session.submit_answer();
        session.advance();
    }

    #[test]
    fn progress_ratio_counts_the_current_question() {
        let mut session = QuizSession::new(bank_of(4));
        assert_eq!(session.progress_ratio(), 0.25);
        answer(&mut session, "b");
        assert_eq!(session.progress_ratio(), 0.5);
    }

    #[test]
    fn selected_option_resolves_text() {
        let mut session = QuizSession::new(bank_of(1));
        assert!(session.selected_option().is_none());
        session.select_option("d");
        assert_eq!(session.selected_option().map(|o| o.text.as_str()), Some("whom"));
    }

    #[test]
    fn score_never_decreases_and_stays_bounded() {
        let mut session = QuizSession::new(bank_of(5));
        let mut last = 0;
        for choice in ["b", "a", "b", "c", "b"] {
            answer(&mut session, choice);
            assert!(session.score() >= last);
            assert!(session.score() <= session.question_count());
            last = session.score();
        }
        assert_eq!(session.score(), 3);
        assert!(session.is_finished());
    }

    #[test]
    fn missed_categories_are_deduplicated_in_bank_order() {
        let mut q2 = sample_question(2, "b");
        q2.category = GrammarPoint::Conjunction;
        let bank = QuestionBank::new(vec![
            sample_question(1, "b"),
            q2,
            sample_question(3, "b"),
        ])
        .expect("bank ok");
        let mut session = QuizSession::new(bank);
        answer(&mut session, "a");
        answer(&mut session, "a");
        answer(&mut session, "a");

        assert_eq!(
            session.missed_categories(),
            vec![GrammarPoint::RelativeClause, GrammarPoint::Conjunction]
        );
    }
}
