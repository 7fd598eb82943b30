use super::*;

impl QuizSession {
    /// Pasa a la siguiente pregunta, o termina la sesión si era la última.
    /// Solo avanza con la respuesta actual ya enviada; no hay vuelta atrás.
    pub fn advance(&mut self) -> bool {
        if self.finished || !self.turn.submitted {
            return false;
        }

        if self.is_last_question() {
            self.finished = true;
            log::debug!("sesión terminada con {}/{}", self.score(), self.question_count());
        } else {
            self.current_index += 1;
            self.turn = Turn::default();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::bank_of;

    #[test]
    fn advance_before_submit_is_a_no_op() {
        let mut session = QuizSession::new(bank_of(2));
        assert!(!session.advance());
        session.select_option("b");
        assert!(!session.advance());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn advance_clears_the_turn() {
        let mut session = QuizSession::new(bank_of(2));
        session.select_option("b");
        session.submit_answer();
        assert!(session.advance());

        assert_eq!(session.current_index(), 1);
        assert_eq!(session.selected_option_id(), None);
        assert!(!session.is_submitted());
        assert_eq!(session.phase(), Phase::Unanswered);
    }

    #[test]
    fn advancing_past_the_last_question_finishes() {
        let mut session = QuizSession::new(bank_of(1));
        session.select_option("b");
        session.submit_answer();
        assert!(session.advance());

        assert!(session.is_finished());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.phase(), Phase::Finished);
        // terminal hasta reset
        assert!(!session.advance());
        assert!(!session.select_option("a"));
        assert_eq!(session.submit_answer(), None);
    }
}
