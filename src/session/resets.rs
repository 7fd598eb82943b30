use super::*;

impl QuizSession {
    /// Vuelve al principio con todas las respuestas pendientes. Válido desde cualquier estado.
    pub fn reset(&mut self) {
        self.answers = AnswerSheet::for_bank(&self.bank);
        self.turn = Turn::default();
        self.current_index = 0;
        self.finished = false;
    }
}
