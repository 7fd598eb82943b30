use super::*;

impl QuizSession {
    /// Marca una opción de la pregunta actual. No hace nada si la respuesta ya está
    /// enviada, la sesión terminó o la opción no pertenece a la pregunta.
    pub fn select_option(&mut self, option_id: &str) -> bool {
        if self.finished || self.turn.submitted {
            return false;
        }
        let known = self
            .bank
            .get(self.current_index)
            .is_some_and(|q| q.has_option(option_id));
        if !known {
            return false;
        }

        self.turn.selected_option_id = Some(option_id.to_owned());
        true
    }

    /// Fija la respuesta seleccionada y la corrige. Devuelve el veredicto,
    /// o `None` si no había selección o ya estaba enviada.
    pub fn submit_answer(&mut self) -> Option<bool> {
        if self.finished || self.turn.submitted {
            return None;
        }
        let selected = self.turn.selected_option_id.as_deref()?;
        let question = self.bank.get(self.current_index)?;

        let is_correct = question.is_correct(selected);
        if !self.answers.record(self.current_index, selected, is_correct) {
            return None;
        }
        self.turn.submitted = true;

        log::debug!(
            "pregunta {} respondida con \"{selected}\": {}",
            question.id,
            if is_correct { "correcta" } else { "incorrecta" }
        );
        Some(is_correct)
    }
}
