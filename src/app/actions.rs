use super::*;

impl QuizApp {
    pub fn select_option(&mut self, option_id: &str) {
        if self.session.select_option(option_id) {
            self.message.clear();
            return;
        }

        let unknown = self
            .session
            .current_question()
            .is_some_and(|q| !q.has_option(option_id));
        if unknown {
            log::warn!("la vista envió una opción inexistente: \"{option_id}\"");
        } else {
            log::debug!("selección ignorada: la respuesta ya está enviada");
        }
    }

    pub fn enviar_respuesta(&mut self) {
        match self.session.submit_answer() {
            Some(correcta) => {
                self.show_explanation = true;
                self.message = if correcta {
                    "✅ ¡Correcto!".into()
                } else {
                    "❌ Incorrecto. Revisa la explicación.".into()
                };
            }
            None if self.session.selected_option_id().is_none() => {
                self.message = "⚠ Elige una opción antes de enviar.".into();
            }
            None => log::debug!("envío repetido ignorado"),
        }
    }

    pub fn siguiente_pregunta(&mut self) {
        if !self.session.advance() {
            log::debug!("avance ignorado: la pregunta actual no está enviada");
            return;
        }

        self.show_explanation = false;
        self.message.clear();
        if self.session.is_finished() {
            log::info!(
                "quiz terminado: {}/{} aciertos",
                self.session.score(),
                self.session.question_count()
            );
            self.state = AppState::Summary;
        }
    }

    /// Botón de reinicio: si hay un quiz a medias y así está configurado, pide confirmación
    pub fn pedir_reinicio(&mut self) {
        let a_medias = self.session.answered_count() > 0 && !self.session.is_finished();
        if self.config.confirm_reset && a_medias {
            self.confirm_reset = true;
        } else {
            self.reiniciar_quiz();
        }
    }

    pub fn cancelar_reinicio(&mut self) {
        self.confirm_reset = false;
    }

    pub fn reiniciar_quiz(&mut self) {
        self.session.reset();
        self.state = AppState::Quiz;
        self.message.clear();
        self.show_explanation = false;
        self.confirm_reset = false;
        log::info!("quiz reiniciado");
    }
}
