use super::*;

impl QuizApp {
    pub fn question_view(&self) -> Option<QuestionView> {
        let session = &self.session;
        let question = session.current_question()?;
        let (before, after) = question.sentence_parts();
        let submitted = session.is_submitted();
        let selected = session.selected_option_id();
        let was_correct = session.current_answer().and_then(|a| a.is_correct);

        let blank = match (session.selected_option(), submitted, was_correct) {
            (None, _, _) => BlankState::Empty,
            (Some(o), true, Some(true)) => BlankState::Correct(o.text.clone()),
            (Some(o), true, _) => BlankState::Wrong(o.text.clone()),
            (Some(o), false, _) => BlankState::Pending(o.text.clone()),
        };

        let options = question
            .options
            .iter()
            .map(|o| {
                let is_selected = selected == Some(o.id.as_str());
                let is_answer = question.is_correct(&o.id);
                let status = match (submitted, is_selected, is_answer) {
                    (false, true, _) => OptionStatus::Selected,
                    (false, false, _) => OptionStatus::Idle,
                    (true, _, true) => OptionStatus::Correct,
                    (true, true, false) => OptionStatus::Wrong,
                    (true, false, false) => OptionStatus::Dimmed,
                };
                OptionRow {
                    id: o.id.clone(),
                    text: o.text.clone(),
                    status,
                    enabled: !submitted,
                }
            })
            .collect();

        let action = if !submitted {
            PrimaryAction::Submit {
                enabled: selected.is_some(),
            }
        } else if session.is_last_question() {
            PrimaryAction::SeeResults
        } else {
            PrimaryAction::Next
        };

        Some(QuestionView {
            number: session.current_index() + 1,
            total: session.question_count(),
            difficulty: question.difficulty,
            category: question.category,
            before_blank: before.to_owned(),
            after_blank: after.to_owned(),
            blank,
            options,
            action,
        })
    }

    /// Tarjeta de explicación; solo existe tras enviar la respuesta
    pub fn explanation_card(&self) -> Option<ExplanationCard> {
        if !self.show_explanation || !self.session.is_submitted() {
            return None;
        }
        let question = self.session.current_question()?;
        let was_correct = self.session.current_answer()?.is_correct?;
        let e = &question.explanation;
        Some(ExplanationCard {
            was_correct,
            correct_answer: e.correct_answer.clone(),
            rule: e.rule.clone(),
            example: e.example.clone(),
            common_mistake: e.common_mistake.clone(),
        })
    }

    pub fn summary_view(&self) -> SummaryView {
        let session = &self.session;
        let rows = session
            .bank()
            .iter()
            .zip(session.answers())
            .enumerate()
            .map(|(i, (q, a))| {
                let chosen = a
                    .selected_option_id
                    .as_deref()
                    .and_then(|id| q.option(id))
                    .map(|o| o.text.clone());
                AnswerRow {
                    number: i + 1,
                    sentence: q.render_sentence(chosen.as_deref()),
                    chosen,
                    correct: q
                        .correct_option()
                        .map(|o| o.text.clone())
                        .unwrap_or_default(),
                    is_correct: a.is_correct,
                }
            })
            .collect();

        SummaryView {
            score: session.score(),
            total: session.question_count(),
            encouragement: session.encouragement(),
            review_topics: session.missed_categories(),
            rows,
        }
    }
}
