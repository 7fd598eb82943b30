// src/view_models.rs

use crate::model::{Difficulty, GrammarPoint};
use crate::session::EncouragementTier;

/// Lo que se ve en el hueco de la frase
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlankState {
    Empty,
    Pending(String),
    Correct(String),
    Wrong(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionStatus {
    Idle,
    Selected,
    Correct,  // la buena, tras enviar
    Wrong,    // la elegida y mala, tras enviar
    Dimmed,
}

#[derive(Clone, Debug)]
pub struct OptionRow {
    pub id: String,
    pub text: String,
    pub status: OptionStatus,
    pub enabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryAction {
    Submit { enabled: bool },
    Next,
    SeeResults,
}

#[derive(Clone, Debug)]
pub struct QuestionView {
    pub number: usize, // 1-based
    pub total: usize,
    pub difficulty: Difficulty,
    pub category: GrammarPoint,
    pub before_blank: String,
    pub after_blank: String,
    pub blank: BlankState,
    pub options: Vec<OptionRow>,
    pub action: PrimaryAction,
}

#[derive(Clone, Debug)]
pub struct ExplanationCard {
    pub was_correct: bool,
    pub correct_answer: String,
    pub rule: String,
    pub example: String,
    pub common_mistake: String,
}

#[derive(Clone, Debug)]
pub struct AnswerRow {
    pub number: usize,
    pub sentence: String,
    pub chosen: Option<String>,
    pub correct: String,
    pub is_correct: Option<bool>,
}

#[derive(Clone, Debug)]
pub struct SummaryView {
    pub score: usize,
    pub total: usize,
    pub encouragement: EncouragementTier,
    pub review_topics: Vec<GrammarPoint>,
    pub rows: Vec<AnswerRow>,
}

impl OptionRow {
    pub fn badge(&self) -> String {
        self.id.to_uppercase()
    }

    pub fn label(&self) -> String {
        match self.status {
            OptionStatus::Correct => format!("{}   {} ✅", self.badge(), self.text),
            OptionStatus::Wrong => format!("{}   {} ❌", self.badge(), self.text),
            _ => format!("{}   {}", self.badge(), self.text),
        }
    }
}

impl PrimaryAction {
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryAction::Submit { .. } => "Enviar respuesta ➡",
            PrimaryAction::Next => "Siguiente pregunta ▶",
            PrimaryAction::SeeResults => "Ver resultados 🏆",
        }
    }
}

impl QuestionView {
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.number, self.total)
    }

    pub fn blank_text(&self) -> &str {
        match &self.blank {
            BlankState::Empty => crate::model::PLACEHOLDER,
            BlankState::Pending(t) | BlankState::Correct(t) | BlankState::Wrong(t) => t.as_str(),
        }
    }
}

impl AnswerRow {
    pub fn verdict_label(&self) -> &'static str {
        match self.is_correct {
            Some(true) => "✅ Correcta",
            Some(false) => "❌ Incorrecta",
            None => "— Sin responder",
        }
    }
}

impl SummaryView {
    pub fn score_label(&self) -> String {
        format!("{} / {}", self.score, self.total)
    }
}
