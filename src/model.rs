use serde::{Deserialize, Serialize};

/// Hueco que marca dónde va la opción elegida dentro de la frase
pub const PLACEHOLDER: &str = "____";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Junior,
    Middle,
    Senior,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Junior => "Básico",
            Difficulty::Middle => "Intermedio",
            Difficulty::Senior => "Avanzado",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "snake_case")]
pub enum GrammarPoint {
    NonFinite,
    RelativeClause,
    AdverbialClause,
    Conjunction,
    Preposition,
    Pronoun,
}

impl GrammarPoint {
    pub fn label(&self) -> &'static str {
        match self {
            GrammarPoint::NonFinite => "Formas no personales",
            GrammarPoint::RelativeClause => "Oraciones de relativo",
            GrammarPoint::AdverbialClause => "Oraciones adverbiales",
            GrammarPoint::Conjunction => "Conjunciones",
            GrammarPoint::Preposition => "Preposiciones",
            GrammarPoint::Pronoun => "Pronombres",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub correct_answer: String,
    pub rule: String,
    pub example: String,
    pub common_mistake: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub sentence: String, // lleva exactamente un PLACEHOLDER
    pub options: Vec<QuizOption>,
    pub correct_option_id: String,
    pub difficulty: Difficulty,
    pub category: GrammarPoint,
    pub explanation: Explanation,
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn has_option(&self, option_id: &str) -> bool {
        self.option(option_id).is_some()
    }

    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.option(&self.correct_option_id)
    }

    pub fn is_correct(&self, option_id: &str) -> bool {
        self.correct_option_id == option_id
    }

    /// Texto antes y después del hueco. Si la frase no lo tiene, todo va delante.
    pub fn sentence_parts(&self) -> (&str, &str) {
        self.sentence
            .split_once(PLACEHOLDER)
            .unwrap_or((self.sentence.as_str(), ""))
    }

    /// Frase con el hueco rellenado (o intacto si `fill` es `None`)
    pub fn render_sentence(&self, fill: Option<&str>) -> String {
        match fill {
            Some(text) => self.sentence.replacen(PLACEHOLDER, text, 1),
            None => self.sentence.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserAnswer {
    pub question_id: u32,
    pub selected_option_id: Option<String>,
    pub is_correct: Option<bool>,
}

impl UserAnswer {
    pub fn pending(question_id: u32) -> Self {
        Self {
            question_id,
            selected_option_id: None,
            is_correct: None,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.is_correct.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Quiz,
    Summary,
}
