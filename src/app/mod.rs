use crate::bank::QuestionBank;
use crate::config::AppConfig;
use crate::error::BankError;
use crate::model::AppState;
use crate::session::QuizSession;

// Submódulos
pub mod actions;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{
    AnswerRow, BlankState, ExplanationCard, OptionRow, OptionStatus, PrimaryAction, QuestionView,
    SummaryView,
};

pub struct QuizApp {
    pub session: QuizSession,
    pub config: AppConfig,
    pub state: AppState,
    pub message: String,
    pub show_explanation: bool,
    pub confirm_reset: bool,
}

impl QuizApp {
    pub fn new(bank: QuestionBank, config: AppConfig) -> Self {
        log::info!("quiz listo con {} preguntas", bank.len());
        Self {
            session: QuizSession::new(bank),
            config,
            state: AppState::Quiz,
            message: String::new(),
            show_explanation: false,
            confirm_reset: false,
        }
    }

    /// Carga el banco indicado por la configuración (o el embebido)
    pub fn from_config(config: AppConfig) -> Result<Self, BankError> {
        let bank = config.load_bank()?;
        Ok(Self::new(bank, config))
    }
}
