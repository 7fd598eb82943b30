// src/config.rs

use std::path::PathBuf;

use crate::bank::QuestionBank;
use crate::data::{read_questions_embedded, read_questions_from_path};
use crate::error::BankError;

pub const BANK_ENV: &str = "GRAMMAR_QUIZ_BANK";
pub const TITLE_ENV: &str = "GRAMMAR_QUIZ_TITLE";
pub const CONFIRM_RESET_ENV: &str = "GRAMMAR_QUIZ_CONFIRM_RESET";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub window_size: [f32; 2],
    /// `None` usa el banco embebido
    pub bank_path: Option<PathBuf>,
    /// Pedir confirmación antes de reiniciar un quiz a medias
    pub confirm_reset: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "GrammarMaster - Quiz de gramática inglesa".to_owned(),
            window_size: [820.0, 720.0],
            bank_path: None,
            confirm_reset: true,
        }
    }
}

impl AppConfig {
    /// Lee la configuración de las variables de entorno del proceso
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(BANK_ENV).filter(|v| !v.trim().is_empty()) {
            config.bank_path = Some(PathBuf::from(path.trim()));
        }
        if let Some(title) = lookup(TITLE_ENV).filter(|v| !v.trim().is_empty()) {
            config.title = title;
        }
        if let Some(value) = lookup(CONFIRM_RESET_ENV) {
            match parse_flag(&value) {
                Some(flag) => config.confirm_reset = flag,
                None => log::warn!("{CONFIRM_RESET_ENV}={value:?} no es un valor válido; se ignora"),
            }
        }

        config
    }

    pub fn load_bank(&self) -> Result<QuestionBank, BankError> {
        match &self.bank_path {
            Some(path) => {
                log::info!("cargando banco de preguntas desde {}", path.display());
                read_questions_from_path(path)
            }
            None => read_questions_embedded(),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "si" | "sí" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
