// src/data.rs

use std::path::Path;

use crate::bank::QuestionBank;
use crate::error::BankError;
use crate::model::Question;

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Result<QuestionBank, BankError> {
    let file_content = include_str!("data/quiz_questions.yaml");
    parse_questions(file_content)
}

/// Carga un banco externo (GRAMMAR_QUIZ_BANK) con el mismo formato que el embebido
pub fn read_questions_from_path(path: &Path) -> Result<QuestionBank, BankError> {
    let file_content = std::fs::read_to_string(path).map_err(|source| BankError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_questions(&file_content)
}

pub fn parse_questions(yaml: &str) -> Result<QuestionBank, BankError> {
    let questions: Vec<Question> = serde_yaml::from_str(yaml)?;
    log::debug!("{} preguntas leídas del YAML", questions.len());
    QuestionBank::new(questions)
}
