use std::path::PathBuf;

use thiserror::Error;

/// Defectos del banco de preguntas. Se detectan al cargarlo, nunca durante el quiz.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("no se pudo leer el banco de preguntas {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML inválido en el banco de preguntas: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("el banco de preguntas está vacío")]
    Empty,
    #[error("hay una pregunta con id 0; los ids deben ser positivos")]
    ZeroQuestionId,
    #[error("id de pregunta duplicado: {0}")]
    DuplicateQuestionId(u32),
    #[error("la pregunta {question_id} necesita al menos 2 opciones (tiene {count})")]
    TooFewOptions { question_id: u32, count: usize },
    #[error("la pregunta {question_id} tiene una opción con id o texto vacío")]
    EmptyOption { question_id: u32 },
    #[error("la pregunta {question_id} repite la opción \"{option_id}\"")]
    DuplicateOptionId { question_id: u32, option_id: String },
    #[error("la respuesta correcta \"{option_id}\" de la pregunta {question_id} no está entre sus opciones")]
    UnknownCorrectOption { question_id: u32, option_id: String },
    #[error("la frase de la pregunta {question_id} debe tener exactamente un hueco (tiene {found})")]
    Placeholder { question_id: u32, found: usize },
    #[error("la pregunta {question_id} tiene el campo `{field}` vacío")]
    EmptyField {
        question_id: u32,
        field: &'static str,
    },
}
