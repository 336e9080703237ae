// src/shared/shared_structs.rs

use serde::Serialize;

/// Estrutura para padronizar as respostas de erro da API.
#[derive(Serialize)]
pub struct GenericResponse {
    pub status: String,
    pub message: String,
}

impl GenericResponse {
    /// Resposta de erro.
    pub fn erro(message: impl Into<String>) -> Self {
        GenericResponse {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
