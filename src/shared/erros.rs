// src/shared/erros.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use tracing::{error, warn};

use super::shared_structs::GenericResponse;
use super::validacao::ErroValidacao;
use crate::store::ErroStore;

/// Erros que os serviços devolvem às rotas.
///
/// Cada variante corresponde a um status HTTP (ver `ResponseError` abaixo).
#[derive(Debug, Error)]
pub enum ErroApi {
    /// Payload ou parâmetro inválido (400).
    #[error(transparent)]
    Validacao(#[from] ErroValidacao),

    /// O id informado não existe (404).
    #[error("{recurso} com ID {id} não encontrado(a).")]
    NaoEncontrado { recurso: &'static str, id: i32 },

    /// A operação violaria uma restrição entre recursos (409).
    #[error("{0}")]
    Conflito(String),

    /// Falha do armazenamento (500).
    #[error("erro no armazenamento: {0}")]
    Store(#[source] ErroStore),
}

impl From<ErroStore> for ErroApi {
    fn from(erro: ErroStore) -> Self {
        match erro {
            ErroStore::Restricao(detalhe) => ErroApi::Conflito(detalhe),
            outro => ErroApi::Store(outro),
        }
    }
}

impl ErroApi {
    pub fn nao_encontrado(recurso: &'static str, id: i32) -> Self {
        ErroApi::NaoEncontrado { recurso, id }
    }
}

impl ResponseError for ErroApi {
    fn status_code(&self) -> StatusCode {
        match self {
            ErroApi::Validacao(_) => StatusCode::BAD_REQUEST,
            ErroApi::NaoEncontrado { .. } => StatusCode::NOT_FOUND,
            ErroApi::Conflito(_) => StatusCode::CONFLICT,
            ErroApi::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Erros de armazenamento não expõem detalhes ao cliente
        let message = match self {
            ErroApi::Store(e) => {
                error!(erro = ?e, "Falha no armazenamento");
                "Erro interno ao acessar o armazenamento.".to_string()
            }
            outro => {
                warn!(status = %self.status_code(), "{}", outro);
                outro.to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(GenericResponse::erro(message))
    }
}
