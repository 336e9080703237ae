// src/estoques/estoque_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::shared::validacao::Campo;

pub const CAMPOS_NOVO_ESTOQUE: &[Campo] = &[
    Campo::referencia("produtoId"),
    Campo::inteiro("quantidade").nao_negativo(),
];

pub const CAMPOS_ATUALIZACAO_ESTOQUE: &[Campo] = &[Campo::inteiro("quantidade").nao_negativo()];

/// Payload do POST de estoque
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovoEstoque {
    pub produto_id: i32,
    pub quantidade: i32,
}

/// Payload do PUT de estoque: só a quantidade muda, o produto é fixo.
#[derive(Debug, Clone, Deserialize)]
pub struct AtualizacaoEstoque {
    pub quantidade: i32,
}

/// Registro de estoque de um produto
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Estoque {
    pub id: i32,
    pub produto_id: i32,
    pub quantidade: i32,
}
