// src/produtos/produtos_structs.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::shared::decimal;
use crate::shared::validacao::Campo;

/// Campos exigidos no POST de produto.
pub const CAMPOS_NOVO_PRODUTO: &[Campo] = &[
    Campo::texto("nome"),
    Campo::decimal("preco").nao_negativo(),
    Campo::inteiro("quantidade").nao_negativo(),
    Campo::referencia("categoriaId"),
];

/// No PUT todos os campos são opcionais: só os enviados mudam.
pub const CAMPOS_ATUALIZACAO_PRODUTO: &[Campo] = &[
    Campo::texto("nome").opcional(),
    Campo::decimal("preco").nao_negativo().opcional(),
    Campo::inteiro("quantidade").nao_negativo().opcional(),
    Campo::referencia("categoriaId").opcional(),
];

/// Estrutura para receber dados do novo produto na requisição POST
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovoProduto {
    pub nome: String,
    #[serde(deserialize_with = "decimal::deserializar")]
    pub preco: BigDecimal,
    pub quantidade: i32,
    pub categoria_id: i32,
}

/// Campos enviados no PUT de produto
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtualizacaoProduto {
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "decimal::deserializar_opcional")]
    pub preco: Option<BigDecimal>,
    pub quantidade: Option<i32>,
    pub categoria_id: Option<i32>,
}

/// Estrutura que representa um produto no banco de dados
/// Deriva FromRow para mapeamento direto de resultados de query SQL
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Produto {
    pub id: i32,
    pub nome: String,
    #[serde(serialize_with = "decimal::serializar")]
    pub preco: BigDecimal,
    pub quantidade: i32,
    pub categoria_id: i32,
}

impl Produto {
    /// Aplica ao produto apenas os campos presentes na atualização.
    pub fn aplicar(&mut self, atualizacao: AtualizacaoProduto) {
        if let Some(nome) = atualizacao.nome {
            self.nome = nome;
        }
        if let Some(preco) = atualizacao.preco {
            self.preco = preco;
        }
        if let Some(quantidade) = atualizacao.quantidade {
            self.quantidade = quantidade;
        }
        if let Some(categoria_id) = atualizacao.categoria_id {
            self.categoria_id = categoria_id;
        }
    }
}
