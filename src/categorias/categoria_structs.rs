// src/categorias/categoria_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::shared::validacao::Campo;

/// Campos aceitos no POST/PUT de categoria.
pub const CAMPOS_CATEGORIA: &[Campo] = &[Campo::texto("nome")];

/// Estrutura para receber dados de uma nova categoria na requisição POST/PUT
#[derive(Debug, Clone, Deserialize)]
pub struct NovaCategoria {
    pub nome: String,
}

/// Estrutura que representa uma categoria no banco de dados
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Categoria {
    pub id: i32,
    pub nome: String,
}
