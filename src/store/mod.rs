// src/store/mod.rs

//! Armazenamento dos registros de categoria, produto e estoque.
//!
//! Os serviços nunca guardam conexão global: recebem um `&dyn Store`, abrem
//! uma [`Sessao`] por operação e a confirmam no final. Uma sessão descartada
//! sem `confirmar()` não deixa nenhuma escrita para trás.

use async_trait::async_trait;
use thiserror::Error;

use crate::categorias::categoria_structs::{Categoria, NovaCategoria};
use crate::estoques::estoque_structs::{Estoque, NovoEstoque};
use crate::produtos::produtos_structs::{NovoProduto, Produto};

pub mod memoria;
pub mod postgres;

pub use memoria::StoreMemoria;
pub use postgres::StorePostgres;

#[derive(Debug, Error)]
pub enum ErroStore {
    #[error("falha no banco de dados: {0}")]
    Banco(#[source] sqlx::Error),

    /// Violação de chave estrangeira ou de unicidade.
    #[error("{0}")]
    Restricao(String),
}

impl From<sqlx::Error> for ErroStore {
    fn from(erro: sqlx::Error) -> Self {
        // 23503: foreign_key_violation, 23505: unique_violation
        if let Some(db) = erro.as_database_error() {
            if matches!(db.code().as_deref(), Some("23503") | Some("23505")) {
                return ErroStore::Restricao(db.message().to_string());
            }
        }
        ErroStore::Banco(erro)
    }
}

/// Ponto de entrada do armazenamento, compartilhado por toda a aplicação.
#[async_trait]
pub trait Store: Send + Sync {
    /// Abre uma unidade de trabalho.
    async fn iniciar(&self) -> Result<Box<dyn Sessao>, ErroStore>;
}

/// Unidade de trabalho sobre o armazenamento.
#[async_trait]
pub trait Sessao: Send {
    async fn listar_categorias(&mut self) -> Result<Vec<Categoria>, ErroStore>;
    async fn buscar_categoria(&mut self, id: i32) -> Result<Option<Categoria>, ErroStore>;
    async fn inserir_categoria(&mut self, nova: &NovaCategoria) -> Result<Categoria, ErroStore>;
    async fn atualizar_categoria(&mut self, id: i32, nova: &NovaCategoria) -> Result<Option<Categoria>, ErroStore>;
    /// Devolve `false` quando não havia categoria com esse id.
    async fn remover_categoria(&mut self, id: i32) -> Result<bool, ErroStore>;
    async fn contar_produtos_da_categoria(&mut self, categoria_id: i32) -> Result<i64, ErroStore>;

    async fn listar_produtos(&mut self) -> Result<Vec<Produto>, ErroStore>;
    async fn buscar_produto(&mut self, id: i32) -> Result<Option<Produto>, ErroStore>;
    async fn inserir_produto(&mut self, novo: &NovoProduto) -> Result<Produto, ErroStore>;
    /// Grava todos os campos de `produto` no registro com o mesmo id.
    async fn atualizar_produto(&mut self, produto: &Produto) -> Result<Option<Produto>, ErroStore>;
    async fn definir_quantidade_produto(&mut self, id: i32, quantidade: i32) -> Result<bool, ErroStore>;
    async fn remover_produto(&mut self, id: i32) -> Result<bool, ErroStore>;

    async fn listar_estoques(&mut self) -> Result<Vec<Estoque>, ErroStore>;
    async fn buscar_estoque(&mut self, id: i32) -> Result<Option<Estoque>, ErroStore>;
    async fn buscar_estoque_do_produto(&mut self, produto_id: i32) -> Result<Option<Estoque>, ErroStore>;
    async fn inserir_estoque(&mut self, novo: &NovoEstoque) -> Result<Estoque, ErroStore>;
    async fn atualizar_quantidade_estoque(&mut self, id: i32, quantidade: i32) -> Result<Option<Estoque>, ErroStore>;
    async fn remover_estoque(&mut self, id: i32) -> Result<bool, ErroStore>;
    /// Devolve quantos registros de estoque foram removidos.
    async fn remover_estoques_do_produto(&mut self, produto_id: i32) -> Result<u64, ErroStore>;

    /// Confirma as escritas da sessão.
    async fn confirmar(self: Box<Self>) -> Result<(), ErroStore>;
}
