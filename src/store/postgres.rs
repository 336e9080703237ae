// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::{query, query_as, query_scalar, Executor, Pool, Postgres, Transaction};
use tracing::info;

use super::{ErroStore, Sessao, Store};
use crate::categorias::categoria_structs::{Categoria, NovaCategoria};
use crate::estoques::estoque_structs::{Estoque, NovoEstoque};
use crate::produtos::produtos_structs::{NovoProduto, Produto};

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// Store sobre PostgreSQL. Cada sessão é uma transação do pool.
#[derive(Debug, Clone)]
pub struct StorePostgres {
    db_pool: Pool<Postgres>,
}

impl StorePostgres {
    /// Conecta ao banco e garante que as tabelas existam.
    pub async fn conectar(database_url: &str) -> Result<Self, ErroStore> {
        let db_pool = Pool::<Postgres>::connect(database_url).await?;
        // Várias instruções num só envio: protocolo simples, sem prepared statement
        db_pool.execute(SCHEMA_SQL).await?;
        info!("Esquema do banco verificado");
        Ok(StorePostgres { db_pool })
    }
}

#[async_trait]
impl Store for StorePostgres {
    async fn iniciar(&self) -> Result<Box<dyn Sessao>, ErroStore> {
        let transaction = self.db_pool.begin().await?;
        Ok(Box::new(SessaoPostgres { transaction }))
    }
}

struct SessaoPostgres {
    transaction: Transaction<'static, Postgres>,
}

#[async_trait]
impl Sessao for SessaoPostgres {
    async fn listar_categorias(&mut self) -> Result<Vec<Categoria>, ErroStore> {
        let categorias = query_as::<_, Categoria>("SELECT id, nome FROM categorias ORDER BY id")
            .fetch_all(&mut *self.transaction)
            .await?;
        Ok(categorias)
    }

    async fn buscar_categoria(&mut self, id: i32) -> Result<Option<Categoria>, ErroStore> {
        let categoria = query_as::<_, Categoria>("SELECT id, nome FROM categorias WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.transaction)
            .await?;
        Ok(categoria)
    }

    async fn inserir_categoria(&mut self, nova: &NovaCategoria) -> Result<Categoria, ErroStore> {
        let categoria = query_as::<_, Categoria>(
            "INSERT INTO categorias (nome) VALUES ($1) RETURNING id, nome",
        )
        .bind(&nova.nome)
        .fetch_one(&mut *self.transaction)
        .await?;
        Ok(categoria)
    }

    async fn atualizar_categoria(&mut self, id: i32, nova: &NovaCategoria) -> Result<Option<Categoria>, ErroStore> {
        let categoria = query_as::<_, Categoria>(
            "UPDATE categorias SET nome = $1 WHERE id = $2 RETURNING id, nome",
        )
        .bind(&nova.nome)
        .bind(id)
        .fetch_optional(&mut *self.transaction)
        .await?;
        Ok(categoria)
    }

    async fn remover_categoria(&mut self, id: i32) -> Result<bool, ErroStore> {
        let res = query("DELETE FROM categorias WHERE id = $1")
            .bind(id)
            .execute(&mut *self.transaction)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn contar_produtos_da_categoria(&mut self, categoria_id: i32) -> Result<i64, ErroStore> {
        let total = query_scalar::<_, i64>("SELECT COUNT(*) FROM produtos WHERE categoria_id = $1")
            .bind(categoria_id)
            .fetch_one(&mut *self.transaction)
            .await?;
        Ok(total)
    }

    async fn listar_produtos(&mut self) -> Result<Vec<Produto>, ErroStore> {
        let produtos = query_as::<_, Produto>(
            "SELECT id, nome, preco, quantidade, categoria_id FROM produtos ORDER BY id",
        )
        .fetch_all(&mut *self.transaction)
        .await?;
        Ok(produtos)
    }

    async fn buscar_produto(&mut self, id: i32) -> Result<Option<Produto>, ErroStore> {
        let produto = query_as::<_, Produto>(
            "SELECT id, nome, preco, quantidade, categoria_id FROM produtos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.transaction)
        .await?;
        Ok(produto)
    }

    async fn inserir_produto(&mut self, novo: &NovoProduto) -> Result<Produto, ErroStore> {
        let produto = query_as::<_, Produto>(
            "INSERT INTO produtos (nome, preco, quantidade, categoria_id) VALUES ($1, $2, $3, $4) \
             RETURNING id, nome, preco, quantidade, categoria_id",
        )
        .bind(&novo.nome)
        .bind(&novo.preco) // BigDecimal -> NUMERIC
        .bind(novo.quantidade)
        .bind(novo.categoria_id)
        .fetch_one(&mut *self.transaction)
        .await?;
        Ok(produto)
    }

    async fn atualizar_produto(&mut self, produto: &Produto) -> Result<Option<Produto>, ErroStore> {
        let atualizado = query_as::<_, Produto>(
            "UPDATE produtos SET nome = $1, preco = $2, quantidade = $3, categoria_id = $4 \
             WHERE id = $5 RETURNING id, nome, preco, quantidade, categoria_id",
        )
        .bind(&produto.nome)
        .bind(&produto.preco)
        .bind(produto.quantidade)
        .bind(produto.categoria_id)
        .bind(produto.id)
        .fetch_optional(&mut *self.transaction)
        .await?;
        Ok(atualizado)
    }

    async fn definir_quantidade_produto(&mut self, id: i32, quantidade: i32) -> Result<bool, ErroStore> {
        let res = query("UPDATE produtos SET quantidade = $1 WHERE id = $2")
            .bind(quantidade)
            .bind(id)
            .execute(&mut *self.transaction)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn remover_produto(&mut self, id: i32) -> Result<bool, ErroStore> {
        let res = query("DELETE FROM produtos WHERE id = $1")
            .bind(id)
            .execute(&mut *self.transaction)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn listar_estoques(&mut self) -> Result<Vec<Estoque>, ErroStore> {
        let estoques = query_as::<_, Estoque>("SELECT id, produto_id, quantidade FROM estoques ORDER BY id")
            .fetch_all(&mut *self.transaction)
            .await?;
        Ok(estoques)
    }

    async fn buscar_estoque(&mut self, id: i32) -> Result<Option<Estoque>, ErroStore> {
        let estoque = query_as::<_, Estoque>("SELECT id, produto_id, quantidade FROM estoques WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.transaction)
            .await?;
        Ok(estoque)
    }

    async fn buscar_estoque_do_produto(&mut self, produto_id: i32) -> Result<Option<Estoque>, ErroStore> {
        // FOR UPDATE: a quantidade do produto é sincronizada a partir desta linha
        let estoque = query_as::<_, Estoque>(
            "SELECT id, produto_id, quantidade FROM estoques WHERE produto_id = $1 FOR UPDATE",
        )
        .bind(produto_id)
        .fetch_optional(&mut *self.transaction)
        .await?;
        Ok(estoque)
    }

    async fn inserir_estoque(&mut self, novo: &NovoEstoque) -> Result<Estoque, ErroStore> {
        let estoque = query_as::<_, Estoque>(
            "INSERT INTO estoques (produto_id, quantidade) VALUES ($1, $2) \
             RETURNING id, produto_id, quantidade",
        )
        .bind(novo.produto_id)
        .bind(novo.quantidade)
        .fetch_one(&mut *self.transaction)
        .await?;
        Ok(estoque)
    }

    async fn atualizar_quantidade_estoque(&mut self, id: i32, quantidade: i32) -> Result<Option<Estoque>, ErroStore> {
        let estoque = query_as::<_, Estoque>(
            "UPDATE estoques SET quantidade = $1 WHERE id = $2 RETURNING id, produto_id, quantidade",
        )
        .bind(quantidade)
        .bind(id)
        .fetch_optional(&mut *self.transaction)
        .await?;
        Ok(estoque)
    }

    async fn remover_estoque(&mut self, id: i32) -> Result<bool, ErroStore> {
        let res = query("DELETE FROM estoques WHERE id = $1")
            .bind(id)
            .execute(&mut *self.transaction)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn remover_estoques_do_produto(&mut self, produto_id: i32) -> Result<u64, ErroStore> {
        let res = query("DELETE FROM estoques WHERE produto_id = $1")
            .bind(produto_id)
            .execute(&mut *self.transaction)
            .await?;
        Ok(res.rows_affected())
    }

    async fn confirmar(self: Box<Self>) -> Result<(), ErroStore> {
        self.transaction.commit().await?;
        Ok(())
    }
}
