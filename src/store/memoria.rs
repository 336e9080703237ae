// src/store/memoria.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::{ErroStore, Sessao, Store};
use crate::categorias::categoria_structs::{Categoria, NovaCategoria};
use crate::estoques::estoque_structs::{Estoque, NovoEstoque};
use crate::produtos::produtos_structs::{NovoProduto, Produto};

#[derive(Debug, Default, Clone)]
struct Dados {
    categorias: BTreeMap<i32, Categoria>,
    produtos: BTreeMap<i32, Produto>,
    estoques: BTreeMap<i32, Estoque>,
    // Ids nunca são reaproveitados, mesmo após remoções
    ultimo_id_categoria: i32,
    ultimo_id_produto: i32,
    ultimo_id_estoque: i32,
}

/// Store em memória do processo.
///
/// Usado quando não há `DATABASE_URL` e pelos testes. Uma sessão segura o
/// mutex do começo ao fim e trabalha sobre uma cópia, que só substitui os
/// dados em `confirmar()`. As sessões ficam, portanto, serializadas.
#[derive(Debug, Clone, Default)]
pub struct StoreMemoria {
    dados: Arc<Mutex<Dados>>,
}

impl StoreMemoria {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for StoreMemoria {
    async fn iniciar(&self) -> Result<Box<dyn Sessao>, ErroStore> {
        let guarda = Arc::clone(&self.dados).lock_owned().await;
        let copia = guarda.clone();
        Ok(Box::new(SessaoMemoria { guarda, copia }))
    }
}

struct SessaoMemoria {
    guarda: OwnedMutexGuard<Dados>,
    copia: Dados,
}

#[async_trait]
impl Sessao for SessaoMemoria {
    async fn listar_categorias(&mut self) -> Result<Vec<Categoria>, ErroStore> {
        Ok(self.copia.categorias.values().cloned().collect())
    }

    async fn buscar_categoria(&mut self, id: i32) -> Result<Option<Categoria>, ErroStore> {
        Ok(self.copia.categorias.get(&id).cloned())
    }

    async fn inserir_categoria(&mut self, nova: &NovaCategoria) -> Result<Categoria, ErroStore> {
        self.copia.ultimo_id_categoria += 1;
        let categoria = Categoria {
            id: self.copia.ultimo_id_categoria,
            nome: nova.nome.clone(),
        };
        self.copia.categorias.insert(categoria.id, categoria.clone());
        Ok(categoria)
    }

    async fn atualizar_categoria(&mut self, id: i32, nova: &NovaCategoria) -> Result<Option<Categoria>, ErroStore> {
        Ok(self.copia.categorias.get_mut(&id).map(|categoria| {
            categoria.nome = nova.nome.clone();
            categoria.clone()
        }))
    }

    async fn remover_categoria(&mut self, id: i32) -> Result<bool, ErroStore> {
        Ok(self.copia.categorias.remove(&id).is_some())
    }

    async fn contar_produtos_da_categoria(&mut self, categoria_id: i32) -> Result<i64, ErroStore> {
        let total = self
            .copia
            .produtos
            .values()
            .filter(|p| p.categoria_id == categoria_id)
            .count();
        Ok(total as i64)
    }

    async fn listar_produtos(&mut self) -> Result<Vec<Produto>, ErroStore> {
        Ok(self.copia.produtos.values().cloned().collect())
    }

    async fn buscar_produto(&mut self, id: i32) -> Result<Option<Produto>, ErroStore> {
        Ok(self.copia.produtos.get(&id).cloned())
    }

    async fn inserir_produto(&mut self, novo: &NovoProduto) -> Result<Produto, ErroStore> {
        self.copia.ultimo_id_produto += 1;
        let produto = Produto {
            id: self.copia.ultimo_id_produto,
            nome: novo.nome.clone(),
            preco: novo.preco.clone(),
            quantidade: novo.quantidade,
            categoria_id: novo.categoria_id,
        };
        self.copia.produtos.insert(produto.id, produto.clone());
        Ok(produto)
    }

    async fn atualizar_produto(&mut self, produto: &Produto) -> Result<Option<Produto>, ErroStore> {
        Ok(self.copia.produtos.get_mut(&produto.id).map(|atual| {
            *atual = produto.clone();
            atual.clone()
        }))
    }

    async fn definir_quantidade_produto(&mut self, id: i32, quantidade: i32) -> Result<bool, ErroStore> {
        match self.copia.produtos.get_mut(&id) {
            Some(produto) => {
                produto.quantidade = quantidade;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remover_produto(&mut self, id: i32) -> Result<bool, ErroStore> {
        Ok(self.copia.produtos.remove(&id).is_some())
    }

    async fn listar_estoques(&mut self) -> Result<Vec<Estoque>, ErroStore> {
        Ok(self.copia.estoques.values().cloned().collect())
    }

    async fn buscar_estoque(&mut self, id: i32) -> Result<Option<Estoque>, ErroStore> {
        Ok(self.copia.estoques.get(&id).cloned())
    }

    async fn buscar_estoque_do_produto(&mut self, produto_id: i32) -> Result<Option<Estoque>, ErroStore> {
        Ok(self
            .copia
            .estoques
            .values()
            .find(|e| e.produto_id == produto_id)
            .cloned())
    }

    async fn inserir_estoque(&mut self, novo: &NovoEstoque) -> Result<Estoque, ErroStore> {
        // Mesma restrição de unicidade da tabela no Postgres
        if self.copia.estoques.values().any(|e| e.produto_id == novo.produto_id) {
            return Err(ErroStore::Restricao(format!(
                "Já existe estoque para o produto {}.",
                novo.produto_id
            )));
        }

        self.copia.ultimo_id_estoque += 1;
        let estoque = Estoque {
            id: self.copia.ultimo_id_estoque,
            produto_id: novo.produto_id,
            quantidade: novo.quantidade,
        };
        self.copia.estoques.insert(estoque.id, estoque.clone());
        Ok(estoque)
    }

    async fn atualizar_quantidade_estoque(&mut self, id: i32, quantidade: i32) -> Result<Option<Estoque>, ErroStore> {
        Ok(self.copia.estoques.get_mut(&id).map(|estoque| {
            estoque.quantidade = quantidade;
            estoque.clone()
        }))
    }

    async fn remover_estoque(&mut self, id: i32) -> Result<bool, ErroStore> {
        Ok(self.copia.estoques.remove(&id).is_some())
    }

    async fn remover_estoques_do_produto(&mut self, produto_id: i32) -> Result<u64, ErroStore> {
        let antes = self.copia.estoques.len();
        self.copia.estoques.retain(|_, e| e.produto_id != produto_id);
        Ok((antes - self.copia.estoques.len()) as u64)
    }

    async fn confirmar(self: Box<Self>) -> Result<(), ErroStore> {
        let SessaoMemoria { mut guarda, copia } = *self;
        *guarda = copia;
        Ok(())
    }
}
