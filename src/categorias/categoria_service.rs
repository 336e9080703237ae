// src/categorias/categoria_service.rs

use serde_json::Value;
use tracing::info;

use super::categoria_structs::{Categoria, NovaCategoria, CAMPOS_CATEGORIA};
use crate::shared::erros::ErroApi;
use crate::shared::validacao::extrair;
use crate::store::Store;

/// Lista todas as categorias.
pub async fn listar(store: &dyn Store) -> Result<Vec<Categoria>, ErroApi> {
    let mut sessao = store.iniciar().await?;
    let categorias = sessao.listar_categorias().await?;
    sessao.confirmar().await?;
    Ok(categorias)
}

pub async fn buscar(store: &dyn Store, id: i32) -> Result<Categoria, ErroApi> {
    let mut sessao = store.iniciar().await?;
    let categoria = sessao
        .buscar_categoria(id)
        .await?
        .ok_or_else(|| ErroApi::nao_encontrado("Categoria", id))?;
    sessao.confirmar().await?;
    Ok(categoria)
}

/// Cadastra uma categoria. `nome` é obrigatório e não pode ser vazio.
pub async fn criar(store: &dyn Store, payload: Value) -> Result<Categoria, ErroApi> {
    let nova: NovaCategoria = extrair(payload, CAMPOS_CATEGORIA)?;

    let mut sessao = store.iniciar().await?;
    let categoria = sessao.inserir_categoria(&nova).await?;
    sessao.confirmar().await?;

    info!(categoria_id = categoria.id, "Categoria cadastrada");
    Ok(categoria)
}

pub async fn atualizar(store: &dyn Store, id: i32, payload: Value) -> Result<Categoria, ErroApi> {
    let nova: NovaCategoria = extrair(payload, CAMPOS_CATEGORIA)?;

    let mut sessao = store.iniciar().await?;
    let categoria = sessao
        .atualizar_categoria(id, &nova)
        .await?
        .ok_or_else(|| ErroApi::nao_encontrado("Categoria", id))?;
    sessao.confirmar().await?;

    info!(categoria_id = id, "Categoria atualizada");
    Ok(categoria)
}

/// Remove uma categoria sem produtos.
///
/// Categorias com produtos não são removidas (409); os produtos precisam ser
/// removidos ou movidos para outra categoria antes.
pub async fn remover(store: &dyn Store, id: i32) -> Result<(), ErroApi> {
    let mut sessao = store.iniciar().await?;

    if sessao.buscar_categoria(id).await?.is_none() {
        return Err(ErroApi::nao_encontrado("Categoria", id));
    }

    let produtos = sessao.contar_produtos_da_categoria(id).await?;
    if produtos > 0 {
        return Err(ErroApi::Conflito(format!(
            "Categoria com ID {} possui {} produto(s) e não pode ser removida.",
            id, produtos
        )));
    }

    sessao.remover_categoria(id).await?;
    sessao.confirmar().await?;

    info!(categoria_id = id, "Categoria removida");
    Ok(())
}
