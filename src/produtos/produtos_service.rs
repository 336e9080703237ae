// src/produtos/produtos_service.rs

//! Regras de negócio dos produtos.
//!
//! - O produto sempre aponta para uma categoria existente.
//! - Quando o produto tem registro de estoque, a quantidade do estoque é a
//!   fonte da verdade: mudar `quantidade` no produto também muda o estoque,
//!   na mesma sessão.
//! - Remover o produto remove o seu estoque.

use serde_json::Value;
use tracing::info;

use super::produtos_structs::{
    AtualizacaoProduto, NovoProduto, Produto, CAMPOS_ATUALIZACAO_PRODUTO, CAMPOS_NOVO_PRODUTO,
};
use crate::shared::erros::ErroApi;
use crate::shared::validacao::extrair;
use crate::store::{Sessao, Store};

pub async fn listar(store: &dyn Store) -> Result<Vec<Produto>, ErroApi> {
    let mut sessao = store.iniciar().await?;
    let produtos = sessao.listar_produtos().await?;
    sessao.confirmar().await?;
    Ok(produtos)
}

pub async fn buscar(store: &dyn Store, id: i32) -> Result<Produto, ErroApi> {
    let mut sessao = store.iniciar().await?;
    let produto = sessao
        .buscar_produto(id)
        .await?
        .ok_or_else(|| ErroApi::nao_encontrado("Produto", id))?;
    sessao.confirmar().await?;
    Ok(produto)
}

pub async fn criar(store: &dyn Store, payload: Value) -> Result<Produto, ErroApi> {
    let novo: NovoProduto = extrair(payload, CAMPOS_NOVO_PRODUTO)?;

    let mut sessao = store.iniciar().await?;
    garantir_categoria(sessao.as_mut(), novo.categoria_id).await?;
    let produto = sessao.inserir_produto(&novo).await?;
    sessao.confirmar().await?;

    info!(produto_id = produto.id, categoria_id = produto.categoria_id, "Produto cadastrado");
    Ok(produto)
}

/// Atualiza apenas os campos enviados; o id nunca muda.
pub async fn atualizar(store: &dyn Store, id: i32, payload: Value) -> Result<Produto, ErroApi> {
    let atualizacao: AtualizacaoProduto = extrair(payload, CAMPOS_ATUALIZACAO_PRODUTO)?;

    let mut sessao = store.iniciar().await?;
    let mut produto = sessao
        .buscar_produto(id)
        .await?
        .ok_or_else(|| ErroApi::nao_encontrado("Produto", id))?;

    if let Some(categoria_id) = atualizacao.categoria_id {
        garantir_categoria(sessao.as_mut(), categoria_id).await?;
    }
    let nova_quantidade = atualizacao.quantidade;

    produto.aplicar(atualizacao);
    let produto = sessao
        .atualizar_produto(&produto)
        .await?
        .ok_or_else(|| ErroApi::nao_encontrado("Produto", id))?;

    if let Some(quantidade) = nova_quantidade {
        if let Some(estoque) = sessao.buscar_estoque_do_produto(id).await? {
            sessao.atualizar_quantidade_estoque(estoque.id, quantidade).await?;
            info!(produto_id = id, estoque_id = estoque.id, quantidade, "Estoque sincronizado com o produto");
        }
    }

    sessao.confirmar().await?;

    info!(produto_id = id, "Produto atualizado");
    Ok(produto)
}

pub async fn remover(store: &dyn Store, id: i32) -> Result<(), ErroApi> {
    let mut sessao = store.iniciar().await?;

    if sessao.buscar_produto(id).await?.is_none() {
        return Err(ErroApi::nao_encontrado("Produto", id));
    }

    // O estoque sai antes do produto, na mesma sessão
    let estoques = sessao.remover_estoques_do_produto(id).await?;
    sessao.remover_produto(id).await?;
    sessao.confirmar().await?;

    info!(produto_id = id, estoques_removidos = estoques, "Produto removido");
    Ok(())
}

async fn garantir_categoria(sessao: &mut dyn Sessao, categoria_id: i32) -> Result<(), ErroApi> {
    match sessao.buscar_categoria(categoria_id).await? {
        Some(_) => Ok(()),
        None => Err(ErroApi::nao_encontrado("Categoria", categoria_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorias::categoria_service;
    use crate::estoques::estoque_service;
    use crate::store::StoreMemoria;
    use bigdecimal::BigDecimal;
    use serde_json::json;
    use std::str::FromStr;

    async fn store_com_categoria() -> (StoreMemoria, i32) {
        let store = StoreMemoria::new();
        let categoria = categoria_service::criar(&store, json!({ "nome": "Informática" }))
            .await
            .unwrap();
        (store, categoria.id)
    }

    #[actix_web::test]
    async fn criar_devolve_os_campos_enviados() {
        let (store, categoria_id) = store_com_categoria().await;

        let produto = criar(
            &store,
            json!({ "nome": "Computador", "preco": 2000.0, "quantidade": 10, "categoriaId": categoria_id }),
        )
        .await
        .unwrap();

        assert_eq!(produto.nome, "Computador");
        assert_eq!(produto.preco, BigDecimal::from(2000));
        assert_eq!(produto.quantidade, 10);
        assert_eq!(produto.categoria_id, categoria_id);
        assert_eq!(buscar(&store, produto.id).await.unwrap(), produto);
    }

    #[actix_web::test]
    async fn criar_exige_categoria_existente() {
        let (store, categoria_id) = store_com_categoria().await;

        let erro = criar(
            &store,
            json!({ "nome": "HD", "preco": 1, "quantidade": 1, "categoriaId": categoria_id + 1 }),
        )
        .await
        .unwrap_err();

        assert!(matches!(erro, ErroApi::NaoEncontrado { recurso: "Categoria", .. }));
        assert!(listar(&store).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn criar_exige_todos_os_campos() {
        let (store, _) = store_com_categoria().await;

        let erro = criar(&store, json!({ "nome": "HD", "preco": 1, "quantidade": 1 }))
            .await
            .unwrap_err();

        assert!(matches!(erro, ErroApi::Validacao(ref e) if e.campo == "categoriaId"));
    }

    #[actix_web::test]
    async fn atualizar_muda_so_os_campos_enviados() {
        let (store, categoria_id) = store_com_categoria().await;
        let produto = criar(
            &store,
            json!({ "nome": "HD", "preco": 100.0, "quantidade": 1, "categoriaId": categoria_id }),
        )
        .await
        .unwrap();

        let atualizado = atualizar(&store, produto.id, json!({ "preco": 200.5 })).await.unwrap();

        assert_eq!(atualizado.id, produto.id);
        assert_eq!(atualizado.nome, "HD");
        assert_eq!(atualizado.preco, BigDecimal::from_str("200.5").unwrap());
        assert_eq!(atualizado.quantidade, 1);
        assert_eq!(atualizado.categoria_id, categoria_id);
    }

    #[actix_web::test]
    async fn atualizar_quantidade_sincroniza_o_estoque() {
        let (store, categoria_id) = store_com_categoria().await;
        let produto = criar(
            &store,
            json!({ "nome": "HD", "preco": 100.0, "quantidade": 5, "categoriaId": categoria_id }),
        )
        .await
        .unwrap();
        let estoque = estoque_service::criar(&store, json!({ "produtoId": produto.id, "quantidade": 5 }))
            .await
            .unwrap();

        atualizar(&store, produto.id, json!({ "quantidade": 8 })).await.unwrap();

        assert_eq!(estoque_service::buscar(&store, estoque.id).await.unwrap().quantidade, 8);
    }

    #[actix_web::test]
    async fn atualizar_para_categoria_inexistente_nao_grava() {
        let (store, categoria_id) = store_com_categoria().await;
        let produto = criar(
            &store,
            json!({ "nome": "HD", "preco": 100.0, "quantidade": 1, "categoriaId": categoria_id }),
        )
        .await
        .unwrap();

        let erro = atualizar(&store, produto.id, json!({ "nome": "SSD", "categoriaId": 999 }))
            .await
            .unwrap_err();

        assert!(matches!(erro, ErroApi::NaoEncontrado { id: 999, .. }));
        assert_eq!(buscar(&store, produto.id).await.unwrap().nome, "HD");
    }

    #[actix_web::test]
    async fn atualizar_e_remover_inexistente() {
        let (store, _) = store_com_categoria().await;

        let erro = atualizar(&store, 42, json!({ "nome": "SSD" })).await.unwrap_err();
        assert!(matches!(erro, ErroApi::NaoEncontrado { recurso: "Produto", id: 42 }));

        let erro = remover(&store, 42).await.unwrap_err();
        assert!(matches!(erro, ErroApi::NaoEncontrado { recurso: "Produto", id: 42 }));
    }

    #[actix_web::test]
    async fn preco_com_muitas_casas_e_gravado_exato() {
        let (store, categoria_id) = store_com_categoria().await;
        let payload: serde_json::Value = serde_json::from_str(&format!(
            r#"{{ "nome": "HD", "preco": 1234567.123456789012345, "quantidade": 1, "categoriaId": {} }}"#,
            categoria_id
        ))
        .unwrap();

        let produto = criar(&store, payload).await.unwrap();

        assert_eq!(produto.preco, BigDecimal::from_str("1234567.123456789012345").unwrap());
    }

    #[actix_web::test]
    async fn remover_leva_o_estoque_junto() {
        let (store, categoria_id) = store_com_categoria().await;
        let produto = criar(
            &store,
            json!({ "nome": "HD", "preco": 100.0, "quantidade": 1, "categoriaId": categoria_id }),
        )
        .await
        .unwrap();
        let estoque = estoque_service::criar(&store, json!({ "produtoId": produto.id, "quantidade": 1 }))
            .await
            .unwrap();

        remover(&store, produto.id).await.unwrap();

        assert!(matches!(buscar(&store, produto.id).await, Err(ErroApi::NaoEncontrado { .. })));
        assert!(matches!(
            estoque_service::buscar(&store, estoque.id).await,
            Err(ErroApi::NaoEncontrado { .. })
        ));
    }
}
