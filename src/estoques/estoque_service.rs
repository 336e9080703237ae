// src/estoques/estoque_service.rs

use serde_json::Value;
use tracing::info;

use super::estoque_structs::{
    AtualizacaoEstoque, Estoque, NovoEstoque, CAMPOS_ATUALIZACAO_ESTOQUE, CAMPOS_NOVO_ESTOQUE,
};
use crate::shared::erros::ErroApi;
use crate::shared::validacao::extrair;
use crate::store::Store;

pub async fn listar(store: &dyn Store) -> Result<Vec<Estoque>, ErroApi> {
    let mut sessao = store.iniciar().await?;
    let estoques = sessao.listar_estoques().await?;
    sessao.confirmar().await?;
    Ok(estoques)
}

pub async fn buscar(store: &dyn Store, id: i32) -> Result<Estoque, ErroApi> {
    let mut sessao = store.iniciar().await?;
    let estoque = sessao
        .buscar_estoque(id)
        .await?
        .ok_or_else(|| ErroApi::nao_encontrado("Estoque", id))?;
    sessao.confirmar().await?;
    Ok(estoque)
}

/// Cria o estoque de um produto e copia a quantidade para o produto.
pub async fn criar(store: &dyn Store, payload: Value) -> Result<Estoque, ErroApi> {
    let novo: NovoEstoque = extrair(payload, CAMPOS_NOVO_ESTOQUE)?;

    let mut sessao = store.iniciar().await?;

    if sessao.buscar_produto(novo.produto_id).await?.is_none() {
        return Err(ErroApi::nao_encontrado("Produto", novo.produto_id));
    }
    if sessao.buscar_estoque_do_produto(novo.produto_id).await?.is_some() {
        return Err(ErroApi::Conflito(format!(
            "Produto com ID {} já possui registro de estoque.",
            novo.produto_id
        )));
    }

    let estoque = sessao.inserir_estoque(&novo).await?;
    sessao
        .definir_quantidade_produto(estoque.produto_id, estoque.quantidade)
        .await?;
    sessao.confirmar().await?;

    info!(estoque_id = estoque.id, produto_id = estoque.produto_id, "Estoque cadastrado");
    Ok(estoque)
}

/// Altera a quantidade em estoque; a quantidade do produto acompanha.
pub async fn atualizar(store: &dyn Store, id: i32, payload: Value) -> Result<Estoque, ErroApi> {
    let atualizacao: AtualizacaoEstoque = extrair(payload, CAMPOS_ATUALIZACAO_ESTOQUE)?;

    let mut sessao = store.iniciar().await?;
    let estoque = sessao
        .atualizar_quantidade_estoque(id, atualizacao.quantidade)
        .await?
        .ok_or_else(|| ErroApi::nao_encontrado("Estoque", id))?;
    sessao
        .definir_quantidade_produto(estoque.produto_id, estoque.quantidade)
        .await?;
    sessao.confirmar().await?;

    info!(estoque_id = id, quantidade = estoque.quantidade, "Estoque atualizado");
    Ok(estoque)
}

/// Remove o registro de estoque. O produto mantém a última quantidade.
pub async fn remover(store: &dyn Store, id: i32) -> Result<(), ErroApi> {
    let mut sessao = store.iniciar().await?;
    if !sessao.remover_estoque(id).await? {
        return Err(ErroApi::nao_encontrado("Estoque", id));
    }
    sessao.confirmar().await?;

    info!(estoque_id = id, "Estoque removido");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorias::categoria_service;
    use crate::produtos::produtos_service;
    use crate::store::StoreMemoria;
    use serde_json::json;

    async fn store_com_produto(quantidade: i32) -> (StoreMemoria, i32) {
        let store = StoreMemoria::new();
        let categoria = categoria_service::criar(&store, json!({ "nome": "Eletrônicos" }))
            .await
            .unwrap();
        let produto = produtos_service::criar(
            &store,
            json!({ "nome": "Celular", "preco": 1200.0, "quantidade": quantidade, "categoriaId": categoria.id }),
        )
        .await
        .unwrap();
        (store, produto.id)
    }

    #[actix_web::test]
    async fn criar_copia_a_quantidade_para_o_produto() {
        let (store, produto_id) = store_com_produto(50).await;

        let estoque = criar(&store, json!({ "produtoId": produto_id, "quantidade": 30 }))
            .await
            .unwrap();

        assert_eq!(estoque.produto_id, produto_id);
        assert_eq!(estoque.quantidade, 30);
        assert_eq!(produtos_service::buscar(&store, produto_id).await.unwrap().quantidade, 30);
    }

    #[actix_web::test]
    async fn criar_para_produto_inexistente() {
        let store = StoreMemoria::new();

        let erro = criar(&store, json!({ "produtoId": 7, "quantidade": 1 })).await.unwrap_err();

        assert!(matches!(erro, ErroApi::NaoEncontrado { recurso: "Produto", id: 7 }));
    }

    #[actix_web::test]
    async fn segundo_estoque_do_mesmo_produto_e_conflito() {
        let (store, produto_id) = store_com_produto(1).await;
        criar(&store, json!({ "produtoId": produto_id, "quantidade": 1 })).await.unwrap();

        let erro = criar(&store, json!({ "produtoId": produto_id, "quantidade": 2 }))
            .await
            .unwrap_err();

        assert!(matches!(erro, ErroApi::Conflito(_)));
        assert_eq!(listar(&store).await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn atualizar_sincroniza_o_produto() {
        let (store, produto_id) = store_com_produto(50).await;
        let estoque = criar(&store, json!({ "produtoId": produto_id, "quantidade": 50 }))
            .await
            .unwrap();

        let atualizado = atualizar(&store, estoque.id, json!({ "quantidade": 12 })).await.unwrap();

        assert_eq!(atualizado.id, estoque.id);
        assert_eq!(atualizado.quantidade, 12);
        assert_eq!(produtos_service::buscar(&store, produto_id).await.unwrap().quantidade, 12);
    }

    #[actix_web::test]
    async fn atualizar_inexistente() {
        let (store, produto_id) = store_com_produto(5).await;

        let erro = atualizar(&store, 99, json!({ "quantidade": 1 })).await.unwrap_err();

        assert!(matches!(erro, ErroApi::NaoEncontrado { recurso: "Estoque", id: 99 }));
        assert_eq!(produtos_service::buscar(&store, produto_id).await.unwrap().quantidade, 5);
    }

    #[actix_web::test]
    async fn quantidade_negativa_e_rejeitada() {
        let (store, produto_id) = store_com_produto(5).await;
        let estoque = criar(&store, json!({ "produtoId": produto_id, "quantidade": 5 }))
            .await
            .unwrap();

        let erro = atualizar(&store, estoque.id, json!({ "quantidade": -1 })).await.unwrap_err();

        assert!(matches!(erro, ErroApi::Validacao(ref e) if e.campo == "quantidade"));
        assert_eq!(buscar(&store, estoque.id).await.unwrap().quantidade, 5);
    }

    #[actix_web::test]
    async fn remover_mantem_o_produto() {
        let (store, produto_id) = store_com_produto(5).await;
        let estoque = criar(&store, json!({ "produtoId": produto_id, "quantidade": 9 }))
            .await
            .unwrap();

        remover(&store, estoque.id).await.unwrap();

        assert!(matches!(remover(&store, estoque.id).await, Err(ErroApi::NaoEncontrado { .. })));
        assert_eq!(produtos_service::buscar(&store, produto_id).await.unwrap().quantidade, 9);
    }
}
