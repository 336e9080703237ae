// src/produtos/produtos_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::Value;

// Importa o serviço de produtos da mesma pasta `produtos`
use super::produtos_service;
use crate::shared::erros::ErroApi;
use crate::shared::extratores::IdRecurso;

// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Rota para buscar todos os produtos.
#[get("/produto")]
pub async fn buscar_produtos(data: web::Data<AppState>) -> Result<HttpResponse, ErroApi> {
    let produtos = produtos_service::listar(data.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(produtos))
}

#[get("/produto/{id}")]
pub async fn buscar_produto_por_id(
    data: web::Data<AppState>,
    IdRecurso(id): IdRecurso,
) -> Result<HttpResponse, ErroApi> {
    let produto = produtos_service::buscar(data.store.as_ref(), id).await?;
    Ok(HttpResponse::Ok().json(produto))
}

/// Rota para inserir um novo produto.
///
/// Recebe `{nome, preco, quantidade, categoriaId}` e devolve 201 com o
/// produto criado, incluindo o ID gerado.
#[post("/produto")]
pub async fn cadastrar_produto(
    data: web::Data<AppState>,
    item: web::Json<Value>,
) -> Result<HttpResponse, ErroApi> {
    let produto = produtos_service::criar(data.store.as_ref(), item.into_inner()).await?;
    Ok(HttpResponse::Created().json(produto))
}

/// Rota para atualizar um produto. Só os campos enviados mudam.
#[put("/produto/{id}")]
pub async fn atualizar_produto(
    data: web::Data<AppState>,
    IdRecurso(id): IdRecurso,
    item: web::Json<Value>,
) -> Result<HttpResponse, ErroApi> {
    let produto = produtos_service::atualizar(data.store.as_ref(), id, item.into_inner()).await?;
    Ok(HttpResponse::Ok().json(produto))
}

/// Rota para deletar um produto (e o seu estoque).
#[delete("/produto/{id}")]
pub async fn deletar_produto(
    data: web::Data<AppState>,
    IdRecurso(id): IdRecurso,
) -> Result<HttpResponse, ErroApi> {
    produtos_service::remover(data.store.as_ref(), id).await?;
    Ok(HttpResponse::NoContent().finish())
}
