// src/estoques/estoque_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::Value;

use super::estoque_service;
use crate::shared::erros::ErroApi;
use crate::shared::extratores::IdRecurso;
use crate::AppState;

/// Rota para listar os registros de estoque.
#[get("/estoque")]
pub async fn buscar_estoques(data: web::Data<AppState>) -> Result<HttpResponse, ErroApi> {
    let estoques = estoque_service::listar(data.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(estoques))
}

#[get("/estoque/{id}")]
pub async fn buscar_estoque_por_id(
    data: web::Data<AppState>,
    IdRecurso(id): IdRecurso,
) -> Result<HttpResponse, ErroApi> {
    let estoque = estoque_service::buscar(data.store.as_ref(), id).await?;
    Ok(HttpResponse::Ok().json(estoque))
}

/// Rota para cadastrar o estoque de um produto: `{produtoId, quantidade}`.
#[post("/estoque")]
pub async fn cadastrar_estoque(
    data: web::Data<AppState>,
    item: web::Json<Value>,
) -> Result<HttpResponse, ErroApi> {
    let estoque = estoque_service::criar(data.store.as_ref(), item.into_inner()).await?;
    Ok(HttpResponse::Created().json(estoque))
}

/// Rota para alterar a quantidade em estoque: `{quantidade}`.
#[put("/estoque/{id}")]
pub async fn atualizar_estoque(
    data: web::Data<AppState>,
    IdRecurso(id): IdRecurso,
    item: web::Json<Value>,
) -> Result<HttpResponse, ErroApi> {
    let estoque = estoque_service::atualizar(data.store.as_ref(), id, item.into_inner()).await?;
    Ok(HttpResponse::Ok().json(estoque))
}

#[delete("/estoque/{id}")]
pub async fn deletar_estoque(
    data: web::Data<AppState>,
    IdRecurso(id): IdRecurso,
) -> Result<HttpResponse, ErroApi> {
    estoque_service::remover(data.store.as_ref(), id).await?;
    Ok(HttpResponse::NoContent().finish())
}
