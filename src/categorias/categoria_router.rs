// src/categorias/categoria_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::Value;

use super::categoria_service;
use crate::shared::erros::ErroApi;
use crate::shared::extratores::IdRecurso;

// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Rota para buscar todas as categorias.
#[get("/categoria")]
pub async fn buscar_categorias(data: web::Data<AppState>) -> Result<HttpResponse, ErroApi> {
    let categorias = categoria_service::listar(data.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(categorias))
}

/// Rota para buscar uma categoria por ID.
#[get("/categoria/{id}")]
pub async fn buscar_categoria_por_id(
    data: web::Data<AppState>,
    IdRecurso(id): IdRecurso,
) -> Result<HttpResponse, ErroApi> {
    let categoria = categoria_service::buscar(data.store.as_ref(), id).await?;
    Ok(HttpResponse::Ok().json(categoria))
}

/// Rota para cadastrar uma nova categoria. Devolve 201 com a categoria criada.
#[post("/categoria")]
pub async fn cadastrar_categoria(
    data: web::Data<AppState>,
    item: web::Json<Value>,
) -> Result<HttpResponse, ErroApi> {
    let categoria = categoria_service::criar(data.store.as_ref(), item.into_inner()).await?;
    Ok(HttpResponse::Created().json(categoria))
}

/// Rota para atualizar uma categoria existente.
#[put("/categoria/{id}")]
pub async fn atualizar_categoria(
    data: web::Data<AppState>,
    IdRecurso(id): IdRecurso,
    item: web::Json<Value>,
) -> Result<HttpResponse, ErroApi> {
    let categoria = categoria_service::atualizar(data.store.as_ref(), id, item.into_inner()).await?;
    Ok(HttpResponse::Ok().json(categoria))
}

/// Rota para deletar uma categoria. 204 sem corpo.
#[delete("/categoria/{id}")]
pub async fn deletar_categoria(
    data: web::Data<AppState>,
    IdRecurso(id): IdRecurso,
) -> Result<HttpResponse, ErroApi> {
    categoria_service::remover(data.store.as_ref(), id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::{app_state_memoria, configurar_rotas};

    #[actix_web::test]
    async fn ciclo_completo_da_categoria() {
        let app = test::init_service(App::new().app_data(app_state_memoria()).configure(configurar_rotas)).await;

        let req = test::TestRequest::post()
            .uri("/api/categoria")
            .set_json(json!({ "nome": "teste3" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let criada: Value = test::read_body_json(resp).await;
        assert_eq!(criada["nome"], "teste3");
        let id = criada["id"].as_i64().unwrap();

        let req = test::TestRequest::put()
            .uri(&format!("/api/categoria/{}", id))
            .set_json(json!({ "nome": "Variedade2" }))
            .to_request();
        let atualizada: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(atualizada, json!({ "id": id, "nome": "Variedade2" }));

        let req = test::TestRequest::get().uri("/api/categoria").to_request();
        let todas: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(todas, json!([{ "id": id, "nome": "Variedade2" }]));

        let req = test::TestRequest::delete()
            .uri(&format!("/api/categoria/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(test::read_body(resp).await.is_empty());

        let req = test::TestRequest::get()
            .uri(&format!("/api/categoria/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let corpo: Value = test::read_body_json(resp).await;
        assert_eq!(corpo["status"], "error");
    }

    #[actix_web::test]
    async fn nome_vazio_devolve_400() {
        let app = test::init_service(App::new().app_data(app_state_memoria()).configure(configurar_rotas)).await;

        let req = test::TestRequest::post()
            .uri("/api/categoria")
            .set_json(json!({ "nome": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let corpo: Value = test::read_body_json(resp).await;
        assert_eq!(corpo["message"], "campo 'nome' inválido: não pode ser vazio");
    }

    #[actix_web::test]
    async fn json_malformado_e_id_invalido_devolvem_400() {
        let app = test::init_service(App::new().app_data(app_state_memoria()).configure(configurar_rotas)).await;

        let req = test::TestRequest::post()
            .uri("/api/categoria")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ nome: ")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::delete().uri("/api/categoria/abc").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::delete().uri("/api/categoria/0").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }
}
