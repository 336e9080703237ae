// src/main.rs

use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use tracing::{error, info, warn};

// Importa os módulos
//
// Cada recurso tem sua pasta com structs, serviço (regras) e router (rotas HTTP).
mod categorias; // Módulo de categorias
mod config;     // Configuração via ambiente
mod estoques;   // Módulo de estoque
mod produtos;   // Módulo de produtos
mod shared;     // Módulo shared
mod store;      // Armazenamento (Postgres ou memória)


use config::Configuracao;
use shared::erros::ErroApi;
use shared::validacao::ErroValidacao;
use store::{Store, StoreMemoria, StorePostgres};

// Estado compartilhado: o store, criado aqui e repassado a cada operação.
pub struct AppState {
    pub store: Arc<dyn Store>,
}

/// Registra todas as rotas sob `/api`.
pub fn configurar_rotas(cfg: &mut web::ServiceConfig) {
    // JSON malformado responde 400 no mesmo formato dos outros erros
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        ErroApi::from(ErroValidacao::new("corpo", err.to_string())).into()
    });

    cfg.app_data(json_config).service(
        web::scope("/api")
            // Módulo de Categorias
            .service(categorias::categoria_router::buscar_categorias)
            .service(categorias::categoria_router::buscar_categoria_por_id)
            .service(categorias::categoria_router::cadastrar_categoria)
            .service(categorias::categoria_router::atualizar_categoria)
            .service(categorias::categoria_router::deletar_categoria)
            // Módulo de Produtos
            .service(produtos::produtos_router::buscar_produtos)
            .service(produtos::produtos_router::buscar_produto_por_id)
            .service(produtos::produtos_router::cadastrar_produto)
            .service(produtos::produtos_router::atualizar_produto)
            .service(produtos::produtos_router::deletar_produto)
            // Módulo de Estoque
            .service(estoques::estoque_router::buscar_estoques)
            .service(estoques::estoque_router::buscar_estoque_por_id)
            .service(estoques::estoque_router::cadastrar_estoque)
            .service(estoques::estoque_router::atualizar_estoque)
            .service(estoques::estoque_router::deletar_estoque),
    );
}

#[cfg(test)]
pub(crate) fn app_state_memoria() -> web::Data<AppState> {
    web::Data::new(AppState { store: Arc::new(StoreMemoria::new()) })
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).compact().init();
}

// Função principal da aplicação Actix Web.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    setup_tracing();

    let config = Configuracao::do_ambiente().map_err(|e| {
        error!("{}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    // Com DATABASE_URL usa o Postgres; sem ela, os dados vivem só enquanto o processo roda.
    let store: Arc<dyn Store> = match &config.database_url {
        Some(url) => {
            let store = StorePostgres::conectar(url).await.map_err(|e| {
                error!(erro = %e, "Falha ao conectar ao banco PostgreSQL");
                std::io::Error::new(std::io::ErrorKind::Other, e)
            })?;
            Arc::new(store)
        }
        None => {
            warn!("DATABASE_URL não definida; usando armazenamento em memória");
            Arc::new(StoreMemoria::new())
        }
    };

    // web::Data é usado para compartilhar o estado entre as rotas.
    let app_state = web::Data::new(AppState { store });

    info!(host = %config.host, porta = config.porta, "Iniciando API de inventário");

    // Configura e inicia o servidor HTTP.
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            .configure(configurar_rotas)
    })
    .bind((config.host.as_str(), config.porta))?
    .run()
    .await
}
