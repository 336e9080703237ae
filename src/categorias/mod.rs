// src/categorias/mod.rs

// Structs de categoria (registro e payload)
pub mod categoria_structs;
// Regras de negócio das categorias
pub mod categoria_service;
// Rotas HTTP de categoria
pub mod categoria_router;
