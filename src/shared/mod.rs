// src/shared/mod.rs

// Envelope das respostas de erro
pub mod shared_structs;
// Erros da API e o mapeamento para status HTTP
pub mod erros;
// Camada de validação dos payloads
pub mod validacao;
// Serde para valores decimais (preço)
pub mod decimal;
// Extrator do id de recurso no caminho
pub mod extratores;
