// src/estoques/mod.rs

pub mod estoque_structs;
pub mod estoque_service;
pub mod estoque_router;
