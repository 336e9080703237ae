// src/produtos/mod.rs

pub mod produtos_structs;
pub mod produtos_service;
pub mod produtos_router;
