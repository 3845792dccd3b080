// src/presentation/http/middleware/mod.rs
pub mod auth_gate;
