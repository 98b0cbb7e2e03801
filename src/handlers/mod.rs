// src/handlers/mod.rs

pub mod score;
pub mod stats;
