// src/models/mod.rs

pub mod score_record;
pub mod stats;
