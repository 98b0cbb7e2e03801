// src/utils/mod.rs

pub mod sanitize;
