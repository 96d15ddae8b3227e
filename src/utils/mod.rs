// src/utils/mod.rs

pub mod extract;
pub mod pagination;
pub mod random;
