// src/handlers/mod.rs

pub mod qr;
pub mod quiz;
