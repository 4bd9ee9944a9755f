// src/utils/mod.rs

pub mod aiken;
pub mod grading;
pub mod html;
pub mod qr;
pub mod window;
