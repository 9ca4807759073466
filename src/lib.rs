pub mod api;
pub mod config;
pub mod contrast;
pub mod error;
pub mod export;
pub mod ratios;
pub mod scale;
pub mod util;
// cmd and reports are binary modules (declared in main.rs).
