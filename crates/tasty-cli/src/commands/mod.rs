pub mod check;
pub mod config;
pub mod forest_loader;
pub mod tokens;
