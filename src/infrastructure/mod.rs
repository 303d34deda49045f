// Infrastructure layer - settings and dashboard file loading
pub mod config;
