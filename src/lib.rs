pub mod app;
pub mod cli;
pub mod commands;
pub mod context;
pub mod sts;
pub mod types;
