// src/settings/mod.rs
pub mod schema;
pub mod criteria;
pub mod validator;
pub mod form;
pub mod repository;
pub mod import_export;
pub mod cli_handler;
