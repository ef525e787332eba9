//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! - Autenticazione e JWT
//! - Configurazione
//! - Gestione errori
//! - Stato applicazione e registro dei componenti

pub mod auth;
pub mod beans;
pub mod config;
pub mod error;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::{Claims, authentication_middleware, decode_jwt, encode_jwt};
pub use beans::{BeanInfo, BeanRegistry};
pub use config::Config;
pub use error::AppError;
pub use state::AppState;
