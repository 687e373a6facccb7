pub mod credo_service;
pub mod helpers;
pub mod tracing;

pub use credo_service::{AppState, CredoService};
