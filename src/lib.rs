use errors::Error;

pub mod configuration;
pub mod domain;
pub mod errors;
pub mod form;
pub mod password_client;
pub mod telemetry;
pub mod view;
pub mod view_engine;

/// Application results options list
pub type Result<T, E = Error> = std::result::Result<T, E>;
