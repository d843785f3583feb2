pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod methods;
pub mod openapi;
pub mod router;
pub mod shutdown;
pub mod state;
