pub mod entities;
pub mod repository;
pub mod util;
pub mod validation;
pub mod access_service;
pub mod reference_service;
pub mod errors_service;

pub use entities::*;
pub use access_service::*;
pub use reference_service::*;
pub use errors_service::*;
