pub mod assistant;
pub mod catalog;
pub mod cli;
pub mod entity;
pub mod error;
pub mod gateway;
pub mod links;
pub mod logging;
pub mod parser;
pub mod server;
pub mod session;

pub use assistant::Assistant;
pub use error::{Result, TaazaError};
pub use gateway::{Gateway, GatewayConfig};
