//! # Tavolo Config
//!
//! Configuration types for the Tavolo API, loaded from environment variables:
//!
//! - [`jwt`]: JWT session-token configuration
//! - [`cors`]: CORS configuration for the dashboard origin
//! - [`server`]: bind address

pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
