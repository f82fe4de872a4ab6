//! Configuration management for the todo server.
//!
//! Loads configuration from environment variables with sensible
//! defaults, so the binary runs out of the box against a local MongoDB
//! or, with `TODO_BACKEND=memory`, with no infrastructure at all.

use std::env;

/// Which store backend the server runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Durable storage in MongoDB.
    Mongodb,
    /// Process-lifetime in-memory storage.
    Memory,
}

impl Backend {
    /// Parse a backend name, defaulting to MongoDB.
    ///
    /// Only the literal `memory` (any casing) selects the volatile
    /// backend; everything else means the durable one.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name.eq_ignore_ascii_case("memory") {
            Self::Memory
        } else {
            Self::Mongodb
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Store backend selection.
    pub backend: Backend,
    /// MongoDB settings (used when `backend` is [`Backend::Mongodb`]).
    pub mongo: MongoConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
}

/// MongoDB connection settings.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string.
    pub uri: String,
    /// Logical database name.
    pub database: String,
    /// Collection holding the todo items.
    pub collection: String,
}

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            backend: Backend::parse(
                &env::var("TODO_BACKEND").unwrap_or_else(|_| "mongodb".to_string()),
            ),
            mongo: MongoConfig {
                uri: env::var("MONGODB_URI")
                    .unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string()),
                database: env::var("MONGODB_DATABASE").unwrap_or_else(|_| "todos".to_string()),
                collection: env::var("MONGODB_COLLECTION").unwrap_or_else(|_| "todos".to_string()),
            },
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(4000),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parse() {
        assert_eq!(Backend::parse("memory"), Backend::Memory);
        assert_eq!(Backend::parse("Memory"), Backend::Memory);
        assert_eq!(Backend::parse("mongodb"), Backend::Mongodb);
        assert_eq!(Backend::parse("anything-else"), Backend::Mongodb);
    }
}
