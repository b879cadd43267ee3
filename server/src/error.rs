//! Startup error types.

/// A configuration value could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid HOST: '{value}' (expected an IP address)")]
    InvalidHost { value: String },
    #[error("invalid PORT: '{value}'")]
    InvalidPort { value: String },
}

/// Fatal errors surfaced from `main`.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Missing or malformed `[package.metadata.leptos]` / `LEPTOS_*` settings.
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
