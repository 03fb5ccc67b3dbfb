//! Configuration management
//!
//! Settings are stored as TOML in ~/.merkle-audit/config.toml and can be
//! overridden per invocation from the command line.

pub mod audit_config;

// Re-export commonly used items
pub use audit_config::AuditConfig;
