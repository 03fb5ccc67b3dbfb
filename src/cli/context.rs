//! CLI context for storing global options during command execution

use crate::config::AuditConfig;
use std::cell::RefCell;

thread_local! {
    static CLI_CONTEXT: RefCell<Option<CliContext>> = const { RefCell::new(None) };
}

/// Context containing global CLI options and the resolved configuration
#[derive(Debug, Clone, Default)]
pub struct CliContext {
    pub verbose: bool,
    pub quiet: bool,
    pub config: AuditConfig,
}

impl CliContext {
    /// Set the global CLI context for the current thread
    pub fn set(context: CliContext) {
        CLI_CONTEXT.with(|c| {
            *c.borrow_mut() = Some(context);
        });
    }

    /// Get the current CLI context
    pub fn get() -> Option<CliContext> {
        CLI_CONTEXT.with(|c| c.borrow().clone())
    }

    /// Configuration in effect, defaults when no context was set
    pub fn config() -> AuditConfig {
        Self::get().map(|ctx| ctx.config).unwrap_or_default()
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose() -> bool {
        Self::get().map(|ctx| ctx.verbose).unwrap_or(false)
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet() -> bool {
        Self::get().map(|ctx| ctx.quiet).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PairEncoding;

    #[test]
    fn test_defaults_without_context() {
        // Each test runs on its own thread, so no context is set here
        assert!(!CliContext::is_quiet());
        assert_eq!(CliContext::config(), AuditConfig::default());
    }

    #[test]
    fn test_set_and_get() {
        let mut config = AuditConfig::default();
        config.encoding = PairEncoding::Hex;
        CliContext::set(CliContext {
            verbose: true,
            quiet: false,
            config: config.clone(),
        });

        assert!(CliContext::is_verbose());
        assert_eq!(CliContext::config(), config);
    }
}
