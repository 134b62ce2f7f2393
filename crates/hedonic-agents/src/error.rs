//! Error types for the hedonic-agents crate.
//!
//! Effect functions are total and never fail. The only fallible operation
//! is resolving an action from its textual name.

/// Errors that can occur when addressing agent actions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    /// No catalog action has the given name.
    #[error("unknown action: {name}")]
    UnknownAction {
        /// The name that failed to resolve.
        name: String,
    },
}

/// Resolve an action from its snake-case name.
///
/// # Errors
///
/// Returns [`AgentError::UnknownAction`] if no action has that name.
pub fn resolve_action(name: &str) -> Result<hedonic_types::ActionId, AgentError> {
    hedonic_types::ActionId::from_name(name).ok_or_else(|| AgentError::UnknownAction {
        name: name.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use hedonic_types::ActionId;

    use super::*;

    #[test]
    fn resolves_known_names() {
        assert!(matches!(resolve_action("edging"), Ok(ActionId::Edging)));
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = resolve_action("fly");
        assert!(matches!(&err, Err(AgentError::UnknownAction { name }) if name == "fly"));
        assert_eq!(
            err.map_err(|e| e.to_string()).err().as_deref(),
            Some("unknown action: fly")
        );
    }
}
