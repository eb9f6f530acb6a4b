//! Side effects returned by the reducer for execution by the store.

use crate::config::Preferences;

/// Side effects the reducer requests after a state update.
///
/// Keeps the reducer pure by separating state computation from file I/O.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No side effect needed.
    None,
    /// Persist the preference values to disk.
    SavePreferences(Preferences),
}
