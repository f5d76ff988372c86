//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::panel::LayoutState;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the layout area
    Redraw,
    /// Write the layout record to the persistence store
    SaveLayout(LayoutState),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Persist the given state, then redraw
    pub fn save_and_redraw(state: &LayoutState) -> Self {
        Cmd::Batch(vec![Cmd::SaveLayout(state.clone()), Cmd::Redraw])
    }

    /// Whether this command (or any nested command) writes the layout
    pub fn persists_layout(&self) -> bool {
        match self {
            Cmd::SaveLayout(_) => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::persists_layout),
            _ => false,
        }
    }

    /// Whether this command (or any nested command) requests a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_redraw),
            _ => false,
        }
    }

    /// Flatten nested batches into a flat list, skipping `Cmd::None`
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            other => vec![other],
        }
    }
}
