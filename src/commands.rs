//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the runtime performs after an update.

/// Commands returned by update functions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the window
    Redraw,
    /// Close the window and exit the event loop
    Quit,
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Cmd::Redraw)
    }

    /// Check if this command asks the runtime to exit
    pub fn is_quit(&self) -> bool {
        matches!(self, Cmd::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_flags() {
        assert!(Cmd::Redraw.needs_redraw());
        assert!(!Cmd::Redraw.is_quit());
        assert!(Cmd::Quit.is_quit());
        assert!(!Cmd::Quit.needs_redraw());
        assert!(!Cmd::None.needs_redraw());
    }
}
