//! Console panel - bounded scrollback of diagnostic lines

use std::collections::VecDeque;

use crate::panel::Rect;

use super::PanelView;

/// Lines kept before the oldest are dropped
pub const CONSOLE_CAPACITY: usize = 200;

#[derive(Debug, Clone, Default)]
pub struct ConsolePanel {
    lines: VecDeque<String>,
}

impl ConsolePanel {
    pub fn push_line(&mut self, line: impl Into<String>) {
        if self.lines.len() == CONSOLE_CAPACITY {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl PanelView for ConsolePanel {
    fn draw(&self, _name: &str, _rect: Rect) -> Vec<String> {
        let mut out = vec!["=== CONSOLE ===".to_string()];
        out.extend(self.lines.iter().cloned());
        out
    }
}
