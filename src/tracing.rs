//! Tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=panelview::layout=trace` - gesture-level detail
//! - `RUST_LOG=panelview::persistence=debug` - layout file I/O
//!
//! # Log Files
//!
//! Logs are written to `~/.config/panelview/logs/panelview.log` with daily
//! rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::layout::{GestureState, LayoutStore};
use crate::panel::Rect;

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "panelview.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the layout for diffing across an update
#[derive(Debug, Clone)]
pub struct LayoutSnapshot {
    pub gesture: GestureState,
    pub panels: Vec<(String, Rect, bool)>,
}

impl LayoutSnapshot {
    pub fn from_store(store: &LayoutStore) -> Self {
        Self {
            gesture: store.gesture_state(),
            panels: store
                .iter()
                .map(|p| (p.name.clone(), p.rect, p.visible))
                .collect(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        if self.panels.len() != other.panels.len() {
            return Some(format!(
                "panel count: {} → {}",
                self.panels.len(),
                other.panels.len()
            ));
        }

        let mut changes = Vec::new();
        if self.gesture != other.gesture {
            changes.push(format!("gesture: {:?} → {:?}", self.gesture, other.gesture));
        }
        for ((name, before, was_visible), (_, after, is_visible)) in
            self.panels.iter().zip(&other.panels)
        {
            if before != after {
                changes.push(format!(
                    "{}: ({:.3},{:.3} {:.3}x{:.3}) → ({:.3},{:.3} {:.3}x{:.3})",
                    name,
                    before.x,
                    before.y,
                    before.width,
                    before.height,
                    after.x,
                    after.y,
                    after.width,
                    after.height
                ));
            }
            if was_visible != is_visible {
                let status = if *is_visible { "shown" } else { "hidden" };
                changes.push(format!("{}: {}", name, status));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_reports_moves_and_visibility() {
        let mut store = LayoutStore::with_default_layout();
        let before = LayoutSnapshot::from_store(&store);
        assert_eq!(before.diff(&LayoutSnapshot::from_store(&store)), None);

        store.on_press(0.5, 0.35);
        store.on_drag(0.05, 0.0);
        store.toggle_visible("Assets").unwrap();
        let diff = before.diff(&LayoutSnapshot::from_store(&store)).unwrap();
        assert!(diff.contains("gesture: Idle → Moving"), "{}", diff);
        assert!(diff.contains("RenderView:"), "{}", diff);
        assert!(diff.contains("Assets: hidden"), "{}", diff);
    }
}
