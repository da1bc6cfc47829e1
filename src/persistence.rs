//! Layout persistence
//!
//! Line-oriented text, one panel per line, in store order:
//!
//! ```text
//! <category:int> <name> <x> <y> <width> <height>
//! ```
//!
//! Fields are separated by whitespace. Floats use Rust's shortest round-trip
//! formatting, which is locale independent. There is no header or version
//! tag.
//!
//! Loading replaces the whole store. Lines that don't hold a valid record are
//! skipped and reported; they never abort the load.

use std::fs;
use std::path::Path;

use crate::error::LayoutError;
use crate::layout::LayoutStore;
use crate::panel::{Panel, PanelCategory, Rect};

/// File used by the save/load hotkeys when no path is given
pub const DEFAULT_LAYOUT_FILE: &str = "layout.txt";

/// Result of decoding a layout file
#[derive(Debug, Default)]
pub struct DecodedLayout {
    pub panels: Vec<Panel>,
    /// One `LayoutError::MalformedLine` per skipped line
    pub skipped: Vec<LayoutError>,
}

/// Serialize panels to the layout text format
pub fn encode<'a>(panels: impl IntoIterator<Item = &'a Panel>) -> String {
    let mut out = String::new();
    for panel in panels {
        let rect = panel.rect;
        out.push_str(&format!(
            "{} {} {} {} {} {}\n",
            panel.category.index(),
            encode_name(&panel.name),
            rect.x,
            rect.y,
            rect.width,
            rect.height
        ));
    }
    out
}

/// Names are whitespace-delimited on disk, so embedded whitespace becomes `_`
fn encode_name(name: &str) -> String {
    if name.is_empty() {
        return "_".to_string();
    }
    if name.contains(char::is_whitespace) {
        tracing::warn!(name, "Panel name contains whitespace, saving with underscores");
        return name.replace(char::is_whitespace, "_");
    }
    name.to_string()
}

/// Parse layout text. Never fails; bad lines end up in `skipped`.
pub fn decode(text: &str) -> DecodedLayout {
    let mut decoded = DecodedLayout::default();

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match decode_line(i + 1, line) {
            Ok(panel) => decoded.panels.push(panel),
            Err(err) => {
                tracing::warn!("{}", err);
                decoded.skipped.push(err);
            }
        }
    }

    decoded
}

fn decode_line(line_no: usize, line: &str) -> Result<Panel, LayoutError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 6 {
        return Err(LayoutError::malformed(
            line_no,
            format!("expected 6 fields, found {}", fields.len()),
        ));
    }

    let index: i32 = fields[0]
        .parse()
        .map_err(|_| LayoutError::malformed(line_no, format!("bad category '{}'", fields[0])))?;
    let category = PanelCategory::from_index(index)
        .ok_or_else(|| LayoutError::malformed(line_no, format!("unknown category {}", index)))?;

    let name = fields[1];
    let mut values = [0.0f32; 4];
    for (slot, field) in values.iter_mut().zip(&fields[2..6]) {
        *slot = field
            .parse()
            .map_err(|_| LayoutError::malformed(line_no, format!("bad number '{}'", field)))?;
    }

    let [x, y, width, height] = values;
    let rect = Rect::new(x, y, width, height);
    if !rect.is_finite() {
        return Err(LayoutError::malformed(line_no, "non-finite coordinate"));
    }

    let normalized = rect.normalized();
    if normalized != rect {
        tracing::debug!(name, ?rect, ?normalized, "Clamped loaded panel rect");
    }

    Ok(Panel::new(category, name, normalized))
}

/// Write every panel to `path`, overwriting it
pub fn save(store: &LayoutStore, path: &Path) -> Result<(), LayoutError> {
    fs::write(path, encode(store.iter())).map_err(|e| LayoutError::io(path, &e))?;
    tracing::info!(path = %path.display(), panels = store.len(), "Layout saved");
    Ok(())
}

/// Read and decode `path` without touching any store
pub fn load(path: &Path) -> Result<DecodedLayout, LayoutError> {
    let text = fs::read_to_string(path).map_err(|e| LayoutError::io(path, &e))?;
    Ok(decode(&text))
}

impl LayoutStore {
    pub fn save_to(&self, path: &Path) -> Result<(), LayoutError> {
        save(self, path)
    }

    /// Replace the store with the layout in `path`.
    ///
    /// On an I/O error the current panels are left in place. Returns the
    /// lines that were skipped.
    pub fn load_from(&mut self, path: &Path) -> Result<Vec<LayoutError>, LayoutError> {
        let decoded = load(path)?;
        tracing::info!(
            path = %path.display(),
            panels = decoded.panels.len(),
            skipped = decoded.skipped.len(),
            "Layout loaded"
        );
        self.replace(decoded.panels);
        Ok(decoded.skipped)
    }
}
