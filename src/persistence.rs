//! Layout persistence
//!
//! Serializes `{modes, widths}` under a fixed key in a key-value store and
//! restores it on startup. A stored record that fails any check is discarded
//! wholesale in favour of the default layout; nothing is partially repaired.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::panel::{LayoutState, PanelId, PanelMode, PanelWidths};
use crate::solver::MIN_PANEL_WIDTH;

/// Storage key for the layout record
pub const LAYOUT_STORAGE_KEY: &str = "documint.panel-layout";

/// Rounding slack when comparing a restored width against the minimum
const MIN_WIDTH_SLACK: f32 = 1e-3;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid layout record: {0}")]
    Invalid(String),
}

/// Minimal key-value contract the engine persists through
pub trait KeyValueStore {
    /// Stored value for `key`, or None if absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError>;
}

/// In-memory store (tests, `--ephemeral` sessions)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one `<key>.json` file per key in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under `~/.config/documint-layout/state/`, creating the directory
    pub fn default_location() -> Result<Self, String> {
        crate::config_paths::ensure_state_dir().map(Self::new)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for a key (characters outside `[A-Za-z0-9._-]` become `_`)
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        std::fs::write(&path, value)?;
        tracing::trace!("Wrote {}", path.display());
        Ok(())
    }
}

/// On-disk shape of the layout record
#[derive(Debug, Serialize, Deserialize)]
struct StoredLayout {
    modes: BTreeMap<PanelId, PanelMode>,
    widths: BTreeMap<PanelId, f32>,
}

impl From<&LayoutState> for StoredLayout {
    fn from(state: &LayoutState) -> Self {
        Self {
            modes: PanelId::ALL
                .into_iter()
                .map(|id| (id, state.mode(id)))
                .collect(),
            widths: PanelId::ALL
                .into_iter()
                .map(|id| (id, state.width(id)))
                .collect(),
        }
    }
}

impl TryFrom<StoredLayout> for LayoutState {
    type Error = PersistError;

    fn try_from(stored: StoredLayout) -> Result<Self, Self::Error> {
        let mut modes = [PanelMode::Normal; 3];
        let mut widths = PanelWidths::new([0.0; 3]);

        for id in PanelId::ALL {
            modes[id.index()] = *stored
                .modes
                .get(&id)
                .ok_or_else(|| PersistError::Invalid(format!("missing mode for {}", id.key())))?;

            let width = *stored
                .widths
                .get(&id)
                .ok_or_else(|| PersistError::Invalid(format!("missing width for {}", id.key())))?;
            if !width.is_finite() || !(0.0..=100.0).contains(&width) {
                return Err(PersistError::Invalid(format!(
                    "width {} for {} is out of range",
                    width,
                    id.key()
                )));
            }
            widths[id] = width;
        }

        let state = LayoutState::from_parts(modes, widths);
        if let Some(violation) = state.invariant_violation() {
            return Err(PersistError::Invalid(violation.to_string()));
        }
        Ok(state)
    }
}

/// Serialize a layout state to its JSON record
pub fn serialize_layout(state: &LayoutState) -> Result<String, PersistError> {
    Ok(serde_json::to_string(&StoredLayout::from(state))?)
}

/// Reject a side-by-side layout where a visible panel is narrower than `min_width`
///
/// Such a panel would pin its divider, since every proposal from below the
/// minimum is refused by the solver.
fn check_min_widths(state: &LayoutState, min_width: f32) -> Result<(), PersistError> {
    let visible = state.visible_panels();
    if state.expanded().is_some() || visible.len() < 2 {
        return Ok(());
    }
    let effective = state.effective_widths();
    match visible
        .into_iter()
        .find(|&id| effective[id] < min_width - MIN_WIDTH_SLACK)
    {
        Some(id) => Err(PersistError::Invalid(format!(
            "{} is {:.2}% wide, below the {}% minimum",
            id.key(),
            effective[id],
            min_width
        ))),
        None => Ok(()),
    }
}

/// Parse and validate a JSON layout record against the default minimum width
pub fn deserialize_layout(raw: &str) -> Result<LayoutState, PersistError> {
    deserialize_layout_with(raw, MIN_PANEL_WIDTH)
}

/// Parse and validate a JSON layout record against `min_width`
pub fn deserialize_layout_with(raw: &str, min_width: f32) -> Result<LayoutState, PersistError> {
    let stored: StoredLayout = serde_json::from_str(raw)?;
    let state = LayoutState::try_from(stored)?;
    check_min_widths(&state, min_width)?;
    Ok(state)
}

/// Restore the layout from `store`, falling back to the default state
pub fn load_layout(store: &dyn KeyValueStore, key: &str) -> LayoutState {
    load_layout_with(store, key, MIN_PANEL_WIDTH)
}

/// Like `load_layout`, for a session configured with a custom minimum width
pub fn load_layout_with(store: &dyn KeyValueStore, key: &str, min_width: f32) -> LayoutState {
    let Some(raw) = store.get(key) else {
        tracing::debug!("No stored layout under {}, using defaults", key);
        return LayoutState::default();
    };

    match deserialize_layout_with(&raw, min_width) {
        Ok(state) => {
            tracing::info!("Restored layout from {}", key);
            state
        }
        Err(e) => {
            tracing::warn!("Discarding stored layout under {}: {}", key, e);
            LayoutState::default()
        }
    }
}

/// Write the layout record to `store`
pub fn save_layout(
    store: &mut dyn KeyValueStore,
    key: &str,
    state: &LayoutState,
) -> Result<(), PersistError> {
    let raw = serialize_layout(state)?;
    store.set(key, &raw)
}
