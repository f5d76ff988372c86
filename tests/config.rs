//! Configuration system tests
//!
//! Tests for config paths and layout config loading.

use documint_layout::config::LayoutConfig;
use documint_layout::config_paths;
use documint_layout::model::{AppModel, LayoutMode, DEFAULT_MOBILE_BREAKPOINT};
use documint_layout::panel::LayoutState;
use documint_layout::solver::MIN_PANEL_WIDTH;
use documint_layout::update::update;
use documint_layout::Msg;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("documint-layout"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("yaml"));
    }
}

#[test]
fn test_state_and_logs_live_under_config_dir() {
    if let (Some(config), Some(state), Some(logs)) = (
        config_paths::config_dir(),
        config_paths::state_dir(),
        config_paths::logs_dir(),
    ) {
        assert!(state.starts_with(&config));
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// LayoutConfig Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = LayoutConfig::default();
    assert_eq!(config.min_panel_width, MIN_PANEL_WIDTH);
    assert_eq!(config.mobile_breakpoint, DEFAULT_MOBILE_BREAKPOINT);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = LayoutConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(config, LayoutConfig::default());
}

#[test]
fn test_custom_breakpoint_changes_mode_switch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "mobile_breakpoint: 1024\n").unwrap();
    let config = LayoutConfig::load_from(&path);
    assert_eq!(config.mobile_breakpoint, 1024.0);

    let mut model = AppModel::new(config, LayoutState::default());
    update(&mut model, Msg::resize(1000.0));
    assert_eq!(model.layout_mode(), LayoutMode::Mobile);
}

#[test]
fn test_out_of_range_values_are_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "min_panel_width: 50\ndivider_hit_width: -3\n").unwrap();
    let config = LayoutConfig::load_from(&path);
    assert_eq!(config.min_panel_width, MIN_PANEL_WIDTH);
    assert_eq!(
        config.divider_hit_width,
        LayoutConfig::default().divider_hit_width
    );
}
