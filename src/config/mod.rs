use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_HISTORY_CAPACITY, MAX_RECENT_FILES};
use crate::history::CommandManager;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

/// Application configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfigData {
    /// Number of undoable commands to keep
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Last opened or saved sprite file (not auto-loaded, just remembered)
    #[serde(default)]
    pub last_sprite_file: Option<PathBuf>,

    /// Recently used sprite files, most recent first
    #[serde(default)]
    pub recent_files: Vec<PathBuf>,
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            last_sprite_file: None,
            recent_files: Vec::new(),
        }
    }
}

impl AppConfigData {
    /// Move `path` to the front of the recent list and remember it as last file
    pub fn push_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|p| p != &path);
        self.recent_files.insert(0, path.clone());
        self.recent_files.truncate(MAX_RECENT_FILES);
        self.last_sprite_file = Some(path);
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to add a sprite file to the recent list
#[derive(Message)]
pub struct AddRecentFileRequest {
    pub path: PathBuf,
}

/// Parse config JSON. On failure returns defaults and the reason.
fn parse_config(json: &str) -> (AppConfigData, Option<String>) {
    match serde_json::from_str(json) {
        Ok(data) => (data, None),
        Err(e) => {
            warn!("Failed to parse config file: {}", e);
            (
                AppConfigData::default(),
                Some(format!("Configuration file was corrupted: {}", e)),
            )
        }
    }
}

/// Load configuration from disk
fn load_config() -> (AppConfig, Option<String>) {
    let config_path = crate::paths::config_file();

    let (data, reset_reason) = if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(json) => {
                let parsed = parse_config(&json);
                if parsed.1.is_none() {
                    info!("Loaded config from {:?}", config_path);
                }
                parsed
            }
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    AppConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (AppConfigData::default(), None)
    };

    (
        AppConfig {
            data,
            config_path,
            dirty: false,
        },
        reset_reason,
    )
}

/// Save configuration to disk
fn save_config(config: &AppConfig) -> Result<(), String> {
    let json = serde_json::to_string_pretty(&config.data)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(&config.config_path, json).map_err(|e| format!("Failed to save config: {}", e))
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let (loaded, reset_reason) = load_config();
    *config = loaded;

    // Set notification if config was reset due to an error
    if let Some(reason) = reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// Startup system to size the undo history from config
fn apply_history_capacity(config: Res<AppConfig>, mut manager: ResMut<CommandManager>) {
    manager.set_capacity(config.data.history_capacity);
    debug!("Undo history capacity set to {}", manager.capacity());
}

/// System to save config when requested
fn save_config_system(mut events: MessageReader<SaveConfigRequest>, mut config: ResMut<AppConfig>) {
    for _ in events.read() {
        if !config.dirty {
            continue;
        }
        match save_config(&config) {
            Ok(()) => info!("Config saved to {:?}", config.config_path),
            Err(e) => error!("{}", e),
        }
        config.dirty = false;
    }
}

/// System to add a file to the recent list
fn add_recent_file_system(
    mut events: MessageReader<AddRecentFileRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        config.data.push_recent_file(event.path.clone());
        config.dirty = true;
        save_events.write(SaveConfigRequest);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<AddRecentFileRequest>()
            .add_systems(
                Startup,
                (load_config_system, apply_history_capacity)
                    .chain()
                    .in_set(ConfigLoaded),
            )
            .add_systems(
                Update,
                (
                    add_recent_file_system.run_if(on_message::<AddRecentFileRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}
