/// コアシステムモジュール
pub mod app_controller;
pub mod config;
pub mod config_validation;
pub mod retry_policy;
pub mod settings;

pub use app_controller::AppController;
pub use config::{AppConfig, ConfigError};
pub use settings::{CameraSettings, CoarseSettings, SettingsBag};
