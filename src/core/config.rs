use crate::core::config_validation::{
    parse_camera_init_retries, parse_clock_frequency_hz, parse_frame_size, parse_jpeg_quality,
    ValidationError,
};
use crate::core::settings::CameraSettings;

/// アプリケーション設定
///
/// この構造体はビルド時に`cfg.toml`ファイルから読み込まれた設定を保持します。
/// `cfg.toml`がない場合は`#[default]`の値が使われます。
#[toml_cfg::toml_config]
pub struct Config {
    // 起動時に適用するカメラ設定
    #[default(20000000)]
    clock_frequency_hz: u32,

    #[default(13)] // UXGA
    frame_size: u8,

    #[default(10)]
    jpeg_quality: u8,

    // カメラ初期化リトライ設定
    #[default(3)]
    camera_init_retries: u8,

    #[default(1000)]
    camera_init_retry_delay_ms: u32,

    #[default(false)]
    debug_mode: bool,
}

/// 設定エラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// アプリケーション設定を表す構造体
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// 起動時のXCLK周波数（Hz）
    pub clock_frequency_hz: i32,

    /// 起動時のフレームサイズコード
    pub frame_size: i32,

    /// 起動時のJPEG品質
    pub jpeg_quality: i32,

    /// カメラ初期化の最大試行回数
    pub camera_init_retries: u8,

    /// リトライ間隔の基準値（ミリ秒）
    pub camera_init_retry_delay_ms: u32,

    /// デバッグモード（詳細ログ）
    pub debug_mode: bool,
}

impl AppConfig {
    /// 設定ファイルから設定をロードします
    pub fn load() -> Result<Self, ConfigError> {
        // toml_cfg によって生成された定数
        Self::from_config(&CONFIG)
    }

    fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(AppConfig {
            clock_frequency_hz: parse_clock_frequency_hz(config.clock_frequency_hz)?,
            frame_size: parse_frame_size(config.frame_size)?,
            jpeg_quality: parse_jpeg_quality(config.jpeg_quality)?,
            camera_init_retries: parse_camera_init_retries(config.camera_init_retries)?,
            camera_init_retry_delay_ms: config.camera_init_retry_delay_ms,
            debug_mode: config.debug_mode,
        })
    }

    /// 起動時に適用するカメラ設定
    ///
    /// 粗い設定は cfg.toml から、個別設定はデフォルト値を使います。
    pub fn boot_settings(&self) -> CameraSettings {
        CameraSettings {
            clock_frequency_hz: self.clock_frequency_hz,
            frame_size: self.frame_size,
            jpeg_quality: self.jpeg_quality,
            ..CameraSettings::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            clock_frequency_hz: 20_000_000,
            frame_size: 13,
            jpeg_quality: 10,
            camera_init_retries: 3,
            camera_init_retry_delay_ms: 1000,
            debug_mode: false,
        }
    }
}
