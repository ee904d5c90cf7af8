/*!
 * # ESP32-CAM Settings Library
 *
 * サーバーから受け取ったカメラ設定を esp32-camera ドライバに適用するためのライブラリ
 *
 * ## モジュール構成
 * - `core`: 設定（設定バッグ、cfg.toml）、初期化リトライ制御
 * - `hardware`: カメラドライバ抽象化、設定適用、ピン配線
 *
 * `esp` フィーチャーなしでビルドするとモックドライバが有効になり、
 * ホストマシンでテストできます。
 */

pub mod core;
pub mod hardware;

pub use crate::core::{AppConfig, AppController, CameraSettings, CoarseSettings, ConfigError, SettingsBag};
pub use hardware::camera::{
    ApplyOutcome, ApplyReport, CameraDriver, CameraError, FrameSize, GainCeiling,
    SettingsApplier,
};
pub use hardware::CameraPins;

/// ライブラリのバージョン情報
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
