/// カメラ制御モジュール
///
/// - 設定値コードからドライバ列挙値への変換（フレームサイズ、ゲイン上限）
/// - ドライバ抽象化と設定適用（必要な場合のみ再初期化）
pub mod applier;
pub mod driver;
pub mod frame_size;
pub mod gain_ceiling;

#[cfg(feature = "esp")]
pub mod esp;

// Mock実装（テストとnon-espビルドで使用可能）
#[cfg(not(feature = "esp"))]
pub mod mock;

pub use applier::{ApplyOutcome, ApplyReport, SetterFailure, SettingsApplier};
pub use driver::{CameraConfig, CameraDriver, CameraError, SensorControl, SensorParam};
pub use frame_size::FrameSize;
pub use gain_ceiling::GainCeiling;

#[cfg(feature = "esp")]
pub use esp::EspCamera;
