//! カメラドライバの抽象化
//!
//! 実機 (esp32-camera) とテスト用モックを切り替えられるよう、
//! ドライバとセンサーの操作をトレイトとして定義します。

use crate::core::settings::CoarseSettings;
use crate::hardware::camera::frame_size::FrameSize;
use crate::hardware::pins::CameraPins;

/// カメラ操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CameraError {
    /// ドライバが ESP_OK 以外のステータスを返した
    #[error("ドライバエラー: status=0x{0:x}")]
    Driver(i32),

    #[error("センサーハンドルを取得できません")]
    SensorUnavailable,

    #[error("センサーが {0} をサポートしていません")]
    Unsupported(&'static str),

    #[error("{param} の設定に失敗しました: status={status}")]
    SetterRejected { param: &'static str, status: i32 },
}

/// 出力ピクセルフォーマット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Jpeg,
}

/// フレームバッファの取得ポリシー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrabMode {
    /// 常に最新フレームを保持する
    Latest,
}

/// ドライバ初期化用の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraConfig {
    pub pins: CameraPins,
    /// XCLK周波数 (Hz)
    pub xclk_freq_hz: i32,
    pub frame_size: FrameSize,
    /// 0 - 63
    pub jpeg_quality: i32,
    pub pixel_format: PixelFormat,
    pub fb_count: usize,
    pub grab_mode: GrabMode,
}

impl CameraConfig {
    /// ダブルバッファ
    pub const FB_COUNT: usize = 2;

    /// 粗い設定と固定のピン配線から初期化設定を作ります
    pub fn from_coarse(coarse: &CoarseSettings, pins: CameraPins) -> Self {
        Self {
            pins,
            xclk_freq_hz: coarse.clock_frequency_hz,
            frame_size: FrameSize::from_code(coarse.frame_size),
            jpeg_quality: coarse.jpeg_quality,
            pixel_format: PixelFormat::Jpeg,
            fb_count: Self::FB_COUNT,
            grab_mode: GrabMode::Latest,
        }
    }
}

/// センサーの個別設定項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorParam {
    Brightness,
    Contrast,
    Sharpness,
    Saturation,
    Denoise,
    SpecialEffect,
    WhiteBalance,
    AwbGain,
    WbMode,
    ExposureCtrl,
    Aec2,
    AeLevel,
    AecValue,
    GainCtrl,
    AgcGain,
    GainCeiling,
    Bpc,
    Wpc,
    RawGma,
    Lenc,
    HMirror,
    VFlip,
    /// ダウンサイズ (UXGA以外では必須)
    Dcw,
    /// テスト用カラーバー
    ColorBar,
}

impl SensorParam {
    /// センサードライバのセッター名（ログ用）
    pub fn setter_name(self) -> &'static str {
        match self {
            SensorParam::Brightness => "set_brightness",
            SensorParam::Contrast => "set_contrast",
            SensorParam::Sharpness => "set_sharpness",
            SensorParam::Saturation => "set_saturation",
            SensorParam::Denoise => "set_denoise",
            SensorParam::SpecialEffect => "set_special_effect",
            SensorParam::WhiteBalance => "set_whitebal",
            SensorParam::AwbGain => "set_awb_gain",
            SensorParam::WbMode => "set_wb_mode",
            SensorParam::ExposureCtrl => "set_exposure_ctrl",
            SensorParam::Aec2 => "set_aec2",
            SensorParam::AeLevel => "set_ae_level",
            SensorParam::AecValue => "set_aec_value",
            SensorParam::GainCtrl => "set_gain_ctrl",
            SensorParam::AgcGain => "set_agc_gain",
            SensorParam::GainCeiling => "set_gainceiling",
            SensorParam::Bpc => "set_bpc",
            SensorParam::Wpc => "set_wpc",
            SensorParam::RawGma => "set_raw_gma",
            SensorParam::Lenc => "set_lenc",
            SensorParam::HMirror => "set_hmirror",
            SensorParam::VFlip => "set_vflip",
            SensorParam::Dcw => "set_dcw",
            SensorParam::ColorBar => "set_colorbar",
        }
    }
}

impl std::fmt::Display for SensorParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.setter_name())
    }
}

/// センサーハンドルの操作
pub trait SensorControl {
    /// 1項目を設定する
    fn set(&mut self, param: SensorParam, value: i32) -> Result<(), CameraError>;
}

/// カメラドライバの操作
///
/// このトレイトを実装することで、実機用とテスト用(Mock)の
/// 実装を切り替えることができます。
pub trait CameraDriver {
    /// ドライバを初期化する
    fn init(&mut self, config: &CameraConfig) -> Result<(), CameraError>;

    /// ドライバを解放する
    fn deinit(&mut self) -> Result<(), CameraError>;

    /// 現在のセンサーハンドルを取得する
    fn sensor(&mut self) -> Result<&mut dyn SensorControl, CameraError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_coarse_uses_fixed_parameters() {
        let coarse = CoarseSettings {
            clock_frequency_hz: 20_000_000,
            frame_size: 9,
            jpeg_quality: 12,
        };
        let config = CameraConfig::from_coarse(&coarse, CameraPins::ai_thinker());

        assert_eq!(config.xclk_freq_hz, 20_000_000);
        assert_eq!(config.frame_size, FrameSize::Svga);
        assert_eq!(config.jpeg_quality, 12);
        assert_eq!(config.pixel_format, PixelFormat::Jpeg);
        assert_eq!(config.fb_count, 2);
        assert_eq!(config.grab_mode, GrabMode::Latest);
    }

    #[test]
    fn test_config_maps_invalid_frame_size() {
        let coarse = CoarseSettings {
            clock_frequency_hz: 20_000_000,
            frame_size: 99,
            jpeg_quality: 10,
        };
        let config = CameraConfig::from_coarse(&coarse, CameraPins::ai_thinker());
        assert_eq!(config.frame_size, FrameSize::Uxga);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CameraError::Driver(0x105).to_string(),
            "ドライバエラー: status=0x105"
        );
        assert_eq!(SensorParam::Dcw.to_string(), "set_dcw");
    }
}
