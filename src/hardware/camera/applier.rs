use log::{debug, error, info, warn};

use super::driver::{CameraConfig, CameraDriver, CameraError, SensorParam};
use super::gain_ceiling::GainCeiling;
use crate::core::settings::{
    CameraSettings, CoarseSettings, Level, SpecialEffect, WhiteBalanceMode,
};
use crate::hardware::pins::CameraPins;

/// 設定適用の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// カメラの初期化に失敗した
    InitFailed(CameraError),
    /// 再初期化してから個別設定を適用した
    Reinitialized,
    /// 個別設定のみ適用した（再初期化不要）
    SettingsOnly,
}

impl ApplyOutcome {
    /// ファームウェアのステータスコード
    ///
    /// 0 = 初期化失敗, 1 = 再初期化, 2 = 個別設定のみ
    pub fn code(&self) -> u8 {
        match self {
            ApplyOutcome::InitFailed(_) => 0,
            ApplyOutcome::Reinitialized => 1,
            ApplyOutcome::SettingsOnly => 2,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ApplyOutcome::InitFailed(_))
    }
}

/// 個別設定の失敗
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetterFailure {
    pub param: SensorParam,
    pub value: i32,
    pub error: CameraError,
}

/// `SettingsApplier::apply` の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub outcome: ApplyOutcome,
    /// 失敗したセッター（他の項目の適用は継続する）
    pub setter_failures: Vec<SetterFailure>,
}

impl ApplyReport {
    fn failed(error: CameraError) -> Self {
        Self {
            outcome: ApplyOutcome::InitFailed(error),
            setter_failures: Vec::new(),
        }
    }
}

/// カメラ設定の適用
///
/// クロック周波数・フレームサイズ・JPEG品質のいずれかが前回の初期化時から
/// 変わった場合のみドライバを再初期化し、その他の個別設定は毎回すべて適用します。
pub struct SettingsApplier<D: CameraDriver> {
    driver: D,
    pins: CameraPins,
    /// 最後に初期化に成功した粗い設定。None は未初期化。
    last_applied: Option<CoarseSettings>,
    /// ドライバのインスタンスが存在するか
    initialized: bool,
}

impl<D: CameraDriver> SettingsApplier<D> {
    pub fn new(driver: D, pins: CameraPins) -> Self {
        Self {
            driver,
            pins,
            last_applied: None,
            initialized: false,
        }
    }

    pub fn last_applied(&self) -> Option<CoarseSettings> {
        self.last_applied
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// 設定を適用します
    pub fn apply(&mut self, settings: &CameraSettings) -> ApplyReport {
        let coarse = settings.coarse();

        let outcome = if self.initialized && self.last_applied == Some(coarse) {
            debug!("粗い設定に変更なし。個別設定のみ適用します");
            ApplyOutcome::SettingsOnly
        } else {
            if let Err(e) = self.reinitialize(&coarse) {
                return ApplyReport::failed(e);
            }
            ApplyOutcome::Reinitialized
        };

        let sensor = match self.driver.sensor() {
            Ok(sensor) => sensor,
            Err(e) => {
                error!("センサーハンドルを取得できません: {}", e);
                self.last_applied = None;
                return ApplyReport::failed(e);
            }
        };

        debug!(
            "個別設定: brightness={}, contrast={}, saturation={}, effect={}, wb_mode={}",
            Level::from_value(settings.brightness).label(),
            Level::from_value(settings.contrast).label(),
            Level::from_value(settings.saturation).label(),
            SpecialEffect::from_code(settings.special_effect).label(),
            WhiteBalanceMode::from_code(settings.whitebalance_mode).label()
        );

        let mut setter_failures = Vec::new();
        for (param, value) in fine_parameters(settings) {
            debug!("{}({})", param, value);
            if let Err(error) = sensor.set(param, value) {
                warn!("カメラ設定 {}({}) に失敗しました: {}", param, value, error);
                setter_failures.push(SetterFailure { param, value, error });
            }
        }

        if setter_failures.is_empty() {
            info!("カメラ設定を変更しました");
        } else {
            warn!(
                "カメラ設定を変更しました（{}項目で失敗）",
                setter_failures.len()
            );
        }

        ApplyReport {
            outcome,
            setter_failures,
        }
    }

    fn reinitialize(&mut self, coarse: &CoarseSettings) -> Result<(), CameraError> {
        let config = CameraConfig::from_coarse(coarse, self.pins);

        if self.initialized {
            // 解放に失敗しても初期化は試みる。失敗時は initialized を残し、次回も解放から始める
            match self.driver.deinit() {
                Ok(()) => {
                    info!("カメラを解放しました");
                    self.initialized = false;
                }
                Err(e) => warn!("カメラを解放できませんでした: {}", e),
            }
        }

        match self.driver.init(&config) {
            Ok(()) => {
                info!(
                    "カメラを初期化しました: xclk={}Hz, frame_size={}, jpeg_quality={}",
                    config.xclk_freq_hz, config.frame_size, config.jpeg_quality
                );
                self.last_applied = Some(*coarse);
                self.initialized = true;
                Ok(())
            }
            Err(e) => {
                // last_applied は変更しない
                error!("カメラを初期化できませんでした: {}", e);
                Err(e)
            }
        }
    }
}

/// 適用する個別設定（順序どおり）
///
/// ダウンサイズは常に有効、カラーバーは常に無効にします。
pub fn fine_parameters(settings: &CameraSettings) -> [(SensorParam, i32); 24] {
    [
        (SensorParam::Brightness, settings.brightness),
        (SensorParam::Contrast, settings.contrast),
        (SensorParam::Sharpness, settings.sharpness),
        (SensorParam::Saturation, settings.saturation),
        (SensorParam::Denoise, settings.denoise),
        (SensorParam::SpecialEffect, settings.special_effect),
        (SensorParam::WhiteBalance, settings.auto_whitebalance),
        (SensorParam::AwbGain, settings.auto_whitebalance_gain),
        (SensorParam::WbMode, settings.whitebalance_mode),
        (SensorParam::ExposureCtrl, settings.exposure_ctrl_sensor),
        (SensorParam::Aec2, settings.exposure_ctrl_dsp),
        (SensorParam::AeLevel, settings.auto_exposure_level),
        (SensorParam::AecValue, settings.auto_exposure_value),
        (SensorParam::GainCtrl, settings.auto_exposure_gain_control),
        (SensorParam::AgcGain, settings.auto_exposure_gain_value),
        (
            SensorParam::GainCeiling,
            GainCeiling::from_code(settings.auto_exposure_gain_ceiling).driver_value(),
        ),
        (SensorParam::Bpc, settings.black_pixel_correct),
        (SensorParam::Wpc, settings.white_pixel_correct),
        (SensorParam::RawGma, settings.gamma_correct),
        (SensorParam::Lenc, settings.lens_correct),
        (SensorParam::HMirror, settings.horizontal_mirror),
        (SensorParam::VFlip, settings.vertical_flip),
        (SensorParam::Dcw, 1),
        (SensorParam::ColorBar, 0),
    ]
}

#[cfg(all(test, not(feature = "esp")))]
mod tests {
    use super::*;
    use crate::hardware::camera::frame_size::FrameSize;
    use crate::hardware::camera::mock::MockCamera;

    fn applier() -> (SettingsApplier<MockCamera>, MockCamera) {
        let mock = MockCamera::new();
        (SettingsApplier::new(mock.clone(), CameraPins::ai_thinker()), mock)
    }

    #[test]
    fn test_first_apply_initializes_without_deinit() {
        let (mut applier, mock) = applier();
        let report = applier.apply(&CameraSettings::default());

        assert_eq!(report.outcome, ApplyOutcome::Reinitialized);
        assert_eq!(mock.init_count(), 1);
        assert_eq!(mock.deinit_count(), 0);
        assert_eq!(applier.last_applied(), Some(CameraSettings::default().coarse()));
    }

    #[test]
    fn test_init_config_uses_mapped_frame_size() {
        let (mut applier, mock) = applier();
        let settings = CameraSettings {
            frame_size: 40,
            ..CameraSettings::default()
        };
        applier.apply(&settings);

        let config = &mock.init_calls()[0];
        assert_eq!(config.frame_size, FrameSize::Uxga);
        assert_eq!(config.xclk_freq_hz, settings.clock_frequency_hz);
    }

    #[test]
    fn test_sensor_unavailable_reports_failure_and_forgets_state() {
        let (mut applier, mock) = applier();
        mock.set_missing_sensor(true);

        let report = applier.apply(&CameraSettings::default());
        assert_eq!(
            report.outcome,
            ApplyOutcome::InitFailed(CameraError::SensorUnavailable)
        );
        assert_eq!(applier.last_applied(), None);
    }

    #[test]
    fn test_failed_deinit_keeps_driver_marked_live() {
        let (mut applier, mock) = applier();
        applier.apply(&CameraSettings::default());

        mock.set_deinit_error(Some(0x103));
        mock.set_init_error(Some(0x103));
        let report = applier.apply(&CameraSettings {
            jpeg_quality: 20,
            ..CameraSettings::default()
        });
        assert!(report.outcome.is_failure());
        assert!(applier.is_initialized());
    }

    #[test]
    fn test_outcome_codes() {
        assert_eq!(ApplyOutcome::InitFailed(CameraError::Driver(1)).code(), 0);
        assert_eq!(ApplyOutcome::Reinitialized.code(), 1);
        assert_eq!(ApplyOutcome::SettingsOnly.code(), 2);
    }

    #[test]
    fn test_fine_parameters_force_dcw_and_colorbar() {
        let params = fine_parameters(&CameraSettings::default());
        assert_eq!(params[22], (SensorParam::Dcw, 1));
        assert_eq!(params[23], (SensorParam::ColorBar, 0));
    }
}
