use embedded_hal::delay::DelayNs;
use log::{error, info, warn};

use crate::core::config::AppConfig;
use crate::core::retry_policy::init_retry_delay_ms;
use crate::core::settings::CameraSettings;
use crate::hardware::camera::{ApplyReport, CameraDriver, SettingsApplier};

/// アプリケーションの主要な制御フローを管理するモジュール
pub struct AppController;

impl AppController {
    /// カメラ設定を適用し、初期化に失敗した場合は設定回数までリトライします
    ///
    /// 最後の試行の結果を返します。リトライ間隔は試行回数に比例して伸びます。
    pub fn apply_with_retry<D: CameraDriver, T: DelayNs>(
        applier: &mut SettingsApplier<D>,
        settings: &CameraSettings,
        config: &AppConfig,
        delay: &mut T,
    ) -> ApplyReport {
        let max_attempts = config.camera_init_retries.max(1);
        let mut attempt = 1;

        loop {
            let report = applier.apply(settings);
            if !report.outcome.is_failure() {
                info!(
                    "カメラ設定の適用が完了しました (status={}, 試行 {}/{})",
                    report.outcome.code(),
                    attempt,
                    max_attempts
                );
                return report;
            }

            if attempt >= max_attempts {
                error!(
                    "カメラの初期化に{}回失敗しました。リトライを中止します (ドライバ稼働中: {})",
                    max_attempts,
                    applier.is_initialized()
                );
                return report;
            }

            let wait_ms = init_retry_delay_ms(config.camera_init_retry_delay_ms, attempt);
            warn!(
                "カメラの初期化に失敗しました (試行 {}/{})。{}ms 後に再試行します",
                attempt, max_attempts, wait_ms
            );
            delay.delay_ms(wait_ms);
            attempt += 1;
        }
    }
}
