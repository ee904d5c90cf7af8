use anyhow::Context;
use esp_idf_hal::delay::FreeRtos;
use log::{error, info, warn};

use esp32cam_settings::core::{AppConfig, AppController};
use esp32cam_settings::hardware::camera::{EspCamera, SettingsApplier};
use esp32cam_settings::hardware::CameraPins;

/// アプリケーションのメインエントリーポイント
fn main() -> anyhow::Result<()> {
    // ESP-IDFの基本初期化
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    info!("esp32cam-settings v{}", esp32cam_settings::VERSION);

    // 設定ファイル読み込み
    let app_config = AppConfig::load().context("設定ファイルの読み込みエラー")?;
    if app_config.debug_mode {
        log::set_max_level(log::LevelFilter::Debug);
    }
    info!(
        "起動時カメラ設定: xclk={}Hz, frame_size={}, jpeg_quality={}",
        app_config.clock_frequency_hz, app_config.frame_size, app_config.jpeg_quality
    );

    let mut applier = SettingsApplier::new(EspCamera::new(), CameraPins::ai_thinker());
    let settings = app_config.boot_settings();

    let report =
        AppController::apply_with_retry(&mut applier, &settings, &app_config, &mut FreeRtos);

    for failure in &report.setter_failures {
        warn!(
            "個別設定に失敗: {}({}) - {}",
            failure.param, failure.value, failure.error
        );
    }

    if report.outcome.is_failure() {
        error!("カメラを初期化できませんでした (status={})", report.outcome.code());
        anyhow::bail!("カメラ初期化エラー: {:?}", report.outcome);
    }

    info!("カメラの準備が完了しました (status={})", report.outcome.code());
    Ok(())
}
