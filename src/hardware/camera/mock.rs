use super::driver::{CameraConfig, CameraDriver, CameraError, SensorControl, SensorParam};
use std::sync::{Arc, Mutex};

/// テスト用のセンサーモック
///
/// 設定された項目と値を記録します。
#[derive(Debug, Clone, Default)]
pub struct MockSensor {
    /// セッター呼び出しの記録
    pub set_calls: Arc<Mutex<Vec<(SensorParam, i32)>>>,
    /// 失敗させる項目
    pub failing_params: Arc<Mutex<Vec<SensorParam>>>,
}

impl SensorControl for MockSensor {
    fn set(&mut self, param: SensorParam, value: i32) -> Result<(), CameraError> {
        self.set_calls.lock().unwrap().push((param, value));
        if self.failing_params.lock().unwrap().contains(&param) {
            return Err(CameraError::SetterRejected {
                param: param.setter_name(),
                status: -1,
            });
        }
        Ok(())
    }
}

/// テスト用のカメラドライバモック
///
/// 実際のカメラハードウェアを使わずにドライバの初期化・解放をシミュレートします。
/// クローンは状態を共有するため、SettingsApplier に渡した後もテスト側から検証できます。
#[derive(Debug, Clone, Default)]
pub struct MockCamera {
    /// init に渡された設定の記録
    pub init_calls: Arc<Mutex<Vec<CameraConfig>>>,
    /// deinit の呼び出し回数
    pub deinit_count: Arc<Mutex<usize>>,
    /// ドライバが初期化済みかどうか
    pub initialized: Arc<Mutex<bool>>,
    /// エラーシミュレーション用のフラグ (ESPのステータスコード)
    pub simulate_init_error: Arc<Mutex<Option<i32>>>,
    pub simulate_deinit_error: Arc<Mutex<Option<i32>>>,
    pub simulate_missing_sensor: Arc<Mutex<bool>>,
    pub sensor: MockSensor,
}

impl MockCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// テスト用: init を指定ステータスで失敗させる (None で解除)
    pub fn set_init_error(&self, status: Option<i32>) {
        *self.simulate_init_error.lock().unwrap() = status;
    }

    /// テスト用: deinit を指定ステータスで失敗させる (None で解除)
    pub fn set_deinit_error(&self, status: Option<i32>) {
        *self.simulate_deinit_error.lock().unwrap() = status;
    }

    /// テスト用: センサーハンドルを取得できない状態にする
    pub fn set_missing_sensor(&self, enable: bool) {
        *self.simulate_missing_sensor.lock().unwrap() = enable;
    }

    /// テスト用: 指定項目のセッターを失敗させる
    pub fn fail_setter(&self, param: SensorParam) {
        self.sensor.failing_params.lock().unwrap().push(param);
    }

    pub fn init_calls(&self) -> Vec<CameraConfig> {
        self.init_calls.lock().unwrap().clone()
    }

    pub fn init_count(&self) -> usize {
        self.init_calls.lock().unwrap().len()
    }

    pub fn deinit_count(&self) -> usize {
        *self.deinit_count.lock().unwrap()
    }

    pub fn is_initialized(&self) -> bool {
        *self.initialized.lock().unwrap()
    }

    pub fn set_calls(&self) -> Vec<(SensorParam, i32)> {
        self.sensor.set_calls.lock().unwrap().clone()
    }

    /// 最後に設定された値
    pub fn last_value(&self, param: SensorParam) -> Option<i32> {
        self.set_calls()
            .iter()
            .rev()
            .find(|(p, _)| *p == param)
            .map(|(_, v)| *v)
    }

    pub fn clear_set_calls(&self) {
        self.sensor.set_calls.lock().unwrap().clear();
    }
}

impl CameraDriver for MockCamera {
    fn init(&mut self, config: &CameraConfig) -> Result<(), CameraError> {
        self.init_calls.lock().unwrap().push(config.clone());
        if let Some(status) = *self.simulate_init_error.lock().unwrap() {
            return Err(CameraError::Driver(status));
        }
        *self.initialized.lock().unwrap() = true;
        Ok(())
    }

    fn deinit(&mut self) -> Result<(), CameraError> {
        *self.deinit_count.lock().unwrap() += 1;
        if let Some(status) = *self.simulate_deinit_error.lock().unwrap() {
            return Err(CameraError::Driver(status));
        }
        *self.initialized.lock().unwrap() = false;
        Ok(())
    }

    fn sensor(&mut self) -> Result<&mut dyn SensorControl, CameraError> {
        if *self.simulate_missing_sensor.lock().unwrap() || !self.is_initialized() {
            return Err(CameraError::SensorUnavailable);
        }
        Ok(&mut self.sensor)
    }
}
