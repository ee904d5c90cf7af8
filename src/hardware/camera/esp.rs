//! esp32-camera コンポーネントによる実機ドライバ

use core::ffi::c_int;

use esp_idf_svc::sys::camera::{
    camera_config_t, camera_fb_location_t_CAMERA_FB_IN_PSRAM,
    camera_grab_mode_t_CAMERA_GRAB_LATEST,
    esp_camera_deinit, esp_camera_init, esp_camera_sensor_get, gainceiling_t,
    ledc_channel_t_LEDC_CHANNEL_0, ledc_timer_t_LEDC_TIMER_0, pixformat_t_PIXFORMAT_JPEG,
    sensor_t,
};
use esp_idf_svc::sys::ESP_OK;
use log::debug;

use super::driver::{
    CameraConfig, CameraDriver, CameraError, GrabMode, PixelFormat, SensorControl, SensorParam,
};

type IntSetter = unsafe extern "C" fn(*mut sensor_t, c_int) -> c_int;

/// `esp_camera_sensor_get` が返すセンサーハンドル
pub struct EspSensor {
    raw: *mut sensor_t,
}

impl EspSensor {
    fn int_setter(&self, param: SensorParam) -> Option<IntSetter> {
        // SAFETY: raw は esp_camera_sensor_get が返した非NULLポインタで、
        // ドライバが解放されるまで有効
        let sensor = unsafe { &*self.raw };
        match param {
            SensorParam::Brightness => sensor.set_brightness,
            SensorParam::Contrast => sensor.set_contrast,
            SensorParam::Sharpness => sensor.set_sharpness,
            SensorParam::Saturation => sensor.set_saturation,
            SensorParam::Denoise => sensor.set_denoise,
            SensorParam::SpecialEffect => sensor.set_special_effect,
            SensorParam::WhiteBalance => sensor.set_whitebal,
            SensorParam::AwbGain => sensor.set_awb_gain,
            SensorParam::WbMode => sensor.set_wb_mode,
            SensorParam::ExposureCtrl => sensor.set_exposure_ctrl,
            SensorParam::Aec2 => sensor.set_aec2,
            SensorParam::AeLevel => sensor.set_ae_level,
            SensorParam::AecValue => sensor.set_aec_value,
            SensorParam::GainCtrl => sensor.set_gain_ctrl,
            SensorParam::AgcGain => sensor.set_agc_gain,
            SensorParam::Bpc => sensor.set_bpc,
            SensorParam::Wpc => sensor.set_wpc,
            SensorParam::RawGma => sensor.set_raw_gma,
            SensorParam::Lenc => sensor.set_lenc,
            SensorParam::HMirror => sensor.set_hmirror,
            SensorParam::VFlip => sensor.set_vflip,
            SensorParam::Dcw => sensor.set_dcw,
            SensorParam::ColorBar => sensor.set_colorbar,
            // gainceiling_t を受け取るため別扱い
            SensorParam::GainCeiling => None,
        }
    }
}

impl SensorControl for EspSensor {
    fn set(&mut self, param: SensorParam, value: i32) -> Result<(), CameraError> {
        let unsupported = CameraError::Unsupported(param.setter_name());

        let status = if param == SensorParam::GainCeiling {
            // SAFETY: int_setter と同じ
            let setter = unsafe { (*self.raw).set_gainceiling }.ok_or(unsupported)?;
            unsafe { setter(self.raw, value as gainceiling_t) }
        } else {
            let setter = self.int_setter(param).ok_or(unsupported)?;
            unsafe { setter(self.raw, value) }
        };

        if status != 0 {
            return Err(CameraError::SetterRejected {
                param: param.setter_name(),
                status,
            });
        }
        Ok(())
    }
}

/// esp32-camera ドライバ
///
/// ドライバはプロセス内で1インスタンスのみ存在するため、この構造体も1つだけ作ること。
#[derive(Default)]
pub struct EspCamera {
    sensor: Option<EspSensor>,
}

impl EspCamera {
    pub fn new() -> Self {
        Self::default()
    }

    fn to_raw_config(config: &CameraConfig) -> camera_config_t {
        let mut raw = camera_config_t::default();
        let pins = &config.pins;

        raw.pin_pwdn = pins.pwdn;
        raw.pin_reset = pins.reset;
        raw.pin_xclk = pins.xclk;
        raw.pin_d0 = pins.data_pins[0];
        raw.pin_d1 = pins.data_pins[1];
        raw.pin_d2 = pins.data_pins[2];
        raw.pin_d3 = pins.data_pins[3];
        raw.pin_d4 = pins.data_pins[4];
        raw.pin_d5 = pins.data_pins[5];
        raw.pin_d6 = pins.data_pins[6];
        raw.pin_d7 = pins.data_pins[7];
        raw.pin_vsync = pins.vsync;
        raw.pin_href = pins.href;
        raw.pin_pclk = pins.pclk;
        raw.__bindgen_anon_1.pin_sccb_sda = pins.sda;
        raw.__bindgen_anon_2.pin_sccb_scl = pins.scl;

        raw.xclk_freq_hz = config.xclk_freq_hz;
        raw.ledc_timer = ledc_timer_t_LEDC_TIMER_0;
        raw.ledc_channel = ledc_channel_t_LEDC_CHANNEL_0;
        raw.pixel_format = match config.pixel_format {
            PixelFormat::Jpeg => pixformat_t_PIXFORMAT_JPEG,
        };
        raw.frame_size = config.frame_size.to_driver();
        raw.jpeg_quality = config.jpeg_quality;
        raw.fb_count = config.fb_count;
        raw.fb_location = camera_fb_location_t_CAMERA_FB_IN_PSRAM;
        raw.grab_mode = match config.grab_mode {
            GrabMode::Latest => camera_grab_mode_t_CAMERA_GRAB_LATEST,
        };
        raw
    }
}

impl CameraDriver for EspCamera {
    fn init(&mut self, config: &CameraConfig) -> Result<(), CameraError> {
        let raw = Self::to_raw_config(config);
        let status = unsafe { esp_camera_init(&raw) };
        if status != ESP_OK as i32 {
            return Err(CameraError::Driver(status));
        }
        debug!("esp_camera_init OK");
        Ok(())
    }

    fn deinit(&mut self) -> Result<(), CameraError> {
        self.sensor = None;
        let status = unsafe { esp_camera_deinit() };
        if status != ESP_OK as i32 {
            return Err(CameraError::Driver(status));
        }
        Ok(())
    }

    fn sensor(&mut self) -> Result<&mut dyn SensorControl, CameraError> {
        let raw = unsafe { esp_camera_sensor_get() };
        if raw.is_null() {
            self.sensor = None;
            return Err(CameraError::SensorUnavailable);
        }
        Ok(self.sensor.insert(EspSensor { raw }))
    }
}
