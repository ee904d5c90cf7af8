/// AI-Thinker ESP32-CAM のカメラピン番号
///
/// esp32-camera の `camera_config_t` にそのまま渡すため GPIO 番号 (`i32`) で保持します。
/// 未接続のピンは -1。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraPins {
    pub pwdn: i32,
    pub reset: i32,
    pub xclk: i32,
    pub sda: i32,
    pub scl: i32,
    /// D0-D7
    pub data_pins: [i32; 8],
    pub vsync: i32,
    pub href: i32,
    pub pclk: i32,
}

impl CameraPins {
    /// AI-Thinker ESP32-CAM の配線
    pub const fn ai_thinker() -> Self {
        Self {
            pwdn: 32,
            reset: -1,
            xclk: 0,
            sda: 26,
            scl: 27,
            data_pins: [5, 18, 19, 21, 36, 39, 34, 35], // Y2-Y9
            vsync: 25,
            href: 23,
            pclk: 22,
        }
    }
}

impl Default for CameraPins {
    fn default() -> Self {
        Self::ai_thinker()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_thinker_wiring() {
        let pins = CameraPins::ai_thinker();
        assert_eq!(pins.pwdn, 32);
        assert_eq!(pins.reset, -1);
        assert_eq!(pins.data_pins[0], 5); // D0 = Y2
        assert_eq!(pins.data_pins[7], 35); // D7 = Y9
        assert_eq!(CameraPins::default(), pins);
    }
}
