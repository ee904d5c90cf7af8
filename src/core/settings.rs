//! カメラ設定（設定バッグと型付きスナップショット）
//!
//! サーバーから受け取る設定は「キー名 -> 整数値」のフラットなマップです。
//! 真偽値のフラグも 0/1 の整数として扱います。

use std::collections::BTreeMap;

/// 設定バッグのキー名（サーバー側のJSONメンバー名と同じ）
pub mod keys {
    pub const CLOCK_FREQUENCY_HZ: &str = "clockFrequencyHz";
    pub const FRAME_SIZE: &str = "frameSize";
    pub const JPEG_QUALITY: &str = "jpegQuality";

    pub const BRIGHTNESS: &str = "brightness";
    pub const CONTRAST: &str = "contrast";
    pub const SHARPNESS: &str = "sharpness";
    pub const SATURATION: &str = "saturation";
    pub const DENOISE: &str = "denoise";
    pub const SPECIAL_EFFECT: &str = "specialEffect";

    pub const AUTO_WHITEBALANCE: &str = "autoWhitebalance";
    pub const AUTO_WHITEBALANCE_GAIN: &str = "autoWhitebalanceGain";
    pub const WHITEBALANCE_MODE: &str = "whitebalanceMode";

    pub const EXPOSURE_CTRL_SENSOR: &str = "exposureCtrlSensor";
    pub const EXPOSURE_CTRL_DSP: &str = "exposureCtrlDsp";
    pub const AUTO_EXPOSURE_LEVEL: &str = "autoExposureLevel";
    pub const AUTO_EXPOSURE_VALUE: &str = "autoExposureValue";
    pub const AUTO_EXPOSURE_GAIN_CONTROL: &str = "autoExposureGainControl";
    pub const AUTO_EXPOSURE_GAIN_VALUE: &str = "autoExposureGainValue";
    pub const AUTO_EXPOSURE_GAIN_CEILING: &str = "autoExposureGainCeiling";

    pub const BLACK_PIXEL_CORRECT: &str = "blackPixelCorrect";
    pub const WHITE_PIXEL_CORRECT: &str = "whitePixelCorrect";
    pub const GAMMA_CORRECT: &str = "gammaCorrect";
    pub const LENS_CORRECT: &str = "lensCorrect";

    pub const HORIZONTAL_MIRROR: &str = "horizontalMirror";
    pub const VERTICAL_FLIP: &str = "verticalFlip";
}

/// 設定バッグ
///
/// 存在しないキーは 0 として読み出します。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsBag {
    values: BTreeMap<String, i32>,
}

impl SettingsBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: i32) -> &mut Self {
        self.values.insert(key.to_string(), value);
        self
    }

    /// 値を取得します。キーがなければ 0。
    pub fn get(&self, key: &str) -> i32 {
        self.values.get(key).copied().unwrap_or(0)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, i32)> for SettingsBag {
    fn from_iter<T: IntoIterator<Item = (K, i32)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// 再初期化が必要になる粗い設定（クロック、フレームサイズ、JPEG品質）
///
/// 値は設定バッグの生の値のまま保持し、比較もその値で行います。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoarseSettings {
    pub clock_frequency_hz: i32,
    pub frame_size: i32,
    pub jpeg_quality: i32,
}

/// カメラ設定のスナップショット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraSettings {
    pub clock_frequency_hz: i32,
    pub frame_size: i32,
    /// 0 - 63 (小さいほど高画質)
    pub jpeg_quality: i32,

    /// -2..2
    pub brightness: i32,
    pub contrast: i32,
    pub sharpness: i32,
    pub saturation: i32,
    pub denoise: i32,
    /// 0=None|1=Negative|2=Grayscale|3=Red Tint|4=Green Tint|5=Blue Tint|6=Sepia
    pub special_effect: i32,

    pub auto_whitebalance: i32,
    /// 1 の場合のみ whitebalance_mode が有効
    pub auto_whitebalance_gain: i32,
    /// 0=Auto|1=Sunny|2=Cloudy|3=Office|4=Home
    pub whitebalance_mode: i32,

    pub exposure_ctrl_sensor: i32,
    pub exposure_ctrl_dsp: i32,
    /// -2..2
    pub auto_exposure_level: i32,
    /// 0 - 1024
    pub auto_exposure_value: i32,
    pub auto_exposure_gain_control: i32,
    /// 0 - 30
    pub auto_exposure_gain_value: i32,
    /// 0=2x, 1=4x, 2=8x, 3=16x, 4=32x, 5=64x, 6=128x
    pub auto_exposure_gain_ceiling: i32,

    pub black_pixel_correct: i32,
    pub white_pixel_correct: i32,
    pub gamma_correct: i32,
    pub lens_correct: i32,

    pub horizontal_mirror: i32,
    pub vertical_flip: i32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            clock_frequency_hz: 16_000_000,
            frame_size: 13, // UXGA
            jpeg_quality: 10,
            brightness: 0,
            contrast: 0,
            sharpness: 0,
            saturation: 0,
            denoise: 0,
            special_effect: 0,
            auto_whitebalance: 1,
            auto_whitebalance_gain: 1,
            whitebalance_mode: 0,
            exposure_ctrl_sensor: 1,
            exposure_ctrl_dsp: 0,
            auto_exposure_level: 0,
            auto_exposure_value: 1000,
            auto_exposure_gain_control: 0,
            auto_exposure_gain_value: 25,
            auto_exposure_gain_ceiling: 2,
            black_pixel_correct: 0,
            white_pixel_correct: 0,
            gamma_correct: 1,
            lens_correct: 1,
            horizontal_mirror: 0,
            vertical_flip: 0,
        }
    }
}

impl CameraSettings {
    /// 設定バッグから読み込みます。存在しないキーは 0 になります。
    pub fn from_bag(bag: &SettingsBag) -> Self {
        use keys::*;
        Self {
            clock_frequency_hz: bag.get(CLOCK_FREQUENCY_HZ),
            frame_size: bag.get(FRAME_SIZE),
            jpeg_quality: bag.get(JPEG_QUALITY),
            brightness: bag.get(BRIGHTNESS),
            contrast: bag.get(CONTRAST),
            sharpness: bag.get(SHARPNESS),
            saturation: bag.get(SATURATION),
            denoise: bag.get(DENOISE),
            special_effect: bag.get(SPECIAL_EFFECT),
            auto_whitebalance: bag.get(AUTO_WHITEBALANCE),
            auto_whitebalance_gain: bag.get(AUTO_WHITEBALANCE_GAIN),
            whitebalance_mode: bag.get(WHITEBALANCE_MODE),
            exposure_ctrl_sensor: bag.get(EXPOSURE_CTRL_SENSOR),
            exposure_ctrl_dsp: bag.get(EXPOSURE_CTRL_DSP),
            auto_exposure_level: bag.get(AUTO_EXPOSURE_LEVEL),
            auto_exposure_value: bag.get(AUTO_EXPOSURE_VALUE),
            auto_exposure_gain_control: bag.get(AUTO_EXPOSURE_GAIN_CONTROL),
            auto_exposure_gain_value: bag.get(AUTO_EXPOSURE_GAIN_VALUE),
            auto_exposure_gain_ceiling: bag.get(AUTO_EXPOSURE_GAIN_CEILING),
            black_pixel_correct: bag.get(BLACK_PIXEL_CORRECT),
            white_pixel_correct: bag.get(WHITE_PIXEL_CORRECT),
            gamma_correct: bag.get(GAMMA_CORRECT),
            lens_correct: bag.get(LENS_CORRECT),
            horizontal_mirror: bag.get(HORIZONTAL_MIRROR),
            vertical_flip: bag.get(VERTICAL_FLIP),
        }
    }

    /// 全キーを含む設定バッグに変換します（ステータス報告用）
    pub fn to_bag(&self) -> SettingsBag {
        use keys::*;
        [
            (CLOCK_FREQUENCY_HZ, self.clock_frequency_hz),
            (FRAME_SIZE, self.frame_size),
            (JPEG_QUALITY, self.jpeg_quality),
            (BRIGHTNESS, self.brightness),
            (CONTRAST, self.contrast),
            (SHARPNESS, self.sharpness),
            (SATURATION, self.saturation),
            (DENOISE, self.denoise),
            (SPECIAL_EFFECT, self.special_effect),
            (AUTO_WHITEBALANCE, self.auto_whitebalance),
            (AUTO_WHITEBALANCE_GAIN, self.auto_whitebalance_gain),
            (WHITEBALANCE_MODE, self.whitebalance_mode),
            (EXPOSURE_CTRL_SENSOR, self.exposure_ctrl_sensor),
            (EXPOSURE_CTRL_DSP, self.exposure_ctrl_dsp),
            (AUTO_EXPOSURE_LEVEL, self.auto_exposure_level),
            (AUTO_EXPOSURE_VALUE, self.auto_exposure_value),
            (AUTO_EXPOSURE_GAIN_CONTROL, self.auto_exposure_gain_control),
            (AUTO_EXPOSURE_GAIN_VALUE, self.auto_exposure_gain_value),
            (AUTO_EXPOSURE_GAIN_CEILING, self.auto_exposure_gain_ceiling),
            (BLACK_PIXEL_CORRECT, self.black_pixel_correct),
            (WHITE_PIXEL_CORRECT, self.white_pixel_correct),
            (GAMMA_CORRECT, self.gamma_correct),
            (LENS_CORRECT, self.lens_correct),
            (HORIZONTAL_MIRROR, self.horizontal_mirror),
            (VERTICAL_FLIP, self.vertical_flip),
        ]
        .into_iter()
        .collect()
    }

    /// 再初期化判定に使う粗い設定
    pub fn coarse(&self) -> CoarseSettings {
        CoarseSettings {
            clock_frequency_hz: self.clock_frequency_hz,
            frame_size: self.frame_size,
            jpeg_quality: self.jpeg_quality,
        }
    }
}

/// 5段階のレベル (-2..2)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    XS,
    S,
    M,
    L,
    XL,
}

impl Level {
    pub const ALL: [Level; 5] = [Level::XS, Level::S, Level::M, Level::L, Level::XL];

    /// 範囲外は M (0)
    pub fn from_value(value: i32) -> Self {
        match value {
            -2 => Level::XS,
            -1 => Level::S,
            1 => Level::L,
            2 => Level::XL,
            _ => Level::M,
        }
    }

    pub fn value(self) -> i32 {
        self as i32 - 2
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::XS => "XS",
            Level::S => "S",
            Level::M => "M",
            Level::L => "L",
            Level::XL => "XL",
        }
    }
}

/// 特殊効果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialEffect {
    None,
    Negative,
    Grayscale,
    RedTint,
    GreenTint,
    BlueTint,
    Sepia,
}

impl SpecialEffect {
    pub const ALL: [SpecialEffect; 7] = [
        SpecialEffect::None,
        SpecialEffect::Negative,
        SpecialEffect::Grayscale,
        SpecialEffect::RedTint,
        SpecialEffect::GreenTint,
        SpecialEffect::BlueTint,
        SpecialEffect::Sepia,
    ];

    /// 範囲外は None
    pub fn from_code(code: i32) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index))
            .copied()
            .unwrap_or(SpecialEffect::None)
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            SpecialEffect::None => "None",
            SpecialEffect::Negative => "Negative",
            SpecialEffect::Grayscale => "Grayscale",
            SpecialEffect::RedTint => "Red Tint",
            SpecialEffect::GreenTint => "Green Tint",
            SpecialEffect::BlueTint => "Blue Tint",
            SpecialEffect::Sepia => "Sepia",
        }
    }
}

/// ホワイトバランスモード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhiteBalanceMode {
    Auto,
    Sunny,
    Cloudy,
    Office,
    Home,
}

impl WhiteBalanceMode {
    pub const ALL: [WhiteBalanceMode; 5] = [
        WhiteBalanceMode::Auto,
        WhiteBalanceMode::Sunny,
        WhiteBalanceMode::Cloudy,
        WhiteBalanceMode::Office,
        WhiteBalanceMode::Home,
    ];

    /// 範囲外は Auto
    pub fn from_code(code: i32) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index))
            .copied()
            .unwrap_or(WhiteBalanceMode::Auto)
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            WhiteBalanceMode::Auto => "Auto",
            WhiteBalanceMode::Sunny => "Sunny",
            WhiteBalanceMode::Cloudy => "Cloudy",
            WhiteBalanceMode::Office => "Office",
            WhiteBalanceMode::Home => "Home",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_as_zero() {
        let bag = SettingsBag::new();
        assert_eq!(bag.get(keys::BRIGHTNESS), 0);
        assert!(!bag.contains(keys::BRIGHTNESS));
        assert!(bag.is_empty());
    }

    #[test]
    fn test_from_bag_reads_all_keys() {
        let mut bag = SettingsBag::new();
        bag.insert(keys::CLOCK_FREQUENCY_HZ, 20_000_000)
            .insert(keys::FRAME_SIZE, 9)
            .insert(keys::JPEG_QUALITY, 12)
            .insert(keys::BRIGHTNESS, -1)
            .insert(keys::AUTO_EXPOSURE_GAIN_CEILING, 4)
            .insert(keys::VERTICAL_FLIP, 1);

        let settings = CameraSettings::from_bag(&bag);
        assert_eq!(settings.clock_frequency_hz, 20_000_000);
        assert_eq!(settings.frame_size, 9);
        assert_eq!(settings.jpeg_quality, 12);
        assert_eq!(settings.brightness, -1);
        assert_eq!(settings.auto_exposure_gain_ceiling, 4);
        assert_eq!(settings.vertical_flip, 1);
        // バッグにないキーはデフォルト値ではなく 0
        assert_eq!(settings.gamma_correct, 0);
        assert_eq!(settings.auto_exposure_value, 0);
    }

    #[test]
    fn test_to_bag_contains_every_key() {
        let bag = CameraSettings::default().to_bag();
        assert_eq!(bag.len(), 25);
        assert_eq!(bag.get(keys::AUTO_EXPOSURE_VALUE), 1000);
        assert_eq!(CameraSettings::from_bag(&bag), CameraSettings::default());
    }

    #[test]
    fn test_coarse_settings() {
        let settings = CameraSettings::default();
        let coarse = settings.coarse();
        assert_eq!(coarse.clock_frequency_hz, 16_000_000);
        assert_eq!(coarse.frame_size, 13);
        assert_eq!(coarse.jpeg_quality, 10);
    }

    #[test]
    fn test_level_values() {
        assert_eq!(Level::from_value(-2), Level::XS);
        assert_eq!(Level::from_value(2).value(), 2);
        assert_eq!(Level::from_value(5), Level::M);
        for level in Level::ALL {
            assert_eq!(Level::from_value(level.value()), level);
        }
    }

    #[test]
    fn test_special_effect_and_white_balance_fallbacks() {
        assert_eq!(SpecialEffect::from_code(6), SpecialEffect::Sepia);
        assert_eq!(SpecialEffect::from_code(7), SpecialEffect::None);
        assert_eq!(SpecialEffect::from_code(-1), SpecialEffect::None);
        assert_eq!(WhiteBalanceMode::from_code(4), WhiteBalanceMode::Home);
        assert_eq!(WhiteBalanceMode::from_code(5), WhiteBalanceMode::Auto);
        assert_eq!(WhiteBalanceMode::Cloudy.label(), "Cloudy");
    }
}
