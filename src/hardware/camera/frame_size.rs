//! フレームサイズ（解像度プリセット）の変換
//!
//! 設定値の整数コードを esp32-camera の `framesize_t` と同じ順序のプリセットへ変換します。
//! 範囲外のコードはエラーにせず UXGA にフォールバックします。

/// 解像度プリセット
///
/// 並び順は esp32-camera の `framesize_t` と一致させること。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSize {
    F96x96,
    Qqvga,
    Qcif,
    Hqvga,
    F240x240,
    Qvga,
    Cif,
    Hvga,
    Vga,
    Svga,
    Xga,
    Hd,
    Sxga,
    Uxga,
    // 3MPセンサー以降 (OV3660 / OV5640)
    Fhd,
    PHd,
    P3mp,
    Qxga,
    // 5MPセンサー
    Qhd,
    Wqxga,
    PFhd,
    Qsxga,
}

/// フレームサイズ定義（コード順）
pub struct FrameSizeSpec {
    pub frame_size: FrameSize,
    pub width: u16,
    pub height: u16,
    pub label: &'static str,
}

/// コード -> プリセットの対応表。インデックスがそのまま設定値のコードになる。
pub static FRAME_SIZES: [FrameSizeSpec; 22] = [
    FrameSizeSpec { frame_size: FrameSize::F96x96, width: 96, height: 96, label: "96x96" },
    FrameSizeSpec { frame_size: FrameSize::Qqvga, width: 160, height: 120, label: "160x120 (QQVGA)" },
    FrameSizeSpec { frame_size: FrameSize::Qcif, width: 176, height: 144, label: "176x144 (QCIF)" },
    FrameSizeSpec { frame_size: FrameSize::Hqvga, width: 240, height: 176, label: "240x176 (HQVGA)" },
    FrameSizeSpec { frame_size: FrameSize::F240x240, width: 240, height: 240, label: "240x240" },
    FrameSizeSpec { frame_size: FrameSize::Qvga, width: 320, height: 240, label: "320x240 (QVGA)" },
    FrameSizeSpec { frame_size: FrameSize::Cif, width: 400, height: 296, label: "400x296 (CIF)" },
    FrameSizeSpec { frame_size: FrameSize::Hvga, width: 480, height: 320, label: "480x320 (HVGA)" },
    FrameSizeSpec { frame_size: FrameSize::Vga, width: 640, height: 480, label: "640x480 (VGA)" },
    FrameSizeSpec { frame_size: FrameSize::Svga, width: 800, height: 600, label: "800x600 (SVGA)" },
    FrameSizeSpec { frame_size: FrameSize::Xga, width: 1024, height: 768, label: "1024x768 (XGA)" },
    FrameSizeSpec { frame_size: FrameSize::Hd, width: 1280, height: 720, label: "1280x720 (HD)" },
    FrameSizeSpec { frame_size: FrameSize::Sxga, width: 1280, height: 1024, label: "1280x1024 (SXGA)" },
    FrameSizeSpec { frame_size: FrameSize::Uxga, width: 1600, height: 1200, label: "1600x1200 (UXGA)" },
    FrameSizeSpec { frame_size: FrameSize::Fhd, width: 1920, height: 1080, label: "1920x1080 (FHD)" },
    FrameSizeSpec { frame_size: FrameSize::PHd, width: 720, height: 1280, label: "720x1280 (Portrait HD)" },
    FrameSizeSpec { frame_size: FrameSize::P3mp, width: 864, height: 1536, label: "864x1536 (Portrait 3MP)" },
    FrameSizeSpec { frame_size: FrameSize::Qxga, width: 2048, height: 1536, label: "2048x1536 (QXGA)" },
    FrameSizeSpec { frame_size: FrameSize::Qhd, width: 2560, height: 1440, label: "2560x1440 (QHD)" },
    FrameSizeSpec { frame_size: FrameSize::Wqxga, width: 2560, height: 1600, label: "2560x1600 (WQXGA)" },
    FrameSizeSpec { frame_size: FrameSize::PFhd, width: 1080, height: 1920, label: "1080x1920 (Portrait FHD)" },
    FrameSizeSpec { frame_size: FrameSize::Qsxga, width: 2560, height: 1920, label: "2560x1920 (QSXGA)" },
];

impl FrameSize {
    /// 範囲外のコードに対するフォールバック
    pub const FALLBACK: FrameSize = FrameSize::Uxga;

    /// 設定値のコードからプリセットを取得します
    ///
    /// 不正な設定で撮影できなくなることを避けるため、範囲外は常に UXGA を返します。
    pub fn from_code(code: i32) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|index| FRAME_SIZES.get(index))
            .map(|spec| spec.frame_size)
            .unwrap_or(Self::FALLBACK)
    }

    /// プリセットのコード（ドライバの列挙値と同じ）
    pub fn code(self) -> i32 {
        self as i32
    }

    fn spec(self) -> &'static FrameSizeSpec {
        &FRAME_SIZES[self as usize]
    }

    /// (幅, 高さ)
    pub fn dimensions(self) -> (u16, u16) {
        let spec = self.spec();
        (spec.width, spec.height)
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }

    /// OV2640 のネイティブ最大解像度かどうか
    pub fn is_native_max(self) -> bool {
        self == FrameSize::Uxga
    }

    /// esp32-camera の `framesize_t` に変換します
    #[cfg(feature = "esp")]
    pub fn to_driver(self) -> esp_idf_svc::sys::camera::framesize_t {
        self as esp_idf_svc::sys::camera::framesize_t
    }
}

impl std::fmt::Display for FrameSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_code() {
        for (index, spec) in FRAME_SIZES.iter().enumerate() {
            assert_eq!(spec.frame_size.code(), index as i32);
            assert_eq!(FrameSize::from_code(index as i32), spec.frame_size);
        }
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(FrameSize::from_code(0), FrameSize::F96x96);
        assert_eq!(FrameSize::from_code(9), FrameSize::Svga);
        assert_eq!(FrameSize::from_code(13), FrameSize::Uxga);
        assert_eq!(FrameSize::from_code(21), FrameSize::Qsxga);
    }

    #[test]
    fn test_out_of_range_falls_back_to_uxga() {
        for code in [-1, -100, 22, 23, 1000, i32::MIN, i32::MAX] {
            assert_eq!(FrameSize::from_code(code), FrameSize::Uxga, "code={}", code);
        }
    }

    #[test]
    fn test_dimensions_and_label() {
        assert_eq!(FrameSize::Uxga.dimensions(), (1600, 1200));
        assert_eq!(FrameSize::Vga.dimensions(), (640, 480));
        assert_eq!(FrameSize::Svga.label(), "800x600 (SVGA)");
        assert!(FrameSize::Uxga.is_native_max());
        assert!(!FrameSize::Svga.is_native_max());
    }
}
