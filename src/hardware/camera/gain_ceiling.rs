//! ゲイン上限（AGC gain ceiling）の変換

/// ゲイン上限プリセット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GainCeiling {
    X2,
    X4,
    X8,
    X16,
    X32,
    X64,
    X128,
}

/// コード -> プリセットの対応表 (0=2x, 1=4x, ..., 6=128x)
pub static GAIN_CEILINGS: [GainCeiling; 7] = [
    GainCeiling::X2,
    GainCeiling::X4,
    GainCeiling::X8,
    GainCeiling::X16,
    GainCeiling::X32,
    GainCeiling::X64,
    GainCeiling::X128,
];

impl GainCeiling {
    /// 範囲外のコードに対するフォールバック（最も低いゲイン）
    pub const FALLBACK: GainCeiling = GainCeiling::X2;

    /// 設定値のコードからプリセットを取得します。範囲外は 2x。
    pub fn from_code(code: i32) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|index| GAIN_CEILINGS.get(index))
            .copied()
            .unwrap_or(Self::FALLBACK)
    }

    /// センサーの `set_gainceiling` に渡す値（`gainceiling_t` の列挙値）
    pub fn driver_value(self) -> i32 {
        self as i32
    }

    /// 倍率 (2, 4, ..., 128)
    pub fn multiplier(self) -> u32 {
        2u32 << (self as u32)
    }
}

impl std::fmt::Display for GainCeiling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x", self.multiplier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_map_to_powers_of_two() {
        let expected = [2, 4, 8, 16, 32, 64, 128];
        for (code, multiplier) in expected.iter().enumerate() {
            let ceiling = GainCeiling::from_code(code as i32);
            assert_eq!(ceiling.multiplier(), *multiplier);
            assert_eq!(ceiling.driver_value(), code as i32);
        }
    }

    #[test]
    fn test_out_of_range_falls_back_to_2x() {
        for code in [-1, 7, 8, 30, i32::MAX, i32::MIN] {
            assert_eq!(GainCeiling::from_code(code), GainCeiling::X2, "code={}", code);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(GainCeiling::X16.to_string(), "16x");
    }
}
