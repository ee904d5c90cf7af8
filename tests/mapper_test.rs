// Enum/Range Mapper Tests
// 範囲外の入力は常に安全なデフォルトに解決されることを確認します

use esp32cam_settings::hardware::camera::frame_size::FRAME_SIZES;
use esp32cam_settings::{FrameSize, GainCeiling};

#[test]
fn test_out_of_range_frame_sizes_resolve_to_uxga() {
    for code in (-1000..0).chain(FRAME_SIZES.len() as i32..1000) {
        assert_eq!(FrameSize::from_code(code), FrameSize::Uxga, "code={}", code);
    }
}

#[test]
fn test_in_range_frame_sizes_map_by_ordinal() {
    for code in 0..FRAME_SIZES.len() as i32 {
        assert_eq!(FrameSize::from_code(code).code(), code);
    }
}

#[test]
fn test_frame_size_uxga_is_code_13() {
    let uxga = FrameSize::from_code(13);
    assert_eq!(uxga, FrameSize::Uxga);
    assert_eq!(uxga.dimensions(), (1600, 1200));
}

#[test]
fn test_out_of_range_gain_ceilings_resolve_to_2x() {
    for code in (-1000..0).chain(7..1000) {
        let ceiling = GainCeiling::from_code(code);
        assert_eq!(ceiling, GainCeiling::X2, "code={}", code);
        assert_eq!(ceiling.multiplier(), 2);
    }
}

#[test]
fn test_gain_ceiling_code_n_is_two_to_n_plus_one() {
    for code in 0..=6 {
        assert_eq!(GainCeiling::from_code(code).multiplier(), 1 << (code + 1));
    }
}
