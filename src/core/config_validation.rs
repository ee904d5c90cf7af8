/// cfg.toml の値の検証エラー
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("clock_frequency_hz の値が無効です (1000000-40000000): {0}")]
    InvalidClockFrequency(u32),
    #[error("frame_size の値が無効です (0-21): {0}")]
    InvalidFrameSize(u8),
    #[error("jpeg_quality の値が無効です (0-63): {0}")]
    InvalidJpegQuality(u8),
    #[error("camera_init_retries の値が無効です (1-10): {0}")]
    InvalidCameraInitRetries(u8),
}

/// XCLK周波数の許容範囲 (Hz)
pub const MIN_CLOCK_FREQUENCY_HZ: u32 = 1_000_000;
pub const MAX_CLOCK_FREQUENCY_HZ: u32 = 40_000_000;

/// フレームサイズコードの最大値 (QSXGA)
pub const MAX_FRAME_SIZE_CODE: u8 = 21;

pub const MAX_JPEG_QUALITY: u8 = 63;

pub const MAX_CAMERA_INIT_RETRIES: u8 = 10;

pub fn parse_clock_frequency_hz(value: u32) -> Result<i32, ValidationError> {
    if !(MIN_CLOCK_FREQUENCY_HZ..=MAX_CLOCK_FREQUENCY_HZ).contains(&value) {
        return Err(ValidationError::InvalidClockFrequency(value));
    }
    Ok(value as i32)
}

/// ドライバ側は範囲外を UXGA に丸めるが、cfg.toml の書き間違いはここで検出する
pub fn parse_frame_size(value: u8) -> Result<i32, ValidationError> {
    if value > MAX_FRAME_SIZE_CODE {
        return Err(ValidationError::InvalidFrameSize(value));
    }
    Ok(value as i32)
}

pub fn parse_jpeg_quality(value: u8) -> Result<i32, ValidationError> {
    if value > MAX_JPEG_QUALITY {
        return Err(ValidationError::InvalidJpegQuality(value));
    }
    Ok(value as i32)
}

pub fn parse_camera_init_retries(value: u8) -> Result<u8, ValidationError> {
    if value == 0 || value > MAX_CAMERA_INIT_RETRIES {
        return Err(ValidationError::InvalidCameraInitRetries(value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_frequency_range() {
        assert_eq!(parse_clock_frequency_hz(20_000_000), Ok(20_000_000));
        assert_eq!(parse_clock_frequency_hz(16_000_000), Ok(16_000_000));
        assert_eq!(
            parse_clock_frequency_hz(0),
            Err(ValidationError::InvalidClockFrequency(0))
        );
        assert!(parse_clock_frequency_hz(80_000_000).is_err());
    }

    #[test]
    fn test_frame_size() {
        assert_eq!(parse_frame_size(0), Ok(0));
        assert_eq!(parse_frame_size(13), Ok(13));
        assert_eq!(parse_frame_size(21), Ok(21));
        assert_eq!(parse_frame_size(22), Err(ValidationError::InvalidFrameSize(22)));
    }

    #[test]
    fn test_jpeg_quality() {
        assert_eq!(parse_jpeg_quality(0), Ok(0));
        assert_eq!(parse_jpeg_quality(63), Ok(63));
        assert_eq!(parse_jpeg_quality(64), Err(ValidationError::InvalidJpegQuality(64)));
    }

    #[test]
    fn test_error_message_names_the_key() {
        let message = ValidationError::InvalidJpegQuality(64).to_string();
        assert!(message.contains("jpeg_quality"));
        assert!(message.contains("64"));
    }

    #[test]
    fn test_camera_init_retries() {
        assert_eq!(parse_camera_init_retries(1), Ok(1));
        assert_eq!(parse_camera_init_retries(10), Ok(10));
        assert!(parse_camera_init_retries(0).is_err());
        assert!(parse_camera_init_retries(11).is_err());
    }
}
