/// カメラ初期化リトライの待ち時間（試行回数に比例）
pub fn init_retry_delay_ms(base_delay_ms: u32, attempt: u8) -> u32 {
    base_delay_ms.saturating_mul(attempt as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_backoff() {
        assert_eq!(init_retry_delay_ms(1000, 1), 1000);
        assert_eq!(init_retry_delay_ms(1000, 3), 3000);
        assert_eq!(init_retry_delay_ms(u32::MAX, 2), u32::MAX);
    }
}
