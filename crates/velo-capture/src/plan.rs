use crate::CaptureConfig;
use std::time::Duration;

/// Compute the sampling offsets for a seekable source.
///
/// The window is symmetric around `position`: `frame_count` offsets from
/// `position − (N/2)·interval` to `position + (N/2 − 1)·interval` in
/// `interval` steps. Each offset is clamped into `[0, duration]`
/// (zero-only when the duration is unknown), so offsets near either edge
/// of the media may repeat; they never decrease.
pub fn plan_offsets(
    position: Duration,
    duration: Option<Duration>,
    config: &CaptureConfig,
) -> Vec<Duration> {
    let half = (config.frame_count() / 2) as i64;
    let interval = config.frame_interval();

    (0..config.frame_count())
        .map(|i| {
            let steps = i as i64 - half;
            let target = if steps < 0 {
                position.checked_sub(interval * steps.unsigned_abs() as u32)
            } else {
                position.checked_add(interval * steps as u32)
            };

            let offset = target.unwrap_or(Duration::ZERO);
            match duration {
                Some(end) if offset > end => end,
                _ => offset,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(count: usize, interval_ms: u64) -> CaptureConfig {
        CaptureConfig::default()
            .with_frame_count(count)
            .with_frame_interval(Duration::from_millis(interval_ms))
    }

    #[test]
    fn test_symmetric_window() {
        let offsets = plan_offsets(
            Duration::from_secs(2),
            Some(Duration::from_secs(10)),
            &config(4, 50),
        );
        assert_eq!(
            offsets,
            vec![
                Duration::from_millis(1900),
                Duration::from_millis(1950),
                Duration::from_millis(2000),
                Duration::from_millis(2050),
            ]
        );
    }

    #[test]
    fn test_clamped_at_start() {
        let offsets = plan_offsets(Duration::ZERO, Some(Duration::from_secs(10)), &config(4, 50));
        assert_eq!(
            offsets,
            vec![
                Duration::ZERO,
                Duration::ZERO,
                Duration::ZERO,
                Duration::from_millis(50),
            ]
        );
    }

    #[test]
    fn test_clamped_at_end() {
        let offsets = plan_offsets(
            Duration::from_secs(10),
            Some(Duration::from_secs(10)),
            &config(4, 50),
        );
        assert_eq!(
            offsets,
            vec![
                Duration::from_millis(9900),
                Duration::from_millis(9950),
                Duration::from_secs(10),
                Duration::from_secs(10),
            ]
        );
    }

    #[test]
    fn test_unknown_duration_clamps_only_at_zero() {
        let offsets = plan_offsets(Duration::from_millis(25), None, &config(4, 50));
        assert_eq!(
            offsets,
            vec![
                Duration::ZERO,
                Duration::ZERO,
                Duration::from_millis(25),
                Duration::from_millis(75),
            ]
        );
    }

    #[test]
    fn test_zero_length_media_clamps_everything_to_zero() {
        let offsets = plan_offsets(Duration::ZERO, Some(Duration::ZERO), &config(4, 50));
        assert_eq!(offsets, vec![Duration::ZERO; 4]);
    }

    #[test]
    fn test_single_frame() {
        let offsets = plan_offsets(
            Duration::from_secs(3),
            Some(Duration::from_secs(10)),
            &config(1, 50),
        );
        assert_eq!(offsets, vec![Duration::from_secs(3)]);
    }

    #[test]
    fn test_odd_count() {
        let offsets = plan_offsets(
            Duration::from_secs(1),
            Some(Duration::from_secs(10)),
            &config(3, 100),
        );
        assert_eq!(
            offsets,
            vec![
                Duration::from_millis(900),
                Duration::from_secs(1),
                Duration::from_millis(1100),
            ]
        );
    }

    #[test]
    fn test_offsets_never_decrease() {
        let offsets = plan_offsets(
            Duration::from_millis(30),
            Some(Duration::from_millis(60)),
            &config(6, 50),
        );
        for pair in offsets.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }
}
