use chrono::{DateTime, Utc};

/// 单位阈值（秒），从大到小。月和年取固定长度，不做日历计算——
/// 这是展示用的粗粒度标签，不是精确时长。
const UNITS: [(f64, &str); 5] = [
    (31_536_000.0, "years"),
    (2_592_000.0, "months"),
    (86_400.0, "days"),
    (3_600.0, "hours"),
    (60.0, "minutes"),
];

/// 格式化过去时刻为 "N <unit> ago" 标签
///
/// 依次用各单位阈值去除经过的秒数，商严格大于 1 的第一个单位胜出，
/// 标签取商的向下取整，单位恒为复数（"1 hours ago" 是预期行为）。
/// 都不满足时退回 "N seconds ago"。
///
/// `instant` 晚于 `now`（未来时刻）时经过秒数按 0 处理，
/// 输出 "0 seconds ago"。
pub fn time_ago(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(instant).num_seconds().max(0);

    for (threshold, unit) in UNITS {
        let interval = seconds as f64 / threshold;
        if interval > 1.0 {
            return format!("{} {} ago", interval.floor() as i64, unit);
        }
    }

    format!("{} seconds ago", seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn label(seconds: i64) -> String {
        let now = Utc::now();
        time_ago(now - Duration::seconds(seconds), now)
    }

    #[test]
    fn test_seconds_fallback() {
        assert_eq!(label(0), "0 seconds ago");
        assert_eq!(label(45), "45 seconds ago");
    }

    #[test]
    fn test_minute_boundaries() {
        assert_eq!(label(3599), "59 minutes ago");
        assert_eq!(label(3601), "1 hours ago");
    }

    #[test]
    fn test_day_boundary() {
        assert_eq!(label(86_401), "1 days ago");
    }

    #[test]
    fn test_unit_step_up() {
        // 不会出现 "61 minutes ago"，超过阈值就升到更大的单位
        assert_eq!(label(61 * 60), "1 hours ago");
        assert_eq!(label(25 * 3600), "1 days ago");
        assert_eq!(label(40 * 86_400), "1 months ago");
        assert_eq!(label(400 * 86_400), "1 years ago");
    }

    #[test]
    fn test_future_instant_clamps_to_zero() {
        let now = Utc::now();
        assert_eq!(time_ago(now + Duration::seconds(120), now), "0 seconds ago");
    }
}
