use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, Offset, TimeZone, Timelike, Utc, Weekday,
};

pub const CLOCK_REFRESH_MS: u64 = 30_000;

const EST_OFFSET_SECS: i32 = -5 * 3600;
const EDT_OFFSET_SECS: i32 = -4 * 3600;

/// Date of the `n`-th (1-based) `weekday` in `month`.
fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
}

/// US Eastern offset at `utc`. Daylight time runs from 02:00 local on the
/// second Sunday of March until 02:00 local on the first Sunday of November.
pub fn eastern_offset(utc: DateTime<Utc>) -> FixedOffset {
    let year = utc.year();
    let window = nth_weekday(year, 3, Weekday::Sun, 2)
        .zip(nth_weekday(year, 11, Weekday::Sun, 1))
        .and_then(|(start, end)| {
            // 02:00 EST and 02:00 EDT respectively, in UTC
            let start = start.and_hms_opt(7, 0, 0)?.and_utc();
            let end = end.and_hms_opt(6, 0, 0)?.and_utc();
            Some((start, end))
        });
    let secs = match window {
        Some((start, end)) if utc >= start && utc < end => EDT_OFFSET_SECS,
        _ => EST_OFFSET_SECS,
    };
    FixedOffset::east_opt(secs).unwrap_or_else(|| Utc.fix())
}

/// Brooklyn wall-clock time as `h:mm AM/PM`.
pub fn format_brooklyn_time(utc: DateTime<Utc>) -> String {
    let local = utc.with_timezone(&eastern_offset(utc));
    let (is_pm, hour) = local.hour12();
    format!(
        "{}:{:02} {}",
        hour,
        local.minute(),
        if is_pm { "PM" } else { "AM" }
    )
}

pub fn brooklyn_now() -> String {
    format_brooklyn_time(Utc::now())
}

/// Milliseconds until the next wall-clock minute starts.
pub fn ms_until_next_minute(utc: DateTime<Utc>) -> i64 {
    let into_minute = Duration::seconds(utc.second().into())
        + Duration::nanoseconds(utc.nanosecond().into());
    (Duration::minutes(1) - into_minute).num_milliseconds()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).single().expect("valid test date")
    }

    #[test]
    fn test_standard_and_daylight_offsets() {
        assert_eq!(eastern_offset(utc(2025, 1, 15, 12, 0)).local_minus_utc(), -5 * 3600);
        assert_eq!(eastern_offset(utc(2025, 7, 4, 12, 0)).local_minus_utc(), -4 * 3600);
    }

    #[test]
    fn test_dst_boundaries() {
        // 2025-03-09 02:00 EST == 07:00 UTC
        assert_eq!(eastern_offset(utc(2025, 3, 9, 6, 59)).local_minus_utc(), -5 * 3600);
        assert_eq!(eastern_offset(utc(2025, 3, 9, 7, 0)).local_minus_utc(), -4 * 3600);
        // 2025-11-02 02:00 EDT == 06:00 UTC
        assert_eq!(eastern_offset(utc(2025, 11, 2, 5, 59)).local_minus_utc(), -4 * 3600);
        assert_eq!(eastern_offset(utc(2025, 11, 2, 6, 0)).local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_brooklyn_time(utc(2025, 1, 15, 20, 7)), "3:07 PM");
        assert_eq!(format_brooklyn_time(utc(2025, 7, 4, 4, 30)), "12:30 AM");
        assert_eq!(format_brooklyn_time(utc(2025, 7, 4, 16, 0)), "12:00 PM");
    }

    #[test]
    fn test_ms_until_next_minute() {
        let t = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 45).single().expect("valid test date");
        assert_eq!(ms_until_next_minute(t), 15_000);

        let on_the_minute = utc(2025, 1, 1, 9, 30);
        assert_eq!(ms_until_next_minute(on_the_minute), 60_000);

        let late = t + Duration::seconds(14) + Duration::milliseconds(750);
        assert_eq!(ms_until_next_minute(late), 250);
    }
}
