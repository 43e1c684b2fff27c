//! Chart-data derivation.
//!
//! Every function here is pure: the reference instant is always passed in,
//! and the "local" calendar day / hour of an entry is taken in the timezone
//! of that instant. Entries whose timestamp does not parse are left out of
//! every time-based bucket but still count towards the per-type totals.

use crate::models::chart::{
    ChartData, DailyBucket, HOURS_PER_DAY, HourlyBucket, Summary, TypeAverages, TypeCounts,
    WINDOW_DAYS,
};
use crate::models::entry_type::EntryType;
use crate::models::log_entry::LogEntry;
use chrono::{DateTime, Duration, FixedOffset, TimeZone, Timelike};
use tracing::{debug, warn};

/// Entries with a usable timestamp, in input order.
fn timed(entries: &[LogEntry]) -> impl Iterator<Item = (EntryType, DateTime<FixedOffset>)> + '_ {
    entries
        .iter()
        .filter_map(|e| e.parsed_timestamp().ok().map(|ts| (e.kind, ts)))
}

fn count_malformed(entries: &[LogEntry]) -> usize {
    entries
        .iter()
        .filter(|e| e.parsed_timestamp().is_err())
        .count()
}

/// Seven calendar-day buckets ending on the day of `now`, oldest first.
pub fn compute_daily_buckets<Tz: TimeZone>(
    entries: &[LogEntry],
    now: &DateTime<Tz>,
) -> [DailyBucket; WINDOW_DAYS] {
    let tz = now.timezone();
    let today = now.date_naive();
    let last = WINDOW_DAYS - 1;

    let mut buckets: [DailyBucket; WINDOW_DAYS] = std::array::from_fn(|i| {
        DailyBucket::empty(today - Duration::days((last - i) as i64))
    });

    for (kind, ts) in timed(entries) {
        let day = ts.with_timezone(&tz).date_naive();
        let days_ago = (today - day).num_days();
        if (0..WINDOW_DAYS as i64).contains(&days_ago) {
            buckets[last - days_ago as usize].add(kind);
        }
    }

    buckets
}

/// Twenty-four hour-of-day buckets over every entry, whatever its date.
pub fn compute_hourly_buckets<Tz: TimeZone>(
    entries: &[LogEntry],
    tz: &Tz,
) -> [HourlyBucket; HOURS_PER_DAY] {
    let mut buckets: [HourlyBucket; HOURS_PER_DAY] = std::array::from_fn(|h| HourlyBucket {
        hour: h as u32,
        ..HourlyBucket::default()
    });

    for (kind, ts) in timed(entries) {
        let bucket = &mut buckets[ts.with_timezone(tz).hour() as usize];
        match kind {
            EntryType::Urination => bucket.urination += 1,
            EntryType::Defecation => bucket.defecation += 1,
        }
    }

    buckets
}

/// Count per type over the whole list. Timestamps are not consulted, so the
/// two counts always add up to `entries.len()`.
pub fn compute_type_totals(entries: &[LogEntry]) -> TypeCounts {
    let mut totals = TypeCounts::default();
    for e in entries {
        totals.bump(e.kind);
    }
    totals
}

/// Count per type for entries on the calendar day of `now`.
pub fn compute_today_totals<Tz: TimeZone>(entries: &[LogEntry], now: &DateTime<Tz>) -> TypeCounts {
    let tz = now.timezone();
    let today = now.date_naive();

    let mut totals = TypeCounts::default();
    for (kind, ts) in timed(entries) {
        if ts.with_timezone(&tz).date_naive() == today {
            totals.bump(kind);
        }
    }
    totals
}

/// Totals, per-type daily averages over the window and the busiest day.
///
/// The average divisor is always the window length, even when only some of
/// the days have data. Ties for the busiest day go to the earliest bucket.
pub fn compute_summary(daily: &[DailyBucket; WINDOW_DAYS], entries: &[LogEntry]) -> Summary {
    let mut busiest = &daily[0];
    for bucket in &daily[1..] {
        if bucket.total > busiest.total {
            busiest = bucket;
        }
    }

    let average = |kind: EntryType| {
        let sum: u32 = daily.iter().map(|b| b.get(kind)).sum();
        f64::from(sum) / WINDOW_DAYS as f64
    };

    Summary {
        total_count: entries.len(),
        daily_average: TypeAverages {
            urination: average(EntryType::Urination),
            defecation: average(EntryType::Defecation),
        },
        busiest_day: busiest.clone(),
    }
}

/// Derive the full chart data set.
pub fn aggregate<Tz: TimeZone>(entries: &[LogEntry], now: &DateTime<Tz>) -> ChartData {
    let skipped = count_malformed(entries);
    if skipped > 0 {
        warn!(
            skipped,
            total = entries.len(),
            "ignoring entries with malformed timestamps"
        );
    }

    let daily = compute_daily_buckets(entries, now);
    let hourly = compute_hourly_buckets(entries, &now.timezone());
    let type_totals = compute_type_totals(entries);
    let today_totals = compute_today_totals(entries, now);
    let summary = compute_summary(&daily, entries);

    debug!(
        entries = entries.len(),
        in_window = daily.iter().map(|b| b.total).sum::<u32>(),
        today = today_totals.total(),
        "chart data computed"
    );

    ChartData {
        daily,
        hourly,
        type_totals,
        today_totals,
        summary,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const JST: i32 = 9 * 3600;

    fn jst() -> FixedOffset {
        FixedOffset::east_opt(JST).unwrap()
    }

    fn now() -> DateTime<FixedOffset> {
        jst().with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap()
    }

    fn entry(id: i64, kind: EntryType, ts: &str) -> LogEntry {
        LogEntry {
            id,
            user_id: "alice".into(),
            kind,
            timestamp: ts.into(),
        }
    }

    fn at(id: i64, kind: EntryType, ts: DateTime<FixedOffset>) -> LogEntry {
        LogEntry::new(id, "alice", kind, ts)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_input_has_stable_zero_shape() {
        let data = aggregate(&[], &now());

        assert_eq!(data.daily.len(), 7);
        assert_eq!(data.hourly.len(), 24);
        assert!(data.daily.iter().all(|b| b.total == 0));
        assert!(data.hourly.iter().all(|b| b.total() == 0));
        assert_eq!(data.type_totals, TypeCounts::default());
        assert_eq!(data.today_totals, TypeCounts::default());
        assert_eq!(data.summary.total_count, 0);
        assert_eq!(data.summary.daily_average, TypeAverages::default());
        assert_eq!(data.summary.busiest_day, data.daily[0]);
        assert_eq!(data.summary.busiest_day.date, date(2025, 6, 4));
        assert_eq!(data.skipped, 0);
    }

    #[test]
    fn daily_buckets_run_oldest_to_today() {
        let daily = compute_daily_buckets(&[], &now());

        assert_eq!(daily[0].date, date(2025, 6, 4));
        assert_eq!(daily[6].date, date(2025, 6, 10));
        for pair in daily.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        assert_eq!(daily[6].label, "6/10");
    }

    #[test]
    fn single_entry_now() {
        let entries = vec![at(1, EntryType::Urination, now())];
        let data = aggregate(&entries, &now());

        assert_eq!(
            data.today_totals,
            TypeCounts {
                urination: 1,
                defecation: 0
            }
        );
        assert_eq!(data.daily[6].total, 1);
        assert!((data.summary.daily_average.urination - 1.0 / 7.0).abs() < 1e-9);
        assert_eq!(data.summary.daily_average.defecation, 0.0);
        assert_eq!(data.summary.busiest_day.date, date(2025, 6, 10));
    }

    #[test]
    fn old_entries_leave_the_window_but_not_the_totals() {
        let n = now();
        let entries = vec![
            at(1, EntryType::Urination, n),
            at(2, EntryType::Urination, n - Duration::hours(2)),
            at(3, EntryType::Defecation, n - Duration::hours(5)),
            at(4, EntryType::Urination, n - Duration::days(8)),
        ];
        let data = aggregate(&entries, &n);

        let in_window: u32 = data.daily.iter().map(|b| b.total).sum();
        assert_eq!(in_window, 3);
        assert_eq!(data.type_totals.urination, 3);
        assert_eq!(data.type_totals.defecation, 1);

        let hourly_total: u32 = data.hourly.iter().map(|b| b.total()).sum();
        assert_eq!(hourly_total, 4);
        // 12:00 today and 12:00 eight days ago share an hour bucket.
        assert_eq!(data.hourly[12].urination, 2);
        assert_eq!(data.hourly[10].urination, 1);
        assert_eq!(data.hourly[7].defecation, 1);
    }

    #[test]
    fn busiest_day_tie_goes_to_earlier_day() {
        let n = now();
        let entries = vec![
            at(1, EntryType::Urination, n - Duration::days(4)),
            at(2, EntryType::Defecation, n - Duration::days(4)),
            at(3, EntryType::Urination, n - Duration::days(1)),
            at(4, EntryType::Urination, n - Duration::days(1)),
            at(5, EntryType::Urination, n),
        ];
        let daily = compute_daily_buckets(&entries, &n);
        let summary = compute_summary(&daily, &entries);

        assert_eq!(summary.busiest_day.date, date(2025, 6, 6));
        assert_eq!(summary.busiest_day.total, 2);
    }

    #[test]
    fn calendar_days_not_rolling_windows() {
        let tz = jst();
        let late = tz.with_ymd_and_hms(2025, 6, 8, 23, 59, 0).unwrap();
        let early = tz.with_ymd_and_hms(2025, 6, 9, 0, 1, 0).unwrap();
        let entries = vec![
            at(1, EntryType::Urination, late),
            at(2, EntryType::Urination, early),
        ];
        let daily = compute_daily_buckets(&entries, &now());

        assert_eq!(daily[4].date, date(2025, 6, 8));
        assert_eq!(daily[4].total, 1);
        assert_eq!(daily[5].total, 1);
    }

    #[test]
    fn days_and_hours_are_taken_in_the_zone_of_now() {
        // 15:30 UTC on the 9th is 00:30 on the 10th in JST.
        let entries = vec![entry(1, EntryType::Defecation, "2025-06-09T15:30:00Z")];
        let data = aggregate(&entries, &now());

        assert_eq!(data.today_totals.defecation, 1);
        assert_eq!(data.daily[6].defecation, 1);
        assert_eq!(data.hourly[0].defecation, 1);

        let hourly_utc = compute_hourly_buckets(&entries, &Utc);
        assert_eq!(hourly_utc[15].defecation, 1);
    }

    #[test]
    fn future_entries_stay_out_of_the_window() {
        let n = now();
        let entries = vec![at(1, EntryType::Urination, n + Duration::days(1))];
        let data = aggregate(&entries, &n);

        assert!(data.daily.iter().all(|b| b.total == 0));
        assert_eq!(data.today_totals.total(), 0);
        assert_eq!(data.type_totals.urination, 1);
    }

    #[test]
    fn malformed_timestamps_are_skipped_not_fatal() {
        let entries = vec![
            entry(1, EntryType::Urination, "not-a-date"),
            entry(2, EntryType::Defecation, "2025-06-10T09:00:00+09:00"),
            entry(3, EntryType::Urination, ""),
        ];
        let data = aggregate(&entries, &now());

        assert_eq!(data.skipped, 2);
        assert_eq!(data.summary.total_count, 3);
        assert_eq!(data.type_totals.total(), 3);
        assert_eq!(data.today_totals.total(), 1);
        assert_eq!(data.daily[6].total, 1);
        assert_eq!(data.hourly.iter().map(|b| b.total()).sum::<u32>(), 1);
    }

    #[test]
    fn average_divides_by_seven_regardless_of_active_days() {
        let n = now();
        let entries = vec![
            at(1, EntryType::Defecation, n),
            at(2, EntryType::Defecation, n),
            at(3, EntryType::Defecation, n - Duration::days(3)),
        ];
        let data = aggregate(&entries, &n);

        assert!((data.summary.daily_average.defecation - 3.0 / 7.0).abs() < 1e-9);
        assert!((data.summary.daily_average.combined() - 3.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn invariants_hold_for_random_inputs() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = now();

        for _ in 0..50 {
            let len = rng.gen_range(0..40);
            let entries: Vec<LogEntry> = (0..len)
                .map(|i| {
                    let kind = if rng.gen_bool(0.6) {
                        EntryType::Urination
                    } else {
                        EntryType::Defecation
                    };
                    let minutes_ago = rng.gen_range(0..(14 * 24 * 60));
                    at(i, kind, n - Duration::minutes(minutes_ago))
                })
                .collect();

            let first = aggregate(&entries, &n);
            let second = aggregate(&entries, &n);
            assert_eq!(first, second);

            assert_eq!(first.type_totals.total() as usize, entries.len());

            let in_window: u32 = first.daily.iter().map(|b| b.total).sum();
            let all_inside = entries.iter().all(|e| {
                let day = e.parsed_timestamp().unwrap().date_naive();
                (n.date_naive() - day).num_days() < 7
            });
            assert!(in_window as usize <= entries.len());
            assert_eq!(in_window as usize == entries.len(), all_inside);

            for (i, bucket) in first.hourly.iter().enumerate() {
                assert_eq!(bucket.hour as usize, i);
            }
            assert_eq!(first.daily[6].date, n.date_naive());
        }
    }
}
