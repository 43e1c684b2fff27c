use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::models::chart::WINDOW_DAYS;
use crate::models::entry_type::EntryType;
use crate::models::log_entry::LogEntry;
use crate::store::EntryStore;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone};
use rand::Rng;
use tracing::info;

/// Knobs for demo data generation (see the `demo_*` config keys).
#[derive(Debug, Clone, Copy)]
pub struct DemoSettings {
    pub min_per_day: u32,
    pub max_per_day: u32,
    pub urination_ratio: f64,
}

impl From<&Config> for DemoSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            min_per_day: cfg.demo_min_per_day,
            max_per_day: cfg.demo_max_per_day,
            urination_ratio: cfg.demo_urination_ratio,
        }
    }
}

pub struct DemoLogic;

/// Draws before giving up on a day the zone mostly skips.
const MAX_TIME_DRAWS: u32 = 48;

/// A random wall-clock time on `day` in `tz`. Times that fall into a DST gap
/// do not exist locally and are drawn again.
fn random_time_on<Tz: TimeZone, R: Rng>(
    day: NaiveDate,
    tz: &Tz,
    rng: &mut R,
) -> AppResult<DateTime<FixedOffset>> {
    for _ in 0..MAX_TIME_DRAWS {
        let naive = day
            .and_hms_opt(rng.gen_range(0..24), rng.gen_range(0..60), 0)
            .ok_or_else(|| AppError::Other(format!("invalid demo time on {day}")))?;
        if let Some(ts) = tz.from_local_datetime(&naive).earliest() {
            return Ok(ts.fixed_offset());
        }
    }
    Err(AppError::InvalidTimestamp(format!("no valid local time on {day}")))
}

impl DemoLogic {
    /// Fill the trailing window (today included) with random entries: a
    /// random number per day, at random minutes, in the zone of `now`.
    /// Each entry carries the offset its own day has in that zone.
    pub fn generate<Tz: TimeZone, R: Rng>(
        store: &mut dyn EntryStore,
        user_id: &str,
        now: &DateTime<Tz>,
        settings: DemoSettings,
        rng: &mut R,
    ) -> AppResult<Vec<LogEntry>> {
        let tz = now.timezone();
        let today = now.date_naive();
        let mut created = Vec::new();

        for days_ago in (0..WINDOW_DAYS as i64).rev() {
            let day = today - Duration::days(days_ago);
            let per_day = rng.gen_range(settings.min_per_day..=settings.max_per_day);

            for _ in 0..per_day {
                let timestamp = random_time_on(day, &tz, rng)?;
                let kind = if rng.gen_bool(settings.urination_ratio) {
                    EntryType::Urination
                } else {
                    EntryType::Defecation
                };

                created.push(store.insert(user_id, kind, timestamp)?);
            }
        }

        info!(count = created.len(), user = user_id, "demo entries generated");
        Ok(created)
    }

    /// Remove every entry of the user.
    pub fn clear(store: &mut dyn EntryStore, user_id: &str) -> AppResult<usize> {
        DeleteLogic::clear(store, user_id)
    }
}
