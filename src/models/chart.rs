use super::entry_type::EntryType;
use chrono::NaiveDate;
use serde::Serialize;

pub const WINDOW_DAYS: usize = 7;
pub const HOURS_PER_DAY: usize = 24;

/// Per-type counters shared by every bucket kind.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct TypeCounts {
    pub urination: u32,
    pub defecation: u32,
}

impl TypeCounts {
    pub fn bump(&mut self, kind: EntryType) {
        match kind {
            EntryType::Urination => self.urination += 1,
            EntryType::Defecation => self.defecation += 1,
        }
    }

    pub fn get(&self, kind: EntryType) -> u32 {
        match kind {
            EntryType::Urination => self.urination,
            EntryType::Defecation => self.defecation,
        }
    }

    pub fn total(&self) -> u32 {
        self.urination + self.defecation
    }
}

/// One calendar day of the trailing window.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DailyBucket {
    pub date: NaiveDate,
    /// Short display label (`M/d`).
    pub label: String,
    pub urination: u32,
    pub defecation: u32,
    pub total: u32,
}

impl DailyBucket {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            label: date.format("%-m/%-d").to_string(),
            urination: 0,
            defecation: 0,
            total: 0,
        }
    }

    pub fn add(&mut self, kind: EntryType) {
        match kind {
            EntryType::Urination => self.urination += 1,
            EntryType::Defecation => self.defecation += 1,
        }
        self.total += 1;
    }

    pub fn get(&self, kind: EntryType) -> u32 {
        match kind {
            EntryType::Urination => self.urination,
            EntryType::Defecation => self.defecation,
        }
    }
}

/// One hour of the day, across all entries.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct HourlyBucket {
    pub hour: u32,
    pub urination: u32,
    pub defecation: u32,
}

impl HourlyBucket {
    pub fn total(&self) -> u32 {
        self.urination + self.defecation
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct TypeAverages {
    pub urination: f64,
    pub defecation: f64,
}

impl TypeAverages {
    pub fn combined(&self) -> f64 {
        self.urination + self.defecation
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Summary {
    pub total_count: usize,
    /// Per-type count over the window divided by 7.
    pub daily_average: TypeAverages,
    pub busiest_day: DailyBucket,
}

/// Everything the charts need, derived from a list of entries and a fixed "now".
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartData {
    pub daily: [DailyBucket; WINDOW_DAYS],
    pub hourly: [HourlyBucket; HOURS_PER_DAY],
    pub type_totals: TypeCounts,
    pub today_totals: TypeCounts,
    pub summary: Summary,
    /// Entries ignored by the time-based buckets because of a malformed timestamp.
    pub skipped: usize,
}
