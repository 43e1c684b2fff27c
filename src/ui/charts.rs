//! Plain-text rendering of `ChartData`.

use crate::models::chart::{ChartData, TypeCounts};
use crate::models::entry_type::EntryType;
use ansi_term::Colour;
use std::fmt::Write;

const BAR_WIDTH: u32 = 30;

fn colour(kind: EntryType) -> Colour {
    match kind {
        EntryType::Urination => Colour::Blue,
        EntryType::Defecation => Colour::Yellow,
    }
}

/// A bar of `value` cells, scaled down when `max` does not fit.
fn bar(kind: EntryType, value: u32, max: u32) -> String {
    let cells = if max > BAR_WIDTH {
        (u64::from(value) * u64::from(BAR_WIDTH) / u64::from(max)) as usize
    } else {
        value as usize
    };
    colour(kind).paint("█".repeat(cells)).to_string()
}

fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        f64::from(part) * 100.0 / f64::from(whole)
    }
}

fn counts_line(c: &TypeCounts) -> String {
    EntryType::ALL
        .iter()
        .map(|k| format!("{} {}", k.label(), c.get(*k)))
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn render(data: &ChartData) -> String {
    let mut out = String::new();

    if data.summary.total_count == 0 {
        out.push_str("📊 No entries yet. Add one with `babylog add <type>`.\n");
        return out;
    }

    // writeln! into a String cannot fail
    let _ = writeln!(out, "📊 Today: {}", counts_line(&data.today_totals));

    let day_max = data
        .daily
        .iter()
        .flat_map(|b| [b.urination, b.defecation])
        .max()
        .unwrap_or(0);
    let _ = writeln!(out, "\n📅 Last 7 days");
    for b in &data.daily {
        let _ = writeln!(
            out,
            "  {:>5}  {} {:<3} {} {:<3} total {}",
            b.label,
            EntryType::Urination.label(),
            b.urination,
            EntryType::Defecation.label(),
            b.defecation,
            b.total
        );
        if b.total > 0 {
            let _ = writeln!(
                out,
                "         {}{}",
                bar(EntryType::Urination, b.urination, day_max),
                bar(EntryType::Defecation, b.defecation, day_max)
            );
        }
    }

    let hour_max = data
        .hourly
        .iter()
        .flat_map(|b| [b.urination, b.defecation])
        .max()
        .unwrap_or(0);
    let _ = writeln!(out, "\n🕐 By hour of day");
    for b in data.hourly.iter().filter(|b| b.total() > 0) {
        let _ = writeln!(
            out,
            "  {:02}h  {}{}  ({}/{})",
            b.hour,
            bar(EntryType::Urination, b.urination, hour_max),
            bar(EntryType::Defecation, b.defecation, hour_max),
            b.urination,
            b.defecation
        );
    }

    let whole = data.type_totals.total();
    let _ = writeln!(out, "\n🥧 Share");
    for kind in EntryType::ALL {
        let n = data.type_totals.get(kind);
        let _ = writeln!(
            out,
            "  {:<4} {:>4} ({:.1}%)",
            kind.label(),
            n,
            percent(n, whole)
        );
    }

    let s = &data.summary;
    let _ = writeln!(out, "\n📈 Summary");
    let _ = writeln!(out, "  Total entries: {}", s.total_count);
    let _ = writeln!(
        out,
        "  Daily average (7 days): {:.1} ({} {:.1} | {} {:.1})",
        s.daily_average.combined(),
        EntryType::Urination.label(),
        s.daily_average.urination,
        EntryType::Defecation.label(),
        s.daily_average.defecation
    );
    let _ = writeln!(
        out,
        "  Busiest day: {} ({})",
        s.busiest_day.label, s.busiest_day.total
    );

    if data.skipped > 0 {
        let _ = writeln!(
            out,
            "\n⚠️  {} entries skipped (malformed timestamp)",
            data.skipped
        );
    }

    out
}
