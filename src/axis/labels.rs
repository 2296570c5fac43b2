//! Human-readable tick labels. The threshold tables here are user facing; keep them stable.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::axis::ticks::TickSet;
use crate::domain::MetricKind;
use crate::utils::maths_utils::trim_decimals;
use crate::utils::time_utils::{epoch_ms_to_utc, epoch_ms_to_year};

const CURRENCY_SUFFIXES: [&str; 4] = ["", "k", "M", "B"];
const VOLUME_SUFFIXES: [&str; 4] = ["", "K", "M", "B"];
const HASH_RATE_UNITS: [&str; 7] = [" H/s", " KH/s", " MH/s", " GH/s", " TH/s", " PH/s", " EH/s"];

/// How many decimals `LabeledTicks` may add to tell neighbouring ticks apart
const MAX_EXTRA_DECIMALS: usize = 6;

/// Label strategy for an axis
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, EnumIter, Display)]
pub enum LabelFormat {
    /// `$95k`, `$1.5M`, `$0.0004`, `$5.00e-7`
    Currency,
    /// `500 EH/s`, `1.5 TH/s`
    HashRate,
    /// `12K`, `3.4M`, `1B`
    Volume,
    /// `+10%`, `-25%`
    Percent,
    /// Whole days since genesis
    Days,
    /// `2021` (value is epoch ms)
    Year,
    /// `2021-06-01` (value is epoch ms)
    Date,
}

impl From<MetricKind> for LabelFormat {
    fn from(metric: MetricKind) -> Self {
        match metric {
            MetricKind::Price => LabelFormat::Currency,
            MetricKind::HashRate => LabelFormat::HashRate,
            MetricKind::Volume => LabelFormat::Volume,
        }
    }
}

impl LabelFormat {
    pub fn format(&self, value: f64) -> String {
        self.format_with(value, 0)
    }

    /// Like [`LabelFormat::format`] with `extra` more decimals on numeric labels.
    /// Calendar and day labels ignore `extra`.
    pub fn format_with(&self, value: f64, extra: usize) -> String {
        match self {
            LabelFormat::Currency => format_currency_with(value, extra),
            LabelFormat::HashRate => format_hash_rate_with(value, extra),
            LabelFormat::Volume => format_volume_with(value, extra),
            LabelFormat::Percent => format_percent_with(value, extra),
            LabelFormat::Days => format!("{:.0}", value),
            LabelFormat::Year => epoch_ms_to_year(value.round() as i64),
            LabelFormat::Date => epoch_ms_to_utc(value.round() as i64),
        }
    }
}

fn sign_of(value: f64) -> &'static str {
    if value < 0.0 { "-" } else { "" }
}

/// Steps `abs` through powers of 1000 and appends the matching unit.
/// `base` formats values left in the first unit; scaled values get `decimals` places
/// with trailing zeros removed. A value that rounds up to 1000 moves to the next unit.
fn scaled_label(abs: f64, units: &[&str], decimals: usize, base: impl Fn(f64) -> String) -> String {
    let last = units.len() - 1;
    let mut scaled = abs;
    let mut unit = 0;
    while scaled >= 1000.0 && unit < last {
        scaled /= 1000.0;
        unit += 1;
    }
    loop {
        let text = if unit == 0 { base(scaled) } else { trim_decimals(scaled, decimals) };
        let rounded_up = text.parse::<f64>().is_ok_and(|v| v >= 1000.0);
        if !rounded_up || unit == last {
            return format!("{}{}", text, units[unit]);
        }
        scaled /= 1000.0;
        unit += 1;
    }
}

/// Currency with k/M/B suffixes and sub-cent precision tiers down to exponential notation
pub fn format_currency(value: f64) -> String {
    format_currency_with(value, 0)
}

fn format_currency_with(value: f64, extra: usize) -> String {
    if value == 0.0 {
        return "$0".to_string();
    }
    let body = scaled_label(value.abs(), &CURRENCY_SUFFIXES, 1 + extra, |abs| {
        if abs >= 1.0 {
            if abs.fract() == 0.0 {
                format!("{:.0}", abs)
            } else {
                format!("{:.*}", 2 + extra, abs)
            }
        } else if abs >= 0.01 {
            format!("{:.*}", 2 + extra, abs)
        } else if abs >= 0.0001 {
            format!("{:.*}", 4 + extra, abs)
        } else if abs >= 0.000001 {
            format!("{:.*}", 6 + extra, abs)
        } else {
            format!("{:.*e}", 2 + extra, abs)
        }
    });
    format!("{}${}", sign_of(value), body)
}

/// Hash rate given in H/s, stepped by powers of 1000 up to EH/s
pub fn format_hash_rate(value: f64) -> String {
    format_hash_rate_with(value, 0)
}

fn format_hash_rate_with(value: f64, extra: usize) -> String {
    let decimals = 2 + extra;
    let body = scaled_label(value.abs(), &HASH_RATE_UNITS, decimals, |abs| trim_decimals(abs, decimals));
    format!("{}{}", sign_of(value), body)
}

/// Plain magnitude with K/M/B suffixes
pub fn format_volume(value: f64) -> String {
    format_volume_with(value, 0)
}

fn format_volume_with(value: f64, extra: usize) -> String {
    let body = scaled_label(value.abs(), &VOLUME_SUFFIXES, 1 + extra, |abs| {
        if abs >= 1.0 || abs == 0.0 {
            format!("{:.*}", extra, abs)
        } else {
            format!("{:.*}", 2 + extra, abs)
        }
    });
    format!("{}{}", sign_of(value), body)
}

pub fn format_percent(value: f64) -> String {
    format_percent_with(value, 0)
}

fn format_percent_with(value: f64, extra: usize) -> String {
    let text = format!("{:+.*}", extra, value);
    if text[1..].parse::<f64>().is_ok_and(|v| v == 0.0) {
        return "0%".to_string();
    }
    format!("{}%", text)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub value: f64,
    pub text: String,
}

/// A tick set plus one label per tick in `all`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LabeledTicks {
    pub ticks: TickSet,
    pub labels: Vec<TickLabel>,
}

impl LabeledTicks {
    /// Labels every tick in `ticks.all`, adding decimals until neighbouring labels differ
    pub fn new(ticks: TickSet, format: LabelFormat) -> Self {
        let texts = (0..=MAX_EXTRA_DECIMALS)
            .map(|extra| {
                ticks
                    .all
                    .iter()
                    .map(|&value| format.format_with(value, extra))
                    .collect::<Vec<String>>()
            })
            .find_or_last(|texts| texts.iter().all_unique())
            .unwrap_or_default();
        let labels = ticks
            .all
            .iter()
            .zip(texts)
            .map(|(&value, text)| TickLabel { value, text })
            .collect();
        LabeledTicks { ticks, labels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_table() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(2_500_000_000.0), "$2.5B");
        assert_eq!(format_currency(1_000_000.0), "$1M");
        assert_eq!(format_currency(1_500_000.0), "$1.5M");
        assert_eq!(format_currency(95_000.0), "$95k");
        assert_eq!(format_currency(1_000.0), "$1k");
        assert_eq!(format_currency(500.0), "$500");
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(1.0), "$1");
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(0.01), "$0.01");
        assert_eq!(format_currency(0.005), "$0.0050");
        assert_eq!(format_currency(0.0001), "$0.0001");
        assert_eq!(format_currency(0.00003), "$0.000030");
        assert_eq!(format_currency(0.000001), "$0.000001");
        assert_eq!(format_currency(0.0000005), "$5.00e-7");
        assert_eq!(format_currency(-20_000.0), "-$20k");
    }

    #[test]
    fn test_hash_rate_units() {
        assert_eq!(format_hash_rate(0.0), "0 H/s");
        assert_eq!(format_hash_rate(500.0), "500 H/s");
        assert_eq!(format_hash_rate(1_000.0), "1 KH/s");
        assert_eq!(format_hash_rate(2.5e6), "2.5 MH/s");
        assert_eq!(format_hash_rate(1e9), "1 GH/s");
        assert_eq!(format_hash_rate(1.5e12), "1.5 TH/s");
        assert_eq!(format_hash_rate(2e15), "2 PH/s");
        assert_eq!(format_hash_rate(5e20), "500 EH/s");
        // Nothing above EH/s
        assert_eq!(format_hash_rate(2e21), "2000 EH/s");
    }

    #[test]
    fn test_volume_suffixes() {
        assert_eq!(format_volume(0.0), "0");
        assert_eq!(format_volume(0.25), "0.25");
        assert_eq!(format_volume(750.0), "750");
        assert_eq!(format_volume(12_000.0), "12K");
        assert_eq!(format_volume(3_400_000.0), "3.4M");
        assert_eq!(format_volume(1e9), "1B");
    }

    #[test]
    fn test_percent_and_time_labels() {
        assert_eq!(format_percent(10.0), "+10%");
        assert_eq!(format_percent(-25.0), "-25%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(LabelFormat::Days.format(365.0), "365");
        assert_eq!(LabelFormat::Year.format(1_609_459_200_000.0), "2021");
        assert_eq!(LabelFormat::Date.format(1_609_459_200_000.0), "2021-01-01");
    }

    #[test]
    fn test_metric_label_format() {
        assert_eq!(LabelFormat::from(MetricKind::Price), LabelFormat::Currency);
        assert_eq!(LabelFormat::from(MetricKind::HashRate), LabelFormat::HashRate);
        assert_eq!(LabelFormat::from(MetricKind::Volume), LabelFormat::Volume);
    }

    #[test]
    fn test_units_step_up_when_rounding_reaches_a_thousand() {
        assert_eq!(format_currency(999_950.0), "$1M");
        assert_eq!(format_currency(999_940.0), "$999.9k");
        assert_eq!(format_currency(999.999), "$1k");
        assert_eq!(format_currency(999.99), "$999.99");
        assert_eq!(format_currency(999_960_000.0), "$1B");
        assert_eq!(format_currency(-999.999), "-$1k");
        assert_eq!(format_volume(999_960.0), "1M");
        assert_eq!(format_volume(999.6), "1K");
        assert_eq!(format_volume(999_999_999.0), "1B");
        assert_eq!(format_hash_rate(999_999_999.0), "1 GH/s");
        assert_eq!(format_hash_rate(999.999), "1 KH/s");
        assert_eq!(format_hash_rate(999.99e18), "999.99 EH/s");
    }

    #[test]
    fn test_narrow_linear_range_gets_distinct_labels() {
        let ticks = crate::axis::ticks::linear_ticks(95_000.0, 95_100.0, 6, true).unwrap();
        let labeled = LabeledTicks::new(ticks, LabelFormat::Currency);
        let texts: Vec<&str> = labeled.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["$95k", "$95.02k", "$95.04k", "$95.06k", "$95.08k", "$95.1k"]);
    }

    #[test]
    fn test_narrow_ranges_for_other_formats() {
        let ticks = crate::axis::ticks::linear_ticks(2.0e18, 2.001e18, 6, true).unwrap();
        let labeled = LabeledTicks::new(ticks, LabelFormat::HashRate);
        assert!(labeled.labels.iter().map(|l| &l.text).all_unique());

        let ticks = crate::axis::ticks::linear_ticks(-1.0, 1.0, 6, false).unwrap();
        let labeled = LabeledTicks::new(ticks, LabelFormat::Percent);
        let texts: Vec<&str> = labeled.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["-1.0%", "-0.8%", "-0.6%", "-0.4%", "-0.2%", "0%", "+0.2%", "+0.4%", "+0.6%", "+0.8%", "+1.0%"]
        );
    }

    #[test]
    fn test_labeled_ticks_follow_all() {
        let ticks = TickSet::from_tiers(vec![1.0, 10.0], vec![5.0], vec![]);
        let labeled = LabeledTicks::new(ticks, LabelFormat::Currency);
        let texts: Vec<&str> = labeled.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["$1", "$5", "$10"]);
    }
}
