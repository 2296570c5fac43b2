use power_law_metrics::analysis::{align_by_day, fit_power_law};
use power_law_metrics::axis::{linear_ticks, log_ticks};
use power_law_metrics::utils::TimeUtils;
use power_law_metrics::{ChartSettings, Epoch, MetricKind, Observation, TimePeriod, build_report};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn age_is_monotone_and_at_least_one(a: i64, b: i64) -> bool {
    let (early, late) = if a <= b { (a, b) } else { (b, a) };
    let epoch = Epoch::GENESIS;
    epoch.age_of(early) >= 1 && epoch.age_of(early) <= epoch.age_of(late)
}

#[quickcheck]
fn age_round_trips_through_day_start(age: u16) -> bool {
    let age = age as i64 + 1;
    let epoch = Epoch::GENESIS;
    let start = epoch.timestamp_of_age(age);
    epoch.age_of(start) == age && epoch.age_of(start + TimeUtils::MS_IN_D - 1) == age
}

#[quickcheck]
fn fit_recovers_exact_power_law(c_seed: u8, e_seed: u8) -> bool {
    let coefficient = 0.5 + c_seed as f64;
    let exponent = (e_seed % 60) as f64 / 10.0 - 2.0;
    let pairs: Vec<(f64, f64)> = (1..=60)
        .map(|x| {
            let x = x as f64 * 3.0;
            (x, coefficient * x.powf(exponent))
        })
        .collect();

    let fit = fit_power_law(&pairs).unwrap();
    (fit.coefficient - coefficient).abs() <= coefficient * 1e-6
        && (fit.exponent - exponent).abs() <= 1e-6
        && fit.sample_count == 60
}

#[quickcheck]
fn linear_ticks_cover_range(start: i16, extra: u16) -> bool {
    let min = start as f64;
    let max = min + 10.0 + extra as f64;
    let ticks = linear_ticks(min, max, 6, false).unwrap().major;

    ticks.len() >= 2
        && ticks[0] <= min
        && ticks[ticks.len() - 1] >= max
        && ticks.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn log_ticks_stay_in_range_and_hit_every_decade(low: u32, span: u16) -> bool {
    let min = 1.0 + low as f64;
    let max = min * (1.0 + span as f64);
    let ticks = log_ticks(min, max).unwrap();

    let in_range = ticks
        .all
        .iter()
        .all(|&t| t >= min * (1.0 - 1e-9) && t <= max * (1.0 + 1e-9));
    let decades_present = (min.log10().ceil() as i32..=max.log10().floor() as i32).all(|i| {
        let power = 10f64.powi(i);
        power < min
            || power > max
            || ticks.major.iter().any(|&t| (t - power).abs() <= power * 1e-12)
    });
    in_range && decades_present
}

#[quickcheck]
fn alignment_keeps_driving_order(offsets: Vec<u8>) -> bool {
    if offsets.is_empty() {
        return true;
    }
    let day0 = 1_600_000_000_000;
    let driving: Vec<Observation> = offsets
        .iter()
        .scan(day0, |ts, &step| {
            *ts += step as i64 * TimeUtils::MS_IN_H;
            Some(Observation::new(*ts, 1.0))
        })
        .collect();
    let other: Vec<Observation> = (0..=(offsets.len() as i64 * 255 / 24 + 1))
        .map(|d| Observation::new(day0 + d * TimeUtils::MS_IN_D, 2.0))
        .collect();

    let aligned = align_by_day(&driving, &other).unwrap();
    aligned.len() <= driving.len() && aligned.windows(2).all(|w| w[0].timestamp < w[1].timestamp)
}

#[test]
fn report_serializes_chart_and_oscillator() {
    let now = 1_760_000_000_000;
    let hashrate: Vec<Observation> = (0..900)
        .map(|d| Observation::new(now - (900 - d) * TimeUtils::MS_IN_D, 1.0e17 * (1.0 + d as f64 / 5.0)))
        .collect();
    let price: Vec<Observation> = hashrate
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let noise = 1.0 + 0.1 * ((i as f64) / 17.0).sin();
            Observation::new(h.timestamp + 2 * TimeUtils::MS_IN_H, 3.0e-7 * h.value.powf(0.55) * noise)
        })
        .collect();

    let settings = ChartSettings {
        period: TimePeriod::TwoYears,
        ..ChartSettings::new(MetricKind::Price, now)
    };
    let report = build_report(&price, Some(&hashrate), &settings).unwrap();
    let oscillator = report.oscillator.as_ref().unwrap();
    assert_eq!(oscillator.oscillator.aligned_pairs, 900);
    assert!(report.chart.fit.is_some());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["chart"]["settings"]["period"], "TwoYears");
    assert!(json["chart"]["value_ticks"]["labels"].as_array().unwrap().len() >= 2);
    assert!(json["oscillator_unavailable"].is_null());
}
