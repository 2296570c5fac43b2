//! Assembles one power-law chart view: points, fitted bands, ATH / low markers and both axes.
//!
//! Order matters: the fit sees the full history, the period filter is applied after it,
//! and markers and ticks are computed on the filtered series.

use serde::{Deserialize, Serialize};

use crate::analysis::{
    AnalysisError, AnalysisResult, BandSet, ExtremumPoint, FitResult, all_time_high, band_set,
    fit_by_age, one_year_low, projection_domain,
};
use crate::axis::{LabelFormat, LabeledTicks, ticks_for, time_ticks};
use crate::config::CHART;
#[allow(unused_imports)]
use crate::config::debug::PRINT_CHART_ASSEMBLY;
use crate::domain::{Observation, Point, ScaleMode, filter_period};
use crate::models::chart_settings::ChartSettings;
use crate::utils::maths_utils::get_min_max;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PowerLawChartData {
    pub settings: ChartSettings,
    pub points: Vec<Point>,
    /// `None` when the series could not be fitted; the chart renders without an overlay
    pub fit: Option<FitResult>,
    pub bands: Option<BandSet>,
    pub all_time_high: ExtremumPoint,
    pub one_year_low: ExtremumPoint,
    pub value_ticks: LabeledTicks,
    pub time_ticks: LabeledTicks,
}

pub struct PowerLawChart;

impl PowerLawChart {
    pub fn build(series: &[Observation], settings: &ChartSettings) -> AnalysisResult<PowerLawChartData> {
        if series.is_empty() {
            return Err(AnalysisError::EmptySeries);
        }
        let epoch = settings.epoch;

        let fit = match fit_by_age(series, epoch) {
            Ok(fit) => Some(fit),
            Err(e) => {
                log::warn!("Power-law overlay omitted for {}: {}", settings.metric, e);
                None
            }
        };

        let visible = filter_period(series, settings.period, settings.now_ms);
        let (Some(first), Some(last)) = (visible.first(), visible.last()) else {
            return Err(AnalysisError::EmptySeries);
        };
        let (first_ts, last_ts) = (first.timestamp, last.timestamp);

        let points: Vec<Point> = visible
            .iter()
            .map(|obs| Point::new(settings.axis.x_for(obs.timestamp, epoch), obs.value))
            .collect();

        let projection = projection_domain(last_ts, settings.projection_days, CHART.projection_step_days);
        let bands = fit.as_ref().map(|fit| {
            let domain: Vec<i64> = visible
                .iter()
                .map(|obs| obs.timestamp)
                .chain(projection.iter().copied())
                .collect();
            band_set(fit, &domain, &settings.bands, settings.axis, epoch)
        });

        let all_time_high = all_time_high(&visible, epoch)?;
        let one_year_low = one_year_low(&visible, settings.now_ms, epoch)?;

        let value_ticks = value_axis_ticks(&points, bands.as_ref(), settings)?;
        let time_end = projection.last().copied().unwrap_or(last_ts);
        let time_ticks = time_ticks(
            first_ts,
            time_end,
            settings.time_scale,
            settings.axis,
            epoch,
            settings.desired_linear_ticks,
        )?;

        #[cfg(debug_assertions)]
        if PRINT_CHART_ASSEMBLY {
            log::debug!(
                "{} chart: {} points ({:?}), fit {}, ATH {} @ {}, {} value ticks, {} time ticks",
                settings.metric,
                points.len(),
                settings.period,
                if fit.is_some() { "ok" } else { "omitted" },
                all_time_high.value,
                all_time_high.timestamp,
                value_ticks.ticks.len(),
                time_ticks.ticks.len()
            );
        }

        Ok(PowerLawChartData {
            settings: settings.clone(),
            points,
            fit,
            bands,
            all_time_high,
            one_year_low,
            value_ticks,
            time_ticks,
        })
    }
}

/// Value-axis ticks spanning both the observations and the band curves
fn value_axis_ticks(
    points: &[Point],
    bands: Option<&BandSet>,
    settings: &ChartSettings,
) -> AnalysisResult<LabeledTicks> {
    let mut values: Vec<f64> = points.iter().map(|p| p.y).collect();
    if let Some(bands) = bands {
        values.extend(bands.all_values());
    }
    values.retain(|v| v.is_finite());
    if settings.value_scale == ScaleMode::Log {
        values.retain(|&v| v > 0.0);
    }

    let (min, max) = get_min_max(&values).ok_or_else(|| {
        AnalysisError::DegenerateInput(format!(
            "no plottable values for a {} axis",
            settings.value_scale
        ))
    })?;

    let ticks = ticks_for(
        settings.value_scale,
        min,
        max,
        settings.desired_linear_ticks,
        true,
    )?;
    Ok(LabeledTicks::new(ticks, LabelFormat::from(settings.metric)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AxisMode, Epoch, MetricKind, TimePeriod};
    use crate::utils::TimeUtils;

    const NOW: i64 = 1_760_000_000_000;

    fn power_law_series(days: i64) -> Vec<Observation> {
        let epoch = Epoch::GENESIS;
        let start = NOW - days * TimeUtils::MS_IN_D;
        (0..days)
            .map(|d| {
                let ts = start + d * TimeUtils::MS_IN_D;
                let age = epoch.age_of(ts) as f64;
                let wobble = 1.0 + 0.05 * ((d as f64) / 40.0).sin();
                Observation::new(ts, 1.0e-17 * age.powf(5.8) * wobble)
            })
            .collect()
    }

    #[test]
    fn test_full_chart() {
        let series = power_law_series(2000);
        let settings = ChartSettings::new(MetricKind::Price, NOW);
        let chart = PowerLawChart::build(&series, &settings).unwrap();

        assert_eq!(chart.points.len(), 2000);
        let bands = chart.bands.as_ref().unwrap();
        assert_eq!(bands.regression.len(), 2000);
        assert!(chart.fit.unwrap().r_squared > 0.9);
        assert!(chart.value_ticks.ticks.major.len() >= 2);
        assert!(chart.value_ticks.labels.iter().all(|l| l.text.starts_with('$')));
        assert!(!chart.time_ticks.labels.is_empty());
        assert!(chart.one_year_low.timestamp >= NOW - 365 * TimeUtils::MS_IN_D);
    }

    #[test]
    fn test_fit_uses_full_history_regardless_of_period() {
        let series = power_law_series(2000);
        let all = PowerLawChart::build(&series, &ChartSettings::new(MetricKind::Price, NOW)).unwrap();
        let one_year = PowerLawChart::build(
            &series,
            &ChartSettings {
                period: TimePeriod::OneYear,
                ..ChartSettings::new(MetricKind::Price, NOW)
            },
        )
        .unwrap();

        assert_eq!(all.fit, one_year.fit);
        assert!(one_year.points.len() <= 366);
        assert_eq!(one_year.bands.unwrap().regression.len(), one_year.points.len());
    }

    #[test]
    fn test_unfittable_series_still_renders() {
        let series = vec![Observation::new(NOW - TimeUtils::MS_IN_D, 42.0)];
        let chart = PowerLawChart::build(&series, &ChartSettings::new(MetricKind::Volume, NOW)).unwrap();
        assert!(chart.fit.is_none());
        assert!(chart.bands.is_none());
        assert_eq!(chart.all_time_high.value, 42.0);
        assert_eq!(chart.one_year_low.value, 42.0);
    }

    #[test]
    fn test_age_axis_and_projection() {
        let series = power_law_series(500);
        let settings = ChartSettings {
            axis: AxisMode::Age,
            time_scale: ScaleMode::Log,
            projection_days: 70,
            ..ChartSettings::new(MetricKind::HashRate, NOW)
        };
        let chart = PowerLawChart::build(&series, &settings).unwrap();
        let bands = chart.bands.unwrap();
        assert_eq!(bands.regression.len(), 500 + 10);
        let last_point_age = chart.points.last().unwrap().x;
        assert_eq!(bands.regression.last().unwrap().x, last_point_age + 70.0);
        assert!(chart.value_ticks.labels.iter().all(|l| l.text.ends_with("H/s")));
    }

    #[test]
    fn test_empty_window_is_empty_series() {
        let series = vec![Observation::new(NOW - 3000 * TimeUtils::MS_IN_D, 1.0)];
        let settings = ChartSettings {
            period: TimePeriod::OneYear,
            ..ChartSettings::new(MetricKind::Price, NOW)
        };
        assert_eq!(PowerLawChart::build(&series, &settings), Err(AnalysisError::EmptySeries));
        assert_eq!(
            PowerLawChart::build(&[], &ChartSettings::new(MetricKind::Price, NOW)),
            Err(AnalysisError::EmptySeries)
        );
    }
}
