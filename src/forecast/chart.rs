//! Maps a forecast onto plot-ready data, independent of any plotting crate.

use crate::{config::PLOT_CONFIG, domain::ForecastResult};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    /// `[index, price]` in the order received.
    pub points: Vec<[f64; 2]>,
    /// Date label for each index.
    pub labels: Vec<String>,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn x_max(&self) -> f64 {
        self.points.len().saturating_sub(1) as f64
    }

    /// Date for an x position. Only whole indices inside the series have one.
    pub fn label_at(&self, x: f64) -> Option<&str> {
        if x < 0.0 || x.fract().abs() > 1e-6 {
            return None;
        }
        self.labels.get(x.round() as usize).map(String::as_str)
    }
}

/// Dates are not re-sorted; the service is trusted to send them in order.
pub fn chart_series(result: &ForecastResult) -> ChartSeries {
    let points: Vec<[f64; 2]> = result
        .predictions
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p.price])
        .collect();
    let labels = result.predictions.iter().map(|p| p.date.clone()).collect();

    let (lo, hi) = points
        .iter()
        .map(|p| p[1])
        .filter(|y| y.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| (lo.min(y), hi.max(y)));

    let (y_min, y_max) = if lo > hi {
        (0.0, 1.0)
    } else {
        let range = hi - lo;
        // A flat line still needs some vertical room.
        let pad = if range > 0.0 {
            range * PLOT_CONFIG.plot_y_padding_pct
        } else {
            (hi.abs() * PLOT_CONFIG.plot_y_padding_pct).max(1.0)
        };
        (lo - pad, hi + pad)
    };

    ChartSeries {
        points,
        labels,
        y_min,
        y_max,
    }
}
