use {
    crate::{
        config::PLOT_CONFIG,
        domain::Currency,
        forecast::ChartSeries,
        ui::UI_TEXT,
        utils::{format_grouped, short_date_label},
    },
    eframe::egui::{Ui, Vec2b},
    egui_plot::{Axis, AxisHints, GridMark, HPlacement, Line, Plot, PlotPoint, PlotPoints, VPlacement},
};

/// Whole-number spacing between date labels so roughly `target` of them fit.
fn label_step(span: f64, target: f64) -> f64 {
    (span / target).ceil().max(1.0)
}

fn date_axis(series: &ChartSeries) -> AxisHints<'static> {
    let labels = series.labels.clone();
    AxisHints::new(Axis::X)
        .label(UI_TEXT.plot_x_axis)
        .formatter(move |mark, _range| {
            let x = mark.value;
            if x < 0.0 || x.fract().abs() > 1e-6 {
                return String::new();
            }
            labels
                .get(x.round() as usize)
                .map(|date| short_date_label(date))
                .unwrap_or_default()
        })
        .placement(VPlacement::Bottom)
}

fn price_axis(currency: Currency) -> AxisHints<'static> {
    AxisHints::new(Axis::Y)
        .label(format!("{} ({})", UI_TEXT.plot_y_axis_prefix, currency.code()))
        .formatter(move |mark, _range| format!("{}{}", currency.sign(), format_grouped(mark.value)))
        .placement(HPlacement::Left)
}

/// Tooltip text for a hovered point: `$1,234.50 USD` plus its date.
fn hover_label(series: &ChartSeries, point: &PlotPoint, currency: Currency) -> String {
    let x = point.x.round();
    if x < 0.0 {
        return String::new();
    }
    let Some(&[_, price]) = series.points.get(x as usize) else {
        return String::new();
    };
    let date = series.label_at(x).unwrap_or_default();
    format!(
        "{}\n{}{} {}",
        date,
        currency.sign(),
        format_grouped(price),
        currency.code()
    )
}

pub(crate) fn show_forecast_plot(ui: &mut Ui, symbol: &str, series: &ChartSeries, currency: Currency) {
    let x_max = series.x_max().max(1.0);
    let y_range = series.y_min..=series.y_max;
    let name = format!("{} {}", symbol, UI_TEXT.plot_series_suffix);
    let hover_series = series.clone();

    Plot::new("forecast_plot")
        .height(PLOT_CONFIG.plot_height)
        .custom_x_axes(vec![date_axis(series)])
        .custom_y_axes(vec![price_axis(currency)])
        .label_formatter(move |_, point| hover_label(&hover_series, point, currency))
        .x_grid_spacer(move |input| {
            let (min, max) = input.bounds;
            let step = label_step(max - min, PLOT_CONFIG.x_label_target_count);
            let start = (min / step).ceil().max(0.0) as i64;
            let end = (max / step).floor() as i64;
            (start..=end)
                .map(|i| GridMark {
                    value: i as f64 * step,
                    step_size: step,
                })
                .collect()
        })
        .allow_double_click_reset(false)
        .allow_scroll(false)
        .allow_drag(Vec2b { x: false, y: false })
        .allow_zoom(Vec2b { x: false, y: false })
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(0.0..=x_max);
            plot_ui.set_plot_bounds_y(y_range);
            plot_ui.line(
                Line::new(name, PlotPoints::new(series.points.clone()))
                    .color(PLOT_CONFIG.forecast_line_color)
                    .width(PLOT_CONFIG.forecast_line_width)
                    .fill(series.y_min as f32),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> ChartSeries {
        ChartSeries {
            points: vec![[0.0, 100.0], [1.0, 105.5], [2.0, 1234.5]],
            labels: vec!["2024-01-01".into(), "2024-01-02".into(), "2024-01-03".into()],
            y_min: 90.0,
            y_max: 1300.0,
        }
    }

    #[test]
    fn label_step_is_whole_and_at_least_one() {
        assert_eq!(label_step(3.0, 8.0), 1.0);
        assert_eq!(label_step(29.0, 8.0), 4.0);
        assert_eq!(label_step(90.0, 8.0), 12.0);
    }

    #[test]
    fn hover_label_snaps_to_nearest_point() {
        let text = hover_label(&series(), &PlotPoint::new(1.8, 0.0), Currency::Usd);
        assert_eq!(text, "2024-01-03\n$1,234.50 USD");
    }

    #[test]
    fn hover_label_outside_series_is_empty() {
        assert!(hover_label(&series(), &PlotPoint::new(7.0, 0.0), Currency::Inr).is_empty());
        assert!(hover_label(&series(), &PlotPoint::new(-3.0, 0.0), Currency::Usd).is_empty());
    }

    #[test]
    fn hover_label_just_left_of_first_point_snaps_to_it() {
        let text = hover_label(&series(), &PlotPoint::new(-0.4, 0.0), Currency::Usd);
        assert_eq!(text, "2024-01-01\n$100.00 USD");
    }
}
