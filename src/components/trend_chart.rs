//! Trend Chart Component
//!
//! Dual-axis time-series chart using HTML5 Canvas: revenue on the left
//! axis, appointment counts on the right axis, one point per day.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::format::format_short_date;
use crate::state::global::{DailyMetric, GlobalState};

/// Revenue series color (left axis)
const REVENUE_COLOR: &str = "#3b82f6";
/// Appointments series color (right axis)
const APPOINTMENTS_COLOR: &str = "#10b981";

/// Most x-axis labels drawn before thinning kicks in (90-day windows)
const MAX_X_LABELS: usize = 10;

/// Dual-axis trend chart component
#[component]
pub fn TrendChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever a new payload lands
    create_effect(move |_| {
        let payload = state.payload.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_trend_chart(&canvas, &payload.metrics_history);
        }
    });

    view! {
        <div class="bg-white p-6 rounded-lg shadow-sm">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">
                "Tendência de Receita e Agendamentos"
            </h3>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="320"
                class="w-full rounded-lg"
            />
            <ChartLegend />
        </div>
    }
}

/// Legend for the two fixed series
#[component]
fn ChartLegend() -> impl IntoView {
    let entries = [("Receita (R$)", REVENUE_COLOR), ("Agendamentos", APPOINTMENTS_COLOR)];

    view! {
        <div class="flex justify-center flex-wrap gap-6 mt-4">
            {entries.into_iter().map(|(label, color)| view! {
                <div class="flex items-center space-x-2">
                    <div
                        class="w-3 h-3 rounded-full"
                        style=format!("background-color: {}", color)
                    />
                    <span class="text-sm text-gray-600">{label}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

/// Upper bound of an axis: the series maximum plus headroom, never zero.
fn axis_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0_f64, f64::max);
    if max <= 0.0 {
        1.0
    } else {
        max * 1.1
    }
}

/// Draw every Nth x label so long windows stay readable.
fn label_step(points: usize, max_labels: usize) -> usize {
    points.div_ceil(max_labels).max(1)
}

/// Draw the chart on canvas
fn draw_trend_chart(canvas: &HtmlCanvasElement, history: &[DailyMetric]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins leave room for an axis on each side
    let margin_left = 64.0;
    let margin_right = 48.0;
    let margin_top = 16.0;
    let margin_bottom = 36.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let revenue_max = axis_max(history.iter().map(|m| m.total_revenue));
    let appointments_max = axis_max(history.iter().map(|m| f64::from(m.total_appointments)));

    // Grid lines with a label on each side
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    for i in 0..=4 {
        let y = margin_top + (f64::from(i) / 4.0) * chart_height;

        ctx.set_stroke_style(&"#e5e7eb".into());
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let fraction = 1.0 - f64::from(i) / 4.0;

        ctx.set_fill_style(&REVENUE_COLOR.into());
        let _ = ctx.fill_text(&format!("{:.0}", revenue_max * fraction), 4.0, y + 4.0);

        ctx.set_fill_style(&APPOINTMENTS_COLOR.into());
        let _ = ctx.fill_text(
            &format!("{:.0}", appointments_max * fraction),
            width - margin_right + 8.0,
            y + 4.0,
        );
    }

    if history.is_empty() {
        // Empty window: axes stay up, no series, no error
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text(
            "Não há dados neste período",
            width / 2.0 - 80.0,
            height / 2.0,
        );
        return;
    }

    let x_at = |index: usize| -> f64 {
        if history.len() == 1 {
            margin_left + chart_width / 2.0
        } else {
            margin_left + (index as f64 / (history.len() - 1) as f64) * chart_width
        }
    };

    draw_series(
        &ctx,
        history,
        |m| m.total_revenue,
        revenue_max,
        REVENUE_COLOR,
        margin_top,
        chart_height,
        &x_at,
    );
    draw_series(
        &ctx,
        history,
        |m| f64::from(m.total_appointments),
        appointments_max,
        APPOINTMENTS_COLOR,
        margin_top,
        chart_height,
        &x_at,
    );

    // X-axis day/month labels, thinned on long windows
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("12px sans-serif");

    let step = label_step(history.len(), MAX_X_LABELS);
    for (i, metric) in history.iter().enumerate() {
        if i % step != 0 {
            continue;
        }
        let _ = ctx.fill_text(&format_short_date(metric.date), x_at(i) - 14.0, height - 12.0);
    }
}

/// Draw one polyline with dots, scaled to its own axis.
#[allow(clippy::too_many_arguments)]
fn draw_series(
    ctx: &CanvasRenderingContext2d,
    history: &[DailyMetric],
    value: impl Fn(&DailyMetric) -> f64,
    max: f64,
    color: &str,
    margin_top: f64,
    chart_height: f64,
    x_at: &dyn Fn(usize) -> f64,
) {
    let y_at = |v: f64| margin_top + ((max - v) / max) * chart_height;

    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();

    for (i, metric) in history.iter().enumerate() {
        let x = x_at(i);
        let y = y_at(value(metric));
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    ctx.set_fill_style(&color.into());
    for (i, metric) in history.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(
            x_at(i),
            y_at(value(metric)),
            3.0,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        ctx.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_max_pads_the_series_peak() {
        let values = [120.0, 80.0, 40.0];
        assert_eq!(axis_max(values.into_iter()), 120.0 * 1.1);
    }

    #[test]
    fn axis_max_of_empty_or_zero_series_is_one() {
        assert_eq!(axis_max(std::iter::empty()), 1.0);
        assert_eq!(axis_max([0.0, 0.0].into_iter()), 1.0);
    }

    #[test]
    fn label_step_keeps_weekly_windows_dense() {
        assert_eq!(label_step(7, MAX_X_LABELS), 1);
        assert_eq!(label_step(30, MAX_X_LABELS), 3);
        assert_eq!(label_step(90, MAX_X_LABELS), 9);
        assert_eq!(label_step(0, MAX_X_LABELS), 1);
    }
}
