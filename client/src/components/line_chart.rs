//! SVG line chart with an optional right-hand axis.

use leptos::prelude::*;

use crate::state::analytics::{Axis, ChartData};
use crate::util::chart::{Plot, label_stride, tick_label, ticks};

const TICK_STEPS: usize = 4;
const MAX_X_LABELS: usize = 8;

#[component]
pub fn LineChart(
    title: &'static str,
    #[prop(into)] data: Signal<ChartData>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="panel chart">
            <h2 class="panel__title">{title}</h2>
            {move || {
                if loading.get() {
                    return view! { <p class="panel__empty">"Loading chart..."</p> }.into_any();
                }
                let data = data.get();
                if data.is_empty() {
                    return view! { <p class="panel__empty">"No data available for this period"</p> }.into_any();
                }
                chart_svg(&data).into_any()
            }}
        </div>
    }
}

fn coord(value: f64) -> String {
    format!("{value:.1}")
}

fn chart_svg(data: &ChartData) -> impl IntoView {
    let plot = Plot::default();
    let left_ticks = ticks(data.left_max, TICK_STEPS);
    let grid = left_ticks
        .iter()
        .map(|value| {
            let y = plot.y_at(*value, data.left_max);
            view! {
                <line class="chart__grid" x1=coord(plot.left) x2=coord(plot.right_edge()) y1=coord(y) y2=coord(y)></line>
                <text class="chart__tick" x=coord(plot.left - 6.0) y=coord(y + 4.0) text-anchor="end">
                    {tick_label(*value)}
                </text>
            }
        })
        .collect_view();
    let right_axis = data.right_max.map(|max| {
        ticks(max, TICK_STEPS)
            .into_iter()
            .map(|value| {
                let y = plot.y_at(value, max);
                view! {
                    <text class="chart__tick" x=coord(plot.right_edge() + 6.0) y=coord(y + 4.0) text-anchor="start">
                        {tick_label(value)}
                    </text>
                }
            })
            .collect_view()
    });
    let count = data.labels.len();
    let stride = label_stride(count, MAX_X_LABELS);
    let x_labels = data
        .labels
        .iter()
        .enumerate()
        .filter(|(i, _)| i % stride == 0)
        .map(|(i, label)| {
            view! {
                <text class="chart__tick" x=coord(plot.x_at(i, count)) y=coord(plot.height - 8.0) text-anchor="middle">
                    {label.clone()}
                </text>
            }
        })
        .collect_view();
    let lines = data
        .series
        .iter()
        .map(|series| {
            let max = data.max_for(series.axis);
            view! {
                <polyline
                    class="chart__line"
                    fill="none"
                    stroke=series.color
                    stroke-width="2"
                    stroke-dasharray=series.dashed.then_some("6 4")
                    points=plot.points(&series.values, max)
                ></polyline>
            }
        })
        .collect_view();
    let legend = data
        .series
        .iter()
        .map(|series| {
            let suffix = if series.axis == Axis::Right { " (right axis)" } else { "" };
            view! {
                <li class="chart__legend-item">
                    <span class="chart__swatch" style=format!("background:{}", series.color)></span>
                    {series.label}
                    {suffix}
                </li>
            }
        })
        .collect_view();

    view! {
        <svg class="chart__svg" viewBox=plot.view_box() preserveAspectRatio="none" role="img">
            {grid}
            {right_axis}
            {x_labels}
            {lines}
        </svg>
        <ul class="chart__legend">{legend}</ul>
    }
}
