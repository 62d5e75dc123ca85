//! Line chart for the explorer's citation series, drawn as inline SVG.

use dioxus::prelude::*;

use crate::core::sample::CitationChartData;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 300.0;
const PAD_LEFT: f64 = 44.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 32.0;

/// Map `values` onto the plot area: evenly spaced along x, scaled against
/// `y_max` along y (SVG y grows downwards).
pub fn plot_points(values: &[f64], y_max: f64) -> Vec<(f64, f64)> {
    let plot_w = WIDTH - PAD_LEFT - PAD_RIGHT;
    let plot_h = HEIGHT - PAD_TOP - PAD_BOTTOM;
    let step = if values.len() > 1 {
        plot_w / (values.len() - 1) as f64
    } else {
        0.0
    };
    let scale = if y_max > 0.0 { plot_h / y_max } else { 0.0 };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = PAD_LEFT + step * i as f64;
            let y = PAD_TOP + plot_h - v.clamp(0.0, y_max.max(0.0)) * scale;
            (x, y)
        })
        .collect()
}

fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

struct Tick {
    y: String,
    text_y: String,
    label: String,
}

struct AxisLabel {
    x: String,
    label: &'static str,
}

struct Line {
    name: &'static str,
    color: &'static str,
    points: String,
    dots: Vec<(String, String)>,
}

#[component]
pub fn CitationChart(data: CitationChartData) -> Element {
    let plot_h = HEIGHT - PAD_TOP - PAD_BOTTOM;
    let ticks: Vec<Tick> = if data.y_step > 0.0 && data.y_max > 0.0 {
        let count = (data.y_max / data.y_step).floor() as usize;
        (0..=count)
            .map(|i| {
                let value = data.y_step * i as f64;
                let y = PAD_TOP + plot_h - value / data.y_max * plot_h;
                Tick {
                    y: format!("{y:.1}"),
                    text_y: format!("{:.1}", y + 4.0),
                    label: format!("{value:.0}"),
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    let baseline = vec![0.0; data.labels.len()];
    let axis_labels: Vec<AxisLabel> = plot_points(&baseline, data.y_max)
        .into_iter()
        .zip(data.labels.iter().copied())
        .map(|((x, _), label)| AxisLabel {
            x: format!("{x:.1}"),
            label,
        })
        .collect();

    let lines: Vec<Line> = data
        .series
        .iter()
        .map(|s| {
            let points = plot_points(&s.values, data.y_max);
            Line {
                name: s.label,
                color: s.color,
                points: polyline(&points),
                dots: points
                    .iter()
                    .map(|(x, y)| (format!("{x:.1}"), format!("{y:.1}")))
                    .collect(),
            }
        })
        .collect();

    let view_box = format!("0 0 {WIDTH} {HEIGHT}");
    let grid_x1 = format!("{PAD_LEFT}");
    let grid_x2 = format!("{}", WIDTH - PAD_RIGHT);
    let tick_x = format!("{}", PAD_LEFT - 8.0);
    let label_y = format!("{}", HEIGHT - 8.0);

    rsx! {
        div { class: "chart-container",
            svg { class: "citation-chart", view_box: "{view_box}",
                for tick in ticks {
                    g { key: "{tick.label}",
                        line {
                            x1: "{grid_x1}",
                            x2: "{grid_x2}",
                            y1: "{tick.y}",
                            y2: "{tick.y}",
                            stroke: "#e0e0e0",
                        }
                        text {
                            x: "{tick_x}",
                            y: "{tick.text_y}",
                            text_anchor: "end",
                            font_size: "12",
                            "{tick.label}"
                        }
                    }
                }
                for axis in axis_labels {
                    text {
                        key: "{axis.label}",
                        x: "{axis.x}",
                        y: "{label_y}",
                        text_anchor: "middle",
                        font_size: "12",
                        "{axis.label}"
                    }
                }
                for line in lines {
                    g { key: "{line.name}",
                        polyline {
                            points: "{line.points}",
                            fill: "none",
                            stroke: "{line.color}",
                            stroke_width: "3",
                        }
                        for (i, (cx, cy)) in line.dots.into_iter().enumerate() {
                            circle { key: "{i}", cx: "{cx}", cy: "{cy}", r: "5", fill: "{line.color}" }
                        }
                    }
                }
            }
            div { class: "chart-legend",
                for series in data.series.iter() {
                    span { key: "{series.label}", class: "chart-legend__item",
                        span { class: "chart-legend__swatch", style: "background:{series.color}" }
                        "{series.label}"
                    }
                }
            }
        }
    }
}
