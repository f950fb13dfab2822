use chrono::{Days, NaiveDate};
use eframe::egui::{self, Align2, Color32, FontId, Rect, Sense, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Polygon};

use crate::color::{correlation_color, generate_palette};
use crate::data::model::Metric;
use crate::state::AppState;

fn no_data(ui: &mut Ui) {
    ui.label("No data for the current filters.");
}

// ---------------------------------------------------------------------------
// Bar charts
// ---------------------------------------------------------------------------

/// Top-10 artists by total streams.
pub fn top_artists_bar(ui: &mut Ui, state: &AppState) {
    ui.heading("Top 10 Artists by Streams");

    let data = &state.views.top_artists_by_streams;
    if data.is_empty() {
        no_data(ui);
        return;
    }

    let palette = generate_palette(data.len());
    let bars: Vec<Bar> = data
        .iter()
        .enumerate()
        .map(|(i, a)| {
            Bar::new(i as f64, a.streams)
                .name(&a.artist)
                .fill(palette[i])
        })
        .collect();
    let names: Vec<String> = data.iter().map(|a| a.artist.clone()).collect();

    Plot::new("top_artists_bar")
        .height(280.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .y_axis_label("Total Streams")
        .x_axis_formatter(move |mark, _range| axis_name(&names, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Top-10 most viewed tracks; the bar name carries the artist for hover.
pub fn top_tracks_bar(ui: &mut Ui, state: &AppState) {
    ui.heading("Most Viewed Songs");

    let data = &state.views.top_tracks_by_views;
    if data.is_empty() {
        no_data(ui);
        return;
    }

    let palette = generate_palette(data.len());
    let bars: Vec<Bar> = data
        .iter()
        .enumerate()
        .map(|(i, t)| {
            Bar::new(i as f64, t.views.unwrap_or(0.0))
                .name(format!("{} ({})", t.track, t.artist))
                .fill(palette[i])
        })
        .collect();
    let names: Vec<String> = data.iter().map(|t| t.track.clone()).collect();

    Plot::new("top_tracks_bar")
        .height(280.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .y_axis_label("Views")
        .x_axis_formatter(move |mark, _range| axis_name(&names, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Categorical axis labels: only integer positions inside the name list
/// get a label.
fn axis_name(names: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    names
        .get(rounded as usize)
        .cloned()
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Stream-share pie
// ---------------------------------------------------------------------------

/// Top-5 artists as pie wedges. The share is visual: wedge angles are
/// proportional to summed streams; no percentage is computed here.
pub fn stream_share_pie(ui: &mut Ui, state: &AppState) {
    ui.heading("Streams Distribution by Artist (Top 5)");

    let data = &state.views.stream_share;
    let total: f64 = data.iter().map(|a| a.streams).sum();
    if data.is_empty() || total <= 0.0 {
        no_data(ui);
        return;
    }

    let palette = generate_palette(data.len());

    Plot::new("stream_share_pie")
        .height(280.0)
        .data_aspect(1.0)
        .show_axes([false, false])
        .show_grid(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            let mut start_angle = 0.0_f64;
            for (i, share) in data.iter().enumerate() {
                let sweep = std::f64::consts::TAU * share.streams / total;
                let wedge = pie_wedge(start_angle, start_angle + sweep);
                plot_ui.polygon(
                    Polygon::new(wedge)
                        .fill_color(palette[i].gamma_multiply(0.85))
                        .name(&share.artist),
                );
                start_angle += sweep;
            }
        });
}

/// Unit-circle wedge between two angles, as a closed polygon.
fn pie_wedge(from: f64, to: f64) -> PlotPoints<'static> {
    let segments = ((to - from) / 0.05).ceil().max(2.0) as usize;
    let mut points = vec![[0.0, 0.0]];
    for s in 0..=segments {
        let angle = from + (to - from) * s as f64 / segments as f64;
        points.push([angle.cos(), angle.sin()]);
    }
    PlotPoints::new(points)
}

// ---------------------------------------------------------------------------
// Time series
// ---------------------------------------------------------------------------

/// Views, likes, and streams summed per release date.
pub fn popularity_over_time(ui: &mut Ui, state: &AppState) {
    ui.heading("Music Popularity Over Time");

    let series = &state.views.time_series;
    if series.is_empty() {
        no_data(ui);
        return;
    }

    let origin = series[0].date;
    let day = |date: NaiveDate| (date - origin).num_days() as f64;

    let lines = [
        ("Views", Color32::LIGHT_BLUE, series
            .iter()
            .map(|b| [day(b.date), b.views])
            .collect::<Vec<_>>()),
        ("Likes", Color32::LIGHT_GREEN, series
            .iter()
            .map(|b| [day(b.date), b.likes])
            .collect::<Vec<_>>()),
        ("Stream", Color32::LIGHT_RED, series
            .iter()
            .map(|b| [day(b.date), b.streams])
            .collect::<Vec<_>>()),
    ];

    Plot::new("popularity_over_time")
        .height(280.0)
        .legend(Legend::default())
        .y_axis_label("Count")
        .x_axis_formatter(move |mark, _range| {
            let days = mark.value.round();
            if days < 0.0 || (mark.value - days).abs() > 1e-6 {
                return String::new();
            }
            (origin + Days::new(days as u64)).format("%Y-%m-%d").to_string()
        })
        .show(ui, |plot_ui| {
            for (name, color, points) in lines {
                plot_ui.line(
                    Line::new(PlotPoints::new(points))
                        .name(name)
                        .color(color)
                        .width(1.5),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Correlation heatmap
// ---------------------------------------------------------------------------

const CELL: f32 = 56.0;
const LABEL_W: f32 = 100.0;
const LABEL_H: f32 = 22.0;

/// 7x7 Pearson heatmap over the numeric columns, drawn with the painter.
/// Degenerate (NaN) cells render grey with an "n/a" label.
pub fn correlation_heatmap(ui: &mut Ui, state: &AppState) {
    ui.heading("Correlation Between Music Features");

    let Some(matrix) = &state.views.correlation else {
        no_data(ui);
        return;
    };

    let n = Metric::ALL.len();
    let size = egui::vec2(LABEL_W + CELL * n as f32, LABEL_H + CELL * n as f32);
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    let font = FontId::proportional(12.0);
    let text_color = ui.visuals().text_color();

    for (i, metric) in Metric::ALL.iter().enumerate() {
        // Row label (left) and column label (top).
        painter.text(
            egui::pos2(
                rect.left() + LABEL_W - 8.0,
                rect.top() + LABEL_H + (i as f32 + 0.5) * CELL,
            ),
            Align2::RIGHT_CENTER,
            metric.label(),
            font.clone(),
            text_color,
        );
        painter.text(
            egui::pos2(
                rect.left() + LABEL_W + (i as f32 + 0.5) * CELL,
                rect.top() + LABEL_H - 4.0,
            ),
            Align2::CENTER_BOTTOM,
            metric.label(),
            font.clone(),
            text_color,
        );

        for j in 0..n {
            let r = matrix[i][j];
            let cell_rect = Rect::from_min_size(
                egui::pos2(
                    rect.left() + LABEL_W + j as f32 * CELL,
                    rect.top() + LABEL_H + i as f32 * CELL,
                ),
                egui::vec2(CELL, CELL),
            );
            painter.rect_filled(
                cell_rect.shrink(1.0),
                egui::CornerRadius::same(2),
                correlation_color(r),
            );

            let label = if r.is_nan() {
                "n/a".to_string()
            } else {
                format!("{r:.2}")
            };
            let cell_text = if r.is_nan() || r.abs() >= 0.55 {
                Color32::WHITE
            } else {
                Color32::BLACK
            };
            painter.text(
                cell_rect.center(),
                Align2::CENTER_CENTER,
                label,
                font.clone(),
                cell_text,
            );
        }
    }
}
