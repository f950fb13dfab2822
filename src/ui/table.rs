use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Data table
// ---------------------------------------------------------------------------

const TRACK_COLUMNS: [&str; 7] = [
    "Artist", "Track", "Album", "Views", "Likes", "Comments", "Stream",
];

/// Render the filtered tracks as a scrollable table.
pub fn track_table(ui: &mut Ui, state: &AppState) {
    ui.heading("Music Data Table");

    let Some(ds) = &state.dataset else { return };
    if state.visible_indices.is_empty() {
        ui.label("No data for the current filters.");
        return;
    }

    ui.push_id("track_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(300.0)
            .column(Column::auto().at_least(140.0))
            .column(Column::auto().at_least(180.0))
            .column(Column::auto().at_least(160.0))
            .columns(Column::auto().at_least(80.0), 4)
            .header(20.0, |mut header| {
                for title in TRACK_COLUMNS {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, state.visible_indices.len(), |mut row| {
                    let t = &ds.tracks[state.visible_indices[row.index()]];
                    row.col(|ui| {
                        ui.label(&t.artist);
                    });
                    row.col(|ui| {
                        ui.label(&t.track);
                    });
                    row.col(|ui| {
                        ui.label(&t.album);
                    });
                    for value in [t.views, t.likes, t.comments, t.stream] {
                        row.col(|ui| {
                            ui.label(format_count(value));
                        });
                    }
                });
            });
    });
}

// ---------------------------------------------------------------------------
// Statistical summary table
// ---------------------------------------------------------------------------

/// Render the per-metric descriptive statistics.
pub fn summary_table(ui: &mut Ui, state: &AppState) {
    ui.heading("Statistical Summary of Numeric Data");

    if state.visible_indices.is_empty() {
        ui.label("No data for the current filters.");
        return;
    }

    ui.push_id("summary_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(110.0))
            .columns(Column::auto().at_least(80.0), 8)
            .header(20.0, |mut header| {
                for title in ["", "count", "mean", "std", "min", "25%", "50%", "75%", "max"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for stats in &state.views.summary {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.strong(stats.metric.label());
                        });
                        row.col(|ui| {
                            ui.label(stats.count.to_string());
                        });
                        for value in [
                            stats.mean, stats.std, stats.min, stats.q25, stats.median,
                            stats.q75, stats.max,
                        ] {
                            row.col(|ui| {
                                ui.label(format_stat(value));
                            });
                        }
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Cell formatting
// ---------------------------------------------------------------------------

/// Counts render without decimals; missing cells as "n/a".
pub fn format_count(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.0}"),
        None => "n/a".to_string(),
    }
}

/// Summary cells keep two decimals; NaN (degenerate) renders as "n/a".
fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{value:.2}")
    }
}
