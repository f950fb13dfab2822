use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TuneLensApp {
    pub state: AppState,
}

impl Default for TuneLensApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for TuneLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.heading("Open a dataset to explore music trends  (File → Open…)");
                });
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    table::track_table(ui, &self.state);
                    ui.add_space(12.0);
                    charts::top_artists_bar(ui, &self.state);
                    ui.add_space(12.0);
                    charts::top_tracks_bar(ui, &self.state);
                    ui.add_space(12.0);
                    charts::stream_share_pie(ui, &self.state);
                    ui.add_space(12.0);
                    charts::popularity_over_time(ui, &self.state);
                    ui.add_space(12.0);
                    charts::correlation_heatmap(ui, &self.state);
                    ui.add_space(12.0);
                    table::summary_table(ui, &self.state);
                });
        });
    }
}
