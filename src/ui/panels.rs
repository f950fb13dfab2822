use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: artist picker and free-text search.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    let artists = match &state.dataset {
        Some(ds) => ds.artists.clone(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // ---- Artist selector ----
    ui.strong("Artist");
    let selected_label = state
        .filters
        .artist
        .clone()
        .unwrap_or_else(|| "All".to_string());
    egui::ComboBox::from_id_salt("artist_filter")
        .selected_text(selected_label)
        .width(ui.available_width() * 0.9)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.filters.artist.is_none(), "All")
                .clicked()
            {
                state.select_artist(None);
            }
            for artist in &artists {
                let is_selected = state.filters.artist.as_deref() == Some(artist);
                if ui.selectable_label(is_selected, artist).clicked() {
                    state.select_artist(Some(artist.clone()));
                }
            }
        });

    ui.add_space(8.0);

    // ---- Search box ----
    ui.strong("Search Track or Album");
    let response = ui.text_edit_singleline(&mut state.filters.search);
    if response.changed() {
        state.refilter();
    }

    ui.add_space(8.0);

    let can_reset = !state.filters.is_empty();
    if ui
        .add_enabled(can_reset, egui::Button::new("Reset filters"))
        .clicked()
    {
        state.reset_filters();
    }

    ui.separator();
    ui.label(format!(
        "{} of {} tracks match",
        state.visible_indices.len(),
        state.dataset.as_ref().map_or(0, |ds| ds.len())
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} tracks loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if state.loading {
            ui.separator();
            ui.spinner();
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open music data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} tracks by {} artists",
                    dataset.len(),
                    dataset.artists.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e}"));
                state.loading = false;
            }
        }
    }
}
