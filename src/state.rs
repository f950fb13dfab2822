use crate::data::aggregate::DerivedViews;
use crate::data::filter::{filtered_indices, FilterState};
use crate::data::model::TrackDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is immutable once loaded; the only mutable state is the
/// current filter selection, and every change runs the whole pipeline
/// (filter + all derived views) to completion before the next input.
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<TrackDataset>,

    /// Current artist selection and search text.
    pub filters: FilterState,

    /// Indices of tracks passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Aggregates over the visible tracks (cached).
    pub views: DerivedViews,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            views: DerivedViews::default(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, reset filters, compute initial views.
    pub fn set_dataset(&mut self, dataset: TrackDataset) {
        self.filters = FilterState::default();
        self.visible_indices = (0..dataset.len()).collect();
        self.views = DerivedViews::compute(&dataset, &self.visible_indices);

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Recompute visible indices and derived views after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.filters);
            self.views = DerivedViews::compute(ds, &self.visible_indices);
        }
    }

    /// Set the artist filter; `None` means "All".
    pub fn select_artist(&mut self, artist: Option<String>) {
        self.filters.artist = artist;
        self.refilter();
    }

    /// Drop all filter constraints.
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
        self.refilter();
    }
}
