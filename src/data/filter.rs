use super::model::TrackDataset;

// ---------------------------------------------------------------------------
// Filter predicate: artist selection + free-text search
// ---------------------------------------------------------------------------

/// The current filter selections, owned by the UI and passed by reference
/// into [`filtered_indices`] on every interaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Selected artist; `None` is the "All" sentinel (no constraint).
    pub artist: Option<String>,
    /// Free-text query over track and album titles; empty means no constraint.
    pub search: String,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.artist.is_none() && self.search.is_empty()
    }
}

/// Return indices of tracks that pass both filters.
///
/// * Artist filter: exact, case-sensitive equality against the raw artist
///   text. Skipped when no artist is selected.
/// * Search filter: case-insensitive substring match against the track
///   title OR the album title. Skipped when the query is empty.
///
/// The two compose as a logical AND. The result is always a subset of the
/// dataset's row indices, in source order; the dataset itself is never
/// mutated.
pub fn filtered_indices(dataset: &TrackDataset, filters: &FilterState) -> Vec<usize> {
    let query = filters.search.to_lowercase();

    dataset
        .tracks
        .iter()
        .enumerate()
        .filter(|(_, t)| {
            if let Some(artist) = &filters.artist {
                if t.artist != *artist {
                    return false;
                }
            }
            if !query.is_empty()
                && !t.track.to_lowercase().contains(&query)
                && !t.album.to_lowercase().contains(&query)
            {
                return false;
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}
