use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Metric – one of the seven numeric columns
// ---------------------------------------------------------------------------

/// A numeric column of the dataset. Drives the correlation matrix and the
/// statistical summary, which iterate [`Metric::ALL`] in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Views,
    Likes,
    Comments,
    Stream,
    Danceability,
    Energy,
    Tempo,
}

pub const METRIC_COUNT: usize = 7;

impl Metric {
    pub const ALL: [Metric; METRIC_COUNT] = [
        Metric::Views,
        Metric::Likes,
        Metric::Comments,
        Metric::Stream,
        Metric::Danceability,
        Metric::Energy,
        Metric::Tempo,
    ];

    /// Column header as it appears in the source file.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Views => "Views",
            Metric::Likes => "Likes",
            Metric::Comments => "Comments",
            Metric::Stream => "Stream",
            Metric::Danceability => "Danceability",
            Metric::Energy => "Energy",
            Metric::Tempo => "Tempo",
        }
    }

    /// The (possibly missing) value of this metric on a track.
    pub fn of(self, track: &Track) -> Option<f64> {
        match self {
            Metric::Views => track.views,
            Metric::Likes => track.likes,
            Metric::Comments => track.comments,
            Metric::Stream => track.stream,
            Metric::Danceability => track.danceability,
            Metric::Energy => track.energy,
            Metric::Tempo => track.tempo,
        }
    }
}

// ---------------------------------------------------------------------------
// Track – one row of the source table
// ---------------------------------------------------------------------------

/// A single track (one row of the source table).
///
/// Numeric fields are `None` when the source cell could not be coerced to a
/// number; the loader never drops a row over a bad cell. `release_date` is
/// synthetic (consecutive days from a fixed epoch) when the source file has
/// no `Release Date` column.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub artist: String,
    pub track: String,
    pub album: String,
    pub views: Option<f64>,
    pub likes: Option<f64>,
    pub comments: Option<f64>,
    pub stream: Option<f64>,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub tempo: Option<f64>,
    pub release_date: NaiveDate,
}

// ---------------------------------------------------------------------------
// TrackDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with a pre-computed distinct-artist index.
#[derive(Debug, Clone)]
pub struct TrackDataset {
    /// All tracks (rows), in source-file order.
    pub tracks: Vec<Track>,
    /// Sorted distinct artist names; backs the artist picker.
    pub artists: Vec<String>,
}

impl TrackDataset {
    /// Build the artist index from the loaded tracks.
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        let mut artists: Vec<String> = tracks.iter().map(|t| t.artist.clone()).collect();
        artists.sort();
        artists.dedup();
        TrackDataset { tracks, artists }
    }

    /// Number of tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(artist: &str, title: &str, stream: Option<f64>) -> Track {
        Track {
            artist: artist.to_string(),
            track: title.to_string(),
            album: String::new(),
            views: None,
            likes: None,
            comments: None,
            stream,
            danceability: None,
            energy: None,
            tempo: None,
            release_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        }
    }

    #[test]
    fn artist_index_is_sorted_and_distinct() {
        let ds = TrackDataset::from_tracks(vec![
            track("Muse", "a", None),
            track("Abba", "b", None),
            track("Muse", "c", None),
        ]);
        assert_eq!(ds.artists, vec!["Abba".to_string(), "Muse".to_string()]);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn metric_accessor_matches_fields() {
        let mut t = track("A", "X", Some(5.0));
        t.tempo = Some(120.0);
        assert_eq!(Metric::Stream.of(&t), Some(5.0));
        assert_eq!(Metric::Tempo.of(&t), Some(120.0));
        assert_eq!(Metric::Views.of(&t), None);
        assert_eq!(Metric::ALL.len(), METRIC_COUNT);
    }
}
