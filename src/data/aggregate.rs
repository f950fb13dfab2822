use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use super::model::{Metric, Track, TrackDataset, METRIC_COUNT};

// ---------------------------------------------------------------------------
// Derived views – pure functions of (dataset, visible indices)
// ---------------------------------------------------------------------------

/// An artist with its summed stream count.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistStreams {
    pub artist: String,
    pub streams: f64,
}

/// A track ranked by view count, with its artist for display context.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTrack {
    pub artist: String,
    pub track: String,
    pub views: Option<f64>,
}

/// One time bucket: all tracks sharing a release date, metrics summed.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeBucket {
    pub date: NaiveDate,
    pub views: f64,
    pub likes: f64,
    pub streams: f64,
}

/// Pairwise Pearson correlations over the seven numeric columns, indexed by
/// [`Metric::ALL`] order. `NAN` marks degenerate pairs (fewer than two
/// pairwise-complete rows, or zero variance).
pub type CorrelationMatrix = [[f64; METRIC_COUNT]; METRIC_COUNT];

/// Descriptive statistics for one numeric column over its non-missing
/// values. Moments are `NAN` when `count` is 0 (std also when `count` is 1).
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSummary {
    pub metric: Metric,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Everything the charts consume, recomputed on every filter change. Plain
/// data, independent of any rendering technology.
#[derive(Debug, Clone, Default)]
pub struct DerivedViews {
    pub top_artists_by_streams: Vec<ArtistStreams>,
    pub top_tracks_by_views: Vec<RankedTrack>,
    pub stream_share: Vec<ArtistStreams>,
    pub time_series: Vec<TimeBucket>,
    pub correlation: Option<CorrelationMatrix>,
    pub summary: Vec<MetricSummary>,
}

impl DerivedViews {
    /// Recompute all views from the filtered row set. An empty `visible`
    /// set yields empty (or all-NAN) views; nothing here panics.
    pub fn compute(dataset: &TrackDataset, visible: &[usize]) -> Self {
        let rows: Vec<&Track> = visible.iter().map(|&i| &dataset.tracks[i]).collect();
        DerivedViews {
            top_artists_by_streams: rank_artists_by_streams(&rows, 10),
            top_tracks_by_views: rank_tracks_by_views(&rows, 10),
            stream_share: rank_artists_by_streams(&rows, 5),
            time_series: time_series(&rows),
            correlation: if rows.is_empty() {
                None
            } else {
                Some(correlation_matrix(&rows))
            },
            summary: summary_statistics(&rows),
        }
    }
}

// ---------------------------------------------------------------------------
// Top-N groupings
// ---------------------------------------------------------------------------

/// Group tracks by artist, sum stream counts (missing sums as 0), and keep
/// the `n` largest groups, sorted non-increasing by sum.
///
/// Groups accumulate in first-seen row order and the sort is stable, so
/// equal sums keep first-seen order. That is the tie-break everywhere a
/// top-N grouping appears.
pub fn rank_artists_by_streams(rows: &[&Track], n: usize) -> Vec<ArtistStreams> {
    let mut order: Vec<ArtistStreams> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for t in rows {
        let slot = *index.entry(t.artist.clone()).or_insert_with(|| {
            order.push(ArtistStreams {
                artist: t.artist.clone(),
                streams: 0.0,
            });
            order.len() - 1
        });
        order[slot].streams += t.stream.unwrap_or(0.0);
    }

    order.sort_by(|a, b| b.streams.total_cmp(&a.streams));
    order.truncate(n);
    order
}

/// Sort tracks non-increasing by view count and keep the first `n`.
/// Missing view counts sort last; the sort is stable so ties keep source
/// order.
pub fn rank_tracks_by_views(rows: &[&Track], n: usize) -> Vec<RankedTrack> {
    let mut ranked: Vec<RankedTrack> = rows
        .iter()
        .map(|t| RankedTrack {
            artist: t.artist.clone(),
            track: t.track.clone(),
            views: t.views,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.views
            .unwrap_or(f64::NEG_INFINITY)
            .total_cmp(&a.views.unwrap_or(f64::NEG_INFINITY))
    });
    ranked.truncate(n);
    ranked
}

// ---------------------------------------------------------------------------
// Time series
// ---------------------------------------------------------------------------

/// Sum views, likes, and streams per release date. The `BTreeMap` keeps the
/// output date-ordered; missing values sum as 0.
pub fn time_series(rows: &[&Track]) -> Vec<TimeBucket> {
    let mut buckets: BTreeMap<NaiveDate, (f64, f64, f64)> = BTreeMap::new();
    for t in rows {
        let entry = buckets.entry(t.release_date).or_insert((0.0, 0.0, 0.0));
        entry.0 += t.views.unwrap_or(0.0);
        entry.1 += t.likes.unwrap_or(0.0);
        entry.2 += t.stream.unwrap_or(0.0);
    }
    buckets
        .into_iter()
        .map(|(date, (views, likes, streams))| TimeBucket {
            date,
            views,
            likes,
            streams,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Correlation
// ---------------------------------------------------------------------------

/// Pearson correlation over pairwise-complete observations: only rows with
/// both values present enter a pair's computation. Returns `NAN` for fewer
/// than two pairs or zero variance on either side.
fn pearson(rows: &[&Track], a: Metric, b: Metric) -> f64 {
    let pairs: Vec<(f64, f64)> = rows
        .iter()
        .filter_map(|t| Some((a.of(t)?, b.of(t)?)))
        .collect();
    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_a = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_b = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    let denom = (var_a * var_b).sqrt();
    if denom == 0.0 {
        f64::NAN
    } else {
        cov / denom
    }
}

/// The full symmetric matrix over [`Metric::ALL`], diagonal pinned to
/// exactly 1.0 where defined.
pub fn correlation_matrix(rows: &[&Track]) -> CorrelationMatrix {
    let mut matrix = [[f64::NAN; METRIC_COUNT]; METRIC_COUNT];
    for (i, a) in Metric::ALL.iter().enumerate() {
        for (j, b) in Metric::ALL.iter().enumerate().skip(i) {
            let r = if i == j {
                let diag = pearson(rows, *a, *b);
                if diag.is_nan() {
                    f64::NAN
                } else {
                    1.0
                }
            } else {
                pearson(rows, *a, *b)
            };
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }
    matrix
}

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

/// Linear-interpolation quantile over an already-sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        len => {
            let pos = q * (len - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            let frac = pos - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}

/// Per-metric descriptive statistics over non-missing values. Sample
/// standard deviation (n−1 denominator).
pub fn summary_statistics(rows: &[&Track]) -> Vec<MetricSummary> {
    Metric::ALL
        .iter()
        .map(|&metric| {
            let mut values: Vec<f64> = rows.iter().filter_map(|t| metric.of(t)).collect();
            values.sort_by(f64::total_cmp);

            let count = values.len();
            let mean = if count == 0 {
                f64::NAN
            } else {
                values.iter().sum::<f64>() / count as f64
            };
            let std = if count < 2 {
                f64::NAN
            } else {
                let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
                (ss / (count - 1) as f64).sqrt()
            };

            MetricSummary {
                metric,
                count,
                mean,
                std,
                min: values.first().copied().unwrap_or(f64::NAN),
                q25: quantile(&values, 0.25),
                median: quantile(&values, 0.5),
                q75: quantile(&values, 0.75),
                max: values.last().copied().unwrap_or(f64::NAN),
            }
        })
        .collect()
}
