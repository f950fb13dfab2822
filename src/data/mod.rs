/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, coerce numerics → TrackDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ TrackDataset  │  Vec<Track>, distinct-artist index
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  artist equality AND text search → visible indices
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ aggregate   │  top-N, time series, correlation, summary
///   └────────────┘
/// ```
///
/// Everything below `loader` is pure: the loaded dataset is immutable and
/// each derivation is a function of (dataset, filter state).

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
