use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use chrono::NaiveDate;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Track, TrackDataset};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal load failures. Per-cell coercion failures are *not* errors: a cell
/// that cannot be parsed as a number becomes a missing value instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("row {row}: {message}")]
    Row { row: usize, message: String },
    #[error("malformed parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
    #[error("malformed parquet data: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

/// Column headers the source file must carry; `Release Date` is optional.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "Artist",
    "Track",
    "Album",
    "Views",
    "Likes",
    "Comments",
    "Stream",
    "Danceability",
    "Energy",
    "Tempo",
];

/// Epoch for synthetic release dates.
const SYNTHETIC_EPOCH: (i32, u32, u32) = (2020, 1, 1);

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a track dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the required columns (primary format)
/// * `.json`    – `[{ "Artist": ..., "Views": ..., ... }, ...]`
/// * `.parquet` – flat scalar columns with the same names
pub fn load_file(path: &Path) -> Result<TrackDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Numeric coercion and synthetic dates
// ---------------------------------------------------------------------------

/// Coerce a raw cell to a number. Anything unparseable (including the `N/A`
/// style placeholders the source data carries) becomes missing, never an
/// error. Mirrors a lossy `to_numeric(errors="coerce")`, widened to accept
/// well-formed thousands grouping ("1,234,567"); any other comma-bearing
/// cell is missing.
fn coerce_numeric(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if s.contains(',') {
        if !is_thousands_grouped(s) {
            return None;
        }
        return s.replace(',', "").parse::<f64>().ok().filter(|v| v.is_finite());
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Commas are only accepted as thousands separators: a 1-3 digit leading
/// group, then groups of exactly three digits, with an optional all-digit
/// fraction ("1,234" or "-12,345.67", but never "1,2" or "12,34,567").
fn is_thousands_grouped(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    let (int_part, frac) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    if let Some(f) = frac {
        if f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }

    let mut groups = int_part.split(',');
    let first = groups.next().unwrap_or("");
    if first.is_empty() || first.len() > 3 || !first.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let mut seen_group = false;
    for group in groups {
        seen_group = true;
        if group.len() != 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }
    seen_group
}

/// Synthetic release date for a row: consecutive calendar days from the
/// epoch, one per row in source order. A pure function of the row index so
/// the sequence is reproducible across runs. These are placeholders for
/// missing temporal data, not real release dates.
pub fn synthetic_date(index: usize) -> NaiveDate {
    let (y, m, d) = SYNTHETIC_EPOCH;
    NaiveDate::from_ymd_opt(y, m, d).unwrap() + chrono::Days::new(index as u64)
}

/// Resolve a row's release date from an optional raw cell, falling back to
/// the synthetic sequence when the column is absent or the cell is
/// unparseable.
fn resolve_date(raw: Option<&str>, index: usize, fallbacks: &mut usize) -> NaiveDate {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|_| {
            *fallbacks += 1;
            synthetic_date(index)
        }),
        None => synthetic_date(index),
    }
}

/// Tracks how many cells failed coercion per column, for a single summary
/// warning instead of one log line per bad cell.
#[derive(Default)]
struct CoercionLog {
    failures: HashMap<&'static str, usize>,
}

impl CoercionLog {
    fn coerce(&mut self, column: &'static str, raw: &str) -> Option<f64> {
        let value = coerce_numeric(raw);
        if value.is_none() && !raw.trim().is_empty() {
            *self.failures.entry(column).or_insert(0) += 1;
        }
        value
    }

    /// Count columns are non-negative-or-missing; a negative cell is as
    /// bad as a non-numeric one.
    fn coerce_count(&mut self, column: &'static str, raw: &str) -> Option<f64> {
        match self.coerce(column, raw) {
            Some(v) if v < 0.0 => {
                *self.failures.entry(column).or_insert(0) += 1;
                None
            }
            other => other,
        }
    }

    fn report(&self) {
        for (column, count) in &self.failures {
            log::warn!("{count} value(s) in column '{column}' were not numeric; treated as missing");
        }
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Raw CSV record: every numeric column read as text first, coerced after.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Artist")]
    artist: String,
    #[serde(rename = "Track")]
    track: String,
    #[serde(rename = "Album")]
    album: String,
    #[serde(rename = "Views")]
    views: String,
    #[serde(rename = "Likes")]
    likes: String,
    #[serde(rename = "Comments")]
    comments: String,
    #[serde(rename = "Stream")]
    stream: String,
    #[serde(rename = "Danceability")]
    danceability: String,
    #[serde(rename = "Energy")]
    energy: String,
    #[serde(rename = "Tempo")]
    tempo: String,
    #[serde(rename = "Release Date")]
    release_date: Option<String>,
}

fn load_csv(path: &Path) -> Result<TrackDataset, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        if e.is_io_error() {
            match e.into_kind() {
                csv::ErrorKind::Io(io) => LoadError::Io {
                    path: path.to_path_buf(),
                    source: io,
                },
                _ => unreachable!("is_io_error() guarantees an Io kind"),
            }
        } else {
            LoadError::Csv(e)
        }
    })?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required.to_string()));
        }
    }

    let mut coercions = CoercionLog::default();
    let mut date_fallbacks = 0usize;
    let mut tracks = Vec::new();

    for (index, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result?;
        tracks.push(Track {
            views: coercions.coerce_count("Views", &raw.views),
            likes: coercions.coerce_count("Likes", &raw.likes),
            comments: coercions.coerce_count("Comments", &raw.comments),
            stream: coercions.coerce_count("Stream", &raw.stream),
            danceability: coercions.coerce("Danceability", &raw.danceability),
            energy: coercions.coerce("Energy", &raw.energy),
            tempo: coercions.coerce("Tempo", &raw.tempo),
            release_date: resolve_date(raw.release_date.as_deref(), index, &mut date_fallbacks),
            artist: raw.artist,
            track: raw.track,
            album: raw.album,
        });
    }

    coercions.report();
    if date_fallbacks > 0 {
        log::warn!("{date_fallbacks} unparseable release date(s) replaced by synthetic dates");
    }

    Ok(TrackDataset::from_tracks(tracks))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "Artist": "A", "Track": "X", "Album": "Y",
///     "Views": 100, "Likes": 5, "Comments": 1, "Stream": 100,
///     "Danceability": 0.7, "Energy": 0.5, "Tempo": 120.0 },
///   ...
/// ]
/// ```
///
/// Numeric fields may also be strings ("N/A" etc.); those coerce to missing.
fn load_json(path: &Path) -> Result<TrackDataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let records = root.as_array().ok_or_else(|| LoadError::Row {
        row: 0,
        message: "expected top-level JSON array".to_string(),
    })?;

    let mut date_fallbacks = 0usize;
    let mut tracks = Vec::with_capacity(records.len());

    for (index, rec) in records.iter().enumerate() {
        let obj = rec.as_object().ok_or_else(|| LoadError::Row {
            row: index,
            message: "row is not a JSON object".to_string(),
        })?;

        for required in ["Artist", "Track", "Album"] {
            if !obj.contains_key(required) {
                return Err(LoadError::MissingColumn(required.to_string()));
            }
        }

        let text_field = |key: &str| -> String {
            obj.get(key)
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let numeric_field = |key: &str| -> Option<f64> {
            match obj.get(key)? {
                JsonValue::Number(n) => n.as_f64().filter(|v| v.is_finite()),
                JsonValue::String(s) => coerce_numeric(s),
                _ => None,
            }
        };
        let count_field = |key: &str| numeric_field(key).filter(|v| *v >= 0.0);
        let raw_date = obj.get("Release Date").and_then(|v| v.as_str());

        tracks.push(Track {
            artist: text_field("Artist"),
            track: text_field("Track"),
            album: text_field("Album"),
            views: count_field("Views"),
            likes: count_field("Likes"),
            comments: count_field("Comments"),
            stream: count_field("Stream"),
            danceability: numeric_field("Danceability"),
            energy: numeric_field("Energy"),
            tempo: numeric_field("Tempo"),
            release_date: resolve_date(raw_date, index, &mut date_fallbacks),
        });
    }

    if date_fallbacks > 0 {
        log::warn!("{date_fallbacks} unparseable release date(s) replaced by synthetic dates");
    }

    Ok(TrackDataset::from_tracks(tracks))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with flat scalar columns named like the CSV headers.
/// Numeric columns may be Int32/Int64/Float32/Float64 or Utf8 (coerced);
/// null cells become missing values.
fn load_parquet(path: &Path) -> Result<TrackDataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let reader = builder.build()?;

    let mut tracks = Vec::new();
    let mut date_fallbacks = 0usize;

    for batch_result in reader {
        let batch = batch_result?;
        let schema = batch.schema();
        let n_rows = batch.num_rows();

        let index_of = |name: &str| -> Result<usize, LoadError> {
            schema
                .index_of(name)
                .map_err(|_| LoadError::MissingColumn(name.to_string()))
        };

        let artist = batch.column(index_of("Artist")?);
        let track = batch.column(index_of("Track")?);
        let album = batch.column(index_of("Album")?);
        let metrics: Vec<&Arc<dyn Array>> = REQUIRED_COLUMNS[3..]
            .iter()
            .map(|name| index_of(name).map(|i| batch.column(i)))
            .collect::<Result<_, _>>()?;
        let release_date = schema.index_of("Release Date").ok().map(|i| batch.column(i));

        let base_index = tracks.len();
        for row in 0..n_rows {
            let index = base_index + row;
            let raw_date = release_date.and_then(|col| extract_string(col, row));
            tracks.push(Track {
                artist: extract_string(artist, row).unwrap_or_default(),
                track: extract_string(track, row).unwrap_or_default(),
                album: extract_string(album, row).unwrap_or_default(),
                views: extract_numeric(metrics[0], row).filter(|v| *v >= 0.0),
                likes: extract_numeric(metrics[1], row).filter(|v| *v >= 0.0),
                comments: extract_numeric(metrics[2], row).filter(|v| *v >= 0.0),
                stream: extract_numeric(metrics[3], row).filter(|v| *v >= 0.0),
                danceability: extract_numeric(metrics[4], row),
                energy: extract_numeric(metrics[5], row),
                tempo: extract_numeric(metrics[6], row),
                release_date: resolve_date(raw_date.as_deref(), index, &mut date_fallbacks),
            });
        }
    }

    if date_fallbacks > 0 {
        log::warn!("{date_fallbacks} unparseable release date(s) replaced by synthetic dates");
    }

    Ok(TrackDataset::from_tracks(tracks))
}

// -- Parquet / Arrow helpers --

/// Extract a string cell from an Arrow column, if present and non-null.
fn extract_string(col: &Arc<dyn Array>, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Utf8 => col
            .as_any()
            .downcast_ref::<StringArray>()
            .map(|arr| arr.value(row).to_string()),
        DataType::LargeUtf8 => Some(col.as_string::<i64>().value(row).to_string()),
        _ => None,
    }
}

/// Extract a numeric cell, coercing string cells the same way the CSV
/// loader does. Nulls and unsupported types become missing.
fn extract_numeric(col: &Arc<dyn Array>, row: usize) -> Option<f64> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Int32 => col
            .as_any()
            .downcast_ref::<Int32Array>()
            .map(|arr| arr.value(row) as f64),
        DataType::Int64 => col
            .as_any()
            .downcast_ref::<Int64Array>()
            .map(|arr| arr.value(row) as f64),
        DataType::Float32 => col
            .as_any()
            .downcast_ref::<Float32Array>()
            .map(|arr| arr.value(row) as f64),
        DataType::Float64 => col
            .as_any()
            .downcast_ref::<Float64Array>()
            .map(|arr| arr.value(row)),
        DataType::Utf8 | DataType::LargeUtf8 => {
            extract_string(col, row).and_then(|s| coerce_numeric(&s))
        }
        _ => None,
    }
    .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str =
        "Artist,Track,Album,Views,Likes,Comments,Stream,Danceability,Energy,Tempo";

    fn write_csv(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn csv_loads_and_coerces_counts() {
        let file = write_csv(&[
            "A,X,Alb,100,10,2,1000,0.5,0.6,120.0",
            "B,Y,Alb,N/A,,-,50,0.4,0.3,98.5",
        ]);
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.tracks[0].views, Some(100.0));
        // "N/A", empty, and "-" all coerce to missing, the row survives.
        assert_eq!(ds.tracks[1].views, None);
        assert_eq!(ds.tracks[1].likes, None);
        assert_eq!(ds.tracks[1].comments, None);
        assert_eq!(ds.tracks[1].stream, Some(50.0));
    }

    #[test]
    fn negative_counts_become_missing() {
        let file = write_csv(&["A,X,Alb,-5,1,1,1,0.5,-0.5,100"]);
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.tracks[0].views, None);
        assert_eq!(ds.tracks[0].likes, Some(1.0));
        // Audio features are not counts; negatives survive there.
        assert_eq!(ds.tracks[0].energy, Some(-0.5));
    }

    #[test]
    fn csv_without_release_date_gets_synthetic_sequence() {
        let file = write_csv(&[
            "A,X,Alb,1,1,1,1,0.5,0.5,100",
            "A,Y,Alb,1,1,1,1,0.5,0.5,100",
            "A,Z,Alb,1,1,1,1,0.5,0.5,100",
        ]);
        let ds = load_file(file.path()).unwrap();
        let epoch = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(ds.tracks[0].release_date, epoch);
        assert_eq!(ds.tracks[1].release_date, epoch + chrono::Days::new(1));
        assert_eq!(ds.tracks[2].release_date, epoch + chrono::Days::new(2));
    }

    #[test]
    fn csv_with_release_date_column_parses_it() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "{HEADER},Release Date").unwrap();
        writeln!(file, "A,X,Alb,1,1,1,1,0.5,0.5,100,2021-06-15").unwrap();
        writeln!(file, "A,Y,Alb,1,1,1,1,0.5,0.5,100,garbage").unwrap();
        file.flush().unwrap();

        let ds = load_file(file.path()).unwrap();
        assert_eq!(
            ds.tracks[0].release_date,
            NaiveDate::from_ymd_opt(2021, 6, 15).unwrap()
        );
        // Unparseable cell falls back to the synthetic date for that row.
        assert_eq!(ds.tracks[1].release_date, synthetic_date(1));
    }

    #[test]
    fn csv_missing_required_column_is_fatal() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Artist,Track,Album,Views,Likes,Comments").unwrap();
        writeln!(file, "A,X,Alb,1,1,1").unwrap();
        file.flush().unwrap();

        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "Stream"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_file(Path::new("/no/such/file.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(Path::new("data.xlsx")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedExtension(ref e) if e == "xlsx"));
    }

    #[test]
    fn json_records_load_with_string_coercion() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"Artist":"A","Track":"X","Album":"Alb","Views":100,
                 "Likes":"12","Comments":null,"Stream":"N/A",
                 "Danceability":0.7,"Energy":0.4,"Tempo":118.2}}]"#
        )
        .unwrap();
        file.flush().unwrap();

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
        let t = &ds.tracks[0];
        assert_eq!(t.views, Some(100.0));
        assert_eq!(t.likes, Some(12.0));
        assert_eq!(t.comments, None);
        assert_eq!(t.stream, None);
        assert_eq!(t.release_date, synthetic_date(0));
    }

    #[test]
    fn parquet_coercion_matches_csv_semantics() {
        use arrow::array::ArrayRef;
        use arrow::record_batch::RecordBatch;
        use parquet::arrow::ArrowWriter;

        let columns: Vec<(&str, ArrayRef)> = vec![
            ("Artist", Arc::new(StringArray::from(vec!["A", "B", "C"])) as ArrayRef),
            ("Track", Arc::new(StringArray::from(vec!["X", "Y", "Z"])) as ArrayRef),
            ("Album", Arc::new(StringArray::from(vec!["Alb", "Alb", "Alb"])) as ArrayRef),
            // Utf8 column: numeric, placeholder, thousands-grouped.
            (
                "Views",
                Arc::new(StringArray::from(vec![Some("100"), Some("N/A"), Some("1,234")]))
                    as ArrayRef,
            ),
            // Int column with a null and a negative count.
            (
                "Likes",
                Arc::new(Int64Array::from(vec![Some(1), None, Some(-3)])) as ArrayRef,
            ),
            (
                "Comments",
                Arc::new(Int32Array::from(vec![Some(2), Some(2), Some(2)])) as ArrayRef,
            ),
            (
                "Stream",
                Arc::new(Float64Array::from(vec![Some(10.0), Some(20.0), None])) as ArrayRef,
            ),
            // Audio features are not counts; negatives survive there.
            (
                "Danceability",
                Arc::new(Float64Array::from(vec![Some(0.5), None, Some(-0.5)])) as ArrayRef,
            ),
            (
                "Energy",
                Arc::new(Float32Array::from(vec![Some(0.1f32), Some(0.2), Some(0.3)]))
                    as ArrayRef,
            ),
            (
                "Tempo",
                Arc::new(Float64Array::from(vec![100.0, 110.0, 120.0])) as ArrayRef,
            ),
        ];
        let batch = RecordBatch::try_from_iter_with_nullable(
            columns.into_iter().map(|(name, array)| (name, array, true)),
        )
        .unwrap();

        let file = tempfile::Builder::new()
            .suffix(".parquet")
            .tempfile()
            .unwrap();
        let mut writer =
            ArrowWriter::try_new(file.reopen().unwrap(), batch.schema(), None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.tracks[0].views, Some(100.0));
        assert_eq!(ds.tracks[1].views, None);
        assert_eq!(ds.tracks[2].views, Some(1234.0));
        assert_eq!(ds.tracks[0].likes, Some(1.0));
        assert_eq!(ds.tracks[1].likes, None);
        assert_eq!(ds.tracks[2].likes, None);
        assert_eq!(ds.tracks[2].stream, None);
        assert_eq!(ds.tracks[2].danceability, Some(-0.5));
        assert!((ds.tracks[1].energy.unwrap() - 0.2).abs() < 1e-6);
        // No Release Date column: synthetic sequence, like the CSV path.
        assert_eq!(ds.tracks[0].release_date, synthetic_date(0));
        assert_eq!(ds.tracks[2].release_date, synthetic_date(2));
    }

    #[test]
    fn parquet_missing_required_column_is_fatal() {
        use arrow::array::ArrayRef;
        use arrow::record_batch::RecordBatch;
        use parquet::arrow::ArrowWriter;

        let batch = RecordBatch::try_from_iter(vec![(
            "Artist",
            Arc::new(StringArray::from(vec!["A"])) as ArrayRef,
        )])
        .unwrap();

        let file = tempfile::Builder::new()
            .suffix(".parquet")
            .tempfile()
            .unwrap();
        let mut writer =
            ArrowWriter::try_new(file.reopen().unwrap(), batch.schema(), None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "Track"));
    }

    #[test]
    fn coerce_numeric_handles_separators_and_junk() {
        assert_eq!(coerce_numeric("1,234,567"), Some(1_234_567.0));
        assert_eq!(coerce_numeric("-1,234.5"), Some(-1234.5));
        assert_eq!(coerce_numeric("  42.5 "), Some(42.5));
        assert_eq!(coerce_numeric("N/A"), None);
        assert_eq!(coerce_numeric(""), None);
        assert_eq!(coerce_numeric("inf"), None);
    }

    #[test]
    fn malformed_comma_grouping_is_missing_not_concatenated() {
        // "1,2" must not silently become 12.
        assert_eq!(coerce_numeric("1,2"), None);
        assert_eq!(coerce_numeric("12,34,567"), None);
        assert_eq!(coerce_numeric("1,234,"), None);
        assert_eq!(coerce_numeric(",234"), None);
        assert_eq!(coerce_numeric("1,234."), None);
    }
}
