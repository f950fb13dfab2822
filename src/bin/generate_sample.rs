//! Writes a deterministic sample `MusicData.csv` for trying out the
//! dashboard without a real export. Counts occasionally contain the `N/A`
//! placeholder the loader must coerce to missing.

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in [lo, hi).
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const ARTISTS: [&str; 12] = [
    "The Hollow Suns",
    "Marla Voss",
    "Neon Cartography",
    "DJ Petrichor",
    "Iron Lullaby",
    "Cassette Summer",
    "Low Tide Collective",
    "Vera & The Afterglow",
    "Static Bloom",
    "Golden Hour Theory",
    "Paper Satellites",
    "Midnight Frequency",
];

const TRACK_WORDS: [&str; 14] = [
    "Echo", "Gravity", "Velvet", "Horizon", "Wildfire", "Mirrors", "Parade",
    "Glass", "Thunder", "Roses", "Satellite", "Undertow", "Lanterns", "Static",
];

const ALBUM_WORDS: [&str; 8] = [
    "Afterglow", "Polaroid", "Monsoon", "Daydream", "Fault Lines",
    "Open Water", "Night Drive", "Analog Hearts",
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let out_dir = std::path::Path::new("sample_data");
    std::fs::create_dir_all(out_dir).context("creating sample_data directory")?;
    let out_path = out_dir.join("MusicData.csv");

    let mut writer = csv::Writer::from_path(&out_path)
        .with_context(|| format!("creating {}", out_path.display()))?;
    writer.write_record([
        "Artist", "Track", "Album", "Views", "Likes", "Comments", "Stream",
        "Danceability", "Energy", "Tempo",
    ])?;

    let n_rows = 400;
    for _ in 0..n_rows {
        let artist = rng.pick(&ARTISTS);
        let track = format!("{} {}", rng.pick(&TRACK_WORDS), rng.pick(&TRACK_WORDS));
        let album = format!("{} {}", rng.pick(&ALBUM_WORDS), rng.pick(&ALBUM_WORDS));

        let views = rng.range(1e4, 5e8);
        let likes = views * rng.range(0.005, 0.06);
        let comments = likes * rng.range(0.01, 0.12);
        let stream = views * rng.range(0.3, 3.0);

        // Roughly 2% of count cells carry the placeholder the loader must
        // coerce to missing.
        let count_cell = |rng: &mut SimpleRng, v: f64| {
            if rng.next_f64() < 0.02 {
                "N/A".to_string()
            } else {
                format!("{v:.0}")
            }
        };

        writer.write_record([
            artist.to_string(),
            track,
            album,
            count_cell(&mut rng, views),
            count_cell(&mut rng, likes),
            count_cell(&mut rng, comments),
            count_cell(&mut rng, stream),
            format!("{:.3}", rng.range(0.1, 0.95)),
            format!("{:.3}", rng.range(0.1, 0.99)),
            format!("{:.1}", rng.range(62.0, 186.0)),
        ])?;
    }

    writer.flush()?;
    println!("Wrote {n_rows} tracks to {}", out_path.display());
    Ok(())
}
