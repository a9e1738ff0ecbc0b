use std::{
    fs::File,
    io::{self, BufWriter},
    path::Path,
};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quadris_engine::Seed;

/// Metadata of one finished training run, saved as pretty-printed JSON.
///
/// The seeds make the run reproducible: replaying with the same seeds and
/// parameters yields the same scores.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrainedModel {
    pub trained_at: DateTime<Utc>,
    pub episodes: usize,
    pub agent_seed: Seed,
    pub trainer_seed: Seed,
    pub epsilon: f64,
    pub alpha: f64,
    pub gamma: f64,
    pub final_score: usize,
    pub best_score: usize,
    pub visited_states: usize,
}

impl TrainedModel {
    /// Writes the model to `path`, or to stdout when `path` is `None`.
    pub fn save(&self, path: Option<&Path>) -> anyhow::Result<()> {
        match path {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                let mut writer = BufWriter::new(file);
                self.write_json(&mut writer)
                    .with_context(|| format!("Failed to write JSON to {}", path.display()))
            }
            None => {
                let mut writer = io::stdout().lock();
                self.write_json(&mut writer)
                    .context("Failed to write JSON to stdout")
            }
        }
    }

    fn write_json<W>(&self, writer: &mut W) -> anyhow::Result<()>
    where
        W: io::Write,
    {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
