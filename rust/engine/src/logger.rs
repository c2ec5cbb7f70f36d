use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::round::{ActionRecord, ShownHand};

/// Complete record of one hand: actions, board, outcome. Serialized to
/// JSONL for hand-history storage.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Identifier in `YYYYMMDD-NNNNNN` form
    pub hand_id: String,
    /// Position of the hand within its game, starting at 1
    pub hand_number: u32,
    /// RNG seed the game's deck was built with, when one was supplied
    pub seed: Option<u64>,
    /// Name of the dealer (small blind) for this hand
    pub dealer: String,
    /// Chronological list of all actions, blinds included
    pub actions: Vec<ActionRecord>,
    /// Community cards at the end of the hand (up to 5)
    pub board: Vec<Card>,
    pub winners: Vec<String>,
    pub pot: u32,
    pub winning_hand: String,
    /// Timestamp when the hand was recorded (RFC3339); injected on write
    /// when missing
    #[serde(default)]
    pub ts: Option<String>,
    /// Hands revealed at showdown; `None` when the hand ended on a fold
    #[serde(default)]
    pub showdown: Option<Vec<ShownHand>>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends one JSON line per hand to a log file. Also usable without a
/// backing file purely as a hand-id sequence.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger with a fixed date and no backing file, for id sequencing.
    pub fn with_date(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
