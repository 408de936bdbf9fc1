use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cards::Card;
use crate::player::ActionOutcome;
use crate::table::{TableStage, TableState};

/// Broad classification of an action-log line, for UI styling and filtering.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum LogKind {
    /// Table and hand lifecycle
    Info,
    /// A betting action or blind
    Action,
    /// Cards dealt, burned or drawn
    Deal,
    /// Pot awarded
    Result,
    /// Coaching line for the hero
    Tip,
}

/// One timestamped, human-readable line of the table's action log.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Hand the entry belongs to (0 before the first hand)
    pub hand_number: u32,
    pub stage: TableStage,
    pub kind: LogKind,
    /// Seat the entry is about, if any
    #[serde(default)]
    pub seat: Option<usize>,
    #[serde(default)]
    pub outcome: Option<ActionOutcome>,
    pub message: String,
    /// RFC3339 timestamp
    pub time: String,
}

/// Summary of one finished hand, serialized one per line to a JSONL history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// RNG seed used for the session, when known
    pub seed: Option<u64>,
    pub hand_number: u32,
    pub board: Vec<Card>,
    /// Seats that took a share of the pot
    pub winners: Vec<usize>,
    pub pot: u32,
    /// How the pot was won
    pub result: Option<String>,
    /// Every log line of the hand, oldest first
    pub log: Vec<String>,
    /// Timestamp when the hand was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandRecord {
    /// Builds the record for the hand that just finished on `state`.
    /// Returns `None` until a pot has been awarded.
    pub fn from_table(state: &TableState, hand_id: String, seed: Option<u64>) -> Option<Self> {
        let result = state.last_result.as_ref()?;
        Some(Self {
            hand_id,
            seed,
            hand_number: result.hand_number,
            board: state.board.clone(),
            winners: result.winners.clone(),
            pot: result.amount,
            result: Some(result.reason.clone()),
            log: state
                .action_log
                .iter()
                .filter(|e| e.hand_number == result.hand_number)
                .map(|e| e.message.clone())
                .collect(),
            ts: None,
        })
    }
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that only hands out ids; nothing is written.
    pub fn detached(date: &str) -> Self {
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
