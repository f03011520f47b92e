//! CSV-backed record store.
//!
//! One record per row, header row first, the same column layout the
//! desktop tool wrote: 日期, 用户, 类型, 加班时长, 请假类型, 请假时长,
//! 提交时间, 加班工资. The `无` sentinel marks "no leave", and a trailing
//! `元` on the pay column is tolerated on read for log files produced by
//! older versions.
//!
//! Appends from concurrent contexts are serialized behind a mutex so rows
//! never interleave. Malformed rows are skipped on read with a warning
//! rather than failing the whole query.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{DayType, OvertimeRecord};

use super::RecordStore;

const HEADERS: [&str; 8] = [
    "日期",
    "用户",
    "类型",
    "加班时长",
    "请假类型",
    "请假时长",
    "提交时间",
    "加班工资",
];

/// The "no leave" sentinel stored in CSV cells.
const NONE_SENTINEL: &str = "无";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only CSV record log.
///
/// # Example
///
/// ```no_run
/// use overtime_engine::store::{CsvStore, RecordStore};
///
/// let store = CsvStore::open("./data/overtime_records.csv").unwrap();
/// let january = store.monthly("2026-01").unwrap();
/// println!("{} records", january.len());
/// ```
pub struct CsvStore {
    path: PathBuf,
    append_lock: Mutex<()>,
}

impl CsvStore {
    /// Opens the store, creating the file with a header row if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| EngineError::PersistenceFailure {
                    message: format!("failed to create {}: {}", parent.display(), e),
                })?;
            }
        }

        if !path.exists() {
            let mut writer = csv::Writer::from_path(&path).map_err(|e| {
                EngineError::PersistenceFailure {
                    message: format!("failed to create {}: {}", path.display(), e),
                }
            })?;
            writer
                .write_record(HEADERS)
                .and_then(|_| writer.flush().map_err(Into::into))
                .map_err(|e| EngineError::PersistenceFailure {
                    message: format!("failed to write header: {}", e),
                })?;
        }

        Ok(Self {
            path,
            append_lock: Mutex::new(()),
        })
    }

    fn to_row(record: &OvertimeRecord) -> [String; 8] {
        let (leave_type, leave_hours) = match &record.leave_type {
            Some(name) => (name.clone(), record.leave_hours.to_string()),
            None => (NONE_SENTINEL.to_string(), NONE_SENTINEL.to_string()),
        };

        [
            record.date.format("%Y-%m-%d").to_string(),
            record.user.clone(),
            record.day_type.label().to_string(),
            record.work_hours.to_string(),
            leave_type,
            leave_hours,
            record.submitted_at.format(TIMESTAMP_FORMAT).to_string(),
            record.pay_amount.to_string(),
        ]
    }

    fn from_row(row: &csv::StringRecord) -> Option<OvertimeRecord> {
        if row.len() < 8 {
            return None;
        }

        let date = NaiveDate::parse_from_str(row.get(0)?.trim(), "%Y-%m-%d").ok()?;
        let user = row.get(1)?.trim().to_string();
        let day_type = DayType::from_label(row.get(2)?.trim())?;
        let work_hours = parse_hours(row.get(3)?)?;

        let leave_cell = row.get(4)?.trim();
        let leave_type = if leave_cell.is_empty() || leave_cell == NONE_SENTINEL {
            None
        } else {
            Some(leave_cell.to_string())
        };
        let leave_hours = parse_hours(row.get(5)?).unwrap_or(Decimal::ZERO);

        let submitted_at =
            NaiveDateTime::parse_from_str(row.get(6)?.trim(), TIMESTAMP_FORMAT).ok()?;
        let pay_amount = parse_pay(row.get(7)?)?;

        Some(OvertimeRecord {
            date,
            user,
            day_type,
            work_hours,
            leave_type,
            leave_hours,
            submitted_at,
            pay_amount,
        })
    }
}

fn parse_hours(cell: &str) -> Option<Decimal> {
    let cell = cell.trim();
    if cell.is_empty() || cell == NONE_SENTINEL {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(cell).ok()
}

fn parse_pay(cell: &str) -> Option<Decimal> {
    Decimal::from_str(cell.trim().trim_end_matches('元')).ok()
}

impl RecordStore for CsvStore {
    fn append(&self, record: &OvertimeRecord) -> EngineResult<()> {
        let _guard = self
            .append_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| EngineError::PersistenceFailure {
                message: format!("failed to open {}: {}", self.path.display(), e),
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer
            .write_record(Self::to_row(record))
            .and_then(|_| writer.flush().map_err(Into::into))
            .map_err(|e| EngineError::PersistenceFailure {
                message: format!("failed to append record: {}", e),
            })
    }

    fn all(&self) -> EngineResult<Vec<OvertimeRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| EngineError::PersistenceFailure {
                message: format!("failed to read {}: {}", self.path.display(), e),
            })?;

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    warn!(line = index + 2, error = %e, "skipping unreadable CSV row");
                    continue;
                }
            };
            match Self::from_row(&row) {
                Some(record) => records.push(record),
                None => {
                    warn!(line = index + 2, "skipping malformed record row");
                }
            }
        }

        Ok(records)
    }
}
