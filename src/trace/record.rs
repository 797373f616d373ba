//! Whitespace-separated trace records.
//!
//! Layout: `arrival src_addr src_port dst_addr dst_port length [weight]`.
//! Fields past the weight are ignored for parsing but kept in the payload,
//! which reproduces the original line verbatim on output.

use thiserror::Error;

use crate::flow::FlowKey;

/// Minimum number of whitespace-separated fields per record.
pub const MIN_FIELDS: usize = 6;

/// Reasons a line is rejected. A rejected line contributes nothing: no
/// flow, no packet, no output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected at least {MIN_FIELDS} fields, got {got}")]
    TooFewFields { got: usize },
    #[error("arrival is not a non-negative integer: {field}")]
    BadArrival { field: String },
    #[error("length is not an integer: {field}")]
    BadLength { field: String },
    #[error("length must be positive")]
    ZeroLength,
}

/// One accepted trace record: the scheduler's five logical fields plus the
/// original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    pub arrival: u64,
    pub length: u64,
    /// Weight override for the owning flow, if the record carries one.
    /// A seventh field that does not parse as an integer counts as absent,
    /// not as an error.
    pub weight: Option<i64>,
    pub key: FlowKey,
    /// The full record text, newline stripped.
    pub line: String,
}

impl TraceRecord {
    pub fn parse(line: &str) -> Result<TraceRecord, RecordError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            return Err(RecordError::TooFewFields { got: fields.len() });
        }

        let arrival: u64 = fields[0].parse().map_err(|_| RecordError::BadArrival {
            field: fields[0].to_string(),
        })?;
        let length: u64 = fields[5].parse().map_err(|_| RecordError::BadLength {
            field: fields[5].to_string(),
        })?;
        if length == 0 {
            return Err(RecordError::ZeroLength);
        }
        let weight = fields.get(6).and_then(|f| f.parse::<i64>().ok());

        let key = FlowKey(format!(
            "{}:{}-{}:{}",
            fields[1], fields[2], fields[3], fields[4]
        ));

        Ok(TraceRecord {
            arrival,
            length,
            weight,
            key,
            line: line.to_string(),
        })
    }
}
