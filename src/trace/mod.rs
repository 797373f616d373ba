//! Trace input format.
//!
//! One record per line. The scheduler core only ever sees the five logical
//! fields extracted here; everything else about the text stays opaque.

mod record;

pub use record::{MIN_FIELDS, RecordError, TraceRecord};
