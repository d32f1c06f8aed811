/// Vessel position report library.
///
/// A [`PositionReportBuilder`](report::PositionReportBuilder) accumulates the
/// identity, position, kinematics and time of a vessel and renders them as the fixed-layout text
/// block accepted by MarineTraffic's e-mail position report ingestion.
/// Field values are carried as [`FieldValue`](field::FieldValue); timestamps are normalized by
/// [`parse_and_format_timestamp`](timestamp::parse_and_format_timestamp).
use std::sync::Once;

use thiserror::Error;

pub mod field;
pub mod report;
pub mod timestamp;

/// Result type for this library
pub type ReportResult<T> = std::result::Result<T, Error>;

/// Error type for this library
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Timestamp format error: {0:?} is not a recognized date")]
    FormatError(String),
}

/// Test binary helper to init tracing. This is usually the responsibility of the consumer of the
/// library crate.
pub fn lazy_init_tracing() {
    {
        static INIT: Once = Once::new();
        &INIT
    }
    .call_once(|| {
        tracing_subscriber::fmt::init();
    });
}
