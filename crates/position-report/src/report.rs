/// MarineTraffic e-mail position report.
///
/// The report body is a block of `KEY=value` lines framed by two lines of 16 underscores:
///
/// ```text
/// ________________
/// MMSI=327725610
/// LAT=48.4929646
/// LON=-122.6803961
/// SPEED=0
/// COURSE=005
/// TIMESTAMP=2016-05-02 22:00
/// ________________
/// ```
///
/// <https://help.marinetraffic.com/hc/en-us/articles/205327427-Can-I-e-mail-my-position-reports-to-you>
use std::fmt;

use tracing::trace;

use crate::{
    field::FieldValue,
    timestamp::{parse_and_format_timestamp, TimestampInput},
    ReportResult,
};

/// Opening and closing line of a report.
pub const REPORT_DELIMITER: &str = "________________";

/// Accumulates one vessel's position and renders it with [`PositionReportBuilder::build`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionReportBuilder {
    identity: Option<FieldValue>,
    latitude: Option<FieldValue>,
    longitude: Option<FieldValue>,
    speed: Option<FieldValue>,
    course: Option<FieldValue>,
    timestamp: Option<String>,
}

impl PositionReportBuilder {
    /// Create a builder from positional values. `None` leaves the field unset.
    ///
    /// Fails only if `timestamp` cannot be parsed.
    pub fn new(
        identity: Option<FieldValue>,
        latitude: Option<FieldValue>,
        longitude: Option<FieldValue>,
        speed: Option<FieldValue>,
        course: Option<FieldValue>,
        timestamp: Option<TimestampInput>,
    ) -> ReportResult<Self> {
        let mut builder = Self::default();
        if let Some(identity) = identity {
            builder.set_identity(identity);
        }
        if let Some(latitude) = latitude {
            builder.set_latitude(latitude);
        }
        if let Some(longitude) = longitude {
            builder.set_longitude(longitude);
        }
        if let Some(speed) = speed {
            builder.set_speed(speed);
        }
        if let Some(course) = course {
            builder.set_course(course);
        }
        if let Some(timestamp) = timestamp {
            builder.set_timestamp(timestamp)?;
        }
        Ok(builder)
    }

    /// Vessel MMSI, e.g. `367725690`.
    pub fn set_identity(&mut self, identity: impl Into<FieldValue>) {
        let identity = identity.into();
        trace!("identity: {}", identity);
        self.identity = Some(identity);
    }

    /// Decimal degrees, e.g. `48.4929646`.
    pub fn set_latitude(&mut self, latitude: impl Into<FieldValue>) {
        let latitude = latitude.into();
        trace!("latitude: {}", latitude);
        self.latitude = Some(latitude);
    }

    /// Decimal degrees, e.g. `-122.6803961`.
    pub fn set_longitude(&mut self, longitude: impl Into<FieldValue>) {
        let longitude = longitude.into();
        trace!("longitude: {}", longitude);
        self.longitude = Some(longitude);
    }

    /// Speed over ground, e.g. `0`.
    pub fn set_speed(&mut self, speed: impl Into<FieldValue>) {
        let speed = speed.into();
        trace!("speed: {}", speed);
        self.speed = Some(speed);
    }

    /// Course over ground, e.g. `003`.
    pub fn set_course(&mut self, course: impl Into<FieldValue>) {
        let course = course.into();
        trace!("course: {}", course);
        self.course = Some(course);
    }

    /// Normalize and store the timestamp, e.g. `2016-05-02 22:00`. On error the previous
    /// timestamp is kept.
    pub fn set_timestamp(&mut self, timestamp: impl Into<TimestampInput>) -> ReportResult<()> {
        self.timestamp = Some(parse_and_format_timestamp(timestamp)?);
        Ok(())
    }

    pub fn identity(&self) -> Option<&FieldValue> {
        self.identity.as_ref()
    }

    pub fn latitude(&self) -> Option<&FieldValue> {
        self.latitude.as_ref()
    }

    pub fn longitude(&self) -> Option<&FieldValue> {
        self.longitude.as_ref()
    }

    pub fn speed(&self) -> Option<&FieldValue> {
        self.speed.as_ref()
    }

    pub fn course(&self) -> Option<&FieldValue> {
        self.course.as_ref()
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    /// Render the report body. No trailing newline.
    pub fn build(&self) -> String {
        let report = format!(
            "{REPORT_DELIMITER}\n\
             MMSI={}\n\
             LAT={}\n\
             LON={}\n\
             SPEED={}\n\
             COURSE={}\n\
             TIMESTAMP={}\n\
             {REPORT_DELIMITER}",
            FieldValue::render(self.identity()),
            FieldValue::render(self.latitude()),
            FieldValue::render(self.longitude()),
            FieldValue::render(self.speed()),
            FieldValue::render(self.course()),
            self.timestamp().unwrap_or_default(),
        );
        trace!("report:\n{}", report);
        report
    }
}

impl fmt::Display for PositionReportBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
