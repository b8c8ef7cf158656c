use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::{Builder, NoContext, Timestamp, Uuid};

/// Identifier of one assessment.
///
/// Backed by a UUIDv7, whose leading 48 bits are the Unix creation time in
/// milliseconds. The creation instant is therefore part of the identifier
/// and never needs to be stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct AssessmentId(Uuid);

impl AssessmentId {
    /// Stamp a fresh identifier with the current time.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Build an identifier created at `millis` since the Unix epoch.
    /// Instants before the epoch clamp to the epoch.
    pub fn from_millis(millis: i64) -> Self {
        let millis = u64::try_from(millis).unwrap_or(0);
        let subsec_nanos = ((millis % 1_000) * 1_000_000) as u32;
        let ts = Timestamp::from_unix(NoContext, millis / 1_000, subsec_nanos);
        Self(Uuid::new_v7(ts))
    }

    /// Deterministic identifier for `millis`: the same instant always
    /// yields the same id. For records that predate UUID identifiers and
    /// were keyed by their creation instant alone.
    pub fn at_millis(millis: i64) -> Self {
        let millis = u64::try_from(millis).unwrap_or(0);
        Self(Builder::from_unix_timestamp_millis(millis, &[0; 10]).into_uuid())
    }

    /// Creation time in milliseconds since the Unix epoch.
    ///
    /// Identifiers that do not carry a timestamp (parsed from a non-v7
    /// UUID) report 0.
    pub fn created_at_millis(&self) -> i64 {
        self.0
            .get_timestamp()
            .map(|ts| {
                let (secs, nanos) = ts.to_unix();
                secs as i64 * 1_000 + i64::from(nanos / 1_000_000)
            })
            .unwrap_or(0)
    }

    pub fn created_at(&self) -> jiff::Timestamp {
        jiff::Timestamp::from_millisecond(self.created_at_millis())
            .unwrap_or(jiff::Timestamp::UNIX_EPOCH)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AssessmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AssessmentId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl FromStr for AssessmentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}
