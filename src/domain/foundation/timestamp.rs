//! Wall-clock time of a notification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// UTC instant, serialized as RFC 3339.
///
/// Toast timing uses `std::time::Instant` instead; this is only for
/// stamping what the host sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_monotonic_enough_for_ordering() {
        let first = Timestamp::now();
        let second = Timestamp::now();
        assert!(first <= second);
    }

    #[test]
    fn serializes_as_rfc3339() {
        let ts = Timestamp::now();
        let json = serde_json::to_value(ts).unwrap();
        let text = json.as_str().unwrap();
        assert_eq!(
            DateTime::parse_from_rfc3339(text).unwrap().with_timezone(&Utc),
            *ts.as_datetime()
        );
    }
}
