use crate::client::{ApiError, Client, Transport};
use crate::types::ScheduleDay;
use chrono::{DateTime, TimeDelta, Utc};

/// Longest time span the schedule endpoint accepts.
pub const MAX_SCHEDULE_RANGE_DAYS: i64 = 14;

impl<T: Transport> Client<T> {
    /// The program schedule between two points in time.
    ///
    /// Each day starts with its first `live` or `premiere` item, usually the
    /// morning show at 10:30 CEST. The range may span at most
    /// [`MAX_SCHEDULE_RANGE_DAYS`] days; longer or inverted ranges are
    /// rejected without contacting the API.
    pub fn schedule(
        &self,
        start_day: DateTime<Utc>,
        end_day: DateTime<Utc>,
    ) -> Result<Vec<ScheduleDay>, ApiError> {
        if end_day < start_day {
            return Err(ApiError::InvalidArgument(format!(
                "schedule end {end_day} lies before start {start_day}"
            )));
        }
        if end_day - start_day > TimeDelta::days(MAX_SCHEDULE_RANGE_DAYS) {
            return Err(ApiError::InvalidArgument(format!(
                "schedule range exceeds {MAX_SCHEDULE_RANGE_DAYS} days"
            )));
        }

        self.request_single(
            "/v1/schedule/normalized",
            &[
                ("startDay", start_day.timestamp().to_string()),
                ("endDay", end_day.timestamp().to_string()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::client::ApiError;
    use crate::client::testing::{ScriptedTransport, envelope};
    use crate::types::MediaType;
    use chrono::{TimeDelta, TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_schedule() {
        let client = ScriptedTransport::client();
        client.transport().push(envelope(json!([{
            "date": "2020-05-04T00:00:00.000Z",
            "elements": [{"id": 1, "title": "MoinMoin", "type": "live"}],
        }])));

        let start = Utc.with_ymd_and_hms(2020, 5, 4, 0, 0, 0).unwrap();
        let end = start + TimeDelta::days(1);
        let days = client.schedule(start, end).unwrap();

        assert_eq!(days[0].elements[0].title.as_deref(), Some("MoinMoin"));
        assert_eq!(days[0].elements[0].kind, Some(MediaType::Live));
        assert_eq!(
            client.transport().last_target(),
            "/v1/schedule/normalized?startDay=1588550400&endDay=1588636800"
        );
    }

    #[test]
    fn test_schedule_accepts_exactly_fourteen_days() {
        let client = ScriptedTransport::client();
        client.transport().push(envelope(json!([])));

        let start = Utc.with_ymd_and_hms(2020, 5, 4, 0, 0, 0).unwrap();
        assert!(client.schedule(start, start + TimeDelta::days(14)).is_ok());
    }

    #[test]
    fn test_schedule_rejects_invalid_ranges() {
        let client = ScriptedTransport::client();
        let start = Utc.with_ymd_and_hms(2020, 5, 4, 0, 0, 0).unwrap();

        let too_long = client.schedule(start, start + TimeDelta::days(15));
        assert!(matches!(too_long, Err(ApiError::InvalidArgument(_))));

        let inverted = client.schedule(start, start - TimeDelta::hours(1));
        assert!(matches!(inverted, Err(ApiError::InvalidArgument(_))));

        assert!(client.transport().requests().is_empty());
    }
}
