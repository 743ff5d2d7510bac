use crate::booking::{Booking, ValidationLog, ValidationMethod};
use async_trait::async_trait;

/// Repository trait for booking and validation-log persistence.
///
/// Every write commits durably before the call returns; there is no
/// buffering across calls. Both tables are append-mostly: the only update
/// ever issued is the status flip in [`mark_validated`].
///
/// [`mark_validated`]: BookingRepository::mark_validated
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a new booking with status `Booked` and return its id.
    async fn create_booking(
        &self,
        passenger: &str,
        route: &str,
        time: &str,
        fare: f64,
    ) -> Result<i64, Box<dyn std::error::Error + Send + Sync>>;

    /// Flip status to `Validated`. Performs no existence check: an update
    /// against an unknown id affects zero rows and is not an error. Returns
    /// the affected-row count so callers can observe misses.
    async fn mark_validated(
        &self,
        id: i64,
    ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>>;

    /// Append one validation-log row and return its log id. The booking_id
    /// relation is not verified.
    async fn append_log(
        &self,
        booking_id: i64,
        method: ValidationMethod,
        timestamp: &str,
    ) -> Result<i64, Box<dyn std::error::Error + Send + Sync>>;

    /// Most recently created bookings first, at most `limit` rows.
    async fn list_recent_bookings(
        &self,
        limit: i64,
    ) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send + Sync>>;

    /// Most recently created logs first, at most `limit` rows.
    async fn list_recent_logs(
        &self,
        limit: i64,
    ) -> Result<Vec<ValidationLog>, Box<dyn std::error::Error + Send + Sync>>;

    /// Full unfiltered booking snapshot in creation order, for export.
    async fn export_all_bookings(
        &self,
    ) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send + Sync>>;
}
