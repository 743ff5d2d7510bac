use chrono::Local;
use farebox_core::booking::{Booking, BookingStatus, ValidationLog, ValidationMethod};
use farebox_core::codec;
use farebox_core::repository::BookingRepository;
use farebox_core::route::RouteOption;
use farebox_core::{CoreError, CoreResult};
use std::sync::Arc;
use tracing::{info, warn};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Identifier pair returned by a successful validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReceipt {
    pub booking_id: i64,
    pub log_id: i64,
}

/// Owns the two state transitions in the system: booking creation and the
/// one-way Booked -> Validated flip. Both acquisition channels funnel their
/// decoded text through [`validate`].
///
/// [`validate`]: BookingService::validate
pub struct BookingService {
    repo: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo }
    }

    /// Create a booking for `passenger` on the selected route and return it
    /// together with its scannable payload text.
    pub async fn book(
        &self,
        passenger: &str,
        route: Option<&RouteOption>,
    ) -> CoreResult<(Booking, String)> {
        let passenger = passenger.trim();
        if passenger.is_empty() {
            return Err(CoreError::Validation("passenger name is empty".to_string()));
        }
        let route = route.ok_or_else(|| CoreError::Validation("no route selected".to_string()))?;
        if route.fare < 0.0 {
            return Err(CoreError::Validation(format!(
                "route fare is negative: {}",
                route.fare
            )));
        }

        let label = route.label();
        let id = self
            .repo
            .create_booking(passenger, &label, &route.time, route.fare)
            .await
            .map_err(store_err)?;

        let booking = Booking {
            id,
            passenger: passenger.to_string(),
            route: label,
            time: route.time.clone(),
            fare: route.fare,
            status: BookingStatus::Booked,
        };
        let payload = codec::encode(&booking);
        info!(booking_id = id, passenger, "Booking created");

        Ok((booking, payload))
    }

    /// Reconcile raw decoded text against the store: decode the payload,
    /// flip the booking to Validated, and append one audit log.
    ///
    /// Re-validation is allowed without limit: status stays Validated and
    /// each attempt appends its own log row.
    pub async fn validate(
        &self,
        raw_text: &str,
        method: ValidationMethod,
    ) -> CoreResult<ValidationReceipt> {
        let id_text = codec::decode(raw_text)?;
        let booking_id: i64 = id_text
            .parse()
            .map_err(|_| CoreError::Format(format!("booking id is not numeric: {id_text:?}")))?;

        let affected = self.repo.mark_validated(booking_id).await.map_err(store_err)?;
        if affected == 0 {
            warn!(booking_id, "payload matched no stored booking; logging anyway");
        }

        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let log_id = self
            .repo
            .append_log(booking_id, method, &timestamp)
            .await
            .map_err(store_err)?;
        info!(booking_id, log_id, %method, "Booking validated");

        Ok(ValidationReceipt { booking_id, log_id })
    }

    pub async fn recent_bookings(&self, limit: i64) -> CoreResult<Vec<Booking>> {
        self.repo.list_recent_bookings(limit).await.map_err(store_err)
    }

    pub async fn recent_logs(&self, limit: i64) -> CoreResult<Vec<ValidationLog>> {
        self.repo.list_recent_logs(limit).await.map_err(store_err)
    }

    /// Full booking snapshot in creation order, for the external CSV writer.
    pub async fn export_bookings(&self) -> CoreResult<Vec<Booking>> {
        self.repo.export_all_bookings().await.map_err(store_err)
    }
}

fn store_err(err: Box<dyn std::error::Error + Send + Sync>) -> CoreError {
    CoreError::Store(err.to_string())
}
