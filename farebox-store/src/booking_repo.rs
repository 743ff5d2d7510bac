use async_trait::async_trait;
use farebox_core::booking::{Booking, BookingStatus, ValidationLog, ValidationMethod};
use farebox_core::repository::BookingRepository;
use sqlx::SqlitePool;
use std::str::FromStr;

pub struct SqliteBookingRepository {
    pool: SqlitePool,
}

impl SqliteBookingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// Internal structs for type-safe querying
#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i64,
    passenger: String,
    route: String,
    time: String,
    fare: f64,
    status: String,
}

#[derive(sqlx::FromRow)]
struct LogRow {
    log_id: i64,
    booking_id: i64,
    method: String,
    timestamp: String,
}

impl TryFrom<BookingRow> for Booking {
    type Error = Box<dyn std::error::Error + Send + Sync>;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        Ok(Booking {
            id: row.id,
            passenger: row.passenger,
            route: row.route,
            time: row.time,
            fare: row.fare,
            status: BookingStatus::from_str(&row.status)?,
        })
    }
}

impl TryFrom<LogRow> for ValidationLog {
    type Error = Box<dyn std::error::Error + Send + Sync>;

    fn try_from(row: LogRow) -> Result<Self, Self::Error> {
        Ok(ValidationLog {
            log_id: row.log_id,
            booking_id: row.booking_id,
            method: ValidationMethod::from_str(&row.method)?,
            timestamp: row.timestamp,
        })
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepository {
    async fn create_booking(
        &self,
        passenger: &str,
        route: &str,
        time: &str,
        fare: f64,
    ) -> Result<i64, Box<dyn std::error::Error + Send + Sync>> {
        let result = sqlx::query(
            "INSERT INTO bookings (passenger, route, time, fare) VALUES (?, ?, ?, ?)",
        )
        .bind(passenger)
        .bind(route)
        .bind(time)
        .bind(fare)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn mark_validated(
        &self,
        id: i64,
    ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        // Compatibility: no existence check, zero affected rows is not an
        // error. Callers that care inspect the returned count.
        let result = sqlx::query("UPDATE bookings SET status = ? WHERE id = ?")
            .bind(BookingStatus::Validated.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn append_log(
        &self,
        booking_id: i64,
        method: ValidationMethod,
        timestamp: &str,
    ) -> Result<i64, Box<dyn std::error::Error + Send + Sync>> {
        let result = sqlx::query(
            "INSERT INTO validation_logs (booking_id, method, timestamp) VALUES (?, ?, ?)",
        )
        .bind(booking_id)
        .bind(method.as_str())
        .bind(timestamp)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn list_recent_bookings(
        &self,
        limit: i64,
    ) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send + Sync>> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            "SELECT id, passenger, route, time, fare, status FROM bookings ORDER BY id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn list_recent_logs(
        &self,
        limit: i64,
    ) -> Result<Vec<ValidationLog>, Box<dyn std::error::Error + Send + Sync>> {
        let rows: Vec<LogRow> = sqlx::query_as(
            "SELECT log_id, booking_id, method, timestamp FROM validation_logs ORDER BY log_id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ValidationLog::try_from).collect()
    }

    async fn export_all_bookings(
        &self,
    ) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send + Sync>> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            "SELECT id, passenger, route, time, fare, status FROM bookings ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Booking::try_from).collect()
    }
}
