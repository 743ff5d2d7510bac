use farebox_core::booking::{BookingStatus, ValidationMethod};
use farebox_core::repository::BookingRepository;
use farebox_store::SqliteBookingRepository;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

// One connection so the in-memory database is shared across every query.
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");
    sqlx::migrate!("../migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    pool
}

#[tokio::test]
async fn create_booking_assigns_monotonic_ids_and_booked_status() {
    let repo = SqliteBookingRepository::new(test_pool().await);

    let first = repo
        .create_booking("Asha", "12A: CityX-CityY", "09:00", 50.0)
        .await
        .unwrap();
    let second = repo
        .create_booking("Ravi", "7B: CityY-CityZ", "11:30", 35.5)
        .await
        .unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);

    let recent = repo.list_recent_bookings(20).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert!(recent.iter().all(|b| b.status == BookingStatus::Booked));
}

#[tokio::test]
async fn recent_bookings_are_capped_and_ordered_by_descending_id() {
    let repo = SqliteBookingRepository::new(test_pool().await);

    for i in 0..25 {
        repo.create_booking(&format!("P{i}"), "12A: CityX-CityY", "09:00", 50.0)
            .await
            .unwrap();
    }

    let recent = repo.list_recent_bookings(20).await.unwrap();
    assert_eq!(recent.len(), 20);
    let ids: Vec<i64> = recent.iter().map(|b| b.id).collect();
    assert_eq!(ids.first(), Some(&25));
    assert!(ids.windows(2).all(|w| w[0] > w[1]));
}

#[tokio::test]
async fn mark_validated_flips_status_once() {
    let repo = SqliteBookingRepository::new(test_pool().await);

    let id = repo
        .create_booking("Asha", "12A: CityX-CityY", "09:00", 50.0)
        .await
        .unwrap();

    let affected = repo.mark_validated(id).await.unwrap();
    assert_eq!(affected, 1);

    let bookings = repo.list_recent_bookings(1).await.unwrap();
    assert_eq!(bookings[0].status, BookingStatus::Validated);

    // A second flip is a no-op on value but still touches the row.
    let affected = repo.mark_validated(id).await.unwrap();
    assert_eq!(affected, 1);
    let bookings = repo.list_recent_bookings(1).await.unwrap();
    assert_eq!(bookings[0].status, BookingStatus::Validated);
}

#[tokio::test]
async fn mark_validated_against_unknown_id_affects_nothing() {
    let repo = SqliteBookingRepository::new(test_pool().await);

    let affected = repo.mark_validated(999).await.unwrap();
    assert_eq!(affected, 0);
}

#[tokio::test]
async fn append_log_returns_monotonic_log_ids() {
    let repo = SqliteBookingRepository::new(test_pool().await);

    let booking_id = repo
        .create_booking("Asha", "12A: CityX-CityY", "09:00", 50.0)
        .await
        .unwrap();

    let first = repo
        .append_log(booking_id, ValidationMethod::Image, "2026-08-29 10:00:00")
        .await
        .unwrap();
    let second = repo
        .append_log(booking_id, ValidationMethod::Webcam, "2026-08-29 10:05:00")
        .await
        .unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);

    let logs = repo.list_recent_logs(20).await.unwrap();
    assert_eq!(logs.len(), 2);
    // Newest first
    assert_eq!(logs[0].log_id, 2);
    assert_eq!(logs[0].method, ValidationMethod::Webcam);
    assert_eq!(logs[1].method, ValidationMethod::Image);
}

#[tokio::test]
async fn export_returns_all_rows_in_creation_order() {
    let repo = SqliteBookingRepository::new(test_pool().await);

    for i in 0..25 {
        repo.create_booking(&format!("P{i}"), "12A: CityX-CityY", "09:00", 50.0)
            .await
            .unwrap();
    }

    let all = repo.export_all_bookings().await.unwrap();
    assert_eq!(all.len(), 25);
    let ids: Vec<i64> = all.iter().map(|b| b.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(all[0].passenger, "P0");
}
