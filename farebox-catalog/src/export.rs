use crate::CatalogError;
use csv_async::AsyncWriterBuilder;
use farebox_core::booking::Booking;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWrite;
use tracing::info;

/// Write the full booking snapshot to a CSV file, one row per booking in
/// creation order.
pub async fn write_bookings_csv(
    path: impl AsRef<Path>,
    bookings: &[Booking],
) -> Result<(), CatalogError> {
    let path = path.as_ref();
    let file = File::create(path).await?;
    write_bookings(file, bookings).await?;
    info!("Exported {} bookings to {}", bookings.len(), path.display());
    Ok(())
}

/// Serialize bookings as CSV onto any async writer.
pub async fn write_bookings<W>(writer: W, bookings: &[Booking]) -> Result<(), CatalogError>
where
    W: AsyncWrite + Unpin + Send,
{
    let mut csv_writer = AsyncWriterBuilder::new().create_writer(writer);
    csv_writer
        .write_record(&["id", "passenger", "route", "time", "fare", "status"])
        .await?;
    for booking in bookings {
        csv_writer
            .write_record(&[
                booking.id.to_string(),
                booking.passenger.clone(),
                booking.route.clone(),
                booking.time.clone(),
                booking.fare.to_string(),
                booking.status.to_string(),
            ])
            .await?;
    }
    csv_writer.flush().await?;
    Ok(())
}
