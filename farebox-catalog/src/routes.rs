use crate::CatalogError;
use csv_async::{AsyncReaderBuilder, Trim};
use farebox_core::route::RouteOption;
use futures::StreamExt;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncRead, BufReader};
use tracing::info;

/// Load the route catalog from a CSV file with header
/// `BusNo,Source,Destination,Time,Fare`.
pub async fn load_routes(path: impl AsRef<Path>) -> Result<Vec<RouteOption>, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path).await?;
    let routes = read_routes(BufReader::new(file)).await?;
    info!("Loaded {} routes from {}", routes.len(), path.display());
    Ok(routes)
}

/// Parse catalog rows from any async reader. A row with too few fields or a
/// non-numeric fare is an error, not a skip.
pub async fn read_routes<R>(reader: R) -> Result<Vec<RouteOption>, CatalogError>
where
    R: AsyncRead + Unpin + Send,
{
    let mut csv_reader = AsyncReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .create_reader(reader);
    let mut records = csv_reader.records();

    let mut routes = Vec::new();
    let mut row = 0usize;
    while let Some(record) = records.next().await {
        let record = record?;
        row += 1;
        if record.len() < 5 {
            return Err(CatalogError::BadRow {
                row,
                reason: format!("expected 5 fields, got {}", record.len()),
            });
        }
        let fare: f64 = record[4].parse().map_err(|_| CatalogError::BadRow {
            row,
            reason: format!("fare is not numeric: {:?}", &record[4]),
        })?;
        routes.push(RouteOption {
            bus_no: record[0].to_string(),
            source: record[1].to_string(),
            destination: record[2].to_string(),
            time: record[3].to_string(),
            fare,
        });
    }

    Ok(routes)
}
