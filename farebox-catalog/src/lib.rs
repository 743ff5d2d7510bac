pub mod export;
pub mod routes;

pub use export::write_bookings_csv;
pub use routes::load_routes;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog csv error: {0}")]
    Csv(#[from] csv_async::Error),
    #[error("bad catalog row {row}: {reason}")]
    BadRow { row: usize, reason: String },
}
