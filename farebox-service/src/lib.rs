pub mod service;
pub mod source;

pub use service::{BookingService, ValidationReceipt};
pub use source::{PayloadSource, ScanOutcome, StaticPayloadSource};
