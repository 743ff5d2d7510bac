use crate::booking::Booking;
use crate::{CoreError, CoreResult};

/// Literal marker that introduces the booking identifier in a payload.
pub const ID_MARKER: &str = "BookingID:";

/// Encode a booking into the pipe-delimited payload text that backs the
/// scannable symbol. Field order is fixed and the text is deterministic.
pub fn encode(booking: &Booking) -> String {
    format!(
        "{}{}|Passenger:{}|Route:{}|Time:{}|Fare:{}",
        ID_MARKER,
        booking.id,
        booking.passenger,
        booking.route,
        booking.time,
        format_fare(booking.fare),
    )
}

/// Recover the booking identifier from raw decoded text.
///
/// Fails with [`CoreError::Format`] when the `BookingID:` marker is absent.
/// The identifier is returned verbatim, with no numeric check; callers own
/// the parse against the store.
pub fn decode(raw_text: &str) -> CoreResult<String> {
    let start = raw_text
        .find(ID_MARKER)
        .ok_or_else(|| CoreError::Format("payload has no BookingID marker".to_string()))?
        + ID_MARKER.len();
    let rest = &raw_text[start..];
    let id = match rest.find('|') {
        Some(end) => &rest[..end],
        None => rest,
    };
    Ok(id.to_string())
}

/// Render a fare the way the wire format expects: integral amounts keep one
/// decimal place (`50.0`), fractional amounts print as-is (`50.25`).
pub fn format_fare(fare: f64) -> String {
    if fare.fract() == 0.0 {
        format!("{fare:.1}")
    } else {
        fare.to_string()
    }
}
