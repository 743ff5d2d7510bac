use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A reservation record for one passenger on one catalog route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub passenger: String,
    pub route: String,
    pub time: String,
    pub fare: f64,
    pub status: BookingStatus,
}

/// Booking lifecycle: Booked flips once to Validated and never reverts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BookingStatus {
    Booked,
    Validated,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Booked => "Booked",
            BookingStatus::Validated => "Validated",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Booked" => Ok(BookingStatus::Booked),
            "Validated" => Ok(BookingStatus::Validated),
            other => Err(format!("unknown booking status: {other}")),
        }
    }
}

/// Audit entry for one validation attempt. Append-only, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationLog {
    pub log_id: i64,
    pub booking_id: i64,
    pub method: ValidationMethod,
    pub timestamp: String,
}

/// Which acquisition channel produced the decoded payload text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValidationMethod {
    Image,
    Webcam,
}

impl ValidationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationMethod::Image => "Image",
            ValidationMethod::Webcam => "Webcam",
        }
    }
}

impl fmt::Display for ValidationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Image" | "image" => Ok(ValidationMethod::Image),
            "Webcam" | "webcam" => Ok(ValidationMethod::Webcam),
            other => Err(format!("unknown validation method: {other}")),
        }
    }
}
