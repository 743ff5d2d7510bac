use serde::{Deserialize, Serialize};

/// One row of the route catalog, as loaded from the catalog CSV.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteOption {
    pub bus_no: String,
    pub source: String,
    pub destination: String,
    pub time: String,
    pub fare: f64,
}

impl RouteOption {
    /// The route text stored on a Booking, e.g. `12A: CityX-CityY`.
    pub fn label(&self) -> String {
        format!("{}: {}-{}", self.bus_no, self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_joins_bus_and_endpoints() {
        let route = RouteOption {
            bus_no: "12A".to_string(),
            source: "CityX".to_string(),
            destination: "CityY".to_string(),
            time: "09:00".to_string(),
            fare: 50.0,
        };
        assert_eq!(route.label(), "12A: CityX-CityY");
    }
}
