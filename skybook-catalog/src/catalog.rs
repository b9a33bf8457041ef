use skybook_core::FlightRecord;

/// The full flight dataset. Seeded once at startup; read-only for the
/// life of the process.
#[derive(Debug, Clone)]
pub struct FlightCatalog {
    records: Vec<FlightRecord>,
}

impl FlightCatalog {
    pub fn new(records: Vec<FlightRecord>) -> Self {
        Self { records }
    }

    /// The canonical demo dataset
    pub fn seed() -> Self {
        Self::new(vec![
            FlightRecord {
                id: 1,
                airline: "SkyWings Airlines".to_string(),
                origin: "New York".to_string(),
                destination: "London".to_string(),
                departure: "08:30".to_string(),
                arrival: "20:45".to_string(),
                duration: "7h 15m".to_string(),
                price: 899,
            },
            FlightRecord {
                id: 2,
                airline: "CloudJet".to_string(),
                origin: "New York".to_string(),
                destination: "London".to_string(),
                departure: "14:20".to_string(),
                arrival: "02:35".to_string(),
                duration: "7h 15m".to_string(),
                price: 1249,
            },
            FlightRecord {
                id: 3,
                airline: "AeroLink".to_string(),
                origin: "London".to_string(),
                destination: "Paris".to_string(),
                departure: "10:15".to_string(),
                arrival: "11:30".to_string(),
                duration: "1h 15m".to_string(),
                price: 299,
            },
            FlightRecord {
                id: 4,
                airline: "EuroFly".to_string(),
                origin: "Paris".to_string(),
                destination: "Tokyo".to_string(),
                departure: "16:40".to_string(),
                arrival: "11:20".to_string(),
                duration: "12h 40m".to_string(),
                price: 1599,
            },
        ])
    }

    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }
}
