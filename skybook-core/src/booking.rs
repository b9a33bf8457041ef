use std::fmt;

use crate::models::FlightRecord;

/// One-shot acknowledgment for a booked flight. Nothing is persisted;
/// there is no booking ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub price: u32,
}

/// Look `flight_id` up among the currently displayed results. A stale id
/// yields `None` and the caller performs no action.
pub fn confirm_booking(flight_id: u32, results: &[FlightRecord]) -> Option<BookingConfirmation> {
    results
        .iter()
        .find(|flight| flight.id == flight_id)
        .map(|flight| BookingConfirmation {
            airline: flight.airline.clone(),
            origin: flight.origin.clone(),
            destination: flight.destination.clone(),
            departure: flight.departure.clone(),
            price: flight.price,
        })
}

impl fmt::Display for BookingConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flight booked successfully!\n\n\
             Flight: {}\n\
             Route: {} → {}\n\
             Departure: {}\n\
             Price: ${}\n\n\
             Thank you for choosing SkyBook!",
            self.airline, self.origin, self.destination, self.departure, self.price
        )
    }
}
