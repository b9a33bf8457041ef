//! Pure rendering: snapshot in, page text out

use skybook_core::{FlightRecord, SearchQuery};

use crate::state::{AppSnapshot, ResultsPane};

const RULE: &str = "==================================================";

/// Render the whole page from a snapshot
pub fn render(snapshot: &AppSnapshot) -> String {
    let mut page = String::new();

    page.push_str(&render_header(snapshot));

    if !snapshot.search_errors.is_empty() {
        page.push_str("\nSearch Flights\n");
        for (field, message) in snapshot.search_errors.iter() {
            page.push_str(&format!("  ! {}: {}\n", field, message));
        }
    }

    if !snapshot.auth_errors.is_empty() {
        page.push('\n');
        for (field, message) in snapshot.auth_errors.iter() {
            page.push_str(&format!("  ! {}: {}\n", field, message));
        }
    }

    if let ResultsPane::Visible { flights } = &snapshot.results {
        page.push_str(&render_results(flights, snapshot.query.as_ref()));
    }

    if let Some(notice) = &snapshot.notice {
        page.push('\n');
        page.push_str(notice);
        page.push('\n');
    }

    page
}

fn render_header(snapshot: &AppSnapshot) -> String {
    let auth_label = match &snapshot.user {
        Some(user) => format!("Logout ({})", user.name),
        None => "Login".to_string(),
    };

    format!("{}\n  SkyBook{:>41}\n{}\n", RULE, auth_label, RULE)
}

fn render_results(flights: &[FlightRecord], query: Option<&SearchQuery>) -> String {
    let mut section = String::from("\nAvailable Flights\n-----------------\n");

    if flights.is_empty() {
        section.push_str("No flights found\n");
        if let Some(query) = query {
            section.push_str(&format!(
                "No flights available from {} to {} on the selected date.\n",
                query.origin, query.destination
            ));
        }
        return section;
    }

    for flight in flights {
        section.push_str(&render_card(flight, query));
    }

    section
}

fn render_card(flight: &FlightRecord, query: Option<&SearchQuery>) -> String {
    let mut card = format!(
        "\n  [{}] {}\n      {} → {}\n      Departure: {} | Arrival: {}\n      Duration: {}\n",
        flight.id,
        flight.airline,
        flight.origin,
        flight.destination,
        flight.departure,
        flight.arrival,
        flight.duration,
    );

    if let Some(query) = query {
        card.push_str(&format!(
            "      Passengers: {} | Class: {}\n",
            query.passengers, query.travel_class
        ));
    }

    card.push_str(&format!(
        "      ${}  (type `book {}` to reserve)\n",
        flight.price, flight.id
    ));
    card
}
