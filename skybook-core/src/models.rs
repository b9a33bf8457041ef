use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A flight in the catalog. Seeded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub id: u32,
    pub airline: String,
    pub origin: String,
    pub destination: String,
    /// HH:MM display string, not a parsed time
    pub departure: String,
    /// HH:MM display string, not a parsed time
    pub arrival: String,
    pub duration: String,
    /// Whole currency units
    pub price: u32,
}

/// Passenger count options offered by the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Passengers {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5+")]
    FivePlus,
}

impl Passengers {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "1" => Some(Passengers::One),
            "2" => Some(Passengers::Two),
            "3" => Some(Passengers::Three),
            "4" => Some(Passengers::Four),
            "5" | "5+" => Some(Passengers::FivePlus),
            _ => None,
        }
    }
}

impl fmt::Display for Passengers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Passengers::One => "1",
            Passengers::Two => "2",
            Passengers::Three => "3",
            Passengers::Four => "4",
            Passengers::FivePlus => "5+",
        };
        write!(f, "{}", label)
    }
}

/// Cabin options offered by the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelClass {
    Economy,
    Business,
    First,
}

impl TravelClass {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "economy" => Some(TravelClass::Economy),
            "business" => Some(TravelClass::Business),
            "first" => Some(TravelClass::First),
            _ => None,
        }
    }
}

impl fmt::Display for TravelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TravelClass::Economy => "economy",
            TravelClass::Business => "business",
            TravelClass::First => "first",
        };
        write!(f, "{}", label)
    }
}

/// Raw search form input, as collected by the view layer. Text fields are
/// untrimmed; selects are absent until the user picks a value.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub origin: String,
    pub destination: String,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub passengers: Option<Passengers>,
    pub travel_class: Option<TravelClass>,
}

/// A search query that passed validation. City names are trimmed; every
/// required field is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub passengers: Passengers,
    pub travel_class: TravelClass,
}

/// The current logged-in identity. At most one exists at a time, owned by
/// the session store and persisted across restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Which auth form is being submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

/// Raw login/registration input. Never persisted; the password is dropped
/// once validation produces a `Profile`.
#[derive(Debug, Clone, Default)]
pub struct CredentialsForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

/// What survives credential validation: the identity handed to the
/// session store. Login submissions carry no name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: Option<String>,
    pub email: String,
}

/// Per-field validation messages, keyed by field name. Empty iff the
/// submitted form is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message for a field, replacing any earlier one.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_serialization_round_trip() {
        let session = UserSession {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };

        let json = serde_json::to_string(&session).unwrap();
        let restored: UserSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn test_passengers_parse_and_display() {
        assert_eq!(Passengers::parse("1"), Some(Passengers::One));
        assert_eq!(Passengers::parse("5"), Some(Passengers::FivePlus));
        assert_eq!(Passengers::parse("5+"), Some(Passengers::FivePlus));
        assert_eq!(Passengers::parse("six"), None);
        assert_eq!(Passengers::FivePlus.to_string(), "5+");
    }

    #[test]
    fn test_travel_class_parse_is_case_insensitive() {
        assert_eq!(TravelClass::parse("Economy"), Some(TravelClass::Economy));
        assert_eq!(TravelClass::parse("FIRST"), Some(TravelClass::First));
        assert_eq!(TravelClass::parse("coach"), None);
    }

    #[test]
    fn test_field_errors_replace_earlier_message() {
        let mut errors = FieldErrors::new();
        errors.insert("destination", "Destination city is required");
        errors.insert("destination", "Destination must be different from departure city");

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("destination"),
            Some("Destination must be different from departure city")
        );
    }
}
