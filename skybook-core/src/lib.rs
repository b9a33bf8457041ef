pub mod booking;
pub mod models;
pub mod validate;

pub use booking::{confirm_booking, BookingConfirmation};
pub use models::{
    AuthMode, CredentialsForm, FieldErrors, FlightRecord, Passengers, Profile, SearchForm,
    SearchQuery, TravelClass, UserSession,
};
pub use validate::{validate_credentials, validate_search};
