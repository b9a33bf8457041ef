use chrono::NaiveDate;

use crate::models::{AuthMode, CredentialsForm, FieldErrors, Profile, SearchForm, SearchQuery};

/// Check a search form and produce a query, or every applicable field
/// error at once. `today` is supplied by the caller; dates are compared at
/// day granularity.
pub fn validate_search(form: &SearchForm, today: NaiveDate) -> Result<SearchQuery, FieldErrors> {
    let mut errors = FieldErrors::new();

    let origin = form.origin.trim();
    if origin.is_empty() {
        errors.insert("origin", "Departure city is required");
    } else if origin.chars().count() < 2 {
        errors.insert("origin", "City name must be at least 2 characters");
    }

    let destination = form.destination.trim();
    if destination.is_empty() {
        errors.insert("destination", "Destination city is required");
    } else if destination.chars().count() < 2 {
        errors.insert("destination", "City name must be at least 2 characters");
    }

    // Takes the destination slot over any earlier message there
    if !origin.is_empty() && origin.to_lowercase() == destination.to_lowercase() {
        errors.insert(
            "destination",
            "Destination must be different from departure city",
        );
    }

    match form.departure_date {
        None => errors.insert("departure_date", "Departure date is required"),
        Some(departure) if departure < today => {
            errors.insert("departure_date", "Departure date cannot be in the past");
        }
        Some(_) => {}
    }

    // Only comparable when a departure date was given
    if let (Some(returning), Some(departure)) = (form.return_date, form.departure_date) {
        if returning <= departure {
            errors.insert("return_date", "Return date must be after departure date");
        }
    }

    if form.passengers.is_none() {
        errors.insert("passengers", "Number of passengers is required");
    }

    if form.travel_class.is_none() {
        errors.insert("travel_class", "Travel class is required");
    }

    match (form.departure_date, form.passengers, form.travel_class) {
        (Some(departure_date), Some(passengers), Some(travel_class)) if errors.is_empty() => {
            Ok(SearchQuery {
                origin: origin.to_string(),
                destination: destination.to_string(),
                departure_date,
                return_date: form.return_date,
                passengers,
                travel_class,
            })
        }
        _ => Err(errors),
    }
}

/// Check a login or registration form and produce the profile handed to
/// the session store, or every applicable field error at once.
pub fn validate_credentials(
    mode: AuthMode,
    form: &CredentialsForm,
) -> Result<Profile, FieldErrors> {
    let mut errors = FieldErrors::new();

    if mode == AuthMode::Register && form.name.trim().chars().count() < 2 {
        errors.insert("name", "Name must be at least 2 characters long");
    }

    if !is_valid_email(&form.email) {
        errors.insert("email", "Please enter a valid email address");
    }

    if form.password.chars().count() < 6 {
        errors.insert("password", "Password must be at least 6 characters long");
    }

    if mode == AuthMode::Register && form.confirm != form.password {
        errors.insert("confirm", "Passwords do not match");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Profile {
        name: match mode {
            AuthMode::Register => Some(form.name.trim().to_string()),
            AuthMode::Login => None,
        },
        email: form.email.clone(),
    })
}

/// The permissive shape check used by the auth forms: something before the
/// @, something after, and a dot with text on both sides. Not RFC
/// validation.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }

    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
