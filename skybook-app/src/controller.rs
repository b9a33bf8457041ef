use chrono::NaiveDate;
use tokio::sync::watch;
use tracing::{error, info};

use skybook_catalog::SearchService;
use skybook_core::{
    confirm_booking, validate_credentials, validate_search, AuthMode, CredentialsForm,
    FieldErrors, SearchForm,
};
use skybook_store::SessionStore;

use crate::state::{AppSnapshot, ResultsPane};

/// Drives every state transition. Owns the services and publishes
/// immutable snapshots on a watch channel; the view (and the tests)
/// subscribe and redraw on change.
pub struct AppController {
    search: SearchService,
    sessions: SessionStore,
    snapshot: AppSnapshot,
    tx: watch::Sender<AppSnapshot>,
}

impl AppController {
    pub fn new(search: SearchService, sessions: SessionStore) -> Self {
        let snapshot = AppSnapshot {
            user: sessions.current().cloned(),
            ..AppSnapshot::default()
        };
        let (tx, _) = watch::channel(snapshot.clone());

        Self {
            search,
            sessions,
            snapshot,
            tx,
        }
    }

    /// Subscribe to snapshot changes
    pub fn subscribe(&self) -> watch::Receiver<AppSnapshot> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> &AppSnapshot {
        &self.snapshot
    }

    fn publish(&mut self, next: AppSnapshot) {
        self.snapshot = next;
        // No receiver is fine; the loop reads the latest value per event
        let _ = self.tx.send(self.snapshot.clone());
    }

    /// Validate and run a search. Validation failures surface as per-field
    /// errors and leave the results pane untouched; a source fault is
    /// logged and rendered as the empty state.
    pub async fn submit_search(&mut self, form: SearchForm, today: NaiveDate) {
        let query = match validate_search(&form, today) {
            Ok(query) => query,
            Err(errors) => {
                let mut next = self.snapshot.clone();
                next.search_errors = errors;
                next.notice = None;
                next.focus_results = false;
                self.publish(next);
                return;
            }
        };

        let flights = match self.search.search(&query).await {
            Ok(flights) => flights,
            Err(e) => {
                error!("Error fetching flights: {}", e);
                Vec::new()
            }
        };

        let mut next = self.snapshot.clone();
        next.query = Some(query);
        next.results = ResultsPane::Visible { flights };
        next.search_errors = FieldErrors::new();
        next.notice = None;
        next.focus_results = true;
        self.publish(next);
    }

    pub fn submit_login(&mut self, form: CredentialsForm) {
        self.authenticate(AuthMode::Login, form);
    }

    pub fn submit_register(&mut self, form: CredentialsForm) {
        self.authenticate(AuthMode::Register, form);
    }

    fn authenticate(&mut self, mode: AuthMode, form: CredentialsForm) {
        let profile = match validate_credentials(mode, &form) {
            Ok(profile) => profile,
            Err(errors) => {
                let mut next = self.snapshot.clone();
                next.auth_errors = errors;
                next.notice = None;
                self.publish(next);
                return;
            }
        };

        let named = profile.name.is_some();
        let session = match self.sessions.login(profile) {
            Ok(session) => session,
            Err(e) => {
                // Worst case is a no-op: the user stays logged out
                error!("Failed to persist session: {}", e);
                return;
            }
        };

        info!(user_id = session.id, "User logged in");

        let mut next = self.snapshot.clone();
        next.notice = Some(if named {
            format!("Welcome, {}!", session.name)
        } else {
            "Welcome!".to_string()
        });
        next.user = Some(session);
        next.auth_errors = FieldErrors::new();
        self.publish(next);
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.sessions.logout() {
            error!("Failed to clear persisted session: {}", e);
        }

        let mut next = self.snapshot.clone();
        next.user = None;
        next.notice = None;
        self.publish(next);
    }

    /// Confirm a booking against the currently displayed results. A stale
    /// id changes nothing.
    pub fn book(&mut self, flight_id: u32) {
        let flights = match self.snapshot.results.flights() {
            Some(flights) => flights,
            None => return,
        };

        if let Some(confirmation) = confirm_booking(flight_id, flights) {
            info!(flight_id, "Booking confirmed");

            let mut next = self.snapshot.clone();
            next.notice = Some(confirmation.to_string());
            next.focus_results = false;
            self.publish(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;
    use skybook_catalog::{FlightCatalog, NoLatency, SearchService};
    use skybook_store::{LocalStorage, SessionStore};

    fn controller(dir: &std::path::Path) -> AppController {
        let sessions = SessionStore::open(LocalStorage::open(dir).unwrap());
        let search = SearchService::new(Arc::new(FlightCatalog::seed()), Arc::new(NoLatency));
        AppController::new(search, sessions)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn search_form() -> SearchForm {
        SearchForm {
            origin: "New York".to_string(),
            destination: "London".to_string(),
            departure_date: Some(date(2030, 6, 1)),
            return_date: None,
            passengers: Some(skybook_core::Passengers::Two),
            travel_class: Some(skybook_core::TravelClass::Economy),
        }
    }

    #[tokio::test]
    async fn test_search_publishes_results_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller(dir.path());
        let rx = controller.subscribe();

        controller.submit_search(search_form(), date(2026, 8, 7)).await;

        let snapshot = rx.borrow();
        let flights = snapshot.results.flights().unwrap();
        assert_eq!(flights.len(), 2);
        assert!(snapshot.focus_results);
        assert!(snapshot.search_errors.is_empty());
        assert_eq!(snapshot.query.as_ref().unwrap().origin, "New York");
    }

    #[tokio::test]
    async fn test_invalid_search_keeps_results_hidden() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller(dir.path());

        controller
            .submit_search(SearchForm::default(), date(2026, 8, 7))
            .await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.results, ResultsPane::Hidden);
        assert!(!snapshot.search_errors.is_empty());
        assert!(!snapshot.focus_results);
    }

    #[tokio::test]
    async fn test_login_and_logout_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller(dir.path());

        controller.submit_register(CredentialsForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "abc123".to_string(),
            confirm: "abc123".to_string(),
        });

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.user.as_ref().unwrap().name, "Ada");
        assert_eq!(snapshot.notice.as_deref(), Some("Welcome, Ada!"));

        controller.logout();
        assert!(controller.snapshot().user.is_none());
    }

    #[tokio::test]
    async fn test_login_without_name_gets_plain_welcome() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller(dir.path());

        controller.submit_login(CredentialsForm {
            email: "ada@example.com".to_string(),
            password: "abc123".to_string(),
            ..CredentialsForm::default()
        });

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.user.as_ref().unwrap().name, "User");
        assert_eq!(snapshot.notice.as_deref(), Some("Welcome!"));
    }

    #[tokio::test]
    async fn test_invalid_credentials_publish_field_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller(dir.path());

        controller.submit_login(CredentialsForm {
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            ..CredentialsForm::default()
        });

        let snapshot = controller.snapshot();
        assert!(snapshot.user.is_none());
        assert_eq!(snapshot.auth_errors.len(), 2);
    }

    #[tokio::test]
    async fn test_booking_stale_id_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller(dir.path());

        controller.submit_search(search_form(), date(2026, 8, 7)).await;
        let before = controller.snapshot().clone();

        controller.book(999);
        assert_eq!(controller.snapshot(), &before);
    }

    #[tokio::test]
    async fn test_booking_displayed_flight_sets_notice() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller(dir.path());

        controller.submit_search(search_form(), date(2026, 8, 7)).await;
        controller.book(1);

        let notice = controller.snapshot().notice.clone().unwrap();
        assert!(notice.contains("SkyWings Airlines"));
        assert!(notice.contains("New York → London"));
    }

    #[tokio::test]
    async fn test_booking_before_any_search_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller(dir.path());

        controller.book(1);
        assert!(controller.snapshot().notice.is_none());
    }
}
