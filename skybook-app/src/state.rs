use skybook_core::{FieldErrors, FlightRecord, SearchQuery, UserSession};

/// What the results section is showing
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResultsPane {
    /// No completed search yet; the section is not rendered
    #[default]
    Hidden,
    /// A search completed; its results are displayed (possibly none)
    Visible { flights: Vec<FlightRecord> },
}

impl ResultsPane {
    /// The currently displayed flights, if the pane is visible
    pub fn flights(&self) -> Option<&[FlightRecord]> {
        match self {
            ResultsPane::Hidden => None,
            ResultsPane::Visible { flights } => Some(flights),
        }
    }
}

/// Immutable view state. The controller publishes a fresh snapshot after
/// every transition; nothing else mutates one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppSnapshot {
    pub user: Option<UserSession>,
    /// The active query: the last one that validated and ran
    pub query: Option<SearchQuery>,
    pub results: ResultsPane,
    pub search_errors: FieldErrors,
    pub auth_errors: FieldErrors,
    /// Transient acknowledgment (welcome line, booking confirmation)
    pub notice: Option<String>,
    /// Set right after a search completes so the view jumps to the
    /// results section
    pub focus_results: bool,
}
