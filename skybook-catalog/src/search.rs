use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use skybook_core::{FlightRecord, SearchQuery};

use crate::catalog::FlightCatalog;
use crate::latency::LatencySimulator;

/// Data-access seam for flight records
#[async_trait]
pub trait FlightSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<FlightRecord>, SearchError>;
}

#[async_trait]
impl FlightSource for FlightCatalog {
    async fn fetch_all(&self) -> Result<Vec<FlightRecord>, SearchError> {
        Ok(self.records().to_vec())
    }
}

/// Runs validated queries against a flight source after a simulated
/// latency pause.
pub struct SearchService {
    source: Arc<dyn FlightSource>,
    latency: Arc<dyn LatencySimulator>,
}

impl SearchService {
    pub fn new(source: Arc<dyn FlightSource>, latency: Arc<dyn LatencySimulator>) -> Self {
        Self { source, latency }
    }

    /// Case-insensitive substring match on origin and destination, in
    /// catalog order. `Ok` with an empty vec means no matches; `Err`
    /// means the source itself failed.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<FlightRecord>, SearchError> {
        self.latency.simulate().await;

        let records = self.source.fetch_all().await?;

        let origin = query.origin.to_lowercase();
        let destination = query.destination.to_lowercase();

        let results: Vec<FlightRecord> = records
            .into_iter()
            .filter(|flight| {
                flight.origin.to_lowercase().contains(&origin)
                    && flight.destination.to_lowercase().contains(&destination)
            })
            .collect();

        debug!(
            origin = %query.origin,
            destination = %query.destination,
            matches = results.len(),
            "search complete"
        );

        Ok(results)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Flight source unavailable: {0}")]
    SourceUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latency::NoLatency;
    use chrono::NaiveDate;
    use skybook_core::{Passengers, TravelClass};

    fn query(origin: &str, destination: &str) -> SearchQuery {
        SearchQuery {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date: NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
            return_date: None,
            passengers: Passengers::One,
            travel_class: TravelClass::Economy,
        }
    }

    fn service() -> SearchService {
        SearchService::new(Arc::new(FlightCatalog::seed()), Arc::new(NoLatency))
    }

    #[tokio::test]
    async fn test_search_matches_route() {
        let results = service().search(&query("New York", "London")).await.unwrap();

        let ids: Vec<u32> = results.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let service = service();

        let exact = service.search(&query("New York", "London")).await.unwrap();
        let mixed = service.search(&query("new york", "LONDON")).await.unwrap();
        assert_eq!(exact, mixed);
    }

    #[tokio::test]
    async fn test_search_matches_substrings() {
        let results = service().search(&query("york", "lon")).await.unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_search_unknown_route_is_empty() {
        let results = service().search(&query("Madrid", "Oslo")).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_search_requires_both_legs_to_match() {
        // Origin matches two records, destination matches none of them
        let results = service().search(&query("New York", "Tokyo")).await.unwrap();
        assert!(results.is_empty());
    }

    struct FailingSource;

    #[async_trait]
    impl FlightSource for FailingSource {
        async fn fetch_all(&self) -> Result<Vec<FlightRecord>, SearchError> {
            Err(SearchError::SourceUnavailable("catalog offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_source_fault_surfaces_as_error() {
        let service = SearchService::new(Arc::new(FailingSource), Arc::new(NoLatency));

        let result = service.search(&query("New York", "London")).await;
        assert!(matches!(result, Err(SearchError::SourceUnavailable(_))));
    }
}
