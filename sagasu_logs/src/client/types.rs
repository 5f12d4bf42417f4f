use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, PartialEq, Clone)]
pub struct QueryId(String);

impl QueryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&QueryId> for String {
    fn from(id: &QueryId) -> String {
        id.0.clone()
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct GetGroupsOutput {
    pub items: Vec<String>,
}

#[async_trait]
pub trait GroupsClient {
    async fn get_group_names(&self) -> Result<GetGroupsOutput>;
}

#[derive(Debug, PartialEq, Clone)]
pub struct StartQueryInput {
    pub start: i64,
    pub end: i64,
    pub query_string: String,
    pub groups: Vec<String>,
}

/// Where a query stands, as reported by the service. `Scheduled` on the wire
/// folds into `Running`; both mean "poll again".
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum QueryStatus {
    Running,
    Complete,
    Failed,
    Cancelled,
    Timeout,
    Unknown,
}

impl QueryStatus {
    pub fn is_terminal(self) -> bool {
        self != QueryStatus::Running
    }
}

impl From<&str> for QueryStatus {
    fn from(status: &str) -> Self {
        match status {
            "Running" | "Scheduled" => QueryStatus::Running,
            "Complete" => QueryStatus::Complete,
            "Failed" => QueryStatus::Failed,
            "Cancelled" => QueryStatus::Cancelled,
            "Timeout" => QueryStatus::Timeout,
            _ => QueryStatus::Unknown,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct ResultEntry {
    pub field: String,
    pub value: String,
}

#[derive(Debug, PartialEq, Clone)]
pub struct QueryResults {
    pub status: QueryStatus,
    pub records_matched: u64,
    pub records_scanned: u64,
    pub rows: Vec<Vec<ResultEntry>>,
}

#[async_trait]
pub trait QueryClient {
    async fn start_query(&self, input: StartQueryInput) -> Result<QueryId>;
    async fn get_query_results(&self, query_id: &QueryId) -> Result<QueryResults>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduled_is_still_running() {
        assert_eq!(QueryStatus::from("Scheduled"), QueryStatus::Running);
        assert!(!QueryStatus::from("Running").is_terminal());
    }

    #[test]
    fn every_other_status_is_terminal() {
        for status in ["Complete", "Failed", "Cancelled", "Timeout", "Borked"] {
            assert!(QueryStatus::from(status).is_terminal(), "{}", status);
        }
    }
}
