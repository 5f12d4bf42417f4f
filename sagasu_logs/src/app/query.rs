use std::time::Duration;

use anyhow::Result;

use crate::client::{QueryClient, QueryResults, StartQueryInput};

/// Submits a query and polls until the service reports a terminal status.
/// The loop is unbounded; a query that never terminates is the service's
/// problem, not ours. `@ptr` bookkeeping fields never leave this function.
pub async fn run_query<C: QueryClient>(
    client: &C,
    input: StartQueryInput,
    poll_interval: Duration,
) -> Result<QueryResults> {
    let query_id = client.start_query(input).await?;
    log::debug!("started query {:?}", query_id);

    loop {
        let mut results = client.get_query_results(&query_id).await?;
        if results.status.is_terminal() {
            for row in &mut results.rows {
                row.retain(|entry| entry.field != "@ptr");
            }
            return Ok(results);
        }
        println!("Waiting for query to complete ...");
        tokio::time::sleep(poll_interval).await;
    }
}
