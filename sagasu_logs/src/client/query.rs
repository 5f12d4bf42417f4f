use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use cloudwatchlogs::types::ResultField;

use super::*;

#[async_trait]
impl QueryClient for Client {
    async fn start_query(&self, input: StartQueryInput) -> Result<QueryId> {
        log::trace!("start query");
        // The list of log groups to be queried. You can include up to 50 log groups.
        // See also https://docs.aws.amazon.com/AmazonCloudWatchLogs/latest/APIReference/API_StartQuery.html
        let res = self
            .client
            .start_query()
            .set_log_group_names(Some(input.groups))
            .start_time(input.start)
            .end_time(input.end)
            .query_string(input.query_string)
            .send()
            .await
            .context("StartQuery failed.")?;
        log::trace!("start query response is {:?}", res);
        res.query_id
            .map(QueryId::new)
            .ok_or_else(|| anyhow!("there is no query id."))
    }

    async fn get_query_results(&self, query_id: &QueryId) -> Result<QueryResults> {
        log::trace!("get query results");
        let res = self
            .client
            .get_query_results()
            .query_id(query_id)
            .send()
            .await
            .context("GetQueryResults failed.")?;

        let status = res
            .status
            .as_ref()
            .map(|s| QueryStatus::from(s.as_str()))
            .unwrap_or(QueryStatus::Unknown);
        log::trace!("response status is {:?}", &status);

        let (records_matched, records_scanned) = res
            .statistics
            .map(|s| (s.records_matched as u64, s.records_scanned as u64))
            .unwrap_or_default();

        let rows = res
            .results
            .unwrap_or_default()
            .into_iter()
            .map(row_entries)
            .collect();

        Ok(QueryResults {
            status,
            records_matched,
            records_scanned,
            rows,
        })
    }
}

fn row_entries(row: Vec<ResultField>) -> Vec<ResultEntry> {
    row.into_iter()
        .filter_map(|field| {
            Some(ResultEntry {
                field: field.field?,
                value: field.value?,
            })
        })
        .collect()
}
