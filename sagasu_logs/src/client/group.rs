use anyhow::{Context, Result};
use async_trait::async_trait;
use cloudwatchlogs::error::{ProvideErrorMetadata, SdkError};

use super::*;

const PAGE_SIZE: i32 = 50;

#[async_trait]
impl GroupsClient for Client {
    async fn get_group_names(&self) -> Result<GetGroupsOutput> {
        log::debug!("get group names");
        let mut items: Vec<String> = vec![];
        let mut next_token: Option<String> = None;
        loop {
            let res = self
                .client
                .describe_log_groups()
                .limit(PAGE_SIZE)
                .set_next_token(next_token.clone())
                .send()
                .await;
            if let Err(SdkError::ServiceError(ref err)) = res {
                if err.err().code() == Some("ThrottlingException") {
                    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
                    continue;
                }
            }

            let res = res.context("DescribeLogGroups failed.")?;

            items.extend(
                res.log_groups
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|g| g.log_group_name),
            );

            // No token on the page means there is no next page.
            if res.next_token.is_none() {
                return Ok(GetGroupsOutput { items });
            }

            next_token = res.next_token;

            log::debug!("nextToken is {:?}", &next_token);
        }
    }
}
