mod groups;
mod query;

pub use groups::*;
pub use query::*;

use std::time::Duration;

use anyhow::{bail, Result};

use crate::{
    client::{GroupsClient, QueryClient, QueryStatus, StartQueryInput},
    models::TimeParser,
    option::Opt,
};

const POLL_INTERVAL: Duration = Duration::from_secs(3);

pub async fn run<C>(client: &C, opt: Opt) -> Result<()>
where
    C: GroupsClient + QueryClient,
{
    let group_names = resolve_group_names(client, &opt.groups).await?;

    let query_string = match (opt.query.as_ref(), opt.time.get(0)) {
        (Some(query), Some(_)) => query.clone(),
        _ => {
            for name in &group_names {
                println!("{}", name);
            }
            return Ok(());
        }
    };

    if group_names.is_empty() {
        bail!("no log groups matched the given patterns.");
    }

    let parser = TimeParser::now();
    let start = parser.parse(opt.time.get(0).map(String::as_str))?;
    let end = parser.parse(opt.time.get(1).map(String::as_str))?;

    println!(
        "Search for logs from {} to {}.",
        start.to_rfc3339(),
        end.to_rfc3339()
    );

    let input = StartQueryInput {
        start: start.timestamp(),
        end: end.timestamp(),
        query_string,
        groups: group_names,
    };

    let results = run_query(client, input, POLL_INTERVAL).await?;

    println!(
        "Records matched {}, Records scanned: {}",
        results.records_matched, results.records_scanned
    );

    for row in &results.rows {
        let line = row
            .iter()
            .map(|entry| entry.value.trim())
            .collect::<Vec<_>>()
            .join(", ");
        match &opt.separator {
            Some(separator) => println!("{}{}", separator, line),
            None => println!("{}", line),
        }
    }

    if results.status != QueryStatus::Complete {
        bail!("query ended with status {:?}.", results.status);
    }

    Ok(())
}
