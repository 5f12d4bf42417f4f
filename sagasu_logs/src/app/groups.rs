use std::collections::BTreeSet;

use anyhow::Result;
use regex::Regex;

use crate::{client::GroupsClient, models::GroupPattern};

/// Resolves group-name patterns into the concrete, sorted set of group
/// names. Enumerating the whole namespace is slow, so the remote listing is
/// consulted only when a wildcard forces it; plain names pass through as
/// they are.
pub async fn resolve_group_names<C: GroupsClient>(
    client: &C,
    patterns: &[String],
) -> Result<Vec<String>> {
    // No patterns at all means "everything".
    let patterns: Vec<GroupPattern> = if patterns.is_empty() {
        vec![GroupPattern::new("*")]
    } else {
        patterns.iter().map(GroupPattern::new).collect()
    };

    if patterns.iter().all(|p| !p.has_wildcard()) {
        let names: BTreeSet<String> = patterns
            .into_iter()
            .map(|p| p.as_str().to_owned())
            .collect();
        return Ok(names.into_iter().collect());
    }

    let matchers = patterns
        .iter()
        .map(|p| p.to_regex())
        .collect::<Result<Vec<Regex>>>()?;

    let listing = client.get_group_names().await?;
    log::debug!("listed {} log groups", listing.items.len());

    let names: BTreeSet<String> = listing
        .items
        .into_iter()
        .filter(|name| matchers.iter().any(|re| re.is_match(name)))
        .collect();

    Ok(names.into_iter().collect())
}
