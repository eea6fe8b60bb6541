//! Name to identifier resolution over the security group catalog.

use sgquery_common::config::Config;
use sgquery_common::error::QueryError;
use sgquery_common::model::SecurityGroup;

use crate::extract;
use crate::gateway::{self, Transport};

/// Fetches the catalog once and resolves `name` to its group identifier.
///
/// Fails with [`QueryError::GroupNotFound`] before any membership fetch
/// when no catalog entry matches.
pub async fn resolve_group_id(
    transport: &dyn Transport,
    cfg: &Config,
    name: &str,
) -> Result<String, QueryError> {
    let body = transport.fetch(&gateway::catalog_path(&cfg.scope)).await?;
    let catalog = extract::security_groups(&body)?;

    match find_group(&catalog, name) {
        Some(id) => Ok(id.to_string()),
        None => Err(QueryError::GroupNotFound(name.to_string())),
    }
}

/// Linear scan for an exact, case-sensitive name match.
///
/// Names are unique per scope; should a malformed catalog carry duplicates
/// anyway, the first entry in document order wins.
pub fn find_group<'a>(catalog: &'a [SecurityGroup], name: &str) -> Option<&'a str> {
    catalog
        .iter()
        .find(|group| group.name == name)
        .map(|group| group.id.as_str())
}
