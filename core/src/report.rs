//! Orchestration of the membership-resolution pipeline.
//!
//! All fetches run sequentially on the caller's task; the first failure
//! aborts the invocation, so a report is either complete or absent.

use sgquery_common::config::Config;
use sgquery_common::error::QueryError;
use sgquery_common::model::{IpMember, MembershipReport, SecurityGroup};

use crate::extract;
use crate::gateway::{self, Transport};
use crate::resolver;

/// Fetches the full catalog for the configured scope, in server order.
pub async fn list_groups(
    transport: &dyn Transport,
    cfg: &Config,
) -> Result<Vec<SecurityGroup>, QueryError> {
    let body = transport.fetch(&gateway::catalog_path(&cfg.scope)).await?;
    extract::security_groups(&body)
}

/// Resolves `name` and gathers its three membership categories.
///
/// Fetch order is fixed: static includes, then IP translation, then VM
/// translation, matching the order the sections print in.
pub async fn build_report(
    transport: &dyn Transport,
    cfg: &Config,
    name: &str,
) -> Result<MembershipReport, QueryError> {
    let group_id = resolver::resolve_group_id(transport, cfg, name).await?;

    let body = transport.fetch(&gateway::group_path(&group_id)).await?;
    let static_members = extract::static_members(&body)?;

    let body = transport.fetch(&gateway::ip_translation_path(&group_id)).await?;
    let ip_members = visible_ips(extract::ip_members(&body)?, cfg.show_ipv6);

    let body = transport.fetch(&gateway::vm_translation_path(&group_id)).await?;
    let vm_members = extract::vm_members(&body)?;

    Ok(MembershipReport {
        group_id,
        static_members,
        ip_members,
        vm_members,
    })
}

/// Applies the IPv6 display flag.
///
/// With the flag off, only addresses that parsed as IPv6 literals are
/// dropped; malformed strings stay visible rather than being guessed at.
pub fn visible_ips(members: Vec<IpMember>, show_ipv6: bool) -> Vec<IpMember> {
    if show_ipv6 {
        return members;
    }
    members.into_iter().filter(|member| !member.is_ipv6).collect()
}
