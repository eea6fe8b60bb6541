use sgquery_common::config::Config;
use sgquery_common::{info, success, warn};
use sgquery_core::gateway::Transport;
use sgquery_core::report;

use crate::terminal::{print, spinner};

pub async fn run(transport: &dyn Transport, cfg: &Config) -> anyhow::Result<()> {
    info!("Retrieving security groups via API");
    let spinner = spinner::start("Fetching the security group catalog...", cfg.quiet);
    let outcome = report::list_groups(transport, cfg).await;
    spinner.finish_and_clear();

    let groups = outcome?;
    if groups.is_empty() {
        warn!("The scope {} has no security groups", cfg.scope);
    } else {
        success!("Retrieved {} security groups", groups.len());
    }

    print::section("SECURITY GROUPS");
    print::heading("ObjectID", "Security Group Name", "Description");
    print::rule(16, 29, 40);
    for group in &groups {
        print::row(&group.id, &group.name, &group.description);
    }
    Ok(())
}
