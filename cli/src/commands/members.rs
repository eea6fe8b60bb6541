use sgquery_common::config::Config;
use sgquery_common::model::{IpMember, StaticMember, VmMember};
use sgquery_common::{info, success};
use sgquery_core::gateway::Transport;
use sgquery_core::report;

use crate::terminal::{format, print, spinner};

pub async fn run(transport: &dyn Transport, cfg: &Config, name: &str) -> anyhow::Result<()> {
    info!("Resolving membership of '{name}'");
    let spinner = spinner::start("Querying the NSX manager...", cfg.quiet);
    let outcome = report::build_report(transport, cfg, name).await;
    spinner.finish_and_clear();

    let report = outcome?;
    success!("Security group '{}' resolved to {}", name, report.group_id);

    // Fixed section order, and empty sections still print their banner
    // and rule.
    print_static_includes(&report.static_members);
    print_ip_addresses(&report.ip_members);
    print_virtual_machines(&report.vm_members);
    Ok(())
}

fn print_static_includes(members: &[StaticMember]) {
    print::section("STATIC INCLUDES");
    print::heading("ObjectID", "ObjectType", "Name");
    print::rule(17, 30, 40);
    for member in members {
        print::row(
            &format::smart_truncate(&member.object_id, 17),
            &member.object_type,
            &member.name,
        );
    }
}

fn print_ip_addresses(members: &[IpMember]) {
    print::section("IP ADDRESSES");
    print::heading("Addresses", "", "");
    print::rule(50, 0, 0);
    for member in members {
        print::line(&member.address);
    }
}

fn print_virtual_machines(members: &[VmMember]) {
    print::section("VIRTUAL MACHINES");
    print::heading("ObjectID", "VM Name", "");
    print::rule(16, 29, 0);
    for member in members {
        print::row(&member.object_id, &member.name, "");
    }
}
