#![cfg(test)]
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use sgquery_common::config::Config;
use sgquery_common::error::QueryError;
use sgquery_core::gateway::Transport;
use sgquery_core::report;

const CATALOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<list>
  <securitygroup>
    <objectId>securitygroup-10</objectId>
    <name>app-tier</name>
    <description>Application servers</description>
  </securitygroup>
  <securitygroup>
    <objectId>securitygroup-11</objectId>
    <name>web-tier</name>
  </securitygroup>
</list>"#;

const STATIC_INCLUDES: &str = r#"<securitygroup>
  <objectId>securitygroup-10</objectId>
  <name>app-tier</name>
  <member>
    <objectId>vm-5</objectId>
    <objectTypeName>VirtualMachine</objectTypeName>
    <name>app-01</name>
  </member>
</securitygroup>"#;

const IP_TRANSLATION: &str = r#"<ipNodes>
  <ipNode>
    <ipAddresses>
      <string>192.168.1.5</string>
    </ipAddresses>
  </ipNode>
</ipNodes>"#;

const VM_TRANSLATION: &str = r#"<vmnodes>
  <vmnode>
    <vmId>vm-5</vmId>
    <vmName>app-01</vmName>
  </vmnode>
</vmnodes>"#;

/// Serves canned response bodies by relative path and records every call,
/// standing in for a manager on the network.
struct FakeTransport {
    responses: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl FakeTransport {
    fn new(responses: &[(&str, &str)]) -> Self {
        Self {
            responses: responses
                .iter()
                .map(|(path, body)| (path.to_string(), body.to_string()))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn fetch(&self, path: &str) -> Result<String, QueryError> {
        self.calls.lock().unwrap().push(path.to_string());
        self.responses.get(path).cloned().ok_or_else(|| {
            QueryError::transport("fake-manager", path, Some(404), "HTTP 404 Not Found")
        })
    }
}

fn config(show_ipv6: bool) -> Config {
    Config {
        host: "fake-manager".to_string(),
        username: "admin".to_string(),
        password: "secret".to_string(),
        scope: "globalroot-0".to_string(),
        show_ipv6,
        quiet: true,
    }
}

#[tokio::test]
async fn report_gathers_all_three_member_categories() {
    let transport = FakeTransport::new(&[
        ("securitygroup/scope/globalroot-0", CATALOG),
        ("securitygroup/securitygroup-10", STATIC_INCLUDES),
        (
            "securitygroup/securitygroup-10/translation/ipaddresses",
            IP_TRANSLATION,
        ),
        (
            "securitygroup/securitygroup-10/translation/virtualmachines",
            VM_TRANSLATION,
        ),
    ]);

    let report = report::build_report(&transport, &config(true), "app-tier")
        .await
        .expect("report should build");

    assert_eq!(report.group_id, "securitygroup-10");

    assert_eq!(report.static_members.len(), 1);
    assert_eq!(report.static_members[0].object_id, "vm-5");
    assert_eq!(report.static_members[0].object_type, "VirtualMachine");
    assert_eq!(report.static_members[0].name, "app-01");

    assert_eq!(report.ip_members.len(), 1);
    assert_eq!(report.ip_members[0].address, "192.168.1.5");

    assert_eq!(report.vm_members.len(), 1);
    assert_eq!(report.vm_members[0].object_id, "vm-5");
    assert_eq!(report.vm_members[0].name, "app-01");
}

#[tokio::test]
async fn membership_fetches_run_in_section_order() {
    let transport = FakeTransport::new(&[
        ("securitygroup/scope/globalroot-0", CATALOG),
        ("securitygroup/securitygroup-10", STATIC_INCLUDES),
        (
            "securitygroup/securitygroup-10/translation/ipaddresses",
            IP_TRANSLATION,
        ),
        (
            "securitygroup/securitygroup-10/translation/virtualmachines",
            VM_TRANSLATION,
        ),
    ]);

    report::build_report(&transport, &config(true), "app-tier")
        .await
        .expect("report should build");

    assert_eq!(
        transport.calls(),
        [
            "securitygroup/scope/globalroot-0",
            "securitygroup/securitygroup-10",
            "securitygroup/securitygroup-10/translation/ipaddresses",
            "securitygroup/securitygroup-10/translation/virtualmachines",
        ]
    );
}

#[tokio::test]
async fn unknown_group_fails_before_any_membership_fetch() {
    let transport = FakeTransport::new(&[("securitygroup/scope/globalroot-0", CATALOG)]);

    let err = report::build_report(&transport, &config(true), "db-tier")
        .await
        .expect_err("resolution should fail");

    assert!(matches!(err, QueryError::GroupNotFound(name) if name == "db-tier"));
    assert_eq!(transport.calls(), ["securitygroup/scope/globalroot-0"]);
}

#[tokio::test]
async fn resolution_is_case_sensitive() {
    let transport = FakeTransport::new(&[("securitygroup/scope/globalroot-0", CATALOG)]);

    let err = report::build_report(&transport, &config(true), "App-Tier")
        .await
        .expect_err("resolution should fail");

    assert!(matches!(err, QueryError::GroupNotFound(_)));
}

#[tokio::test]
async fn hidden_ipv6_addresses_are_filtered_from_the_report() {
    let mixed_ips = r#"<ipNodes>
      <ipNode>
        <string>10.0.0.1</string>
        <string>2001:db8::1</string>
        <string>not-an-ip</string>
      </ipNode>
    </ipNodes>"#;

    let transport = FakeTransport::new(&[
        ("securitygroup/scope/globalroot-0", CATALOG),
        ("securitygroup/securitygroup-10", STATIC_INCLUDES),
        (
            "securitygroup/securitygroup-10/translation/ipaddresses",
            mixed_ips,
        ),
        (
            "securitygroup/securitygroup-10/translation/virtualmachines",
            VM_TRANSLATION,
        ),
    ]);

    let report = report::build_report(&transport, &config(false), "app-tier")
        .await
        .expect("report should build");

    let addresses: Vec<&str> = report
        .ip_members
        .iter()
        .map(|member| member.address.as_str())
        .collect();
    assert_eq!(addresses, ["10.0.0.1", "not-an-ip"]);
}

#[tokio::test]
async fn list_groups_preserves_server_order() {
    let transport = FakeTransport::new(&[("securitygroup/scope/globalroot-0", CATALOG)]);

    let groups = report::list_groups(&transport, &config(true))
        .await
        .expect("catalog should parse");

    let names: Vec<&str> = groups.iter().map(|group| group.name.as_str()).collect();
    assert_eq!(names, ["app-tier", "web-tier"]);
    assert_eq!(groups[1].description, "");
}

#[tokio::test]
async fn transport_failure_mid_pipeline_aborts_the_report() {
    // Catalog and static includes answer, the IP translation does not.
    let transport = FakeTransport::new(&[
        ("securitygroup/scope/globalroot-0", CATALOG),
        ("securitygroup/securitygroup-10", STATIC_INCLUDES),
    ]);

    let err = report::build_report(&transport, &config(true), "app-tier")
        .await
        .expect_err("missing endpoint should be fatal");

    assert!(matches!(err, QueryError::Transport { status: Some(404), .. }));
    assert_eq!(transport.calls().len(), 3);
}
