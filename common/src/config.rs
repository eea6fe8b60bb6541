/// Managed object reference the catalog is queried under.
///
/// Security group identifiers are namespaced per scope, so the same scope
/// must back the catalog fetch and every membership fetch of one invocation.
pub const DEFAULT_SCOPE: &str = "globalroot-0";

/// Process-lifetime configuration, built once at startup and passed by
/// reference into each component. Never re-read from the environment after
/// construction.
pub struct Config {
    /// NSX manager hostname, FQDN or IP address.
    pub host: String,
    /// Basic-auth username for every API call.
    pub username: String,
    /// Basic-auth password for every API call.
    pub password: String,
    /// Scope the security group catalog is enumerated under.
    pub scope: String,
    /// Show IPv6 addresses in the IP address section.
    ///
    /// Addresses that do not parse as an IPv6 literal are always shown.
    pub show_ipv6: bool,
    /// Suppress the banner and status lines, tables only.
    pub quiet: bool,
}
