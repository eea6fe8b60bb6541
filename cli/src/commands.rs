pub mod list;
pub mod members;

use clap::{ArgGroup, Parser};

#[derive(Parser)]
#[command(name = "sgquery")]
#[command(version, about = "Queries an NSX manager for the members of a security group.")]
#[command(group(ArgGroup::new("mode").required(true).args(["group", "list"])))]
pub struct CommandLine {
    /// NSX manager hostname, FQDN or IP address
    #[arg(short = 'n', long = "manager", env = "SGQUERY_MANAGER", value_name = "HOST")]
    pub manager: String,

    /// NSX manager username
    #[arg(short = 'u', long = "user", default_value = "admin", value_name = "USER")]
    pub user: String,

    /// NSX manager password; prompted for interactively when not supplied
    #[arg(
        short = 'p',
        long = "password",
        env = "SGQUERY_PASSWORD",
        hide_env_values = true,
        value_name = "PASSWORD"
    )]
    pub password: Option<String>,

    /// Resolve the membership of one security group
    #[arg(short = 's', long = "sg", value_name = "NAME")]
    pub group: Option<String>,

    /// List every security group in the scope
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Hide IPv6 addresses in the IP address section
    #[arg(long = "no-ipv6")]
    pub no_ipv6: bool,

    /// Suppress the banner and status lines, tables only
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

pub enum Mode {
    List,
    Resolve(String),
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The mode group guarantees exactly one of `--sg` and `--list` is set.
    pub fn mode(&self) -> Mode {
        match &self.group {
            Some(name) => Mode::Resolve(name.clone()),
            None => Mode::List,
        }
    }
}
