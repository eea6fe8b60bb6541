mod commands;
mod terminal;

use anyhow::Context;
use commands::{CommandLine, Mode, list, members};
use console::Term;
use sgquery_common::config::{self, Config};
use sgquery_common::fail;
use sgquery_core::gateway::ApiGateway;
use terminal::print;

#[tokio::main]
async fn main() {
    let commands = CommandLine::parse_args();

    terminal::logging::init(commands.quiet);
    print::banner(commands.quiet);

    if let Err(err) = run(commands).await {
        fail!("{err:#}");
        std::process::exit(1);
    }
}

async fn run(commands: CommandLine) -> anyhow::Result<()> {
    let password = match &commands.password {
        Some(password) => password.clone(),
        None => prompt_password()?,
    };

    let cfg = Config {
        host: commands.manager.clone(),
        username: commands.user.clone(),
        password,
        scope: config::DEFAULT_SCOPE.to_string(),
        show_ipv6: !commands.no_ipv6,
        quiet: commands.quiet,
    };

    let gateway = ApiGateway::new(&cfg)?;

    match commands.mode() {
        Mode::List => list::run(&gateway, &cfg).await,
        Mode::Resolve(name) => members::run(&gateway, &cfg, &name).await,
    }
}

fn prompt_password() -> anyhow::Result<String> {
    let term: Term = Term::stderr();
    term.write_str("NSX Manager password: ")
        .context("writing the password prompt")?;
    let password = term
        .read_secure_line()
        .context("reading the password from the terminal")?;
    Ok(password)
}
