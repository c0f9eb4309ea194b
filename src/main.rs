//! bankdesk main entry point

mod console;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::bail;
use bankdesk_app::Shell;
use bankdesk_client::{
    ApiClient, DirFragments, EmbeddedFragments, FragmentSourceRef, HttpFragments, HyperTransport, TransportRef,
};
use bankdesk_config::{Config, ConfigResult};
use bankdesk_core::{FileSessionStore, UserSession};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use console::{parse_command, Command, HELP};

#[derive(Parser, Debug)]
#[command(name = "bankdesk")]
#[command(version = "0.1.0")]
#[command(about = "Back-office banking client over a JSON API", long_about = None)]
struct Args {
    /// Configuration file path; defaults apply when it does not exist
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// API base URL, overrides the configuration
    #[arg(long)]
    api: Option<String>,

    /// Directory (or http:// URL) serving view fragments
    #[arg(long)]
    views: Option<PathBuf>,

    /// Write a default configuration to the --config path and exit
    #[arg(long)]
    init: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.init {
        if let Err(e) = Config::write_default(&args.config) {
            bail!("{}", e.to_details());
        }
        println!("wrote default configuration to {}", args.config.display());
        return Ok(());
    }

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => bail!("failed to load {}\n{}", args.config.display(), e.to_details()),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.logging.level)).init();
    log::info!("using API at {}", config.api_base());

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(run(config))
}

/// Config file (or defaults) with command-line overrides applied
fn load_config(args: &Args) -> ConfigResult<Config> {
    let mut config = Config::load_or_default(&args.config)?;
    if let Some(api) = &args.api {
        config.api.base_url = api.clone();
    }
    if let Some(views) = &args.views {
        config.views.dir = Some(views.clone());
    }
    config.validate()?;
    Ok(config)
}

fn fragment_source(dir: Option<&Path>, transport: &TransportRef) -> FragmentSourceRef {
    match dir {
        Some(dir) => match dir.to_str().filter(|d| d.starts_with("http://")) {
            Some(url) => Arc::new(HttpFragments::new(transport.clone(), url)),
            None => Arc::new(DirFragments::new(dir)),
        },
        None => Arc::new(EmbeddedFragments),
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let transport: TransportRef = Arc::new(HyperTransport::new());
    let api = ApiClient::new(transport.clone(), config.api_base());
    let fragments = fragment_source(config.views.dir.as_deref(), &transport);
    let session = UserSession::new(Box::new(FileSessionStore::new(&config.session.dir)), &config.session.key);

    let mut shell = Shell::new(api, fragments, session, config.ui.clone());
    shell.start().await;
    println!("{}", shell.page());
    println!("type 'help' for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(Command::Events(events)) => {
                        for event in events {
                            shell.dispatch(event).await;
                        }
                        println!("{}", shell.page());
                    }
                    Ok(Command::Wait(duration)) => {
                        let deadline = tokio::time::sleep(duration);
                        tokio::pin!(deadline);
                        loop {
                            tokio::select! {
                                _ = &mut deadline => break,
                                Some(event) = shell.next_event() => shell.dispatch(event).await,
                            }
                        }
                        println!("{}", shell.page());
                    }
                    Ok(Command::Show) => println!("{}", shell.page()),
                    Ok(Command::Help) => println!("{}", HELP),
                    Ok(Command::Quit) => break,
                    Ok(Command::Nothing) => {}
                    Err(e) => eprintln!("{}", e),
                }
            }
            Some(event) = shell.next_event() => shell.dispatch(event).await,
        }
    }

    log::info!("bye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_without_file() {
        let args = Args::parse_from(["bankdesk", "--config", "/nonexistent/bank.yaml", "--api", "http://bank:9000/api/"]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.api.base_url, "http://bank:9000/api/");
    }

    #[test]
    fn test_bad_override_is_rejected() {
        let args = Args::parse_from(["bankdesk", "--config", "/nonexistent/bank.yaml", "--api", "ftp://bank"]);
        let err = load_config(&args).unwrap_err();
        let details = err.to_details().to_string();
        assert!(details.contains("api.base_url"));
        assert!(details.contains("Base URL must start with http://"));
    }
}
