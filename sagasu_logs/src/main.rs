mod app;
mod client;
mod models;
mod option;

use std::fs::File;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use simplelog::{Config, LevelFilter, WriteLogger};
use structopt::StructOpt;

use client::Client;
use option::{Mode, Opt};

fn setup_logging() -> Result<()> {
    let mut path = get_app_cache_path()?;
    path.push("sagasu.log");
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(path)?);
    Ok(())
}

fn get_app_cache_path() -> Result<PathBuf> {
    let mut path = dirs_next::cache_dir().ok_or_else(|| anyhow!("failed to find os cache dir."))?;
    path.push("sagasu");
    std::fs::create_dir_all(&path)?;
    Ok(path)
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let opt = Opt::from_args();
    if opt.mode() == Mode::Help {
        Opt::clap().print_long_help()?;
        println!();
        return Ok(());
    }

    let shared_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = Client::new(cloudwatchlogs::Client::new(&shared_config));

    app::run(&client, opt).await
}
