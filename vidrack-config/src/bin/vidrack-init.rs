//! Interactive bootstrapper that writes the `.env` the server reads.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input, Password, console::Term};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vidrack_config::{
    env_writer::{read_env_map, render_env, write_env_atomically},
    settings::{
        DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_SERVER_HOST,
        DEFAULT_SERVER_PORT,
    },
};

#[derive(Parser)]
#[command(name = "vidrack-init", about = "Vidrack configuration bootstrapper")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate or refresh .env
    Init {
        #[arg(long, default_value = ".env")]
        env_file: PathBuf,
        /// Overwrite an existing .env without asking
        #[arg(long)]
        force: bool,
        /// Print the generated key/value pairs without writing .env
        #[arg(long)]
        print_only: bool,
    },
    /// Show the keys an existing env file defines
    Show {
        #[arg(long, default_value = ".env")]
        env_file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Init {
            env_file,
            force,
            print_only,
        } => run_init(&env_file, force, print_only),
        Command::Show { env_file } => run_show(&env_file),
    }
}

fn run_init(env_file: &PathBuf, force: bool, print_only: bool) -> Result<()> {
    let term = Term::stderr();

    let ffmpeg_ready = Confirm::new()
        .with_prompt("Is ffmpeg installed?")
        .default(true)
        .interact_on(&term)?;
    if !ffmpeg_ready {
        println!("Please install ffmpeg, then re-run vidrack-init.");
        return Ok(());
    }

    let table_ready = Confirm::new()
        .with_prompt("Has the videos table been created on your PostgreSQL instance?")
        .default(true)
        .interact_on(&term)?;
    if !table_ready {
        println!("Run the DDL from the README against your database first.");
    }

    let db_host: String = Input::new()
        .with_prompt("DB_HOST")
        .default(DEFAULT_DB_HOST.to_string())
        .interact_text_on(&term)?;
    let db_user: String = Input::new()
        .with_prompt("DB_USER")
        .interact_text_on(&term)?;
    let db_password = Password::new()
        .with_prompt("DB_PASSWORD (empty for none)")
        .allow_empty_password(true)
        .interact_on(&term)?;
    let db_name: String = Input::new()
        .with_prompt("DB name")
        .default(DEFAULT_DB_NAME.to_string())
        .interact_text_on(&term)?;
    let server_host: String = Input::new()
        .with_prompt("Server host")
        .default(DEFAULT_SERVER_HOST.to_string())
        .interact_text_on(&term)?;
    let server_port: u16 = Input::new()
        .with_prompt("Server port")
        .default(DEFAULT_SERVER_PORT)
        .interact_text_on(&term)?;

    let pairs = [
        ("DB_HOST", db_host),
        ("DB_USER", db_user),
        ("DB_PASSWORD", db_password),
        ("DB", db_name),
        ("SERVER_HOST", server_host),
        ("SERVER_PORT", server_port.to_string()),
    ];
    let rendered = render_env(&pairs);

    if print_only {
        print!("{rendered}");
        return Ok(());
    }

    if env_file.exists() && !force {
        let overwrite = Confirm::new()
            .with_prompt(format!(
                "{} already exists. Overwrite?",
                env_file.display()
            ))
            .default(false)
            .interact_on(&term)?;
        if !overwrite {
            println!("Aborted; {} was not modified.", env_file.display());
            return Ok(());
        }
    }

    write_env_atomically(env_file, &rendered)
        .with_context(|| format!("writing {}", env_file.display()))?;

    println!("Wrote {} ({} keys)", env_file.display(), pairs.len());
    println!("Start the server with: cargo run -p vidrack-server");
    Ok(())
}

fn run_show(env_file: &PathBuf) -> Result<()> {
    let contents = std::fs::read_to_string(env_file)
        .with_context(|| format!("reading {}", env_file.display()))?;
    let map = read_env_map(&contents);

    let mut keys: Vec<_> = map.keys().collect();
    keys.sort();
    for key in keys {
        // Values stay private; this is a quick sanity listing.
        println!("{key}");
    }
    Ok(())
}
