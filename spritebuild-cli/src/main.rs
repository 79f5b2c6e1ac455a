// CLI application
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use spritebuild_core::BuildError;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "spritebuild")]
#[command(about = "Cross-platform build driver for the sprite editor")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Compile the editor for the host (or overridden) platform
    Build {
        /// Platform identifier override (Linux, Darwin or Windows)
        #[arg(short, long)]
        platform: Option<String>,

        /// Path to a project layout file
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },
    /// Assemble and print the compile command without running it
    Show {
        /// Platform identifier override (Linux, Darwin or Windows)
        #[arg(short, long)]
        platform: Option<String>,

        /// Path to a project layout file
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },
    /// Report platform, compiler resolution and source-file count
    Doctor {
        /// Platform identifier override (Linux, Darwin or Windows)
        #[arg(short, long)]
        platform: Option<String>,

        /// Path to a project layout file
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => Ok(()),
        // The compiler's own exit code is the tool's exit code when it has one
        Err(err) => match err.downcast_ref::<BuildError>() {
            Some(BuildError::CompilerFailed { status }) => {
                eprintln!("Error: {}", err);
                std::process::exit(status.code().unwrap_or(1));
            }
            _ => Err(err),
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // A bare invocation builds, so `spritebuild` alone does the whole job
    let command = cli.command.unwrap_or(Commands::Build {
        platform: None,
        manifest: None,
    });

    match command {
        Commands::Build { platform, manifest } => {
            commands::build_editor(platform.as_deref(), manifest.as_deref())?;
        }
        Commands::Show { platform, manifest } => {
            commands::show_command(platform.as_deref(), manifest.as_deref())?;
        }
        Commands::Doctor { platform, manifest } => {
            let pb = create_progress_bar("Probing toolchain...");
            commands::check_toolchain(platform.as_deref(), manifest.as_deref())?;
            pb.finish_with_message("Toolchain check complete");
        }
    }

    Ok(())
}

fn create_progress_bar(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb
}
