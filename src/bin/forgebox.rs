use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use forgebox::emitter::emit;
use forgebox::host::{HostProbe, HostState, SRC_ENV_VAR};

#[derive(Parser)]
#[command(name = "forgebox", version, about = "Developer sandbox bootstrap")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive the sandbox configuration and print or write it
    Emit {
        /// Host source tree to share with the sandbox
        #[arg(long, env = SRC_ENV_VAR)]
        source_tree: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: Format,
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Explain which mounts the current host state yields
    Probe {
        /// Host source tree to share with the sandbox
        #[arg(long, env = SRC_ENV_VAR)]
        source_tree: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

fn main() -> forgebox::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Emit {
            source_tree,
            format,
            output,
        } => cmd_emit(source_tree, format, output),
        Command::Probe { source_tree } => cmd_probe(source_tree),
    }
}

fn cmd_emit(
    source_tree: Option<PathBuf>,
    format: Format,
    output: Option<PathBuf>,
) -> forgebox::Result<()> {
    let state = HostState {
        source_tree,
        ..HostState::default()
    };
    let config = emit(&state, &HostProbe);

    let rendered = match format {
        Format::Json => config.to_json()?,
        Format::Yaml => config.to_yaml()?,
    };

    match output {
        Some(path) => {
            fs::write(&path, format!("{}\n", rendered.trim_end()))?;
            tracing::info!(path = %path.display(), "wrote sandbox configuration");
        }
        None => println!("{}", rendered.trim_end()),
    }
    Ok(())
}

fn cmd_probe(source_tree: Option<PathBuf>) -> forgebox::Result<()> {
    let state = HostState {
        source_tree,
        ..HostState::default()
    };
    let config = emit(&state, &HostProbe);

    match (&config.source_mount, &state.source_tree) {
        (Some(m), _) => println!(
            "source tree: {} -> {} ({})",
            m.host.display(),
            m.guest,
            m.transport
        ),
        (None, Some(p)) if p.as_os_str().is_empty() => {
            println!("source tree: skipped ({SRC_ENV_VAR} is empty)")
        }
        (None, Some(p)) => println!("source tree: skipped (not a directory: {})", p.display()),
        (None, None) => println!("source tree: skipped ({SRC_ENV_VAR} unset)"),
    }

    match &config.build_output_mount {
        Some(m) => println!(
            "build output: {} -> {} ({})",
            m.host.display(),
            m.guest,
            m.transport
        ),
        None => println!(
            "build output: skipped (not a directory: {})",
            state.build_output_dir.display()
        ),
    }

    println!("mounts: {}", config.mounts().count());
    Ok(())
}
