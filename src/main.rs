// artisan-alias - stop typing `php artisan` a hundred times a day
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use anyhow::{Context, Result};
use artisan_alias_lib::{
    core::{
        AliasApplier, AliasCategory, AliasEntry, AliasSearcher, AliasTableBuilder, ApplyOutcome,
        ProjectDetector,
    },
    host::{ConsoleNotifier, Notifier, StreamTerminal},
    shell::{HookInstaller, Platform, Shell, ShellDetector, ShellTarget},
    Config,
};
use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Short shell aliases for php artisan
#[derive(Parser)]
#[command(name = "artisan-alias")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Primary alias name (overrides config and ARTISAN_ALIAS)
    #[arg(long, global = true)]
    alias: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print alias definitions for the current shell (use with eval)
    Init {
        /// Alias syntax: posix, cmd or powershell (detected when omitted)
        #[arg(long)]
        shell: Option<String>,

        /// Workspace roots to check for a Laravel project (default: cwd)
        #[arg(long = "root")]
        roots: Vec<PathBuf>,

        /// Don't clear the screen afterwards
        #[arg(long)]
        no_clear: bool,

        /// Only report errors
        #[arg(short, long)]
        quiet: bool,
    },

    /// List all aliases with descriptions
    List {
        /// Fuzzy filter
        query: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Run php artisan serve in this terminal
    Serve {
        /// Workspace roots to check for a Laravel project (default: cwd)
        #[arg(long = "root")]
        roots: Vec<PathBuf>,
    },

    /// Add the alias hook to your shell's startup file
    Setup {
        /// bash, zsh or powershell (detected when omitted)
        #[arg(long)]
        shell: Option<String>,

        /// Install for every supported shell
        #[arg(long)]
        all: bool,
    },

    /// Remove the alias hook from every startup file
    Uninstall,

    /// Show configuration, project and hook status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout belongs to `init`
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();

    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(alias) = cli.alias {
        config.alias = alias;
    }

    match cli.command {
        Commands::Init {
            shell,
            roots,
            no_clear,
            quiet,
        } => handle_init(config, shell, roots, no_clear, quiet).await,
        Commands::List { query, format } => handle_list(&config, query, &format),
        Commands::Serve { roots } => handle_serve(config, roots).await,
        Commands::Setup { shell, all } => handle_setup(shell, all),
        Commands::Uninstall => handle_uninstall(),
        Commands::Status => handle_status(&config),
    }
}

fn workspace_roots(roots: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    if roots.is_empty() {
        Ok(vec![env::current_dir()?])
    } else {
        Ok(roots)
    }
}

async fn handle_init(
    mut config: Config,
    shell: Option<String>,
    roots: Vec<PathBuf>,
    no_clear: bool,
    quiet: bool,
) -> Result<()> {
    if no_clear {
        config.clear_after_apply = false;
    }

    let platform = Platform::current();
    let mut applier = AliasApplier::new(config, workspace_roots(roots)?, platform);
    if let Some(shell) = shell {
        let target: ShellTarget = shell.parse()?;
        applier = applier.with_target(target);
    }

    let notifier = ConsoleNotifier::new().quiet(quiet);
    let mut terminal = StreamTerminal::stdout(platform);

    match applier.apply(&mut terminal, &notifier).await {
        // The notifier already printed the message
        ApplyOutcome::Failed(_) => std::process::exit(1),
        // Not being in a project is not a failure; the hook runs everywhere
        _ => Ok(()),
    }
}

fn handle_list(config: &Config, query: Option<String>, format: &str) -> Result<()> {
    let aliases = AliasTableBuilder::build(config.primary_alias())
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let searcher = AliasSearcher::new();
    let query = query.unwrap_or_default();
    let results = searcher.search(&aliases, &query, usize::MAX);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        "text" if query.trim().is_empty() => print_grouped(&results),
        "text" => {
            if results.is_empty() {
                println!("No aliases found matching '{}'", query);
            } else {
                println!("\nFound {} alias(es) matching '{}':", results.len(), query);
                println!("{}", "=".repeat(60));
                for entry in results {
                    print_entry(entry);
                }
                println!("{}", "=".repeat(60));
            }
        }
        other => anyhow::bail!("Unknown format '{}' (expected text or json)", other),
    }

    Ok(())
}

fn print_grouped(entries: &[&AliasEntry]) {
    for category in AliasCategory::ALL {
        let group: Vec<_> = entries.iter().filter(|e| e.category == category).collect();
        if group.is_empty() {
            continue;
        }

        println!("\n{}", category);
        println!("{}", "=".repeat(60));
        for entry in group {
            print_entry(entry);
        }
    }
    println!();
}

fn print_entry(entry: &AliasEntry) {
    println!(
        "  {:<20} {:<36} {}",
        entry.alias_name, entry.full_command, entry.description
    );
}

async fn handle_serve(config: Config, roots: Vec<PathBuf>) -> Result<()> {
    let notifier = ConsoleNotifier::new();
    let applier = AliasApplier::new(config, workspace_roots(roots)?, Platform::current());

    let Some(root) = ProjectDetector::find_project_root(applier.roots()) else {
        notifier.info("No Laravel project found in this workspace");
        return Ok(());
    };

    let aliases = applier
        .list_aliases()
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let serve = aliases
        .iter()
        .find(|e| e.alias_name == "serve")
        .context("serve alias missing from the table")?;

    let mut parts = serve.full_command.split_whitespace();
    let program = parts.next().context("empty serve command")?;

    println!("Running {} in {}", serve.full_command, root.display());
    let status = tokio::process::Command::new(program)
        .args(parts)
        .current_dir(&root)
        .status()
        .await
        .with_context(|| format!("failed to run {}", serve.full_command))?;

    if !status.success() {
        anyhow::bail!("{} exited with {}", serve.full_command, status);
    }

    Ok(())
}

fn handle_setup(shell: Option<String>, all: bool) -> Result<()> {
    let installer = HookInstaller::new()?;

    if all {
        println!("Installing the alias hook for all supported shells...\n");
        for shell in Shell::ALL {
            match installer.install(shell) {
                Ok(()) => println!("✓ {}", shell),
                Err(e) => eprintln!("  (skipped {}: {})", shell, e.user_message()),
            }
        }
        return Ok(());
    }

    let shell = match shell {
        Some(name) => {
            let shell: Shell = name.parse()?;
            installer.install(shell)?;
            shell
        }
        None => installer.install_auto()?,
    };

    println!("✓ Alias hook installed for {}", shell);
    println!("\nOpen a new terminal in a Laravel project, or reload your shell:");
    match shell {
        Shell::Bash => println!("   source ~/.bashrc"),
        Shell::Zsh => println!("   source ~/.zshrc"),
        Shell::PowerShell => println!("   . $PROFILE"),
    }

    Ok(())
}

fn handle_uninstall() -> Result<()> {
    let installer = HookInstaller::new()?;

    for shell in Shell::ALL {
        match installer.uninstall(shell) {
            Ok(()) => println!("✓ Removed {} hook", shell),
            Err(e) => eprintln!("  (skipped {}: {})", shell, e.user_message()),
        }
    }

    Ok(())
}

fn handle_status(config: &Config) -> Result<()> {
    let installer = HookInstaller::new()?;
    let platform = Platform::current();
    let cwd = env::current_dir()?;

    println!("\nartisan-alias Status");
    println!("{}", "=".repeat(60));

    println!("\nConfiguration:");
    match Config::default_path() {
        Ok(path) => println!("  File:          {}", path.display()),
        Err(_) => println!("  File:          (unknown)"),
    }
    println!("  Primary alias: {}", config.primary_alias());

    println!("\nWorkspace:");
    let project = if ProjectDetector::has_marker(&cwd) {
        ProjectDetector::get_project_name(&cwd).unwrap_or_else(|| "yes".to_string())
    } else {
        "not a Laravel project".to_string()
    };
    println!("  {:<14} {}", "Directory:", cwd.display());
    println!("  {:<14} {}", "Project:", project);

    let shell_path = ShellDetector::current_shell_path(platform).or_else(|| match platform {
        Platform::Windows => config.windows_shell.clone(),
        Platform::Posix => None,
    });
    let target = ShellDetector::select(platform, shell_path.as_deref());
    println!("\nShell:");
    println!("  {:<14} {}", "Path:", shell_path.as_deref().unwrap_or("unknown"));
    println!("  {:<14} {}", "Alias syntax:", target);

    println!("\nStartup Hooks:");
    for shell in Shell::ALL {
        let status = if installer.is_installed(shell) {
            "✓ Installed"
        } else {
            "✗ Not installed"
        };
        println!("  {:<14} {}", format!("{}:", shell), status);
    }

    println!("{}", "=".repeat(60));

    Ok(())
}
