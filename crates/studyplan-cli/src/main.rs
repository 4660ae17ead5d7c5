use clap::{ArgAction, Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "studyplan", version, about = "Unit-weighted daily study planner")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a plan from command-line arguments
    Generate(commands::generate::GenerateArgs),
    /// Build a plan by answering prompts
    Interactive,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Interactive => commands::interactive::run(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
