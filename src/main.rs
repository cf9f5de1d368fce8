mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{BudgetCommands, Cli, Commands, DfurCommands, UsersCommands};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "fundbook=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Users { command } => match command {
            UsersCommands::Add { file } => cli::users::add(&file),
            UsersCommands::List => cli::users::list(),
        },
        Commands::Dfur { command } => match command {
            DfurCommands::Add { file } => cli::dfur::add(&file),
        },
        Commands::Budget { command } => match command {
            BudgetCommands::Add { file, created_by } => cli::budget::add(&file, &created_by),
        },
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
