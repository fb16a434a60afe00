mod cli;

use clap::Parser;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    wage_calculator::logging::init();
    let cli = Cli::parse();

    let result = match cli::load_config(cli.config.as_deref()) {
        Ok(config) => match cli.command {
            Commands::Serve { bind } => cli::serve::run(config, bind).await,
            Commands::Totals { snapshot } => cli::report::totals(&config, &snapshot),
            #[cfg(feature = "pdf")]
            Commands::Report {
                snapshot,
                pdf: Some(output),
            } => cli::report::export_pdf(&config, &snapshot, &output),
            #[cfg(feature = "pdf")]
            Commands::Report { snapshot, pdf: None } => cli::report::print(&config, &snapshot),
            #[cfg(not(feature = "pdf"))]
            Commands::Report { snapshot } => cli::report::print(&config, &snapshot),
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
