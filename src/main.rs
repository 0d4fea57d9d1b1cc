use anyhow::Result;
use clap::Parser;
use revleak::cli::{Cli, Commands};
use revleak::commands::{self, analyze::AnalyzeConfig, batch::BatchConfig};
use revleak::config::{load_config, load_config_from};
use revleak::formatting::FormattingConfig;
use revleak::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    let config = match cli.config.as_deref() {
        Some(path) => load_config_from(path)?,
        None => load_config(),
    };
    let formatting_config = FormattingConfig::for_cli(cli.plain, cli.color);

    match cli.command {
        Commands::Analyze {
            industry,
            visitors,
            conversion_rate,
            order_value,
            format,
            output,
            all_tests,
        } => {
            let request =
                commands::build_request(industry, visitors, conversion_rate, order_value, &config);
            commands::handle_analyze(AnalyzeConfig {
                request,
                format: format.unwrap_or_else(|| config.output_format()),
                output,
                formatting_config,
                show_all_tests: all_tests || config.show_all_tests(),
            })
        }
        Commands::Industries { format } => commands::handle_industries(format, &formatting_config),
        Commands::Tests { tier, format } => {
            commands::handle_tests(tier.as_deref(), format, &formatting_config)
        }
        Commands::Batch {
            input,
            format,
            output,
            jobs,
        } => commands::handle_batch(BatchConfig {
            input,
            format,
            output,
            jobs,
            formatting_config,
        }),
        Commands::Init { force } => commands::init_config(force),
        Commands::Methodology => {
            commands::print_methodology();
            Ok(())
        }
    }
}

