use clap::Parser;
use small_calc::utils::{error::CalcError, logger, validation::Validate};
use small_calc::{execute, CliConfig};

fn main() {
    let cli = CliConfig::parse();

    // 載入配置 (logger not installed yet, so failures go straight to stderr)
    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    logger::init_cli_logger(cli.verbose, &config.logging);

    tracing::info!("Starting small-calc");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
        tracing::debug!("Resolved config: {:?}", config);
    }

    let request = cli.command.to_request();

    match execute(&request, &config.output) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(
                "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            fail(&e);
        }
    }
}

fn fail(e: &CalcError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}
