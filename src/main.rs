use card_check::core::{UploadOutcome, UploadedImage, ValidateOutcome};
use card_check::utils::logger;
use card_check::{
    CardCheckError, CliConfig, ClientController, Command, HttpCardApi, TerminalPage,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.json_logs);

    tracing::info!("Starting card-check");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Using card service at {}", settings.server_url);

    let api = match HttpCardApi::new(&settings) {
        Ok(api) => api,
        Err(e) => exit_with(&e),
    };

    match run(config.command, api).await {
        Ok(true) => Ok(()),
        // The page already told the user what went wrong.
        Ok(false) => std::process::exit(1),
        Err(e) => exit_with(&e),
    }
}

async fn run(command: Command, api: HttpCardApi) -> card_check::Result<bool> {
    match command {
        Command::Validate { card_number } => {
            let page = TerminalPage::with_card_number(&card_number);
            let controller = ClientController::new(page, api);
            let outcome = controller.validate_card_number().await?;
            Ok(outcome != ValidateOutcome::NonNumeric)
        }
        Command::Upload { image } => {
            let image = UploadedImage::from_path(&image).await?;
            let controller = ClientController::new(TerminalPage::with_image(image), api);
            let outcome = controller.upload_image().await?;
            Ok(matches!(
                outcome,
                UploadOutcome::Validated(ValidateOutcome::Rendered(_))
            ))
        }
        Command::Decrypt {
            encrypted_card_number,
        } => {
            let controller = ClientController::new(TerminalPage::new(), api);
            let decrypted = controller
                .decrypt_card_number(&encrypted_card_number)
                .await?;
            println!("{}", decrypted);
            Ok(true)
        }
    }
}

fn exit_with(e: &CardCheckError) -> ! {
    tracing::error!("❌ card-check failed: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
