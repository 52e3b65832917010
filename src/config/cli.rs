use crate::config::toml_config::TomlConfig;
use crate::config::ClientSettings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "card-check")]
#[command(about = "Check card numbers against a card validation service")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Card service URL (overrides the config file)")]
    pub server_url: Option<String>,

    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate a typed card number
    Validate {
        #[arg(allow_hyphen_values = true)]
        card_number: String,
    },
    /// Extract a card number from an image, then validate it
    Upload { image: PathBuf },
    /// Decrypt a card number returned by the upload endpoint
    Decrypt { encrypted_card_number: String },
}

impl CliConfig {
    /// Config file first, then `--server-url` on top, then checked.
    pub fn settings(&self) -> Result<ClientSettings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_settings(),
            None => ClientSettings::default(),
        };

        if let Some(server_url) = &self.server_url {
            settings.server_url = server_url.clone();
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_validate_command() {
        let config = CliConfig::try_parse_from(["card-check", "validate", "4111111111111111"])
            .unwrap();
        assert!(matches!(
            config.command,
            Command::Validate { ref card_number } if card_number == "4111111111111111"
        ));
        assert_eq!(config.settings().unwrap(), ClientSettings::default());
    }

    #[test]
    fn test_hyphenated_card_number_reaches_local_check() {
        let config = CliConfig::try_parse_from(["card-check", "validate", "-12"]).unwrap();
        assert!(matches!(
            config.command,
            Command::Validate { ref card_number } if card_number == "-12"
        ));
    }

    #[test]
    fn test_server_url_overrides_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nurl = \"http://from-file:8080\"\n\n[endpoints]\nupload = \"/img\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let config = CliConfig::try_parse_from([
            "card-check",
            "upload",
            "card.png",
            "--config",
            &path,
            "--server-url",
            "http://override:9000",
        ])
        .unwrap();

        let settings = config.settings().unwrap();
        assert_eq!(settings.server_url, "http://override:9000");
        assert_eq!(settings.upload_path, "/img");
    }

    #[test]
    fn test_invalid_server_url_is_rejected() {
        let config = CliConfig::try_parse_from([
            "card-check",
            "decrypt",
            "XYZ",
            "--server-url",
            "ftp://cards",
        ])
        .unwrap();
        assert!(config.settings().is_err());
    }
}
