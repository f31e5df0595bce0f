use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint, builder::BoolishValueParser};

use crate::application::render::SignatureFormat;
use crate::domain::record::SignatureDraft;

/// Command-line arguments for the acsignature binary.
#[derive(Debug, Parser)]
#[command(
    name = "acsignature",
    version,
    about = "Generate Atlas Copco e-mail signature files"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "ACSIGNATURE_CONFIG_FILE",
        value_name = "PATH",
        global = true
    )]
    pub config_file: Option<PathBuf>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,

    /// Override the accepted mobile number shapes (any|belgian_or_german).
    #[arg(long = "mobile-format", value_name = "FORMAT", global = true)]
    pub mobile_format: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Validate the details and print the signature preview.
    Generate(GenerateArgs),
    /// Validate the details and write the .htm, .rtf and .txt signature files.
    Export(ExportArgs),
}

/// Form fields. Missing values are reported by validation, not by the parser.
#[derive(Debug, Args, Default, Clone)]
pub struct SignatureArgs {
    /// Full name of the employee.
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Job title.
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Company e-mail address (must end with @atlascopco.com).
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Mobile phone number.
    #[arg(long, value_name = "NUMBER")]
    pub mobile: Option<String>,

    /// Optional landline number.
    #[arg(long, value_name = "NUMBER")]
    pub phone: Option<String>,
}

impl SignatureArgs {
    pub fn to_draft(&self) -> SignatureDraft {
        SignatureDraft {
            name: self.name.clone().unwrap_or_default(),
            title: self.title.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            mobile: self.mobile.clone().unwrap_or_default(),
            phone: self.phone.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Html,
    Rtf,
    Text,
}

impl From<OutputFormat> for SignatureFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Html => SignatureFormat::Html,
            OutputFormat::Rtf => SignatureFormat::Rtf,
            OutputFormat::Text => SignatureFormat::Text,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub signature: SignatureArgs,

    /// Variant to print.
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,
}

#[derive(Debug, Args, Default, Clone)]
pub struct ExportOverrides {
    /// Directory the signature files are written to.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        value_hint = ValueHint::DirPath
    )]
    pub directory: Option<PathBuf>,

    /// Name files `AtlasCopco(<email>).*` instead of `AtlasCopco.*`.
    #[arg(long = "name-by-email", action = clap::ArgAction::SetTrue)]
    pub name_by_email: bool,

    /// Also create the empty `<name>_files` folder Outlook expects.
    #[arg(long = "files-dir", action = clap::ArgAction::SetTrue)]
    pub files_dir: bool,

    /// Bundle the files into a single `<name>.zip` archive.
    #[arg(long = "zip", action = clap::ArgAction::SetTrue)]
    pub zip: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub signature: SignatureArgs,

    #[command(flatten)]
    pub overrides: ExportOverrides,
}
