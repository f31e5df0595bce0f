//! Configuration layer: typed settings with layered precedence (file → env → CLI).

mod cli;

use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::application::export::ExportNaming;
use crate::application::render::{
    DEFAULT_ACCENT_COLOR, DEFAULT_CLOSING, DEFAULT_FONT_FAMILY, DEFAULT_MUTED_COLOR,
    DEFAULT_NOTICE_COLOR, DEFAULT_SEPARATOR_COLOR, DEFAULT_TEXT_COLOR, SignatureStyle,
};
use crate::domain::{types::MobileFormat, validation::ValidationRules};
use crate::util::color::HexColor;

pub use cli::{
    CliArgs, Command, ExportArgs, ExportOverrides, GenerateArgs, OutputFormat, SignatureArgs,
};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "acsignature";
const ENV_PREFIX: &str = "ACSIGNATURE";
const DEFAULT_EXPORT_DIR: &str = ".";

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub render: RenderSettings,
    pub validation: ValidationSettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub style: SignatureStyle,
    pub closing: String,
}

#[derive(Debug, Clone)]
pub struct ValidationSettings {
    pub mobile_format: MobileFormat,
}

impl From<&ValidationSettings> for ValidationRules {
    fn from(settings: &ValidationSettings) -> Self {
        Self {
            mobile_format: settings.mobile_format,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub directory: PathBuf,
    pub naming: ExportNaming,
    pub files_dir: bool,
    pub archive: bool,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_global_overrides(cli);
    if let Command::Export(args) = &cli.command {
        raw.apply_export_overrides(&args.overrides);
    }

    Settings::from_raw(raw)
}

/// Resolve configuration using the supplied CLI arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    logging: RawLoggingSettings,
    style: RawStyleSettings,
    render: RawRenderSettings,
    validation: RawValidationSettings,
    export: RawExportSettings,
}

impl RawSettings {
    fn apply_global_overrides(&mut self, cli: &CliArgs) {
        if let Some(level) = cli.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = cli.log_json {
            self.logging.json = Some(json);
        }
        if let Some(format) = cli.mobile_format.as_ref() {
            self.validation.mobile_format = Some(format.clone());
        }
    }

    fn apply_export_overrides(&mut self, overrides: &ExportOverrides) {
        if let Some(directory) = overrides.directory.as_ref() {
            self.export.directory = Some(directory.clone());
        }
        if overrides.name_by_email {
            self.export.naming = Some(ExportNaming::PerEmail.as_str().to_string());
        }
        if overrides.files_dir {
            self.export.files_dir = Some(true);
        }
        if overrides.zip {
            self.export.archive = Some(true);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            logging,
            style,
            render,
            validation,
            export,
        } = raw;

        let logging = build_logging_settings(logging)?;
        let render = build_render_settings(style, render)?;
        let validation = build_validation_settings(validation)?;
        let export = build_export_settings(export)?;

        Ok(Self {
            logging,
            render,
            validation,
            export,
        })
    }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::WARN,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_render_settings(
    style: RawStyleSettings,
    render: RawRenderSettings,
) -> Result<RenderSettings, LoadError> {
    let font_family = style
        .font_family
        .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string());
    if font_family.trim().is_empty() {
        return Err(LoadError::invalid(
            "style.font_family",
            "font family must not be empty",
        ));
    }

    let style = SignatureStyle {
        accent: parse_color(style.accent_color, "style.accent_color", DEFAULT_ACCENT_COLOR)?,
        text: parse_color(style.text_color, "style.text_color", DEFAULT_TEXT_COLOR)?,
        separator: parse_color(
            style.separator_color,
            "style.separator_color",
            DEFAULT_SEPARATOR_COLOR,
        )?,
        muted: parse_color(style.muted_color, "style.muted_color", DEFAULT_MUTED_COLOR)?,
        notice: parse_color(style.notice_color, "style.notice_color", DEFAULT_NOTICE_COLOR)?,
        font_family: font_family.trim().to_string(),
    };

    let closing = render
        .closing
        .unwrap_or_else(|| DEFAULT_CLOSING.to_string());
    if closing.trim().is_empty() {
        return Err(LoadError::invalid(
            "render.closing",
            "closing line must not be empty",
        ));
    }

    Ok(RenderSettings {
        style,
        closing: closing.trim().to_string(),
    })
}

fn build_validation_settings(
    validation: RawValidationSettings,
) -> Result<ValidationSettings, LoadError> {
    let mobile_format = match validation.mobile_format.as_deref().map(normalize_choice) {
        None => MobileFormat::default(),
        Some(value) if value == MobileFormat::Any.as_str() => MobileFormat::Any,
        Some(value) if value == MobileFormat::BelgianOrGerman.as_str() => {
            MobileFormat::BelgianOrGerman
        }
        Some(value) => {
            return Err(LoadError::invalid(
                "validation.mobile_format",
                format!("unknown value `{value}`, expected `any` or `belgian_or_german`"),
            ));
        }
    };

    Ok(ValidationSettings { mobile_format })
}

fn build_export_settings(export: RawExportSettings) -> Result<ExportSettings, LoadError> {
    let directory = export
        .directory
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR));
    if directory.as_os_str().is_empty() {
        return Err(LoadError::invalid(
            "export.directory",
            "path must not be empty",
        ));
    }

    let naming = match export.naming.as_deref().map(normalize_choice) {
        None => ExportNaming::default(),
        Some(value) if value == ExportNaming::Fixed.as_str() => ExportNaming::Fixed,
        Some(value) if value == ExportNaming::PerEmail.as_str() => ExportNaming::PerEmail,
        Some(value) => {
            return Err(LoadError::invalid(
                "export.naming",
                format!("unknown value `{value}`, expected `fixed` or `per_email`"),
            ));
        }
    };

    Ok(ExportSettings {
        directory,
        naming,
        files_dir: export.files_dir.unwrap_or(false),
        archive: export.archive.unwrap_or(false),
    })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawStyleSettings {
    accent_color: Option<String>,
    text_color: Option<String>,
    separator_color: Option<String>,
    muted_color: Option<String>,
    notice_color: Option<String>,
    font_family: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawRenderSettings {
    closing: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawValidationSettings {
    mobile_format: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawExportSettings {
    directory: Option<PathBuf>,
    naming: Option<String>,
    files_dir: Option<bool>,
    archive: Option<bool>,
}

fn parse_color(
    value: Option<String>,
    key: &'static str,
    default: HexColor,
) -> Result<HexColor, LoadError> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|err| LoadError::invalid(key, format!("{err}"))),
        None => Ok(default),
    }
}

fn normalize_choice(value: &str) -> String {
    value.trim().to_ascii_lowercase().replace('-', "_")
}
