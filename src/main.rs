use std::{
    io::{self, Write},
    process,
};

use acsignature::{
    application::{
        error::{AppError, ErrorReport},
        export::ExportOptions,
        render::{RenderConfig, SignatureFormat, SignatureRenderer},
        signature::SignatureService,
    },
    config::{self, Command, ExportArgs, GenerateArgs, Settings},
    domain::validation::ValidationRules,
    infra::{error::InfraError, telemetry},
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    // Field messages are the user-facing output of a rejected form.
    if let Some(validation) = error.as_validation() {
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        for field_error in validation.errors() {
            let _ = writeln!(handle, "{field_error}");
        }
        return;
    }

    let report = ErrorReport::from_error("acsignature", error);
    if dispatcher::has_been_set() {
        error!(
            target = "acsignature::main",
            summary = error.presentation_message(),
            chain = ?report.messages,
            "application error"
        );
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(
            summary = error.presentation_message(),
            chain = ?report.messages,
            "application error"
        );
    });
}

fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli().map_err(|err| {
        AppError::from(InfraError::configuration(format!(
            "failed to load configuration: {err}"
        )))
    })?;

    telemetry::init(&settings.logging)?;
    let service = build_service(&settings);

    match cli_args.command {
        Command::Generate(args) => run_generate(&service, args),
        Command::Export(args) => run_export(&service, &settings, args),
    }
}

fn build_service(settings: &Settings) -> SignatureService {
    let rules = ValidationRules::from(&settings.validation);
    let renderer = SignatureRenderer::new(RenderConfig::from(&settings.render));
    SignatureService::new(rules, renderer)
}

fn run_generate(service: &SignatureService, args: GenerateArgs) -> Result<(), AppError> {
    let draft = args.signature.to_draft();
    let rendered = service.generate_format(&draft, SignatureFormat::from(args.format))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(rendered.as_bytes())
        .and_then(|()| handle.flush())
        .map_err(InfraError::from)?;
    Ok(())
}

fn run_export(
    service: &SignatureService,
    settings: &Settings,
    args: ExportArgs,
) -> Result<(), AppError> {
    let draft = args.signature.to_draft();
    let options = ExportOptions {
        directory: settings.export.directory.clone(),
        naming: settings.export.naming,
        files_dir: settings.export.files_dir,
        archive: settings.export.archive,
    };

    info!(
        target = "acsignature::export",
        directory = %options.directory.display(),
        naming = options.naming.as_str(),
        archive = options.archive,
        "Starting export"
    );

    let report = service.export(&draft, &options)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for path in report.paths() {
        writeln!(handle, "{}", path.display()).map_err(InfraError::from)?;
    }
    Ok(())
}
