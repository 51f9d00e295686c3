use crate::prelude::*;

pub const WAYMARK_LOG_ENV: &str = "WAYMARK_LOG";
pub const WAYMARK_LOG_FILE_NAME: &str = "waymark.log";

/// Installs the global subscriber: env filter, a non-blocking file writer inside `data_dir` and a stderr layer.
/// The returned guard must be kept alive until exit, otherwise buffered log lines are dropped.
pub fn install_tracing(data_dir: &Dir) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};
    // get the log level
    let filter_layer = EnvFilter::try_from_env(WAYMARK_LOG_ENV)
        .or_else(|_| EnvFilter::try_new("info"))
        .into_diagnostic()
        .wrap_err("failed to create log filter")?;
    // create log file in the data dir. This will also serve as a check that the directory is "writeable" by us
    let writer = std::io::BufWriter::new(
        data_dir
            .create(WAYMARK_LOG_FILE_NAME)
            .into_diagnostic()
            .wrap_err("failed to create waymark.log file")?,
    );
    let (nb, guard) = tracing_appender::non_blocking(writer);
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(nb);
    let stderr_layer = fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("failed to install tracing subscriber")?;
    Ok(guard)
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{0}")]
#[diagnostic(code(waymark::panic))]
struct Panic(String);

/// Every miette report is rendered into the log as it is created. Panics become miette reports too,
/// so they also end up in the log file instead of only on stderr.
pub fn install_miette_panic_hooks() -> Result<()> {
    miette::set_hook(Box::new(|diagnostic| {
        error!("{}", narrate(diagnostic));
        Box::new(miette::NarratableReportHandler::new()) as Box<dyn miette::ReportHandler>
    }))
    .wrap_err("failed to install miette hook")?;

    std::panic::set_hook(Box::new(|panic_info| {
        let payload = panic_info.payload();
        let message = if let Some(msg) = payload.downcast_ref::<&str>() {
            msg.to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "Something went wrong".to_string()
        };
        let mut report: Result<()> = Err(Panic(message).into());
        if let Some(loc) = panic_info.location() {
            report = report
                .with_context(|| format!("at {}:{}:{}", loc.file(), loc.line(), loc.column()));
        }
        if let Err(err) = report.with_context(|| "Main thread panicked.".to_string()) {
            eprintln!("Error: {:?}", err);
        }
    }));
    Ok(())
}

/// plain text rendering of a diagnostic and its causes, for the log file
fn narrate(diagnostic: &dyn miette::Diagnostic) -> String {
    let mut rendered = String::new();
    if let Err(e) = miette::NarratableReportHandler::new().render_report(&mut rendered, diagnostic) {
        error!("failed to render report: {e}");
    }
    rendered
}
