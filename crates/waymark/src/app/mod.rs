mod cli;

use clap::Parser;
use miette::{Context, IntoDiagnostic, Result};
use tracing::{info, warn};
use waymark_core::{config::WaymarkConfig, init::get_waymark_dir, trace};
use waymark_features::MemoryFeatureIndex;
use waymark_permalink::{
    generate_permalink, Localization, Navigation, PageContext, PermalinkHandler, UiState,
};

use cli::{Cli, Command};

pub fn start_waymark() -> Result<()> {
    let cli = Cli::parse();
    let (data_dir_path, data_dir) = get_waymark_dir()?;
    // the guard flushes the log file when it is dropped at the end of main
    let _guard = trace::install_tracing(&data_dir)?;
    trace::install_miette_panic_hooks()?;
    info!("Application Name: {}", env!("CARGO_PKG_NAME"));
    info!("Application Version: {}", env!("CARGO_PKG_VERSION"));
    info!(?data_dir_path, "using data dir");
    let config = WaymarkConfig::load_or_create(&data_dir).wrap_err("failed to load config")?;

    match cli.command {
        Command::Permalink { id, host } => {
            println!("{}", permalink_for(&config, &id, host.as_deref()));
        }
        Command::Open {
            location,
            features,
            strings,
            locale,
        } => {
            let features_src = std::fs::read_to_string(&features)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to read feature data from {features:?}"))?;
            let mut localization = Localization::new(locale.unwrap_or(config.locale.clone()));
            if let Some(strings) = strings {
                let strings_src = std::fs::read_to_string(&strings)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("failed to read string table from {strings:?}"))?;
                let locale = localization.locale().to_owned();
                localization.add_table_json(&locale, &strings_src)?;
            }
            let page = PageContext::new(config.host.clone(), location);
            let (navigation, state) = open_page(&config, &page, &features_src, &localization)?;
            info!(?navigation, "opened page");
            println!(
                "{}",
                serde_json::to_string_pretty(&state)
                    .into_diagnostic()
                    .wrap_err("failed to serialize ui state")?
            );
        }
    }
    Ok(())
}

/// `--host` wins over the configured host
fn permalink_for(config: &WaymarkConfig, id: &str, host: Option<&str>) -> String {
    generate_permalink(host.unwrap_or(&config.host), id)
}

/// Mounts a fresh map view on `page` and returns what the permalink did to it.
fn open_page(
    config: &WaymarkConfig,
    page: &PageContext,
    features_src: &str,
    localization: &Localization,
) -> Result<(Option<Navigation>, UiState)> {
    let (index, warnings) = MemoryFeatureIndex::from_json(features_src)?;
    if !warnings.is_empty() {
        warn!(count = warnings.len(), "some feature data entries were skipped");
    }
    let mut state = UiState::default();
    let navigation =
        PermalinkHandler::from_config(config).on_mount(page, &index, localization, &mut state);
    Ok((navigation, state))
}
