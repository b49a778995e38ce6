use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use skillscope_catalog::CatalogClient;
use skillscope_report::{Config, scan, sink, validate};
use skillscope_tui::{App, AppEvent, EventReader, ViewerEvent};
use tokio::sync::mpsc;

mod source;

#[derive(Parser)]
#[command(name = "skillscope", version, about = "Skill directory auditor")]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the skills root, score every skill, and publish the report to
    /// every configured sink.
    Generate {
        /// Override the configured skills root.
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Check that the published artifact exists and is well-formed.
    Validate,
    /// Browse a published report in the terminal.
    View {
        /// Report source: an http(s) URL or a file path.
        source: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_subscriber(matches!(cli.command, Command::View { .. }));

    let config_path = cli.config.clone().unwrap_or_else(resolve_config_path);
    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    tracing::debug!(config = %config_path.display(), "configuration loaded");

    match cli.command {
        Command::Generate { root } => generate(&config, root),
        Command::Validate => validate_artifact(&config),
        Command::View { source } => view(&config, source).await,
    }
}

fn generate(config: &Config, root: Option<PathBuf>) -> anyhow::Result<()> {
    let root = root.unwrap_or_else(|| config.skills.root.clone());
    let report = scan::generate(&root)?;
    sink::publish(&report, &config.publish.sinks)?;
    println!(
        "Published {} skill(s) from {} to {} sink(s)",
        report.count,
        report.source_dir,
        config.publish.sinks.len()
    );
    Ok(())
}

fn validate_artifact(config: &Config) -> anyhow::Result<()> {
    let count = validate::validate(&config.publish.sinks)?;
    println!("OK: validated {count} skill(s)");
    Ok(())
}

async fn view(config: &Config, source: Option<String>) -> anyhow::Result<()> {
    let source = source.unwrap_or_else(|| config.viewer.source.clone());
    tracing::info!(%source, "loading report");
    let report = source::load_report(&source)
        .await
        .with_context(|| format!("failed to load report from {source}"))?;

    let (event_tx, event_rx) = mpsc::channel(256);
    let (refresh_tx, mut refresh_rx) = mpsc::channel(4);

    let reader = EventReader::new(event_tx.clone(), Duration::from_millis(100));
    std::thread::spawn(move || reader.run());

    // Community catalog loads in the background; its failure must never
    // block or break the primary report.
    let catalog = Arc::new(CatalogClient::new(
        config.catalog.urls.clone(),
        Duration::from_secs(config.catalog.timeout_secs),
    ));
    let catalog_tx = event_tx.clone();
    let startup_catalog = Arc::clone(&catalog);
    tokio::spawn(async move {
        let preview = startup_catalog.fetch().await;
        let _ = catalog_tx
            .send(AppEvent::Viewer(ViewerEvent::Catalog(preview)))
            .await;
    });

    let refresh_source = source.clone();
    tokio::spawn(async move {
        while refresh_rx.recv().await.is_some() {
            for event in refresh_events(&refresh_source, &catalog).await {
                if event_tx.send(AppEvent::Viewer(event)).await.is_err() {
                    return;
                }
            }
        }
    });

    let app = App::new(report, refresh_tx);
    skillscope_tui::run_tui(app, event_rx).await?;
    Ok(())
}

/// One full refresh pass: the report, then the community catalog, the same
/// sequence as the initial load.
async fn refresh_events(source: &str, catalog: &CatalogClient) -> [ViewerEvent; 2] {
    let report_event = match source::load_report(source).await {
        Ok(report) => ViewerEvent::ReportLoaded(Box::new(report)),
        Err(e) => ViewerEvent::ReportFailed(format!("{e:#}")),
    };
    [report_event, ViewerEvent::Catalog(catalog.fetch().await)]
}

/// Priority: `--config` > `SKILLSCOPE_CONFIG` env > `config/default.toml`.
fn resolve_config_path() -> PathBuf {
    if let Ok(path) = std::env::var("SKILLSCOPE_CONFIG") {
        return PathBuf::from(path);
    }
    PathBuf::from("config/default.toml")
}

/// When the TUI is active, redirect tracing to a file to avoid corrupting
/// the terminal.
fn init_subscriber(tui_active: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if tui_active
        && let Ok(file) = std::fs::File::create("skillscope.log")
    {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .init();
        return;
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_path_env_override() {
        unsafe { std::env::set_var("SKILLSCOPE_CONFIG", "/tmp/custom.toml") };
        let path = resolve_config_path();
        unsafe { std::env::remove_var("SKILLSCOPE_CONFIG") };
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn generate_fails_on_missing_root() {
        let config = Config::default();
        let result = generate(&config, Some(PathBuf::from("/nonexistent/skills")));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn refresh_reloads_report_and_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skills.json");
        std::fs::write(
            &path,
            r#"{"generatedAt": "2026-02-01T00:00:00Z", "sourceDir": "/skills",
                "count": 0,
                "summary": {"avgOverall": 0, "avgQuality": 0, "avgSecurity": 0},
                "skills": []}"#,
        )
        .unwrap();

        // A dead candidate keeps the catalog offline without any network.
        let catalog = CatalogClient::new(
            vec!["http://127.0.0.1:9/skills.json".to_owned()],
            Duration::from_millis(200),
        );
        let [report_event, catalog_event] =
            refresh_events(path.to_str().unwrap(), &catalog).await;
        assert!(matches!(report_event, ViewerEvent::ReportLoaded(_)));
        assert!(matches!(catalog_event, ViewerEvent::Catalog(None)));
    }

    #[test]
    fn validate_fails_before_generate() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.publish.sinks = vec![dir.path().join("skills.json")];
        let result = validate_artifact(&config);
        assert!(result.is_err());
    }
}
