use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::{API_URL_ENV, TIMEOUT_ENV, parse_timeout_secs};
use services::{ApiConfig, NotesService};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const APP_NAME: &str = "Notes2Quiz";
const DEFAULT_LOG_FILTER: &str = "app=info,services=info,ui=info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    notes: NotesService,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> &str {
        APP_NAME
    }

    fn notes(&self) -> NotesService {
        self.notes.clone()
    }
}

/// Command-line overrides; anything left `None` comes from the environment.
#[derive(Debug, Default)]
struct Args {
    api_url: Option<String>,
    timeout_secs: Option<String>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--timeout-secs <secs>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", ApiConfig::DEFAULT_BASE_URL);
    eprintln!("  --timeout-secs {}", ApiConfig::DEFAULT_TIMEOUT.as_secs());
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {API_URL_ENV}, {TIMEOUT_ENV}, RUST_LOG");
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut args = args.into_iter();
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => parsed.api_url = Some(require_value(&mut args, "--api-url")?),
                "--timeout-secs" => {
                    parsed.timeout_secs = Some(require_value(&mut args, "--timeout-secs")?);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn into_config(self) -> Result<ApiConfig, Box<dyn std::error::Error>> {
        let mut config = ApiConfig::from_env()?;
        if let Some(raw) = self.api_url {
            config = config.with_base_url(&raw)?;
        }
        if let Some(raw) = self.timeout_secs {
            config = config.with_timeout(parse_timeout_secs(&raw)?);
        }
        Ok(config)
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    init_tracing();

    let config = args.into_config()?;
    info!(
        base_url = %config.base_url(),
        timeout_secs = config.timeout().as_secs(),
        "starting {APP_NAME}"
    );

    let notes = NotesService::http(&config)?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { notes });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(APP_NAME)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
