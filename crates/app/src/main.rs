use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use jobdesk_core::model::AssessmentId;
use services::{
    AppServices, ApplicationService, AssessmentFlowService, CatalogService, Clock, FlowConfig,
    DEFAULT_REDIRECT_DELAY,
};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Parser, Debug)]
#[command(name = "jobdesk")]
#[command(version)]
#[command(about = "Browse, take and submit job-application assessments")]
struct Args {
    /// Seconds to stay on the submitted screen before opening "My Applications"
    #[arg(long, env = "JOBDESK_REDIRECT_DELAY_SECS", default_value_t = DEFAULT_REDIRECT_DELAY.as_secs())]
    redirect_delay_secs: u64,

    /// Log filter directives (falls back to RUST_LOG, then "info")
    #[arg(long, env = "JOBDESK_LOG")]
    log_filter: Option<String>,

    /// Open this assessment immediately on launch
    #[arg(long, env = "JOBDESK_ASSESSMENT_ID")]
    start_assessment: Option<AssessmentId>,
}

impl Args {
    fn flow_config(&self) -> FlowConfig {
        FlowConfig::default().with_redirect_delay(Duration::from_secs(self.redirect_delay_secs))
    }

    fn env_filter(&self) -> EnvFilter {
        match self.log_filter.as_deref() {
            Some(directives) => EnvFilter::new(directives),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        }
    }
}

struct DesktopApp {
    services: AppServices,
    start_assessment: Option<AssessmentId>,
}

impl UiApp for DesktopApp {
    fn start_assessment(&self) -> Option<AssessmentId> {
        self.start_assessment
    }

    fn flow(&self) -> Arc<AssessmentFlowService> {
        self.services.flow()
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn applications(&self) -> Arc<ApplicationService> {
        self.services.applications()
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(args.env_filter())
        .init();

    let config = args.flow_config();
    let services = AppServices::with_sample_data(Clock::system(), config)?;
    tracing::info!(
        redirect_delay_secs = config.redirect_delay.as_secs(),
        start_assessment = ?args.start_assessment,
        "starting jobdesk"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        start_assessment: args.start_assessment,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("JobDesk")
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
    let args = Args::parse();
    if let Err(err) = run(args) {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
