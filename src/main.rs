use clap::Parser;
use soonami::app::display::{AlertLabels, DisplayTimezone};
use soonami::config::LogFormat;
use soonami::core::{ConfigProvider, DecodeMode};
use soonami::utils::error::{ErrorSeverity, QuakeError};
use soonami::utils::{logger, validation::Validate};
use soonami::{
    CliConfig, DisplayFormatter, EarthquakePipeline, FetchTask, HttpTransport, TerminalView,
    TomlConfig,
};
use std::sync::Arc;
use std::time::Duration;

struct Settings {
    endpoint: String,
    connect_timeout: Duration,
    read_timeout: Duration,
    decode_mode: DecodeMode,
    timezone: DisplayTimezone,
    labels: AlertLabels,
}

impl Settings {
    fn from_provider<C: ConfigProvider + Validate>(
        config: &C,
        timezone: DisplayTimezone,
        labels: AlertLabels,
    ) -> Result<Self, QuakeError> {
        config.validate()?;
        Ok(Self {
            endpoint: config.endpoint(),
            connect_timeout: config.connect_timeout(),
            read_timeout: config.read_timeout(),
            decode_mode: config.decode_mode(),
            timezone,
            labels,
        })
    }
}

fn load_settings(cli: &CliConfig) -> Result<Settings, QuakeError> {
    // 有設定檔時以設定檔為準
    match &cli.config {
        Some(path) => {
            let file = TomlConfig::from_file(path)?;
            let timezone = if cli.utc {
                DisplayTimezone::Utc
            } else {
                file.timezone()
            };
            Settings::from_provider(&file, timezone, file.alert_labels())
        }
        None => Settings::from_provider(cli, cli.timezone(), cli.alert_labels()),
    }
}

fn exit_with(e: &QuakeError) -> ! {
    tracing::error!(
        "❌ Configuration failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    let transport = match HttpTransport::new(settings.connect_timeout, settings.read_timeout) {
        Ok(transport) => transport,
        Err(e) => exit_with(&e),
    };

    let pipeline = EarthquakePipeline::new(transport, settings.endpoint)
        .with_decode_mode(settings.decode_mode);

    // 抓取在背景 task 進行，結果回到這裡才顯示
    let handle = FetchTask::spawn(Arc::new(pipeline));

    let formatter = DisplayFormatter::new(settings.timezone, settings.labels);
    let mut view = TerminalView::new(std::io::stdout(), cli.output);

    if !handle.deliver(&mut view, &formatter).await? {
        tracing::info!("No earthquake to display");
    }

    Ok(())
}
