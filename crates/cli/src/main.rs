//! `fieldcheck` -- validate JSON records against a declarative rule set.
//!
//! Reads its settings from the environment (see [`fieldcheck_cli::settings`]),
//! prints one JSON report per input record to stdout, and exits with:
//!
//! | Code | Meaning                                        |
//! |------|------------------------------------------------|
//! | `0`  | every record is valid                          |
//! | `1`  | at least one record failed validation          |
//! | `2`  | settings, rule set or input could not be used  |

use std::io::Write;

use fieldcheck_cli::batch;
use fieldcheck_cli::settings::Settings;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const EXIT_INVALID: i32 = 1;
const EXIT_CONFIG: i32 = 2;

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fieldcheck=info,fieldcheck_cli=info,fieldcheck_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::from_env().unwrap_or_else(|err| {
        tracing::error!("{err:#}");
        std::process::exit(EXIT_CONFIG);
    });

    tracing::info!(
        rules = %settings.rules_path.display(),
        input = %settings.input_path.display(),
        "Starting fieldcheck",
    );

    let outcome = batch::run(&settings).unwrap_or_else(|err| {
        tracing::error!("{err:#}");
        std::process::exit(EXIT_CONFIG);
    });

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for report in &outcome.reports {
        let line = serde_json::to_string(report).unwrap_or_else(|err| {
            tracing::error!(index = report.index, "Failed to serialize report: {err}");
            std::process::exit(EXIT_CONFIG);
        });
        if let Err(err) = writeln!(out, "{line}") {
            tracing::error!("Failed to write report: {err}");
            std::process::exit(EXIT_CONFIG);
        }
    }

    tracing::info!(
        records = outcome.reports.len(),
        invalid = outcome.invalid_count(),
        "Validation finished",
    );

    if !outcome.all_valid() {
        std::process::exit(EXIT_INVALID);
    }
}
