//! Acceptance runner: `TEST_INPUT_FILE_LOCATION=input.json nodetron-uat`.

use std::process::ExitCode;

use nodetron::console;
use nodetron::uat::{input, Error, Suite};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let test_input = match input::read_from_env() {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let service_url = match input::service_url(&test_input) {
        Ok(url) => url,
        Err(Error::MissingServiceUrl) => {
            console::print_missing_service_url(&test_input);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let suite = match Suite::new(&service_url) {
        Ok(suite) => suite,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    console::print_suite_banner(suite.base().as_str(), suite.schedule().total_delay());
    match suite.run().await {
        Ok(report) => {
            console::print_summary(report.passed(), report.failed());
            if report.all_passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            console::log_not_ready(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
