//! Binary entrypoint for `validate-ssot`.

use std::process::ExitCode;

use ssot_tools::telemetry;

fn main() -> ExitCode {
    telemetry::init_tracing(telemetry::DEFAULT_LEVEL);
    match ssot_tools::run_validate(std::env::args_os()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
