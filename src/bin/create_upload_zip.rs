//! Binary entrypoint for `create-upload-zip`.

use std::process::ExitCode;

use ssot_tools::telemetry;

fn main() -> ExitCode {
    telemetry::init_tracing(telemetry::DEFAULT_LEVEL);
    match ssot_tools::run_pack(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
