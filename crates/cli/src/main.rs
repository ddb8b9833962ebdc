use std::process::ExitCode;

fn main() -> ExitCode {
    courier_advisor_cli::run()
}
