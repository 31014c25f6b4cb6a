use std::process::ExitCode;

fn main() -> ExitCode {
    pizza_demo_cli::run()
}
