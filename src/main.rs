// src/main.rs

use qemu_wrapper::clock::LaunchClock;
use qemu_wrapper::engine::{exit_codes, Outcome};
use qemu_wrapper::{cli, logging, run};

#[tokio::main]
async fn main() {
    let clock = LaunchClock::start();

    let code = match run_main(clock).await {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("qemu-wrapper error: {err:?}");
            exit_codes::FATAL
        }
    };
    std::process::exit(code);
}

async fn run_main(clock: LaunchClock) -> anyhow::Result<Outcome> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    Ok(run(args, clock).await?)
}
