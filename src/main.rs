mod app;
mod error;
mod sim;
mod utils;
mod vec2f;

use std::process::ExitCode;

use app::{AppCore, Options};

fn main() -> ExitCode {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| String::from("bounce"));
    let opts = Options::parse(args);

    if opts.show_help {
        print!("{}", Options::usage(&program));
        return ExitCode::SUCCESS;
    }

    // Subsystem failures are fatal; the loop is never entered.
    let mut core = match AppCore::new() {
        Ok(core) => core,
        Err(why) => {
            eprintln!("{why}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(why) = core.run(&opts) {
        eprintln!("{why}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
