use std::io;

fn main() {
    railbird_cli::init_tracing();
    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = railbird_cli::run(std::env::args(), &mut out, &mut err);
    std::process::exit(code);
}
