use std::io;

use colored::Colorize;

use tonelab::display::ViewerProcess;
use tonelab::session;

fn main() {
    env_logger::init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut rng = rand::rng();
    let mut display = ViewerProcess;

    // Decode and display failures are the only fatal paths; everything else
    // is recovered inside the session loop.
    if let Err(err) = session::run(&mut input, &mut output, &mut rng, &mut display) {
        eprintln!("{}", err.to_string().red());
        std::process::exit(1);
    }
}
