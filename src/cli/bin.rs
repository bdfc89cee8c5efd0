use std::io;
use std::process::exit;

use minigit::cli::{app, Cli};

fn main() {
    let mut stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut cli = Cli {
        arg_matches: app().get_matches(),
        stdin: &mut stdin,
        stdout: &mut stdout,
    };

    if let Err(err) = cli.run() {
        eprintln!("error: {}", err);
        exit(1);
    }
}
