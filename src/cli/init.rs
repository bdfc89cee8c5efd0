use std::io::Write;
use std::path::Path;

use super::{Cli, Result};

use crate::repo::OnDisk;

use clap::{App, Arg, ArgMatches, SubCommand};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("init")
        .about("Create an empty minigit repository")
        .arg(
            Arg::with_name("directory")
                .required(true)
                .help("The directory to create"),
        )
}

pub(crate) fn run(cli: &mut Cli, init_matches: &ArgMatches) -> Result<()> {
    let dir = init_matches.value_of("directory").unwrap();
    let path = Path::new(dir);

    let reinit = path.join(".minigit").is_dir();

    OnDisk::init(path)?;

    if reinit {
        writeln!(
            cli,
            "Reinitialized existing MiniGit repository in {}",
            path.display()
        )?;
    } else {
        writeln!(
            cli,
            "Initialized empty MiniGit repository in {}",
            path.display()
        )?;
    }

    Ok(())
}
