use std::io::Write;
use std::str::FromStr;

use super::{find_repo, Cli, Result};

use crate::object::Id;
use crate::repo::Repo;

use clap::{App, Arg, ArgMatches, SubCommand};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("cat-file")
        .about("Provide content for repository objects")
        .arg(
            Arg::with_name("object")
                .required(true)
                .help("The ID of the object to show"),
        )
}

pub(crate) fn run(cli: &mut Cli, args: &ArgMatches) -> Result<()> {
    let id = Id::from_str(args.value_of("object").unwrap())?;

    let repo = find_repo::from_current_dir()?;
    let content = repo.get_object(&id)?;

    // Raw bytes, exactly as stored. No trailing-newline trimming.
    cli.write_all(&content)?;

    Ok(())
}
