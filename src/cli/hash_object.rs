use std::io::Write;

use super::{find_repo, Cli, Result};

use crate::object::{ContentSource, FileContentSource, Object, ReadContentSource};
use crate::repo::Repo;

use clap::{App, Arg, ArgMatches, Error, ErrorKind, SubCommand};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("hash-object")
        .about("Compute object ID and optionally create an object from a file")
        .arg(
            Arg::with_name("w")
                .short("w")
                .help("Actually write the object into the object database"),
        )
        .arg(
            Arg::with_name("stdin")
                .long("stdin")
                .help("Read the object from standard input instead of from a file"),
        )
        .arg(Arg::with_name("file"))
}

pub(crate) fn run(cli: &mut Cli, args: &ArgMatches) -> Result<()> {
    let object = object_from_args(cli, args)?;

    if args.is_present("w") {
        let mut repo = find_repo::from_current_dir()?;
        repo.put_object(&object)?;
    }

    writeln!(cli, "{}", object.id())?;

    Ok(())
}

fn object_from_args(cli: &mut Cli, args: &ArgMatches) -> Result<Object> {
    let content_source = content_source_from_args(cli, args)?;
    let object = Object::new(content_source)?;
    Ok(object)
}

fn content_source_from_args(cli: &mut Cli, args: &ArgMatches) -> Result<Box<dyn ContentSource>> {
    let stdin = args.is_present("stdin");
    let file = args.value_of("file");

    match (file, stdin) {
        (Some(file), false) => Ok(Box::new(FileContentSource::new(file)?)),
        (None, true) => Ok(Box::new(ReadContentSource::new(&mut cli.stdin)?)),
        _ => Err(Box::new(Error {
            message: "content source must be either --stdin or a file path".to_string(),
            kind: ErrorKind::MissingRequiredArgument,
            info: None,
        })),
    }
}
