//! Command-line interface for minigit.
//!
//! This is the thin dispatch layer over the library: it parses arguments,
//! invokes the repository and object-store operations, and maps errors to
//! user-facing messages and exit codes.

use std::error::Error;
use std::io::{Read, Write};

use clap::{crate_version, App, AppSettings, ArgMatches};

mod cat_file;
mod find_repo;
mod hash_object;
mod init;

pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("minigit")
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::VersionlessSubcommands)
        .subcommand(cat_file::subcommand())
        .subcommand(hash_object::subcommand())
        .subcommand(init::subcommand())
}

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

pub struct Cli<'a> {
    pub arg_matches: ArgMatches<'a>,
    pub stdin: &'a mut dyn Read,
    pub stdout: &'a mut dyn Write,
}

impl<'a> Cli<'a> {
    pub fn run(&mut self) -> Result<()> {
        let matches = self.arg_matches.clone();
        // ^^ Ugh. Need an independent copy of matches so we can still pass
        // the Cli struct through to subcommand imps.

        match matches.subcommand() {
            ("cat-file", Some(cat_file_matches)) => cat_file::run(self, cat_file_matches),
            ("hash-object", Some(hash_object_matches)) => {
                hash_object::run(self, hash_object_matches)
            }
            ("init", Some(init_matches)) => init::run(self, init_matches),
            _ => unreachable!(),
            // unreachable: Should have exited out with appropriate help or
            // error message if no subcommand was given.
        }
    }

    #[cfg(test)]
    pub fn run_with_stdin_and_args<I, T>(stdin: Vec<u8>, itr: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut stdin = std::io::Cursor::new(stdin);
        let mut stdout = Vec::new();

        Cli {
            arg_matches: app().get_matches_from_safe(itr)?,
            stdin: &mut stdin,
            stdout: &mut stdout,
        }
        .run()?;

        Ok(stdout)
    }

    #[cfg(test)]
    pub fn run_with_args<I, T>(itr: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Cli::run_with_stdin_and_args(Vec::new(), itr)
    }
}

impl<'a> Write for Cli<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.stdout.flush()
    }
}
