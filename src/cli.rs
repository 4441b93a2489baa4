use std::ffi::OsString;

use clap::Parser;

/// jwatch - compile every *.java file in the current directory
///
/// With no arguments the build is strict: the first compile failure stops
/// the run and becomes the exit status. `jwatch watch` builds once, then
/// rebuilds every time a file under the directory is written.
#[derive(Parser, Debug)]
#[command(name = "jwatch")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Only the first argument is read, and only to check for `watch`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parse `argv` keeping every argument after the program name verbatim.
    ///
    /// A leading `--` is injected so clap treats everything the user typed,
    /// including a literal `--`, as a value.
    pub fn parse_verbatim<I>(argv: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut argv = argv.into_iter();
        let program = argv.next().unwrap_or_else(|| OsString::from("jwatch"));
        Self::parse_from(
            std::iter::once(program)
                .chain(std::iter::once(OsString::from("--")))
                .chain(argv),
        )
    }
}
