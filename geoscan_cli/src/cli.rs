//! Command line definition

use clap::Parser;
use geoscan_core::DEFAULT_CSV_OUTPUT;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "geoscan")]
#[command(
    author,
    version,
    about = "Scan images/ for EXIF GPS coordinates and write CSV and HTML reports",
    long_about = None
)]
pub struct Cli {
    /// Path of the CSV report; the HTML report is written next to it
    #[arg(long = "csv", value_name = "PATH", default_value = DEFAULT_CSV_OUTPUT)]
    pub csv: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Parse the process arguments, accepting the single-dash `-csv` spelling
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Fallible variant of [`Cli::parse_normalized`] over explicit arguments
    pub fn try_parse_normalized<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}

/// Rewrite `-csv` and `-csv=<path>` to their `--csv` forms
///
/// Arguments after a bare `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }

            let rewritten = match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    None
                }
                Some("-csv") => Some(OsString::from("--csv")),
                Some(s) if s.starts_with("-csv=") => Some(OsString::from(format!("-{s}"))),
                _ => None,
            };

            rewritten.unwrap_or(arg)
        })
        .collect()
}
