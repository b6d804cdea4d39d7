use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgGroup, Parser};

use pom_version::{descriptor, ui, version};

#[derive(clap::Parser)]
#[command(
    name = "pom-version",
    version,
    about = "Read the Maven project version and derive release or next development forms",
    group = ArgGroup::new("mode").args(["release", "next"])
)]
struct Args {
    #[arg(long, help = "Print the version with any -SNAPSHOT suffix stripped")]
    release: bool,

    #[arg(long, help = "Print the version expected after the next release")]
    next: bool,

    #[arg(
        value_name = "VERSION",
        requires = "mode",
        help = "Transform this value instead of reading it from pom.xml"
    )]
    version_override: Option<String>,
}

fn main() -> Result<()> {
    // Usage errors exit with 1, not clap's default of 2; help and version
    // screens stay on stdout with a zero exit.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let current = match descriptor::resolve(args.version_override) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let output = if args.release {
        version::to_release(&current)
    } else if args.next {
        version::next_version(&current)?
    } else {
        current
    };

    println!("{}", output);
    Ok(())
}
