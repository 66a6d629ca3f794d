use std::env;
use std::path::{Path, PathBuf};

use clap::Parser;
use subdict::{Error, convert};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Tab-separated dictionary file to read
    #[arg(default_value = "dict.txt")]
    input: PathBuf,

    /// Plist file to write
    #[arg(default_value = "dict.plist")]
    output: PathBuf,
}

/// Directory used to resolve relative paths: the one holding the executable,
/// so the default `dict.txt`/`dict.plist` sit next to the program rather
/// than in whatever directory it was launched from.
fn program_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn main() {
    let args = Args::parse();

    let base = program_dir();
    let input = resolve(&base, &args.input);
    let output = resolve(&base, &args.output);

    println!("Using input file: {}", input.display());
    println!("Using output file: {}", output.display());
    println!("Reading from: {}", input.display());

    match convert(&input, &output) {
        Ok(conversion) => {
            for warning in &conversion.warnings {
                eprintln!("{warning}");
            }
            println!(
                "Successfully converted {} to {}",
                file_name(&input),
                file_name(&output)
            );
            println!("Output written to: {}", output.display());
            println!("Number of words converted: {}", conversion.entry_count);
        }
        Err(error) => {
            eprintln!("Error during conversion:");
            match &error {
                Error::InputNotFound(path) => {
                    eprintln!(
                        "Input file '{}' not found at '{}'.",
                        file_name(path),
                        path.display()
                    );
                    eprintln!("Please make sure the file exists or check the path.");
                }
                other => eprintln!("{other}"),
            }
            std::process::exit(1);
        }
    }
}
