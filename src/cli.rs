// src/cli.rs
use std::{fs, io::Write, path::Path};

use crate::compare::{compare, Verdict};
use crate::config::consts::{EXIT_FAIL, EXIT_OK, USAGE};
use crate::config::options::{CheckOptions, Command};
use crate::error::{CheckError, Result};
use crate::report::ConsoleReporter;
use crate::specs::{generated, manual};

/// Parse the arguments after the program name.
/// Flags may appear anywhere before a `--`; everything after it is positional.
/// Exactly two positionals are required.
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut verbose = false;
    let mut positional: Vec<String> = Vec::new();
    let mut args = args.into_iter().map(Into::<String>::into);

    while let Some(a) = args.next() {
        match a.as_str() {
            "--" => {
                positional.extend(args.by_ref());
                break;
            }
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--verbose" => verbose = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(CheckError::Usage(format!("Unknown option: {flag}")));
            }
            _ => positional.push(a),
        }
    }

    match <[String; 2]>::try_from(positional) {
        Ok([manual_path, generated_path]) => {
            let mut opts = CheckOptions::new(manual_path, generated_path);
            opts.verbose = verbose;
            Ok(Command::Check(opts))
        }
        Err(rest) => Err(CheckError::Usage(format!(
            "Expected 2 arguments, got {}",
            rest.len()
        ))),
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CheckError::Io { path: path.to_path_buf(), source })
}

/// Extract both documents and compare them, reporting on `out`.
/// Fails with [`CheckError::NoManualTable`] when the manual yields nothing.
pub fn check<W: Write>(opts: &CheckOptions, out: &mut W) -> Result<Verdict> {
    let manual_doc = read(&opts.manual_path)?;
    let documented = manual::extract(&manual_doc);
    if documented.is_empty() {
        return Err(CheckError::NoManualTable(opts.manual_path.clone()));
    }
    logf!("Manual: {} methods from {}", documented.len(), opts.manual_path.display());

    let generated_doc = read(&opts.generated_path)?;
    let declared = generated::extract(&generated_doc);
    if declared.is_empty() {
        loge!(
            "No member declarations found in {}; nothing to check",
            opts.generated_path.display()
        );
    }
    logf!("Generated: {} methods from {}", declared.len(), opts.generated_path.display());

    let mut reporter = ConsoleReporter::new(out);
    let verdict = compare(&declared, &documented, Some(&mut reporter));
    reporter.into_inner().map_err(CheckError::Output)?;
    Ok(verdict)
}

/// Full CLI run. Returns the process exit code; failures to read the inputs
/// or to write the output come back as `Err`.
pub fn run<I, S, W, E>(args: I, out: &mut W, err: &mut E) -> Result<i32>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    W: Write,
    E: Write,
{
    let opts = match parse_args(args) {
        Ok(Command::Check(opts)) => opts,
        Ok(Command::Help) => {
            writeln!(out, "{USAGE}").map_err(CheckError::Output)?;
            return Ok(EXIT_OK);
        }
        Err(e) => {
            writeln!(err, "{e}\n\n{USAGE}").map_err(CheckError::Output)?;
            return Ok(EXIT_FAIL);
        }
    };

    crate::log::set_verbose(opts.verbose);

    writeln!(out, "Manual documentation:    {}", opts.manual_path.display()).map_err(CheckError::Output)?;
    writeln!(out, "Generated documentation: {}", opts.generated_path.display()).map_err(CheckError::Output)?;

    match check(&opts, out) {
        Ok(verdict) if verdict.passed => Ok(EXIT_OK),
        Ok(_) => Ok(EXIT_FAIL),
        Err(e @ CheckError::NoManualTable(_)) => {
            writeln!(out, "{e}").map_err(CheckError::Output)?;
            Ok(EXIT_FAIL)
        }
        Err(e) => Err(e),
    }
}
