extern crate clap;
extern crate pathclose;

mod commands;
mod error;
mod normalize;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use commands::*;
use error::CliError;

use pathclose::svg::SerializerOptions;

use std::fs::File;
use std::io::prelude::*;
use std::io::{stdin, stdout};
use std::process;

fn main() {
    let matches = app().get_matches();

    init_logger(matches.occurrences_of("VERBOSE"));

    let result = if let Some(path_matches) = matches.subcommand_matches("path") {
        path_cmd(path_matches).and_then(normalize::normalize_path)
    } else if let Some(document_matches) = matches.subcommand_matches("document") {
        document_cmd(document_matches).and_then(normalize::normalize_document)
    } else {
        Ok(())
    };

    if let Err(err) = result {
        log::error!("{}", err);
        process::exit(1);
    }
}

fn app() -> App<'static, 'static> {
    App::new("pathclose")
        .version("0.1")
        .author("Nicolas Silva <nical@fastmail.com>")
        .about("Closes SVG sub-paths that end with a line back to their start")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(Arg::with_name("VERBOSE")
            .short("v")
            .long("verbose")
            .multiple(true)
            .help("Increases the log level (warn by default, RUST_LOG takes precedence)")
        )
        .subcommand(SubCommand::with_name("path")
            .about("Normalizes a single path")
            .arg(Arg::with_name("PATH")
                .value_name("PATH")
                .help("An SVG path")
                .takes_value(true)
                .required(false)
            )
            .arg(Arg::with_name("COUNT")
                .short("c")
                .long("count")
                .help("Prints the number of closed sub-paths instead of the path")
            )
            .arg(input_arg())
            .arg(output_arg())
            .arg(lowercase_close_arg())
        )
        .subcommand(SubCommand::with_name("document")
            .about("Normalizes the path data of every d attribute in an SVG document")
            .arg(input_arg())
            .arg(output_arg())
            .arg(lowercase_close_arg())
        )
}

fn init_logger(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn input_arg() -> Arg<'static, 'static> {
    Arg::with_name("INPUT")
        .help("Sets the input file to use (standard input by default)")
        .short("i")
        .long("input")
        .value_name("FILE")
        .takes_value(true)
        .required(false)
}

fn output_arg() -> Arg<'static, 'static> {
    Arg::with_name("OUTPUT")
        .help("Sets the output file to use (standard output by default)")
        .value_name("FILE")
        .short("o")
        .long("output")
        .takes_value(true)
        .required(false)
}

fn lowercase_close_arg() -> Arg<'static, 'static> {
    Arg::with_name("LOWERCASE_CLOSE")
        .long("lowercase-close")
        .help("Writes close commands as 'z' instead of 'Z'")
}

fn path_cmd(matches: &ArgMatches) -> Result<PathCmd, CliError> {
    let input = match matches.value_of("PATH") {
        Some(path) => path.to_string(),
        None => read_input(matches)?,
    };

    Ok(PathCmd {
        input,
        output: open_output(matches)?,
        serializer: serializer_options(matches),
        count: matches.is_present("COUNT"),
    })
}

fn document_cmd(matches: &ArgMatches) -> Result<DocumentCmd, CliError> {
    Ok(DocumentCmd {
        input: read_input(matches)?,
        output: open_output(matches)?,
        serializer: serializer_options(matches),
    })
}

fn read_input(matches: &ArgMatches) -> Result<String, CliError> {
    let mut input_buffer = String::new();

    if let Some(input_file) = matches.value_of("INPUT") {
        let mut file = File::open(input_file).map_err(|source| CliError::Open {
            path: input_file.to_string(),
            source,
        })?;
        file.read_to_string(&mut input_buffer)?;
    } else {
        stdin().read_to_string(&mut input_buffer)?;
    }

    Ok(input_buffer)
}

fn open_output(matches: &ArgMatches) -> Result<Box<dyn Write>, CliError> {
    if let Some(output_file) = matches.value_of("OUTPUT") {
        let file = File::create(output_file).map_err(|source| CliError::Create {
            path: output_file.to_string(),
            source,
        })?;
        return Ok(Box::new(file));
    }

    Ok(Box::new(stdout()))
}

fn serializer_options(matches: &ArgMatches) -> SerializerOptions {
    let mut options = SerializerOptions::DEFAULT;
    options.lowercase_close = matches.is_present("LOWERCASE_CLOSE");
    options
}

#[test]
fn path_command_from_arguments() {
    let matches = app().get_matches_from(vec![
        "pathclose",
        "path",
        "--lowercase-close",
        "-c",
        "M0 0L1 0L0 0",
    ]);
    let path_matches = matches.subcommand_matches("path").unwrap();

    let cmd = path_cmd(path_matches).unwrap();
    assert_eq!(cmd.input, "M0 0L1 0L0 0");
    assert!(cmd.count);
    assert!(cmd.serializer.lowercase_close);
}

#[test]
fn missing_input_file() {
    let matches = app().get_matches_from(vec![
        "pathclose",
        "document",
        "-i",
        "/nonexistent/pathclose/icon.svg",
    ]);
    let document_matches = matches.subcommand_matches("document").unwrap();

    match document_cmd(document_matches) {
        Err(CliError::Open { path, .. }) => {
            assert_eq!(path, "/nonexistent/pathclose/icon.svg");
        }
        Err(err) => panic!("unexpected error {}", err),
        Ok(_) => panic!("expected an error"),
    }
}

#[test]
fn document_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.svg");
    let output = dir.path().join("out.svg");
    std::fs::write(&input, "<svg>\n<path\nd=\"m2 2h3v3l-3-3\"/></svg>").unwrap();

    let matches = app().get_matches_from(vec![
        "pathclose".to_string(),
        "document".to_string(),
        "-i".to_string(),
        input.to_string_lossy().into_owned(),
        "-o".to_string(),
        output.to_string_lossy().into_owned(),
    ]);
    let document_matches = matches.subcommand_matches("document").unwrap();

    normalize::normalize_document(document_cmd(document_matches).unwrap()).unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "<svg>\n<path\nd=\"m 2 2 h 3 v 3 Z\"/></svg>"
    );
}
