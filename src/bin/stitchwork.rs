//! Command-line interface for stitchwork
//! Translates lines of crochet shorthand into simulator instructions.
//!
//! Usage:
//!   stitchwork `<line>`...                           - Translate the given lines
//!   stitchwork                                       - Translate lines read from standard input
//!   stitchwork --stage `<stage>` [--format `<format>`] - Dump an intermediate stage instead

use clap::{Arg, ArgAction, ArgMatches, Command};
use config::ConfigError;
use log::{debug, warn};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, BufRead, IsTerminal, Write};
use stitchwork::crochet::config::{Loader, OutputConfig, StitchworkConfig};
use stitchwork::crochet::error::CrochetError;
use stitchwork::crochet::logging::init_logger;
use stitchwork::crochet::pipeline::LineProcessor;
use stitchwork::crochet::transforms::standard::{
    display_with, steps_with, stitches_with, tokenize_with, DisplayTransform, StepsTransform,
    StitchesTransform, TokenizeTransform,
};

fn main() {
    let matches = Command::new("stitchwork")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate crochet shorthand into crochet simulator instructions")
        .arg(
            Arg::new("lines")
                .help("Lines to translate (reads standard input when omitted)")
                .value_name("LINE")
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .short('s')
                .help("Text printed between display tokens"),
        )
        .arg(
            Arg::new("stage")
                .long("stage")
                .help("Stage to print")
                .value_parser(["display", "tokens", "stitches", "steps"])
                .default_value("display"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["text", "json", "yaml"])
                .default_value("text"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("keep-going")
                .long("keep-going")
                .help("Continue with the next line after an error")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    if let Err(e) = init_logger(matches.get_flag("debug"), &config.logging.level) {
        eprintln!("Error: {}", e);
    }

    let stage = matches.get_one::<String>("stage").unwrap();
    let format = matches.get_one::<String>("format").unwrap();
    let session = Session {
        mode: Mode::new(stage, format, &config),
        format: Format::parse(format),
        keep_going: matches.get_flag("keep-going"),
        config,
    };

    let outcome = match matches.get_many::<String>("lines") {
        Some(lines) => session.run(lines.map(|line| Ok(line.clone())), false),
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            session.run(stdin.lock().lines(), interactive)
        }
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Layer the user's config file and flag overrides over the defaults
fn load_config(matches: &ArgMatches) -> Result<StitchworkConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(separator) = matches.get_one::<String>("separator") {
        loader = loader.set_override("output.separator", separator.as_str())?;
    }
    loader.build()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
    Yaml,
}

impl Format {
    fn parse(name: &str) -> Self {
        match name {
            "json" => Format::Json,
            "yaml" => Format::Yaml,
            _ => Format::Text,
        }
    }
}

/// What a line is run through
enum Mode {
    /// Display tokens written as soon as each run ends
    Stream(LineProcessor),
    Displays(DisplayTransform),
    Tokens(TokenizeTransform),
    Stitches(StitchesTransform),
    Steps(StepsTransform),
}

impl Mode {
    fn new(stage: &str, format: &str, config: &StitchworkConfig) -> Self {
        let options = config.tokenizer;
        match (stage, format) {
            ("tokens", _) => Mode::Tokens(tokenize_with(options)),
            ("stitches", _) => Mode::Stitches(stitches_with(options)),
            ("steps", _) => Mode::Steps(steps_with(options)),
            (_, "text") => Mode::Stream(LineProcessor::new(options)),
            _ => Mode::Displays(display_with(options)),
        }
    }
}

struct Session {
    mode: Mode,
    format: Format,
    keep_going: bool,
    config: StitchworkConfig,
}

impl Session {
    /// Translate every line, returning whether all of them succeeded
    fn run<I>(&self, lines: I, interactive: bool) -> io::Result<bool>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut all_ok = true;

        if interactive {
            self.prompt(&mut out)?;
        }
        for (index, line) in lines.enumerate() {
            let line = line?;
            if let Err(err) = self.line(&line, &mut out)? {
                eprintln!("Error: {}", err);
                warn!("line {} failed ({:?}): {}", index + 1, err.category(), err);
                all_ok = false;
                if !self.keep_going {
                    return Ok(false);
                }
            }
            if interactive {
                self.prompt(&mut out)?;
            }
        }
        debug!("finished reading lines");
        Ok(all_ok)
    }

    fn prompt(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", self.config.repl.prompt)?;
        out.flush()
    }

    fn line(&self, line: &str, out: &mut impl Write) -> io::Result<Result<(), CrochetError>> {
        let input = line.to_string();
        let result = match &self.mode {
            Mode::Stream(processor) => return stream(processor, &self.config.output, line, out),
            Mode::Displays(transform) => transform.run(input).map(|items| self.dump(&items, out)),
            Mode::Tokens(transform) => transform.run(input).map(|items| self.dump(&items, out)),
            Mode::Stitches(transform) => transform.run(input).map(|items| self.dump(&items, out)),
            Mode::Steps(transform) => transform.run(input).map(|items| self.dump(&items, out)),
        };
        match result {
            Ok(written) => written.map(Ok),
            Err(err) => Ok(Err(err)),
        }
    }

    fn dump<T>(&self, items: &[T], out: &mut impl Write) -> io::Result<()>
    where
        T: Serialize + Display,
    {
        match self.format {
            Format::Text => {
                let texts: Vec<String> = items.iter().map(ToString::to_string).collect();
                writeln!(out, "{}", self.config.output.join(&texts))
            }
            Format::Json => {
                let json = serde_json::to_string(items)
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
                writeln!(out, "{}", json)
            }
            Format::Yaml => {
                let yaml = serde_yaml::to_string(items)
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
                write!(out, "---\n{}", yaml)
            }
        }
    }
}

/// Write display tokens of one line as they are produced, then end the line
fn stream(
    processor: &LineProcessor,
    output: &OutputConfig,
    line: &str,
    out: &mut impl Write,
) -> io::Result<Result<(), CrochetError>> {
    let mut first = true;
    let mut io_error = None;
    let result = processor.process_line(line, |text| {
        if io_error.is_some() {
            return;
        }
        let lead = if first {
            &output.leading
        } else {
            &output.separator
        };
        first = false;
        if let Err(e) = write!(out, "{}{}", lead, text).and_then(|_| out.flush()) {
            io_error = Some(e);
        }
    });
    if let Some(e) = io_error {
        return Err(e);
    }
    writeln!(out)?;
    Ok(result)
}
