use clap::Parser;
use form_control::RichInputElement;
use input_core::InputId;
use segment::StylePattern;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Colourize stdin lines with a style pattern and report their validity.
#[derive(Parser, Debug)]
#[command(version, about, arg_required_else_help = true)]
struct Cli {
    /// Pattern matched against each whole line; capture groups are highlighted
    style_pattern: String,
    #[arg(long = "type", value_name = "TYPE", help = "Input type: text, tel, email or url")]
    input_type: Option<String>,
    #[arg(long, value_name = "REGEX", help = "Validation pattern the whole line must match")]
    pattern: Option<String>,
    #[arg(long, help = "Empty lines are invalid")]
    required: bool,
    #[arg(long = "maxlength", value_name = "N", help = "Maximum length in UTF-16 code units")]
    max_length: Option<usize>,
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Log to stderr (-v debug, -vv trace)"
    )]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("richinput: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new().add_filter_allow_str("richinput").build();
    // A logger can only fail to install if one is already set.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn run(cli: &Cli) -> io::Result<()> {
    if let Err(err) = StylePattern::compile(&cli.style_pattern) {
        log::warn!(target: "richinput.pattern", "highlighting disabled: {err}");
    }

    let max_length = cli.max_length.map(|n| n.to_string());
    let attributes = [
        ("stylepattern", Some(cli.style_pattern.as_str())),
        ("type", cli.input_type.as_deref()),
        ("pattern", cli.pattern.as_deref()),
        ("required", cli.required.then_some("")),
        ("maxlength", max_length.as_deref()),
    ];
    let mut input = RichInputElement::with_attributes(InputId::from_raw(1), attributes);

    let stdin = io::stdin().lock();
    let mut out = io::stdout().lock();
    for line in stdin.lines() {
        let line = line?;
        let id = input.id();
        input.store_mut().set(id, line);
        input.on_input();

        if input.check_validity() {
            writeln!(out, "{}\tvalid", input.markup())?;
        } else {
            writeln!(out, "{}\tinvalid: {}", input.markup(), input.validation_message())?;
        }
    }
    out.flush()
}
