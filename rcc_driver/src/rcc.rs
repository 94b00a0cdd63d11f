mod timings;

use clap::{ArgAction, Parser as CliParser};

use rcc_err::diag::{report_fatal, FATAL_EXIT_CODE};

use rcc_parse::{
    ast::Program,
    config::{ParseConfig, DEFAULT_MAX_DEPTH, MAX_SLOT_WIDTH},
    lex_source, parse_tokens, printer,
    symtab::{SymTab, SymTabMode},
};

use std::{
    fs,
    io::{self, Read},
    process,
    time::Instant,
};

use timings::Timings;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Translates a program in the expression language into its syntax tree.
#[derive(CliParser)]
#[command(name = "rcc", version = "1.0")]
pub struct RccOpts {
    /// Program text. Read from --filename or stdin when omitted.
    source: Option<String>,

    #[arg(long, conflicts_with = "source")]
    filename: Option<String>,

    /// Print the full syntax tree structure instead of its compact rendering.
    #[arg(long)]
    print_ast: bool,

    #[arg(long)]
    print_tokens: bool,

    /// Print the frame layout after parsing.
    #[arg(long)]
    print_locals: bool,

    /// Storage size of each local variable slot.
    #[arg(
        long,
        default_value_t = 8,
        value_parser = clap::value_parser!(u64).range(1..=MAX_SLOT_WIDTH as u64)
    )]
    slot_width: u64,

    /// Deepest nesting of parentheses or chained assignments allowed in one expression.
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_DEPTH as u64,
        value_parser = clap::value_parser!(u64).range(1..=512)
    )]
    max_depth: u64,

    /// Register identifiers while lexing instead of while parsing.
    #[arg(long)]
    eager_idents: bool,

    /// Give every registration of a name its own slot, with the newest one winning lookups.
    /// Only the lexer registers names, so this needs --eager-idents.
    #[arg(long, requires = "eager_idents")]
    shadowing: bool,

    #[arg(long)]
    timings: bool,

    /// Raise log verbosity (-v for debug, -vv for trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl RccOpts {
    fn parse_config(&self) -> ParseConfig {
        ParseConfig {
            slot_width: self.slot_width as usize,
            eager_idents: self.eager_idents,
            sym_tab_mode: if self.shadowing {
                SymTabMode::Shadowing
            } else {
                SymTabMode::Unique
            },
            max_depth: self.max_depth as usize,
        }
    }
}

fn main() {
    let opts = RccOpts::parse();
    init_tracing(opts.verbose);

    let source = match read_source(&opts) {
        Ok(src) => src,
        Err(e) => {
            eprintln!("rcc: {}", e);
            process::exit(FATAL_EXIT_CODE);
        }
    };

    let config = opts.parse_config();
    debug!(?config, "starting translation");
    translate(&opts, &source, &config);
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Gets the program text from the command line, a file, or stdin, in that order.
fn read_source(opts: &RccOpts) -> io::Result<String> {
    if let Some(src) = &opts.source {
        return Ok(src.clone());
    }

    match &opts.filename {
        Some(path) => {
            info!(path = path.as_str(), "reading source file");
            fs::read_to_string(path)
                .map_err(|e| io::Error::new(e.kind(), format!("could not open file '{}': {}", path, e)))
        }
        None => {
            let mut src = String::new();
            io::stdin().read_to_string(&mut src)?;
            Ok(src)
        }
    }
}

/// Lexes and parses the source, then prints whatever output was asked for. Any
/// diagnostic ends the process here with a failure status.
fn translate(opts: &RccOpts, source: &str, config: &ParseConfig) {
    let mut timings = Timings::default();
    let start = Instant::now();
    let mut symtab = SymTab::with_config(config);

    let lex_start = Instant::now();
    let tokens = match lex_source(source, &mut symtab, config) {
        Ok(tokens) => tokens,
        Err(e) => report_fatal(source, &e),
    };
    timings.lex_time = lex_start.elapsed();

    if opts.print_tokens {
        for tkn in &tokens {
            let kind = format!("{:?}", tkn.ty.kind());
            println!("{:>5}  {:<6}  {}", tkn.pos, kind, tkn.describe());
        }
    }

    let parse_start = Instant::now();
    let program = match parse_tokens(tokens, &mut symtab, config) {
        Ok(program) => program,
        Err(e) => report_fatal(source, &e),
    };
    timings.parse_time = parse_start.elapsed();
    timings.total_time = start.elapsed();

    emit(opts, &program, &symtab);

    if opts.timings {
        timings.emit();
    }
}

fn emit(opts: &RccOpts, program: &Program, symtab: &SymTab) {
    if opts.print_ast {
        println!("{:#?}", program);
    } else {
        print!("{}", printer::render_program(program));
    }

    if opts.print_locals {
        print!("{}", printer::dump_locals(symtab));
    }
}
