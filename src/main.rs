//! treegraph CLI
//!
//! Usage:
//!   treegraph [OPTIONS] [FILE]
//!
//! Reads bracket notation from FILE (or stdin), renders it, and writes SVG
//! to stdout or an image to `--output`. A `.png` output path selects PNG;
//! anything else gets SVG.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use treegraph::{render_png_with_config, render_with_config, PipelineError, RenderConfig, TreeOptions};

#[derive(Parser)]
#[command(name = "treegraph")]
#[command(about = "Render linguistic syntax trees from labeled bracket notation")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file; `.png` rasterizes, anything else is SVG (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render in black and white instead of the colored palette
    #[arg(long)]
    monochrome: bool,

    /// Disable antialiasing (request crisp edges)
    #[arg(long)]
    no_antialias: bool,

    /// Expand collapsed (^) constituents instead of drawing triangles
    #[arg(long)]
    no_triangles: bool,

    /// Number repeated category labels (NP -> NP1, NP2)
    #[arg(long)]
    autosub: bool,

    /// TrueType/OpenType font file for labels
    #[arg(long)]
    font: Option<PathBuf>,

    /// Font size in points (default 12)
    #[arg(long)]
    font_size: Option<u16>,

    /// Options file (TOML); command-line flags override it
    #[arg(long)]
    options: Option<PathBuf>,

    /// Debug mode: dump computed positions to stderr
    #[arg(short, long)]
    debug: bool,

    /// Show notation reference
    #[arg(short, long)]
    grammar: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.grammar {
        print_grammar();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Base options from file, then CLI overrides
    let mut options = match &cli.options {
        Some(path) => match TreeOptions::from_file(path) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("Error loading options '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => TreeOptions::default(),
    };
    if cli.monochrome {
        options = options.with_color(false);
    }
    if cli.no_antialias {
        options = options.with_antialias(false);
    }
    if cli.no_triangles {
        options = options.with_triangles(false);
    }
    if cli.autosub {
        options = options.with_autosub(true);
    }
    if let Some(font) = &cli.font {
        options = options.with_font_path(font);
    }
    if let Some(size) = cli.font_size {
        options = options.with_font_size(size);
    }

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let config = RenderConfig::new().with_options(options).with_debug(cli.debug);

    let wants_png = cli
        .output
        .as_ref()
        .and_then(|p| p.extension())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    let rendered = if wants_png {
        render_png_with_config(&source, &config)
    } else {
        render_with_config(&source, &config).map(String::into_bytes)
    };

    let bytes = match rendered {
        Ok(bytes) => bytes,
        Err(PipelineError::Parse(parse_err)) => {
            eprint!("{}", parse_err.format(&source, &filename));
            std::process::exit(1);
        }
        Err(other) => {
            eprintln!("Error: {}", other);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &bytes) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => {
            use std::io::Write;
            let mut stdout = io::stdout().lock();
            let _ = stdout.write_all(&bytes);
            let _ = stdout.write_all(b"\n");
        }
    }
}

fn print_intro() {
    println!(
        r#"treegraph - render linguistic syntax trees from labeled bracket notation

USAGE:
    treegraph [OPTIONS] [FILE]
    echo '[S [NP the cat] [VP sat]]' | treegraph > tree.svg

OPTIONS:
    -o, --output <FILE>   Write SVG, or PNG when FILE ends in .png
    --monochrome          Black and white output
    --no-antialias        Request crisp edges
    --no-triangles        Expand collapsed (^) constituents
    --autosub             Number repeated category labels
    --font <FILE>         Font file for labels
    --font-size <PT>      Font size in points (default 12)
    --options <FILE>      Options file (TOML)
    -g, --grammar         Show notation reference
    -h, --help            Print help

Run --grammar for the bracket-notation reference."#
    );
}

fn print_grammar() {
    println!(
        r#"BRACKET NOTATION
================

TREES
-----
[Label child child ...]     A constituent with ordered children
word                        A terminal leaf
[NP the cat]                NP dominating the words "the" and "cat"
[S [NP John] [VP ran]]      Nested constituents

COLLAPSED CONSTITUENTS
----------------------
[NP^ the old man]           Drawn as NP over a triangle spanning the
                            unexpanded phrase "the old man"

ESCAPES
-------
\[  \]  \\  \^              Literal bracket, backslash, or caret inside
                            a label or word

RULES
-----
1. Exactly one root constituent; trailing text is an error
2. Every constituent needs a label: [] is rejected
3. Whitespace (spaces, tabs, newlines) only separates tokens
4. A collapsed (^) constituent contains words only, no nested brackets

EXAMPLES
--------
[S [NP the cat] [VP sat]]
[S [NP^ the old man] [VP [V saw] [NP Mary]]]
echo '[S [NP dogs] [VP bark]]' | treegraph -o tree.png"#
    );
}
