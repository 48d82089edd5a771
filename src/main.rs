// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use tracing::Level;

use inkey::config::TheoryFile;
use inkey::instrument::Fretboard;
use inkey::music::{transposition_offsets, KeyFinder, PitchClass};
use inkey::session::{InKeySession, KeysView};

fn print_usage() {
    println!("inkey - Find the keys that fit your notes");
    println!();
    println!("Usage: inkey [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("Commands:");
    println!("  keys <NOTE>...           List keys containing all the given notes");
    println!("  scale <ROOT> <SCALE>     Show the notes and degrees of a scale");
    println!("  transpose <REF> <NOTE>...  Show offsets from REF to each note");
    println!("  scales                   List the scale catalog");
    println!("  fret <NOTE>              Show where a note lies on the guitar neck");
    println!();
    println!("Options:");
    println!("  --config <PATH>          Load scales and defaults from a YAML or TOML file");
    println!("  --verbose                Enable debug logging");
    println!("  --help                   Show this help message");
}

/// Global options stripped from the argument list
struct Options {
    config: Option<PathBuf>,
    verbose: bool,
    help: bool,
    rest: Vec<String>,
}

fn parse_options(args: Vec<String>) -> Result<Options> {
    let mut options = Options {
        config: None,
        verbose: false,
        help: false,
        rest: Vec::new(),
    };
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a path"))?;
                options.config = Some(PathBuf::from(path));
            }
            "--verbose" | "-v" => options.verbose = true,
            "--help" | "-h" => options.help = true,
            _ => options.rest.push(arg),
        }
    }
    Ok(options)
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_notes(names: &[String]) -> Result<Vec<PitchClass>> {
    names
        .iter()
        .map(|name| name.parse::<PitchClass>().map_err(anyhow::Error::from))
        .collect()
}

fn load_session(config: Option<&PathBuf>) -> Result<InKeySession> {
    match config {
        Some(path) => TheoryFile::load(path)?.build_session(),
        None => Ok(InKeySession::default()),
    }
}

fn list_keys(session: &mut InKeySession, names: &[String]) -> Result<()> {
    for note in parse_notes(names)? {
        if !session.selection().contains(note) {
            session.toggle_note(note);
        }
    }

    let view = session.keys_view();
    match &view {
        KeysView::Keys(keys) => {
            for key in keys {
                println!("{}", key);
            }
        }
        KeysView::TooMany(count) => {
            println!("{} keys match.", count);
        }
        _ => {}
    }
    if let Some(message) = view.placeholder() {
        println!("{}", message);
    }
    Ok(())
}

fn show_scale(finder: &KeyFinder, root: &str, scale_type: &str) -> Result<()> {
    let root: PitchClass = root.parse()?;
    let info = finder
        .scale_info(root, scale_type)
        .ok_or_else(|| anyhow!("Unknown scale type: {} (try `inkey scales`)", scale_type))?;

    println!("{}", info.label);
    for (note, label) in info.notes.iter().zip(&info.degree_labels) {
        println!("  {:<6} {}", label, note.enharmonic_name());
    }
    println!("Intervals: {}", info.interval_summary());
    Ok(())
}

fn show_transposition(reference: &str, names: &[String]) -> Result<()> {
    let reference: PitchClass = reference.parse()?;
    let offsets = transposition_offsets(parse_notes(names)?, reference);
    for (note, offset) in offsets {
        println!("{}: {}", note.enharmonic_name(), offset);
    }
    Ok(())
}

fn list_scales(finder: &KeyFinder) {
    for def in finder.catalog().iter() {
        let intervals: Vec<String> = def.intervals.iter().map(|i| i.to_string()).collect();
        println!("{:<18} {:<18} [{}]", def.id, def.name, intervals.join(", "));
    }
}

fn show_frets(name: &str) -> Result<()> {
    let note: PitchClass = name.parse()?;
    let neck = Fretboard::standard();
    for (i, string) in neck.strings().iter().enumerate() {
        let frets: Vec<String> = neck
            .positions_of(note)
            .iter()
            .filter(|p| p.string == i)
            .map(|p| p.fret.to_string())
            .collect();
        println!("{}: {}", string.label, frets.join(" "));
    }
    Ok(())
}

fn main() -> Result<()> {
    let options = parse_options(env::args().skip(1).collect())?;
    init_logging(options.verbose);

    if options.help {
        print_usage();
        return Ok(());
    }

    let Some((command, args)) = options.rest.split_first() else {
        println!("inkey - Find the keys that fit your notes");
        println!("Run with --help for usage information");
        return Ok(());
    };

    let mut session = load_session(options.config.as_ref())
        .context("Failed to load configuration")?;

    match command.as_str() {
        "keys" => {
            if args.is_empty() {
                bail!("keys requires at least one note");
            }
            list_keys(&mut session, args)?;
        }
        "scale" => {
            let [root, scale_type] = args else {
                bail!("scale requires a root and a scale type, e.g. `inkey scale A pentatonicMinor`");
            };
            show_scale(session.finder(), root, scale_type)?;
        }
        "transpose" => {
            let Some((reference, notes)) = args.split_first() else {
                bail!("transpose requires a reference note");
            };
            show_transposition(reference, notes)?;
        }
        "scales" => list_scales(session.finder()),
        "fret" => {
            let [note] = args else {
                bail!("fret requires exactly one note");
            };
            show_frets(note)?;
        }
        other => {
            eprintln!("Error: unknown command: {}", other);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
