use anyhow::{Context, Result, bail};
use markdown_lite_config::Config;
use markdown_lite_engine::{MarkdownParser, RenderOptions};
use std::{
    env, io,
    path::{Path, PathBuf},
    process,
};

mod convert;

#[derive(Debug, Default, PartialEq)]
struct Args {
    config_path: Option<PathBuf>,
    verbose: bool,
    help: bool,
    inputs: Vec<PathBuf>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "-v" | "--verbose" => parsed.verbose = true,
            "-c" | "--config" => {
                let Some(path) = args.next() else {
                    bail!("{arg} needs a path");
                };
                parsed.config_path = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') && flag != "-" => bail!("unknown option: {flag}"),
            _ => parsed.inputs.push(PathBuf::from(&arg)),
        }
    }

    Ok(parsed)
}

fn print_usage() {
    eprintln!("Usage: markdown-lite [--config PATH] [--verbose] [FILE...]");
    eprintln!();
    eprintln!("Converts Markdown FILEs (or stdin when none are given) to HTML.");
    eprintln!("Output goes to stdout unless output_dir is set in the config file.");
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file not found: {}", path.display())),
        None => Ok(Config::load()?.unwrap_or_default()),
    }
}

fn render_options(config: &Config) -> RenderOptions {
    RenderOptions {
        code_class_prefix: config.code_class_prefix.clone(),
        glue: config.glue.clone(),
        close_unterminated_fences: config.close_unterminated_fences,
    }
}

fn convert_stdin(parser: &mut MarkdownParser) -> Result<()> {
    log::info!("Reading Markdown from stdin");
    let html = convert::convert_reader(parser, io::stdin().lock())?;
    println!("{html}");
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config_path.as_deref())?;
    log::info!("Using render options: {config:?}");

    // One parser for every document; it starts each parse from fresh state.
    let mut parser = MarkdownParser::new(render_options(&config));

    if args.inputs.is_empty() {
        return convert_stdin(&mut parser);
    }

    for input in &args.inputs {
        if input == Path::new("-") {
            convert_stdin(&mut parser)?;
            continue;
        }
        match &config.output_dir {
            Some(dir) => {
                let written = convert::convert_file_to_dir(&mut parser, input, dir)?;
                log::info!("Wrote {}", written.display());
            }
            None => println!("{}", convert::convert_file(&mut parser, input)?),
        }
    }

    Ok(())
}

fn main() {
    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage();
            process::exit(2);
        }
    };

    if args.help {
        print_usage();
        return;
    }

    let level = if args.verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(args) {
        log::error!("Conversion failed: {e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
