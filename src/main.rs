use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use phishcheck::error::{CheckError, Result};
use phishcheck::field::{compute_field, FieldMode, FieldParams};
use phishcheck::obfuscator::{
    ObfuscationSettings, Obfuscator, Platform, Upload, MAX_LEVEL, MIN_LEVEL,
};
use phishcheck::render::{renderer_for, Context, Language, OutputFormat, Page, Renderer, Theme};
use phishcheck::{Config, EmailAnalyzer, UrlChecker};
use std::io::Read;
use std::path::Path;
use std::process;

fn build_cli() -> Command {
    Command::new("phishcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Phishing indicator scoring for emails and URLs, plus obfuscation and field tools")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value(Config::default_path()),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Generate a default configuration file")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("test-config")
                .long("test-config")
                .help("Validate the configuration and list the active checks")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging, including each check that fires")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .value_name("CODE")
                .help("Report language: en, hi, te, bn, ur")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_parser(["dark", "light"])
                .help("Color theme for text output")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format")
                .global(true),
        )
        .subcommand(
            Command::new("email")
                .about("Score an email for phishing indicators")
                .arg(
                    Arg::new("file")
                        .value_name("FILE")
                        .help("Email text file, '-' or omitted for stdin"),
                ),
        )
        .subcommand(
            Command::new("url")
                .about("Check a URL against keyword and TLD heuristics")
                .arg(Arg::new("url").value_name("URL").required(true))
                .arg(
                    Arg::new("fuzz")
                        .long("fuzz")
                        .help("Randomly flag URLs no rule matched")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_name("N")
                        .help("Seed for fuzz mode")
                        .value_parser(value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("obfuscate")
                .about("Copy a source file to the outputs directory and print a simulated report")
                .arg(Arg::new("file").value_name("FILE").required(true))
                .arg(
                    Arg::new("platform")
                        .long("platform")
                        .value_parser(["windows", "linux"])
                        .default_value("windows"),
                )
                .arg(
                    Arg::new("level")
                        .long("level")
                        .default_value("5")
                        .value_parser(
                            value_parser!(u8).range(MIN_LEVEL as i64..=MAX_LEVEL as i64),
                        ),
                )
                .arg(
                    Arg::new("params")
                        .long("params")
                        .value_name("TEXT")
                        .help("key=value lines (a literal \\n also splits lines)")
                        .conflicts_with("params-file"),
                )
                .arg(
                    Arg::new("params-file")
                        .long("params-file")
                        .value_name("FILE")
                        .help("Read custom parameters from a file"),
                ),
        )
        .subcommand(
            Command::new("field")
                .about("Sample the electric field of a point charge or oscillating dipole")
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .value_parser(["point", "dipole"])
                        .default_value("point"),
                )
                .arg(
                    Arg::new("charge")
                        .long("charge")
                        .default_value("1.0")
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("scale")
                        .long("scale")
                        .default_value("1.0")
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("grid")
                        .long("grid")
                        .default_value("10")
                        .value_parser(
                            PossibleValuesParser::new(["8", "10", "12", "15"])
                                .map(|s| s.parse::<usize>().unwrap_or(10)),
                        ),
                )
                .arg(
                    Arg::new("time")
                        .long("time")
                        .default_value("0.0")
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("hide-charges")
                        .long("hide-charges")
                        .help("Do not report charge markers")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        generate_default_config(generate_path);
        return;
    }

    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or(Config::default_path());

    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e:#}");
            process::exit(1);
        }
    };

    if matches.get_flag("test-config") {
        test_config(&config);
        return;
    }

    let language = matches
        .get_one::<String>("language")
        .map(|code| Language::from_code_or_default(code))
        .unwrap_or(config.ui.language);
    let theme = matches
        .get_one::<String>("theme")
        .and_then(|t| t.parse::<Theme>().ok())
        .unwrap_or(config.ui.theme);
    let format = matches
        .get_one::<String>("format")
        .and_then(|f| f.parse::<OutputFormat>().ok())
        .unwrap_or_default();
    let renderer = renderer_for(format);

    let (page, outcome) = match matches.subcommand() {
        Some(("email", sub)) => {
            let analyzer = build_analyzer(&config);
            (
                Page::EmailChecker,
                run_email(&analyzer, sub, &*renderer, language, theme),
            )
        }
        Some(("url", sub)) => (
            Page::UrlChecker,
            run_url(&config, sub, &*renderer, language, theme),
        ),
        Some(("obfuscate", sub)) => (
            Page::Obfuscator,
            run_obfuscate(&config, sub, &*renderer, language, theme),
        ),
        Some(("field", sub)) => (
            Page::FieldVisualizer,
            Ok(run_field(sub, &*renderer, language, theme)),
        ),
        _ => {
            let _ = build_cli().print_help();
            println!();
            return;
        }
    };

    match outcome {
        Ok(output) => print!("{output}"),
        Err(e) => {
            let ctx = Context::new(language, theme, page);
            let message = renderer.error(&ctx, &e);
            if e.is_fatal() {
                log::error!("{e}");
                eprintln!("{message}");
                process::exit(1);
            }
            println!("{message}");
        }
    }
}

fn load_config(path: &str) -> anyhow::Result<Config> {
    let config = if Path::new(path).exists() {
        Config::from_file(path)?
    } else {
        log::warn!("Configuration file '{path}' not found, using default configuration");
        Config::default()
    };
    config.validate()?;
    Ok(config)
}

fn generate_default_config(path: &str) {
    let config = Config::default();
    match config.to_file(path) {
        Ok(()) => {
            println!("Default configuration written to: {path}");
            println!("Please edit the configuration file to suit your needs.");
        }
        Err(e) => {
            eprintln!("Error writing configuration file: {e}");
            process::exit(1);
        }
    }
}

fn build_analyzer(config: &Config) -> EmailAnalyzer {
    match EmailAnalyzer::new(config) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("❌ Configuration error: {e:#}");
            process::exit(1);
        }
    }
}

fn test_config(config: &Config) {
    println!("🔍 Testing configuration...");
    println!();

    let analyzer = build_analyzer(config);

    println!("✅ Configuration is valid");
    println!("  Trusted sender suffix: {}", config.sender.trusted_suffix);
    println!(
        "  Look-alike domains: {}",
        config.sender.lookalike_domains.len()
    );
    println!(
        "  Thresholds: moderate >= {}, high >= {} (max {})",
        config.scoring.moderately_suspicious_at,
        config.scoring.highly_suspicious_at,
        config.scoring.max_score
    );
    println!("  URL keywords: {}", config.url.keywords.join(", "));
    println!("  Suspicious TLDs: {}", config.url.suspicious_tlds.join(", "));
    if config.url.fuzz.enabled {
        println!(
            "  ⚠️ URL fuzz mode enabled (p={})",
            config.url.fuzz.probability
        );
    }
    println!();
    println!("Active email checks:");
    for (i, name) in analyzer.extractor().check_names().iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }
}

fn run_email(
    analyzer: &EmailAnalyzer,
    sub: &ArgMatches,
    renderer: &dyn Renderer,
    language: Language,
    theme: Theme,
) -> Result<String> {
    let text = match sub.get_one::<String>("file").map(String::as_str) {
        None | Some("-") => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| CheckError::io("<stdin>", e))?;
            buffer
        }
        Some(path) => std::fs::read_to_string(path).map_err(|e| CheckError::io(path, e))?,
    };

    let result = analyzer.analyze_input(&text)?;
    let ctx = Context::new(language, theme, Page::EmailChecker);
    Ok(renderer.analysis(&ctx, &result))
}

fn run_url(
    config: &Config,
    sub: &ArgMatches,
    renderer: &dyn Renderer,
    language: Language,
    theme: Theme,
) -> Result<String> {
    let mut url_config = config.url.clone();
    if sub.get_flag("fuzz") {
        url_config.fuzz.enabled = true;
    }
    if let Some(seed) = sub.get_one::<u64>("seed") {
        url_config.fuzz.seed = Some(*seed);
    }

    let url = sub
        .get_one::<String>("url")
        .map(String::as_str)
        .unwrap_or_default();
    let result = UrlChecker::new(&url_config).check_input(url)?;
    let ctx = Context::new(language, theme, Page::UrlChecker);
    Ok(renderer.url_check(&ctx, &result))
}

fn run_obfuscate(
    config: &Config,
    sub: &ArgMatches,
    renderer: &dyn Renderer,
    language: Language,
    theme: Theme,
) -> Result<String> {
    let path = sub
        .get_one::<String>("file")
        .ok_or_else(|| CheckError::input_missing("uploaded file"))?;
    let upload = Upload::from_path(Path::new(path))?;

    let custom_params = match (
        sub.get_one::<String>("params"),
        sub.get_one::<String>("params-file"),
    ) {
        (Some(text), _) => expand_inline_params(text),
        (None, Some(file)) => {
            std::fs::read_to_string(file).map_err(|e| CheckError::io(file, e))?
        }
        (None, None) => String::new(),
    };

    let settings = ObfuscationSettings {
        platform: sub
            .get_one::<String>("platform")
            .and_then(|p| p.parse::<Platform>().ok())
            .unwrap_or_default(),
        level: sub.get_one::<u8>("level").copied().unwrap_or(5),
        custom_params,
    };

    let report = Obfuscator::new(&config.obfuscation).run(&upload, &settings)?;
    let ctx = Context::new(language, theme, Page::Obfuscator);
    Ok(renderer.obfuscation(&ctx, &report))
}

/// `--params` text with each literal `\n` turned into a line break.
fn expand_inline_params(text: &str) -> String {
    text.replace("\\n", "\n")
}

fn run_field(
    sub: &ArgMatches,
    renderer: &dyn Renderer,
    language: Language,
    theme: Theme,
) -> String {
    let defaults = FieldParams::default();
    let params = FieldParams {
        mode: match sub.get_one::<String>("mode").map(String::as_str) {
            Some("dipole") => FieldMode::Dipole,
            _ => FieldMode::PointCharge,
        },
        charge: sub
            .get_one::<f64>("charge")
            .copied()
            .unwrap_or(defaults.charge),
        scale: sub.get_one::<f64>("scale").copied().unwrap_or(defaults.scale),
        grid: sub.get_one::<usize>("grid").copied().unwrap_or(defaults.grid),
        time: sub.get_one::<f64>("time").copied().unwrap_or(defaults.time),
        show_charges: !sub.get_flag("hide-charges"),
    };

    let plot = compute_field(&params);
    let ctx = Context::new(language, theme, Page::FieldVisualizer);
    renderer.field(&ctx, &plot)
}
