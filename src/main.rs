mod cli;

use comicname::{config, scanner};
use comicname_parser::{tokenize, FilenameInfo, Parser as NameParser, TokenKind};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "comicname=debug,comicname_parser=debug".to_string()
        } else {
            "comicname=info,comicname_parser=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Parse { names, json } => parse_names(&names, cli.config.as_deref(), json),
        Commands::Tokens { name } => print_tokens(&name),
        Commands::Scan { dir, json } => scan_dir(&dir, cli.config.as_deref(), json),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("comicname {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn parse_names(names: &[String], config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let parser = NameParser::new(config.parser.to_parser_config());

    let mut results = Vec::with_capacity(names.len());
    for name in names {
        let info = parser
            .parse(name)
            .with_context(|| format!("Failed to parse {:?}", name))?;
        results.push(info);
    }

    if json {
        let json_str = serde_json::to_string_pretty(&results)?;
        println!("{}", json_str);
        return Ok(());
    }

    for (i, (name, info)) in names.iter().zip(&results).enumerate() {
        if i > 0 {
            println!();
        }
        println!("File: {}", name);
        print_info(info);
    }
    Ok(())
}

fn print_info(info: &FilenameInfo) {
    for (field, value) in info.fields() {
        if value.is_empty() || value == "false" {
            continue;
        }
        println!("  {:<13} {}", format!("{}:", field), value);
    }
}

fn print_tokens(name: &str) -> Result<()> {
    let tokens = tokenize(name);
    for token in &tokens {
        println!("{}", token);
    }
    if let Some(error) = tokens.iter().find(|t| t.is(TokenKind::Error)) {
        anyhow::bail!("Tokenizing stopped at byte {}: {}", error.pos, error.text);
    }
    Ok(())
}

fn scan_dir(dir: &Path, config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let results = scanner::scan_directory(dir, &config.scan, &config.parser.to_parser_config())?;

    if json {
        let json_str = serde_json::to_string_pretty(&results)?;
        println!("{}", json_str);
        return Ok(());
    }

    for result in &results {
        let info = &result.info;
        print!("{}", result.path.display());
        print!(" -> {}", info.series);
        if !info.issue.is_empty() {
            print!(" #{}", info.issue);
        }
        if !info.year.is_empty() {
            print!(" ({})", info.year);
        }
        if let Some(ref error) = result.error {
            print!(" [{}]", error);
        }
        println!();
    }
    println!("\n{} files", results.len());
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Remove c2c: {}", config.parser.remove_c2c);
            println!("  Remove fcbd: {}", config.parser.remove_fcbd);
            println!("  Remove publisher: {}", config.parser.remove_publisher);
            println!(
                "  First token is alternate number: {}",
                config.parser.first_token_is_alternate_number
            );
            println!("  Scan extensions: {}", config.scan.extensions.join(", "));
            println!("  Recursive: {}", config.scan.recursive);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Scan extensions: {}", config.scan.extensions.join(", "));
        }
    }

    Ok(())
}
