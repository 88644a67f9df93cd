//! # sorttable-cli
//!
//! Command-line interface for sorttable: load an HTML page, replay control
//! changes and header clicks on it, and write the resulting HTML.

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use sorttable_engine::{Page, PageConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// sorttable - Sort HTML tables and apply show/hide controls
#[derive(Parser, Debug)]
#[command(name = "sorttable")]
#[command(author, version, about = "Sort HTML tables from the command line", long_about = None)]
struct Cli {
    /// HTML file to load
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Control wiring (JSON)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Locale used to read numbers and order text (overrides the config)
    #[arg(short = 'l', long = "locale")]
    locale: Option<String>,

    /// Click a header: sortable table index and column index, repeatable
    #[arg(short = 's', long = "sort", value_name = "TABLE:COLUMN")]
    sorts: Vec<String>,

    /// Check a checkbox by id
    #[arg(long = "check", value_name = "ID")]
    check: Vec<String>,

    /// Uncheck a checkbox by id
    #[arg(long = "uncheck", value_name = "ID")]
    uncheck: Vec<String>,

    /// Choose a select option (id=value)
    #[arg(long = "select", value_name = "ID=VALUE")]
    selects: Vec<String>,

    /// Write the result here instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    if let Err(e) = run(&cli) {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let html = render(cli)?;
    match &cli.output {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            eprintln!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}

/// Load the page, replay checks, selects and then sorts, and return the HTML.
fn render(cli: &Cli) -> Result<String> {
    let mut config = match &cli.config {
        Some(path) => PageConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => PageConfig::default(),
    };
    if let Some(locale) = &cli.locale {
        config.locale.clone_from(locale);
    }

    let sorts = cli
        .sorts
        .iter()
        .map(|arg| parse_sort(arg))
        .collect::<Result<Vec<_>>>()?;
    let selects = cli
        .selects
        .iter()
        .map(|arg| parse_select(arg))
        .collect::<Result<Vec<_>>>()?;

    let mut page = Page::from_file(&cli.file, config)
        .with_context(|| format!("Failed to read file: {}", cli.file.display()))?;
    tracing::info!(
        "loaded {} with {} sortable tables",
        cli.file.display(),
        page.tables().len()
    );

    for id in &cli.check {
        page.set_checked(id, true)
            .with_context(|| format!("Failed to check '{id}'"))?;
    }
    for id in &cli.uncheck {
        page.set_checked(id, false)
            .with_context(|| format!("Failed to uncheck '{id}'"))?;
    }
    for (id, value) in &selects {
        page.select(id, value)
            .with_context(|| format!("Failed to select '{value}' in '{id}'"))?;
    }
    for (table, column) in sorts {
        page.click_header(table, column)
            .with_context(|| format!("Failed to sort table {table} by column {column}"))?;
    }

    Ok(page.to_html())
}

/// Parse a `TABLE:COLUMN` pair.
fn parse_sort(arg: &str) -> Result<(usize, usize)> {
    let (table, column) = arg
        .split_once(':')
        .with_context(|| format!("Invalid sort '{arg}'. Expected TABLE:COLUMN format"))?;
    let table = table
        .trim()
        .parse()
        .with_context(|| format!("Invalid table index in '{arg}'"))?;
    let column = column
        .trim()
        .parse()
        .with_context(|| format!("Invalid column index in '{arg}'"))?;
    Ok((table, column))
}

/// Parse an `ID=VALUE` pair. The value may be empty.
fn parse_select(arg: &str) -> Result<(String, String)> {
    let Some((id, value)) = arg.split_once('=') else {
        bail!("Invalid select '{arg}'. Expected ID=VALUE format");
    };
    let id = id.trim().trim_start_matches('#');
    if id.is_empty() {
        bail!("Invalid select '{arg}'. Missing control id");
    }
    Ok((id.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const PAGE: &str = "<!DOCTYPE html><html><head></head><body>\
        <input type=\"checkbox\" id=\"show-note\" checked>\
        <table class=\"sortable\"><thead><tr><th>Name</th><th>Qty</th></tr></thead>\
        <tbody>\
        <tr><td>pear</td><td>1.000,5</td></tr>\
        <tr><td>apple</td><td>20</td></tr>\
        </tbody></table>\
        <p class=\"note\">n</p>\
        </body></html>";

    #[test]
    fn test_parse_sort() {
        assert_eq!(parse_sort("0:2").unwrap(), (0, 2));
        assert_eq!(parse_sort(" 1 : 3 ").unwrap(), (1, 3));
        assert!(parse_sort("0").is_err());
        assert!(parse_sort("a:1").is_err());
        assert!(parse_sort("0:-1").is_err());
    }

    #[test]
    fn test_parse_select() {
        assert_eq!(
            parse_select("#bits-select=b32").unwrap(),
            ("bits-select".to_string(), "b32".to_string())
        );
        assert_eq!(
            parse_select("sign-select=").unwrap(),
            ("sign-select".to_string(), String::new())
        );
        assert!(parse_select("sign-select").is_err());
        assert!(parse_select("=x").is_err());
    }

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from([
            "sorttable", "page.html", "--sort", "0:1", "--sort", "0:1", "--select", "a=b", "-v",
        ])
        .unwrap();
        assert_eq!(cli.sorts, vec!["0:1", "0:1"]);
        assert_eq!(cli.selects, vec!["a=b"]);
        assert!(cli.verbose);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_render_with_locale_and_toggle() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("page.html");
        let config = dir.path().join("wiring.json");
        std::fs::write(&input, PAGE).unwrap();
        std::fs::write(
            &config,
            r#"{ "row_toggles": [{ "checkbox": "show-note", "class": "note" }] }"#,
        )
        .unwrap();
        let (input, config) = (input.to_str().unwrap(), config.to_str().unwrap());

        let cli = Cli::try_parse_from([
            "sorttable",
            input,
            "--config",
            config,
            "--locale",
            "de",
            "--uncheck",
            "show-note",
            "--sort",
            "0:1",
        ])
        .unwrap();
        let html = render(&cli).unwrap();

        // German grouping: 1.000,5 is a thousand, so apple comes first.
        let apple = html.find("apple").unwrap();
        let pear = html.find("pear").unwrap();
        assert!(apple < pear);
        assert!(html.contains("<p class=\"note\" style=\"display:none;\">n</p>"));
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("page.html");
        let output = dir.path().join("out.html");
        std::fs::write(&input, PAGE).unwrap();

        let cli = Cli::try_parse_from([
            "sorttable",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--sort",
            "0:0",
        ])
        .unwrap();
        run(&cli).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.find("apple").unwrap() < written.find("pear").unwrap());
        assert!(written.contains("sorttable_sorted"));
    }

    #[test]
    fn test_render_reports_bad_arguments() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("page.html");
        std::fs::write(&input, PAGE).unwrap();

        let cli =
            Cli::try_parse_from(["sorttable", input.to_str().unwrap(), "--sort", "4:0"]).unwrap();
        let err = render(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to sort table 4 by column 0"));

        let cli = Cli::try_parse_from(["sorttable", "/nonexistent/page.html"]).unwrap();
        assert!(render(&cli).is_err());
    }
}
