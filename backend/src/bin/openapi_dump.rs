//! Print the OpenAPI document as JSON (default) or YAML.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use user_lookup::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Json,
    Yaml,
}

/// `openapi-dump` command arguments.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the user lookup OpenAPI document", version)]
struct CliArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn render(format: Format) -> Result<String> {
    let doc = ApiDoc::openapi();
    match format {
        Format::Json => doc.to_pretty_json().wrap_err("serialise OpenAPI as JSON"),
        Format::Yaml => doc.to_yaml().wrap_err("serialise OpenAPI as YAML"),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    println!("{}", render(args.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Format::Json, "\"/users/{username}\"")]
    #[case(Format::Yaml, "/users/{username}:")]
    fn renders_lookup_path(#[case] format: Format, #[case] needle: &str) {
        let rendered = render(format).expect("document renders");
        assert!(rendered.contains(needle), "missing {needle}");
    }
}
