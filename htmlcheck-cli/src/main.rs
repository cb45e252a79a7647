//! htmlcheck CLI
//!
//! Escapes ambiguous ampersands and checks HTML and CSS syntax from the
//! command line. Text is read from the argument, or from stdin when it is
//! omitted.

use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use htmlcheck_common::warning::warn_once;
use htmlcheck_css::{validate_css3_id_value, validate_css3_identifier};
use htmlcheck_html::attributes::{validate_attribute_name, validate_attribute_value};
use htmlcheck_html::id::{is_valid_html4_id_value, is_valid_html5_id_value};
use htmlcheck_html::references::{NamedReference, NamedReferenceScanner};
use htmlcheck_html::tags::{is_html_tag_name, is_valid_html_tag_name};
use htmlcheck_html::{
    AttributeEscaper, AttributeQuoting, escape_ambiguous_ampersands, has_ambiguous_ampersand,
    is_character_reference, is_character_reference_name,
};
use owo_colors::OwoColorize;
use serde::Serialize;

/// htmlcheck: HTML ampersand escaping and syntax checks
#[derive(Parser, Debug)]
#[command(name = "htmlcheck")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Escape ambiguous ampersands
    htmlcheck escape 'Who &writes; like this?'

    # Escape a double-quoted attribute value
    htmlcheck escape --attribute 'My name is "Franklin".'

    # List every &name; in a file
    htmlcheck scan < page.html

    # Check a CSS identifier
    htmlcheck check css-identifier 'B\26 W\3F'
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Escape ambiguous ampersands in TEXT
    Escape {
        /// Text to escape (stdin when omitted)
        text: Option<String>,

        /// Escape for a double-quoted attribute value (quotes too)
        #[arg(short, long)]
        attribute: bool,

        /// Scan every value containing '&', not only those where the first
        /// '&' precedes the first ';'
        #[arg(long, requires = "attribute")]
        full_scan: bool,
    },

    /// List every &name; in TEXT and whether it is ambiguous
    Scan {
        /// Text to scan (stdin when omitted)
        text: Option<String>,
    },

    /// Check whether VALUE is valid syntax of the given KIND
    Check {
        /// What VALUE should be
        kind: Kind,

        /// Value to check (stdin when omitted, minus one trailing newline)
        value: Option<String>,

        /// Quoting of an attribute value
        #[arg(long, default_value = "double-quoted")]
        quoting: AttributeQuoting,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}

/// The syntax `check` validates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    AttributeName,
    AttributeValue,
    TagName,
    Html4Id,
    Html5Id,
    CssIdentifier,
    CssId,
    Reference,
}

impl Kind {
    const fn name(self) -> &'static str {
        match self {
            Self::AttributeName => "attribute-name",
            Self::AttributeValue => "attribute-value",
            Self::TagName => "tag-name",
            Self::Html4Id => "html4-id",
            Self::Html5Id => "html5-id",
            Self::CssIdentifier => "css-identifier",
            Self::CssId => "css-id",
            Self::Reference => "reference",
        }
    }
}

/// Text from the command line or stdin.
struct Input {
    text: String,
    from_stdin: bool,
}

/// The outcome of `check`, as printed by `--json`.
#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    kind: &'static str,
    value: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Escape {
            text,
            attribute,
            full_scan,
        } => {
            let input = read_input(text)?;
            let escaped = escape(&input.text, attribute, full_scan);
            if input.from_stdin {
                print!("{escaped}");
            } else {
                println!("{escaped}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Scan { text } => {
            let input = read_input(text)?;
            scan(&input.text);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check {
            kind,
            value,
            quoting,
            json,
        } => {
            let input = read_input(value)?;
            let value = if input.from_stdin {
                strip_line_ending(&input.text)
            } else {
                &input.text
            };

            let report = CheckReport::new(kind, value, check(kind, value, quoting));
            if json {
                let json = serde_json::to_string_pretty(&report)
                    .context("failed to serialize check report")?;
                println!("{json}");
            } else if report.valid {
                println!("{}", format_check(&report).green());
            } else {
                println!("{}", format_check(&report).red());
            }

            if report.valid {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

/// Take TEXT from the argument, or read all of stdin.
fn read_input(text: Option<String>) -> Result<Input> {
    if let Some(text) = text {
        return Ok(Input {
            text,
            from_stdin: false,
        });
    }

    let mut bytes = Vec::new();
    let _ = io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .context("failed to read stdin")?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn_once(
                "input",
                "stdin is not valid UTF-8; invalid sequences were replaced with U+FFFD",
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    Ok(Input {
        text,
        from_stdin: true,
    })
}

fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

fn escape(text: &str, attribute: bool, full_scan: bool) -> String {
    if !attribute {
        return escape_ambiguous_ampersands(text).into_owned();
    }

    let escaper = AttributeEscaper::new().full_scan(full_scan);
    if !escaper.scans_for_ampersands(text) && has_ambiguous_ampersand(text) {
        warn_once(
            "escape",
            "a ';' before the first '&' skipped ampersand escaping; pass --full-scan to escape every ambiguous ampersand",
        );
    }
    escaper.escape(text).into_owned()
}

fn scan(text: &str) {
    for reference in NamedReferenceScanner::new(text) {
        let ambiguous = !is_character_reference_name(reference.name);
        let line = format_reference(&reference, ambiguous);
        if ambiguous {
            println!("{}", line.yellow());
            warn_once(
                "scan",
                &format!(
                    "ambiguous ampersand \"&{};\" at byte {}",
                    reference.name, reference.ampersand_index
                ),
            );
        } else {
            println!("{line}");
        }
    }
}

/// Check `value`, returning the reason it is invalid.
fn check(kind: Kind, value: &str, quoting: AttributeQuoting) -> Result<(), String> {
    match kind {
        Kind::AttributeName => validate_attribute_name(value).map_err(|e| e.to_string()),
        Kind::AttributeValue => validate_attribute_value(value, quoting).map_err(|e| e.to_string()),
        Kind::TagName if is_html_tag_name(value) => Ok(()),
        Kind::TagName if is_valid_html_tag_name(value) => {
            warn_once("check", &format!("{value:?} is not an element HTML defines"));
            Ok(())
        }
        Kind::TagName => Err("tag names are one or more ASCII alphanumerics".to_string()),
        Kind::Html4Id if is_valid_html4_id_value(value) => Ok(()),
        Kind::Html4Id => Err(
            "HTML 4 IDs start with an ASCII letter followed by letters, digits, or \"-_:.\""
                .to_string(),
        ),
        Kind::Html5Id if is_valid_html5_id_value(value) => Ok(()),
        Kind::Html5Id => Err("HTML5 IDs are non-empty and contain no space characters".to_string()),
        Kind::CssIdentifier => validate_css3_identifier(value).map_err(|e| e.to_string()),
        Kind::CssId => validate_css3_id_value(value).map_err(|e| e.to_string()),
        Kind::Reference if is_character_reference(value) => Ok(()),
        Kind::Reference => Err("not a named character reference".to_string()),
    }
}

impl<'a> CheckReport<'a> {
    fn new(kind: Kind, value: &'a str, result: Result<(), String>) -> Self {
        Self {
            kind: kind.name(),
            value,
            valid: result.is_ok(),
            reason: result.err(),
        }
    }
}

fn format_check(report: &CheckReport<'_>) -> String {
    match &report.reason {
        None => format!("valid {}: {:?}", report.kind, report.value),
        Some(reason) => format!("invalid {}: {:?}: {reason}", report.kind, report.value),
    }
}

fn format_reference(reference: &NamedReference<'_>, ambiguous: bool) -> String {
    let status = if ambiguous { "ambiguous" } else { "reference" };
    format!(
        "{:>6}  &{};  {status}",
        reference.ampersand_index, reference.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_match_clap_values() {
        for kind in Kind::value_variants() {
            let value = kind.to_possible_value().map(|v| v.get_name().to_string());
            assert_eq!(value.as_deref(), Some(kind.name()));
        }
    }

    #[test]
    fn test_quoting_parses_from_command_line() {
        let cli = Cli::try_parse_from([
            "htmlcheck",
            "check",
            "attribute-value",
            "a b",
            "--quoting",
            "unquoted",
        ]);
        let Ok(Cli {
            command: Command::Check { kind, quoting, .. },
        }) = cli
        else {
            panic!("check should parse");
        };
        assert_eq!(kind, Kind::AttributeValue);
        assert_eq!(quoting, AttributeQuoting::Unquoted);
    }

    #[test]
    fn test_full_scan_requires_attribute() {
        assert!(Cli::try_parse_from(["htmlcheck", "escape", "--full-scan", "x"]).is_err());
        assert!(Cli::try_parse_from(["htmlcheck", "escape", "-a", "--full-scan", "x"]).is_ok());
    }

    #[test]
    fn test_check_reasons() {
        assert_eq!(check(Kind::CssIdentifier, "abc", AttributeQuoting::DoubleQuoted), Ok(()));
        assert_eq!(
            check(Kind::CssIdentifier, "1a", AttributeQuoting::DoubleQuoted),
            Err("identifier starts with a digit".to_string())
        );
        assert!(check(Kind::AttributeValue, "a b", AttributeQuoting::Unquoted).is_err());
        assert_eq!(check(Kind::AttributeValue, "a b", AttributeQuoting::DoubleQuoted), Ok(()));
        assert_eq!(check(Kind::Reference, "&amp;", AttributeQuoting::DoubleQuoted), Ok(()));
        assert!(check(Kind::Reference, "&ampx;", AttributeQuoting::DoubleQuoted).is_err());
        assert!(check(Kind::TagName, "", AttributeQuoting::DoubleQuoted).is_err());
        assert_eq!(check(Kind::TagName, "DIV", AttributeQuoting::DoubleQuoted), Ok(()));
    }

    #[test]
    fn test_format_check() {
        let valid = CheckReport::new(Kind::Html5Id, "main", Ok(()));
        assert_eq!(format_check(&valid), "valid html5-id: \"main\"");

        let invalid = CheckReport::new(Kind::CssId, "a", Err("missing '#'".to_string()));
        assert_eq!(format_check(&invalid), "invalid css-id: \"a\": missing '#'");
    }

    #[test]
    fn test_json_report() {
        let report = CheckReport::new(Kind::CssId, "#a b", Err("bad".to_string()));
        let json = serde_json::to_value(&report).unwrap_or_default();
        assert_eq!(json["kind"], "css-id");
        assert_eq!(json["value"], "#a b");
        assert_eq!(json["valid"], false);
        assert_eq!(json["reason"], "bad");

        let report = CheckReport::new(Kind::CssId, "#a", Ok(()));
        let json = serde_json::to_value(&report).unwrap_or_default();
        assert_eq!(json["valid"], true);
        assert!(json.get("reason").is_none());
    }

    #[test]
    fn test_format_reference() {
        let reference = NamedReference {
            name: "what",
            ampersand_index: 4,
        };
        assert_eq!(format_reference(&reference, true), "     4  &what;  ambiguous");
        assert_eq!(format_reference(&reference, false), "     4  &what;  reference");
    }

    #[test]
    fn test_escape_modes() {
        assert_eq!(escape("a &b; \"c\"", false, false), "a &amp;b; \"c\"");
        assert_eq!(escape("a &b; \"c\"", true, false), "a &amp;b; &#34;c&#34;");
        assert_eq!(escape("a; &b;", true, false), "a; &b;");
        assert_eq!(escape("a; &b;", true, true), "a; &amp;b;");
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("a\n"), "a");
        assert_eq!(strip_line_ending("a\r\n"), "a");
        assert_eq!(strip_line_ending("a\n\n"), "a\n");
        assert_eq!(strip_line_ending("a"), "a");
    }
}
