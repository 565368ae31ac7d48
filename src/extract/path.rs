//! SVG path-data tokenizer.
//!
//! Only tokenizes; no geometry is evaluated. Exponent notation is not
//! recognized by the command pattern, so `1e3` is read as `1`.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::PathCommand;

static COMMAND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([MmLlHhVvCcSsQqTtAaZz])([\d\s,.-]*)").expect("valid path command regex")
});

static NUMBER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)").expect("valid number regex"));

/// Split `data` into commands. Unparseable fragments are skipped.
pub fn parse_path(data: &str) -> Vec<PathCommand> {
    COMMAND_RE
        .captures_iter(data)
        .filter_map(|caps| {
            let command = caps.get(1)?.as_str().chars().next()?;
            let args = caps.get(2).map(|m| parse_args(m.as_str())).unwrap_or_default();
            let relative = !matches!(command, 'Z' | 'z') && command.is_ascii_lowercase();
            Some(PathCommand {
                command,
                args,
                relative,
            })
        })
        .collect()
}

fn parse_args(raw: &str) -> Vec<f64> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .filter_map(parse_number_prefix)
        .collect()
}

/// Leading numeric prefix of `token`, so `"10-5"` reads as `10`.
fn parse_number_prefix(token: &str) -> Option<f64> {
    NUMBER_PREFIX_RE
        .find(token)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}
