//! Starting-node selection.
//!
//! Interactive terminals get a dialoguer prompt; piped stdin is read as a
//! single line so the binary can be scripted. Either way the answer is
//! validated before the engine ever sees it.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, IsTerminal, Write};

use crate::network::Network;

const PROMPT: &str = "Enter the number of the starting city";

/// Check a raw node number against the network.
pub fn validate_source(network: &Network, raw: i64) -> Result<usize> {
    match network.node_index(raw) {
        Ok(index) => Ok(index),
        Err(e) => {
            tracing::debug!("Rejected starting node: {}", e);
            bail!(invalid_input_message(network))
        }
    }
}

/// Parse user-typed text as a node number.
///
/// Only the leading integer counts, so `2abc` and `1.5` pick nodes 2 and 1.
pub fn parse_source(network: &Network, input: &str) -> Result<usize> {
    match leading_integer(input) {
        Some(raw) => validate_source(network, raw),
        None => bail!(invalid_input_message(network)),
    }
}

/// Optional sign followed by digits, after leading whitespace.
fn leading_integer(input: &str) -> Option<i64> {
    let input = input.trim_start();
    let sign_len = usize::from(input.starts_with(|c| c == '+' || c == '-'));
    let digits_len = input[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    input[..sign_len + digits_len].parse().ok()
}

/// Ask the user for the starting node.
pub fn ask_source(network: &Network) -> Result<usize> {
    let input = if std::io::stdin().is_terminal() {
        dialoguer::Input::<String>::new()
            .with_prompt(PROMPT)
            .interact_text()
            .context("Failed to read starting city")?
    } else {
        let mut stderr = std::io::stderr();
        write!(stderr, "{}: ", PROMPT)?;
        stderr.flush()?;

        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read starting city")?;
        line
    };

    parse_source(network, &input)
}

fn invalid_input_message(network: &Network) -> String {
    format!(
        "Invalid input. Please enter a number between 0 and {}.",
        network.node_count().saturating_sub(1)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        let network = Network::builtin().unwrap();
        assert_eq!(parse_source(&network, "0").unwrap(), 0);
        assert_eq!(parse_source(&network, " 3\n").unwrap(), 3);
        assert_eq!(parse_source(&network, "+2").unwrap(), 2);
    }

    #[test]
    fn test_parse_source_uses_leading_integer() {
        let network = Network::builtin().unwrap();
        assert_eq!(parse_source(&network, "1.5").unwrap(), 1);
        assert_eq!(parse_source(&network, "2abc\n").unwrap(), 2);
        assert_eq!(parse_source(&network, "3 4").unwrap(), 3);
    }

    #[test]
    fn test_parse_source_rejects_bad_input() {
        let network = Network::builtin().unwrap();
        for input in ["", "abc", "-", "-1", "4", "9.5", "99999999999999999999"] {
            let err = parse_source(&network, input).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid input. Please enter a number between 0 and 3."
            );
        }
    }

    #[test]
    fn test_validate_source() {
        let network = Network::builtin().unwrap();
        assert_eq!(validate_source(&network, 2).unwrap(), 2);
        assert!(validate_source(&network, -1).is_err());
        assert!(validate_source(&network, 4).is_err());
    }
}
