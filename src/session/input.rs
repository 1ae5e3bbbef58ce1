//! Interpretation of user answers.

/// What the user asked for at the IP prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpInput {
    /// `q` (any case): end the session
    Quit,
    /// Empty line: look up the caller's own public IP
    PublicIp,
    /// Anything else, passed to the lookup service verbatim
    Address(String),
}

/// Parses a line typed at the IP prompt. Surrounding whitespace is ignored.
pub fn parse_ip_input(line: &str) -> IpInput {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") {
        IpInput::Quit
    } else if trimmed.is_empty() {
        IpInput::PublicIp
    } else {
        IpInput::Address(trimmed.to_string())
    }
}

/// Returns true for a `y` answer (any case) to a yes/no prompt.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
