use std::panic;

const REDACTED: &str = "[REDACTED]";

const SENSITIVE_MARKERS: [&str; 4] = ["token", "secret", "password", "credential"];

/// Scrubs bot-token-shaped values from free text. The Bot API embeds the
/// credential in every request URL, so any transport error string must go
/// through here before it reaches a log line or a panic message.
pub fn redact_text(input: &str) -> String {
    input
        .split_whitespace()
        .map(redact_chunk)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replaces the `/bot<token>` path segment of Bot API URLs.
pub fn redact_bot_path(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("/bot") {
        let (head, tail) = rest.split_at(start);
        output.push_str(head);
        output.push_str("/bot");
        output.push_str(REDACTED);

        let after = &tail["/bot".len()..];
        let token_end = after.find('/').unwrap_or(after.len());
        rest = &after[token_end..];
    }

    output.push_str(rest);
    output
}

pub fn install_panic_redaction_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic payload omitted".to_owned());

        let scrubbed = redact_text(&redact_bot_path(&payload));

        if let Some(location) = panic_info.location() {
            eprintln!(
                "blockwatch panic: {} at {}:{}:{}",
                scrubbed,
                location.file(),
                location.line(),
                location.column()
            );
        } else {
            eprintln!("blockwatch panic: {}", scrubbed);
        }
    }));
}

fn redact_chunk(chunk: &str) -> String {
    let lowered = chunk.to_ascii_lowercase();
    if SENSITIVE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
        || looks_like_bot_token(chunk)
    {
        REDACTED.to_owned()
    } else {
        chunk.to_owned()
    }
}

/// Bot tokens look like `<numeric id>:<long alphanumeric tail>`.
fn looks_like_bot_token(value: &str) -> bool {
    let cleaned = value.trim_matches(|ch: char| !ch.is_ascii_alphanumeric() && ch != ':');

    let Some((id, tail)) = cleaned.split_once(':') else {
        return false;
    };

    id.len() >= 6
        && id.chars().all(|ch| ch.is_ascii_digit())
        && tail.len() >= 16
        && tail
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_text_scrubs_token_shaped_values() {
        let input = "request to 123456789:AAFakeTokenTail0123456789 failed";
        let output = redact_text(input);

        assert!(!output.contains("AAFakeTokenTail"));
        assert!(output.contains("[REDACTED]"));
    }

    #[test]
    fn redact_text_keeps_ordinary_words() {
        assert_eq!(redact_text("connection refused"), "connection refused");
    }

    #[test]
    fn redact_bot_path_masks_the_url_segment() {
        let input = "error sending request for url \
            (https://api.telegram.org/bot123456789:AAFakeTokenTail/sendMessage)";
        let output = redact_bot_path(input);

        assert!(!output.contains("AAFakeTokenTail"));
        assert!(output.contains("/bot[REDACTED]/sendMessage"));
    }

    #[test]
    fn redact_bot_path_handles_token_at_end_of_input() {
        let output = redact_bot_path("https://api.telegram.org/bot123:abc");

        assert_eq!(output, "https://api.telegram.org/bot[REDACTED]");
    }
}
