use once_cell::sync::Lazy;
use regex::Regex;
use std::iter;

use super::FormatRequest;

// Messages matching this are style arguments, not text. A plain message such as
// "#abc" or "#c0ffee" is indistinguishable and gets consumed as a color.
static COLOR_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(#[0-9A-Fa-f]{3,6}|inherit)$").expect("color token pattern is valid")
});

pub fn is_color_token(message: &str) -> bool {
    COLOR_TOKEN.is_match(message)
}

/// `["%c[TAG  ] %c<timestamp> <text...>", "color: <tag>", "color: <default>", ...]`
///
/// Color tokens among the messages are pulled out of the text and appended as
/// further style arguments, so callers can add their own `%c` segments.
pub fn format(request: &FormatRequest<'_>) -> Vec<String> {
    let rendered: Vec<String> = request.messages.iter().map(|m| m.to_string()).collect();
    let (tokens, text): (Vec<&str>, Vec<&str>) = rendered
        .iter()
        .map(String::as_str)
        .partition(|message| is_color_token(message));

    let template = format!(
        "%c[{}] %c{} {}",
        request.severity.padded_tag(),
        request.timestamp(),
        text.join(" ")
    );

    let colors = request.colors;
    let styles = iter::once(colors.get(request.severity))
        .chain(iter::once(colors.default_color()))
        .chain(tokens)
        .map(|color| format!("color: {}", color));

    iter::once(template).chain(styles).collect()
}
