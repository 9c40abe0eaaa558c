use super::FormatRequest;

/// `[<color>[TAG  ]<reset>, timestamp, ...messages]`
pub fn format(request: &FormatRequest<'_>) -> Vec<String> {
    let colors = request.colors;
    let tag = format!(
        "{}[{}]{}",
        colors.get(request.severity),
        request.severity.padded_tag(),
        colors.default_color()
    );

    let mut args = Vec::with_capacity(request.messages.len() + 2);
    args.push(tag);
    args.push(request.timestamp());
    args.extend(request.messages.iter().map(|message| message.to_string()));
    args
}
