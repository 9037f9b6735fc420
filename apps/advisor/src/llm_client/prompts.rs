// Shared prompt fragments and rendering helpers.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Placeholder rendered for a profile field the caller left empty.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Tone rule appended to every generation prompt.
pub const PROFESSIONAL_TONE: &str = "Professional tone only. Do NOT use emojis.";

/// Closing instruction for prompts that expect a JSON payload.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY valid JSON, no additional text.";

/// Renders an optional scalar, substituting `placeholder` when absent or blank.
pub fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => placeholder,
    }
}

/// Renders an optional scalar with the shared "Not specified" placeholder.
pub fn or_not_specified(value: Option<&str>) -> &str {
    or_placeholder(value, NOT_SPECIFIED)
}

/// Fills `{key}` placeholders in a single left-to-right pass. Inserted values
/// are never re-scanned, so caller or model text containing `{key}` stays
/// literal. Unknown keys and bare braces (JSON examples) are kept verbatim.
pub fn render_template(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let filled = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (value, close))
        });
        match filled {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Joins a list field with comma separators. An empty list renders as "".
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}
