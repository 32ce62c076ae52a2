use colored::*;

/// Renders the markdown the AI endpoints tend to produce (headers, bullets,
/// bold spans, inline code) as ANSI-styled terminal text. Anything the pass
/// does not recognize goes through verbatim.
pub fn render(text: &str) -> String {
    text.lines()
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line(line: &str) -> String {
    let trimmed = line.trim_start();

    for prefix in ["### ", "## ", "# "] {
        if let Some(rest) = trimmed.strip_prefix(prefix) {
            return render_spans(rest).bold().cyan().to_string();
        }
    }

    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return format!("  • {}", render_spans(rest));
    }

    render_spans(line)
}

fn render_spans(text: &str) -> String {
    let bolded = style_spans(text, "**", bold_span);
    style_spans(&bolded, "`", code_span)
}

fn bold_span(inner: &str) -> String {
    inner.bold().to_string()
}

fn code_span(inner: &str) -> String {
    inner.yellow().to_string()
}

/// Replaces `<delim>span<delim>` with the styled span. Unbalanced delimiters
/// are left alone.
fn style_spans(text: &str, delim: &str, style: fn(&str) -> String) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(delim) {
        let after = &rest[start + delim.len()..];
        match after.find(delim) {
            Some(len) => {
                out.push_str(&rest[..start]);
                out.push_str(&style(&after[..len]));
                rest = &after[len + delim.len()..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}
