//! HTML to plain text for terminal display.
//!
//! The decoder never rewrites the body; this is only used by renderers that
//! cannot show markup.

/// Tags that start a new line.
const BLOCK_TAGS: &[&str] = &[
    "br", "p", "div", "tr", "li", "ul", "ol", "table", "h1", "h2", "h3", "h4", "h5", "h6",
    "blockquote", "pre", "hr",
];

/// Tags whose whole content is dropped.
const SKIPPED_BLOCKS: &[&str] = &["script", "style", "head", "title"];

/// Named entities decoded by [`html_to_text`]. `&nbsp;` becomes a plain space.
const ENTITIES: &[(&str, char)] = &[
    ("nbsp", ' '),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("amp", '&'),
];

/// Longest entity we look for, `&#x10FFFF;` without the `&`.
const MAX_ENTITY_LEN: usize = 9;

/// Convert HTML to readable plain text.
///
/// - block tags (`<p>`, `<br>`, `<div>`, `<li>`, …) become line breaks
/// - `<script>`, `<style>`, `<head>` and `<title>` blocks are removed
/// - all other tags are stripped; common named entities and numeric
///   references (`&#8217;`, `&#x2019;`) are decoded
/// - runs of blank lines collapse to one
pub fn html_to_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('>') else {
            // Unterminated tag: keep the text verbatim.
            out.push_str(&rest[open..]);
            rest = "";
            break;
        };

        let name = tag_name(&after[..close]);
        rest = &after[close + 1..];

        if SKIPPED_BLOCKS.contains(&name.as_str()) && !after.starts_with('/') {
            rest = skip_block(rest, &name);
        } else if BLOCK_TAGS.contains(&name.as_str()) {
            out.push('\n');
        }
    }
    out.push_str(rest);

    collapse_blank_lines(&decode_entities(&out))
}

/// Lower-cased tag name without the leading `/` and attributes.
fn tag_name(tag: &str) -> String {
    tag.trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// Return the text after the closing tag of `name`, or `""` if it never closes.
fn skip_block<'a>(html: &'a str, name: &str) -> &'a str {
    let close = format!("</{name}");
    let lower = html.to_ascii_lowercase();
    match lower.find(&close) {
        Some(pos) => match html[pos..].find('>') {
            Some(end) => &html[pos + end + 1..],
            None => "",
        },
        None => "",
    }
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp + 1..];
        let decoded = tail
            .find(';')
            .filter(|&end| end <= MAX_ENTITY_LEN)
            .and_then(|end| decode_entity(&tail[..end]).map(|c| (c, end)));

        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decode one entity body (the text between `&` and `;`).
fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let (digits, radix) = match num.strip_prefix(['x', 'X']) {
            Some(hex) => (hex, 16),
            None => (num, 10),
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        let code = u32::from_str_radix(digits, radix).ok()?;
        return match char::from_u32(code)? {
            '\0' => None,
            '\u{a0}' => Some(' '),
            c => Some(c),
        };
    }
    ENTITIES
        .iter()
        .find(|(entity, _)| *entity == name)
        .map(|&(_, c)| c)
}

fn collapse_blank_lines(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut prev_was_blank = false;
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !prev_was_blank {
                cleaned.push('\n');
                prev_was_blank = true;
            }
        } else {
            cleaned.push_str(trimmed);
            cleaned.push('\n');
            prev_was_blank = false;
        }
    }
    cleaned.trim().to_string()
}
