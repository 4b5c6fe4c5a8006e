//! Nesting-aware scanning for `{{#kind ...}}...{{/kind}}` block directives.
//!
//! Matching the closing tag tracks nesting depth: an inner opening tag of
//! the same kind increments depth, each closing tag decrements it, and the
//! block's close is the first tag that brings the depth back to zero. A
//! plain first-occurrence search would pair an outer open with an inner
//! close and leak block contents.

/// A fully matched block directive
#[derive(Debug, PartialEq)]
pub struct Block {
    /// The directive argument (a dot-notation path)
    pub arg: String,
    /// Byte offset of the opening `{{`
    pub open_start: usize,
    /// Offset just past the opening tag
    pub body_start: usize,
    /// Offset of the matching closing tag
    pub body_end: usize,
    /// Offset just past the closing tag
    pub end: usize,
}

/// Result of scanning for the next block of a given kind
#[derive(Debug, PartialEq)]
pub enum BlockScan {
    /// No opening tag in the remainder of the template
    None,
    /// An opening tag with no matching close; `open_end` is just past the
    /// opening tag so a permissive caller can emit it verbatim and move on
    Unmatched { open_start: usize, open_end: usize },
    Matched(Block),
}

fn is_path_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '.' || ch == '@'
}

/// Find the next `{{#kind` opener at or after `from`. The marker must be
/// followed by whitespace so that e.g. `{{#if` does not match `{{#ifx`.
fn find_opener(template: &str, marker: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(found) = template[pos..].find(marker) {
        let start = pos + found;
        let after = start + marker.len();
        if template[after..].chars().next().is_some_and(|c| c.is_whitespace()) {
            return Some(start);
        }
        pos = start + 1;
    }
    None
}

/// Parse the opening tag starting at `open_start`, returning
/// `(arg, body_start)` on success.
fn parse_open_tag(template: &str, open_start: usize, marker: &str) -> Option<(String, usize)> {
    let mut rest = &template[open_start + marker.len()..];
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        return None; // no whitespace after the marker
    }
    rest = trimmed;

    let arg_len = rest.chars().take_while(|c| is_path_char(*c)).map(char::len_utf8).sum::<usize>();
    if arg_len == 0 {
        return None;
    }
    let arg = &rest[..arg_len];
    let after_arg = rest[arg_len..].trim_start();
    if !after_arg.starts_with("}}") {
        return None;
    }

    let body_start = template.len() - (after_arg.len() - 2);
    Some((arg.to_string(), body_start))
}

/// Scan for the next block of `kind` (e.g. `"if"`, `"each"`) at or after
/// `from`, matching its closing tag with depth tracking.
pub fn find_block(template: &str, kind: &str, from: usize) -> BlockScan {
    let marker = format!("{{{{#{}", kind);
    let close_tag = format!("{{{{/{}}}}}", kind);

    let Some(open_start) = find_opener(template, &marker, from) else {
        return BlockScan::None;
    };

    let Some((arg, body_start)) = parse_open_tag(template, open_start, &marker) else {
        return BlockScan::Unmatched {
            open_start,
            open_end: open_start + marker.len(),
        };
    };

    // Walk forward balancing inner openers against closing tags
    let mut depth = 1usize;
    let mut pos = body_start;
    loop {
        let next_open = find_opener(template, &marker, pos);
        let next_close = template[pos..].find(&close_tag).map(|i| pos + i);

        let Some(close_at) = next_close else {
            return BlockScan::Unmatched {
                open_start,
                open_end: body_start,
            };
        };

        match next_open {
            Some(open_at) if open_at < close_at => {
                depth += 1;
                pos = open_at + marker.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return BlockScan::Matched(Block {
                        arg,
                        open_start,
                        body_start,
                        body_end: close_at,
                        end: close_at + close_tag.len(),
                    });
                }
                pos = close_at + close_tag.len();
            }
        }
    }
}

/// Split an `#if` body at the `{{else}}` belonging to the outer block.
/// An `{{else}}` inside a nested `{{#if}}` is not a split point.
pub fn split_else(body: &str) -> (&str, Option<&str>) {
    const ELSE: &str = "{{else}}";
    const CLOSE: &str = "{{/if}}";

    let mut depth = 0usize;
    let mut pos = 0usize;
    loop {
        let next_open = find_opener(body, "{{#if", pos);
        let next_else = body[pos..].find(ELSE).map(|i| pos + i);
        let next_close = body[pos..].find(CLOSE).map(|i| pos + i);

        // Earliest of the three markers drives the state machine
        let candidates = [
            next_open.map(|p| (p, 0u8)),
            next_else.map(|p| (p, 1u8)),
            next_close.map(|p| (p, 2u8)),
        ];
        let Some((at, which)) = candidates.into_iter().flatten().min() else {
            return (body, None);
        };

        match which {
            0 => {
                depth += 1;
                pos = at + "{{#if".len();
            }
            1 => {
                if depth == 0 {
                    return (&body[..at], Some(&body[at + ELSE.len()..]));
                }
                pos = at + ELSE.len();
            }
            _ => {
                depth = depth.saturating_sub(1);
                pos = at + CLOSE.len();
            }
        }
    }
}
