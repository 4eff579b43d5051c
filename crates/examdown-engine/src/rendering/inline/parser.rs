use super::{
    cursor::Cursor,
    kinds::{AngleBracket, Bold, Math},
};

/// Rewrites one line of dialect text into HTML-safe markup.
///
/// # Precedence
/// At each position math is tried first, then bold, then angle-bracket
/// escaping; anything else is copied through. A span that opens but never
/// closes contributes its delimiter as literal text:
/// - an unclosed `$$` leaves the first `$` literal and retries inline math
///   from the second
/// - an unclosed `$` or `**` is copied as-is
///
/// # Returns
/// The transformed text. Never fails.
pub fn transform_inline(text: &str) -> String {
    let mut cur = Cursor::new(text);
    let mut out = String::with_capacity(text.len() + text.len() / 4);

    while !cur.eof() {
        if let Some(fragment) = try_math(&mut cur) {
            out.push_str(&fragment);
            continue;
        }
        if let Some(fragment) = try_bold(&mut cur) {
            out.push_str(&fragment);
            continue;
        }
        if let Some(entity) = try_angle_bracket(&mut cur) {
            out.push_str(entity);
            continue;
        }
        if let Some(c) = cur.bump_char() {
            out.push(c);
        }
    }

    out
}

/// Attempts to transform a math span starting at the current position.
///
/// Returns `None` without moving the cursor if not at `$` or if the span
/// isn't closed.
fn try_math(cur: &mut Cursor<'_>) -> Option<String> {
    if cur.peek() != Some(Math::DOLLAR) {
        return None;
    }

    if cur.starts_with(Math::BLOCK) {
        let open = Math::BLOCK.len();
        let end = cur.find_from(open, Math::BLOCK)?;
        let fragment = Math::block(&cur.s[cur.i + open..end]);
        cur.jump_to(end + Math::BLOCK.len());
        return Some(fragment);
    }

    let open = Math::INLINE.len();
    let end = cur.find_from(open, Math::INLINE)?;
    let fragment = Math::inline(&cur.s[cur.i + open..end]);
    cur.jump_to(end + Math::INLINE.len());
    Some(fragment)
}

/// Attempts to transform a bold span starting at the current position.
///
/// Returns `None` without moving the cursor if not at `**` or if the span
/// isn't closed.
fn try_bold(cur: &mut Cursor<'_>) -> Option<String> {
    if !cur.starts_with(Bold::DELIM) {
        return None;
    }

    let open = Bold::DELIM.len();
    let end = cur.find_from(open, Bold::DELIM)?;
    let fragment = Bold::wrap(&cur.s[cur.i + open..end]);
    cur.jump_to(end + Bold::DELIM.len());
    Some(fragment)
}

/// Escapes a `<` or `>` at the current position unless it belongs to an
/// allow-listed tag.
fn try_angle_bracket(cur: &mut Cursor<'_>) -> Option<&'static str> {
    let entity = match cur.peek()? {
        AngleBracket::LT if !AngleBracket::opens_tag(cur.rest()) => "&lt;",
        AngleBracket::GT if !AngleBracket::closes_tag(cur.consumed()) => "&gt;",
        _ => return None,
    };
    cur.bump_n(1);
    Some(entity)
}
