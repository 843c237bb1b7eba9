//! Whitespace handling that emulates how HTML renders raw text.
//!
//! Three small rules cooperate while the walker appends text:
//!
//! - [`normalize_into`] collapses every whitespace run to a single space. A
//!   leading run is either dropped or collapsed depending on the caller; a
//!   trailing run is always kept as one space.
//! - [`start_block`] fully trims the trailing whitespace of the current text
//!   and separates the upcoming block from any earlier content.
//! - [`should_trim_leading`] decides whether the next text run may drop its
//!   leading whitespace, which keeps exactly one space between runs that were
//!   adjacent in the source even across a section boundary.
//!
//! The trailing single space left by [`normalize_into`] is what
//! [`should_trim_leading`] looks at, so the two must stay in step.

use crate::section::Section;

/// The C-locale `isspace` set.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Append `raw` to `out`, replacing every whitespace run with one space.
///
/// With `trim_leading` the leading run is removed instead of collapsed.
/// The trailing run is never removed.
pub fn normalize_into(raw: &str, trim_leading: bool, out: &mut String) {
    let mut rest = if trim_leading {
        raw.trim_start_matches(is_space)
    } else {
        raw
    };

    loop {
        let word_end = rest.find(is_space).unwrap_or(rest.len());
        out.push_str(&rest[..word_end]);
        rest = &rest[word_end..];
        if rest.is_empty() {
            break;
        }

        rest = rest.trim_start_matches(is_space);
        out.push(' ');
    }
}

/// Owned variant of [`normalize_into`].
pub fn normalize(raw: &str, trim_leading: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    normalize_into(raw, trim_leading, &mut out);
    out
}

/// Trim trailing whitespace from `text`, then append `prefix` if anything
/// is left.
pub fn start_block(prefix: &str, text: &mut String) {
    let kept = text.trim_end_matches(is_space).len();
    text.truncate(kept);

    if !text.is_empty() {
        text.push_str(prefix);
    }
}

/// Whether the next text run should drop its leading whitespace.
///
/// The first text of a document always trims. Afterwards the decision
/// follows the previously emitted text: the current section if it holds
/// anything, otherwise the one before it.
pub fn should_trim_leading(sections: &[Section]) -> bool {
    let [.., previous, current] = sections else {
        return true;
    };

    let prev_text = if current.text.is_empty() {
        &previous.text
    } else {
        &current.text
    };
    prev_text.ends_with(is_space)
}
