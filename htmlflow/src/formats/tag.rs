//! XML-like section listing
//!
//! ## Example
//!
//! ```text
//! <section>Hello </section>
//! <section link="http://x">link</section>
//! <section> world\n\n</section>
//! ```
//!
//! Newlines inside a section are written as `\n` and backslashes as `\\`
//! so each section stays on one line.

use crate::section::Section;

pub fn to_tag_str(sections: &[Section]) -> String {
    let mut output = String::new();
    for section in sections {
        match &section.link {
            Some(link) => output.push_str(&format!("<section link=\"{}\">", escape_xml(link))),
            None => output.push_str("<section>"),
        }
        output.push_str(&escape_newlines(&escape_xml(&section.text)));
        output.push_str("</section>\n");
    }
    output
}

/// Keep a section on one line: `\` becomes `\\` first so a written `\n`
/// is always a newline.
fn escape_newlines(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\n', "\\n")
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
