// --- File: crates/slotbook_ui/src/markup.rs ---
//! Helpers for building HTML strings.

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `disabled` attribute when `flag` is set.
pub fn disabled_if(flag: bool) -> &'static str {
    if flag {
        " disabled"
    } else {
        ""
    }
}
