// --- File: crates/slotbook_ui/src/shell.rs ---
//! App shell: document skeleton, navigation bar and the embedded stylesheet.

use crate::markup::escape;

/// Top-level pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Booking,
    Manager,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Booking => "/",
            Page::Manager => "/manager",
        }
    }

    fn nav_label(self) -> &'static str {
        match self {
            Page::Booking => "Book Appointment",
            Page::Manager => "Sales Manager",
        }
    }
}

// Black and white palette, Inter type, 8px corners.
const THEME_CSS: &str = r#"
*,*::before,*::after{box-sizing:border-box}
body{margin:0;background:#fff;color:#000;font-family:"Inter","Roboto","Helvetica","Arial",sans-serif}
nav{display:flex;gap:8px;padding:12px 24px;background:linear-gradient(to right,#000,#1a1a1a);box-shadow:0 2px 12px rgba(0,0,0,.15)}
nav a{color:#fff;text-decoration:none;padding:6px 12px;border-radius:6px;font-weight:500}
nav a[aria-current="page"]{background:rgba(255,255,255,.15)}
main{max-width:960px;margin:0 auto;padding:32px 16px}
h1{font-weight:600;letter-spacing:-.02em;margin:0 0 16px}
h2{font-weight:500;letter-spacing:-.01em;margin:0 0 8px;font-size:1.25rem}
.paper{border:1px solid rgba(0,0,0,.12);border-radius:8px;padding:24px;margin-bottom:24px}
.alert{border:1px solid #000;border-radius:8px;padding:12px 16px;margin-bottom:16px;background:#f5f5f5}
.helper{color:#757575;font-size:.85rem;margin:4px 0 0}
.error-text{color:#000;font-weight:600}
.button{font:inherit;font-weight:500;border-radius:6px;padding:8px 16px;cursor:pointer;border:1px solid #000;background:#000;color:#fff}
.button:hover{background:#2c2c2c}
.button.outlined{background:#fff;color:#000}
.button.outlined:hover{background:rgba(0,0,0,.04)}
.button:disabled{opacity:.4;cursor:not-allowed}
.chip{display:inline-block;border:1px solid rgba(0,0,0,.23);border-radius:16px;padding:2px 10px;font-size:.8rem;margin-left:8px}
.chip.filled{background:#000;color:#fff;border-color:#000}
.slot-list,.appointments{list-style:none;margin:0;padding:0}
.slot-list li,.appointments li{display:flex;justify-content:space-between;align-items:center;gap:16px;padding:12px 0;border-bottom:1px solid rgba(0,0,0,.12)}
.slot-list li:last-child,.appointments li:last-child{border-bottom:0}
.slot-time{font-weight:500}
.inline{display:inline;margin:0}
.date-picker{display:flex;flex-wrap:wrap;align-items:center;gap:12px;margin-bottom:24px}
.date-picker .helper{flex-basis:100%}
input[type=date],input[type=text]{font:inherit;padding:8px 12px;border:1px solid rgba(0,0,0,.23);border-radius:8px}
input[type=text]{width:100%}
.overlay{position:fixed;inset:0;background:rgba(0,0,0,.5);display:flex;align-items:center;justify-content:center}
.dialog{background:#fff;border-radius:8px;padding:24px;width:min(480px,92vw)}
.dialog dl{display:grid;grid-template-columns:max-content 1fr;gap:8px 16px;margin:16px 0}
.dialog dt{color:#757575}
.dialog dd{margin:0}
.dialog-actions{display:flex;justify-content:flex-end;gap:8px;margin-top:16px}
"#;

/// Wraps a page body in the document skeleton and navigation bar.
pub fn layout(active: Page, title: &str, body: &str) -> String {
    let nav: String = [Page::Booking, Page::Manager]
        .into_iter()
        .map(|page| {
            let current = if page == active {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}"{}>{}</a>"#,
                page.path(),
                current,
                page.nav_label()
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | SlotBook</title>
<style>{css}</style>
</head>
<body>
<nav>{nav}</nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        css = THEME_CSS,
        nav = nav,
        body = body,
    )
}

/// Error banner; nothing when there is no message.
pub fn alert(message: Option<&str>) -> String {
    match message {
        Some(message) => format!(
            r#"<div class="alert" role="alert">{}</div>"#,
            escape(message)
        ),
        None => String::new(),
    }
}
