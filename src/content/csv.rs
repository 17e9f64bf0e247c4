// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 taxpack contributors

//! Minimal RFC 4180 CSV rendering for the reference tables.
//!
//! Fields are quoted only when they contain a comma, a double quote, or a
//! line break (embedded quotes are doubled); records end with `\n` and the
//! file carries a trailing newline. That matches how the reference tables
//! were originally published, so regenerated files are byte-identical.

/// Render a table as CSV text: one header record, then one record per row.
pub fn render(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    push_record(&mut out, header.iter().copied());
    for row in rows {
        push_record(&mut out, row.iter().map(String::as_str));
    }
    out
}

fn push_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    let needs_quoting = field.contains(',') || field.contains('"') || field.contains('\n');
    if !needs_quoting {
        out.push_str(field);
        return;
    }

    out.push('"');
    for ch in field.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
}
