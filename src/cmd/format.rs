/*!
format.rs

Human-readable output for the operator commands (`list`, `exec`).

  StyleOptions::detect()          NO_COLOR / NO_EMOJI / COLUMNS
  color(role, text, &style)       ANSI wrapper, no-op when color is off
  emoji(tag, &style)              small glyph set, "" when disabled
  box_header(title, sub, &style)  one framed title line
  table(headers, rows, opts, &style)
  truncate_ellipsis(s, n)

Functions return strings and never print. JSON output paths do not use
this module.
*/

use std::borrow::Cow;

#[derive(Debug, Clone)]
pub struct StyleOptions {
    pub use_color: bool,
    pub use_emoji: bool,
    pub term_width: usize,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self::detect()
    }
}

impl StyleOptions {
    pub fn detect() -> Self {
        let term_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .map(|w| w.clamp(40, 220))
            .unwrap_or(100);

        StyleOptions {
            use_color: std::env::var_os("NO_COLOR").is_none(),
            use_emoji: std::env::var_os("NO_EMOJI").is_none(),
            term_width,
        }
    }

    /// No color, no emoji, fixed width. Used by tests and piped output.
    pub fn plain(term_width: usize) -> Self {
        StyleOptions {
            use_color: false,
            use_emoji: false,
            term_width,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Role {
    Primary,
    Secondary,
    Accent,
    Success,
    Error,
    Dim,
}

pub fn color(role: Role, text: impl AsRef<str>, style: &StyleOptions) -> String {
    if !style.use_color {
        return text.as_ref().to_string();
    }
    let code = match role {
        Role::Primary => "38;5;45",
        Role::Secondary => "38;5;250",
        Role::Accent => "38;5;213",
        Role::Success => "38;5;82",
        Role::Error => "38;5;196",
        Role::Dim => "2",
    };
    format!("\x1b[{code}m{}\x1b[0m", text.as_ref())
}

pub fn emoji(tag: &str, style: &StyleOptions) -> &'static str {
    if !style.use_emoji {
        return "";
    }
    match tag {
        "success" => "✔",
        "error" => "✖",
        "info" => "ℹ",
        "tool" => "🛠",
        "list" => "📜",
        _ => "",
    }
}

/// Title (and optional subtitle) framed in a light box. Overlong content is
/// truncated to the terminal width rather than wrapped.
pub fn box_header(
    title: impl AsRef<str>,
    subtitle: Option<impl AsRef<str>>,
    style: &StyleOptions,
) -> String {
    let title = title.as_ref().trim();
    let plain = match &subtitle {
        Some(sub) => format!("{title}  {}", sub.as_ref()),
        None => title.to_string(),
    };

    let max_inner = style.term_width.max(20) - 4;
    let plain = truncate_ellipsis(&plain, max_inner);
    let inner_width = display_width(&plain);

    // Color only after measuring; the subtitle is whatever follows the title.
    let styled = match plain.strip_prefix(title) {
        Some(rest) => format!(
            "{}{}",
            color(Role::Primary, title, style),
            color(Role::Secondary, rest, style)
        ),
        None => color(Role::Primary, &plain, style),
    };

    let rule = "─".repeat(inner_width + 2);
    format!("┌{rule}┐\n│ {styled} │\n└{rule}┘")
}

#[derive(Debug, Clone)]
pub struct TableOpts {
    /// 0 means the style's terminal width.
    pub max_width: usize,
    pub header_sep: bool,
    pub min_col_width: usize,
}

impl Default for TableOpts {
    fn default() -> Self {
        Self {
            max_width: 0,
            header_sep: true,
            min_col_width: 2,
        }
    }
}

/// Left-aligned columns separated by two spaces. When the natural width
/// exceeds the limit the widest columns shrink first and cells are truncated.
pub fn table(
    headers: &[&str],
    rows: &[Vec<String>],
    opts: TableOpts,
    style: &StyleOptions,
) -> String {
    if headers.is_empty() {
        return String::new();
    }
    let col_count = headers.len();
    let width_limit = if opts.max_width == 0 {
        style.term_width
    } else {
        opts.max_width.min(style.term_width)
    };

    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    let natural: usize = widths.iter().sum::<usize>() + (col_count - 1) * 2;
    if natural > width_limit {
        let mut overflow = natural - width_limit;
        let mut by_width: Vec<usize> = (0..col_count).collect();
        by_width.sort_by(|a, b| widths[*b].cmp(&widths[*a]));
        for idx in by_width {
            if overflow == 0 {
                break;
            }
            if widths[idx] > opts.min_col_width {
                let shrink = (widths[idx] - opts.min_col_width).min(overflow);
                widths[idx] -= shrink;
                overflow -= shrink;
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| color(Role::Accent, fit(h, widths[i]), style))
        .collect();
    lines.push(header_line.join("  ").trim_end().to_string());

    if opts.header_sep {
        let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        lines.push(color(Role::Dim, sep.join("  "), style));
    }

    for row in rows {
        let cells: Vec<String> = (0..col_count)
            .map(|c| fit(row.get(c).map(String::as_str).unwrap_or(""), widths[c]))
            .collect();
        lines.push(cells.join("  ").trim_end().to_string());
    }

    lines.join("\n")
}

/// Pad or truncate to exactly `width` display columns.
fn fit(s: &str, width: usize) -> String {
    let cut = truncate_ellipsis(s, width);
    let len = display_width(&cut);
    if len < width {
        format!("{cut}{}", " ".repeat(width - len))
    } else {
        cut
    }
}

pub fn truncate_ellipsis(s: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\x1b') {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for t in chars.by_ref() {
                if t.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    Cow::Owned(out)
}

fn display_width(s: &str) -> usize {
    strip_ansi(s).chars().count()
}
