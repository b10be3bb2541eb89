//! Line-oriented HCL fragments.
//!
//! Generators build [`Fragment`]s from tree walks and render them once, so
//! indentation is decided here and nowhere else.

const INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    /// Indented by `depth` levels when rendered.
    Code { depth: usize, text: String },
    /// Written as-is, e.g. heredoc bodies and markers.
    Raw(String),
}

/// An ordered list of lines with relative indentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    lines: Vec<Line>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single line fragment.
    pub fn line(text: impl Into<String>) -> Self {
        let mut fragment = Self::new();
        fragment.push(text);
        fragment
    }

    /// `head {`, the body one level deeper, then `}`. An empty body renders
    /// as `head {}`.
    pub fn block(head: impl Into<String>, body: Fragment) -> Self {
        let head = head.into();
        if body.is_empty() {
            return Self::line(format!("{} {{}}", head));
        }
        let mut fragment = Self::line(format!("{} {{", head));
        fragment.append_indented(body);
        fragment.push("}");
        fragment
    }

    /// `key = <<MARKER`, the text verbatim, then the closing marker.
    pub fn heredoc(key: &str, marker: &str, text: &str) -> Self {
        let mut fragment = Self::line(format!("{} = <<{}", key, marker));
        for line in text.lines() {
            fragment.lines.push(Line::Raw(line.to_string()));
        }
        fragment.lines.push(Line::Raw(marker.to_string()));
        fragment
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.lines.push(Line::Code {
            depth: 0,
            text: text.into(),
        });
    }

    pub fn append(&mut self, other: Fragment) {
        self.lines.extend(other.lines);
    }

    pub fn append_indented(&mut self, other: Fragment) {
        self.lines.extend(other.lines.into_iter().map(|line| match line {
            Line::Code { depth, text } => Line::Code {
                depth: depth + 1,
                text,
            },
            raw @ Line::Raw(_) => raw,
        }));
    }

    /// Prepend `prefix` to the first line.
    pub fn prefix(mut self, prefix: &str) -> Self {
        match self.lines.first_mut() {
            Some(Line::Code { text, .. }) | Some(Line::Raw(text)) => text.insert_str(0, prefix),
            None => self.push(prefix),
        }
        self
    }

    /// Append `suffix` to the last line.
    pub fn suffix(mut self, suffix: &str) -> Self {
        match self.lines.last_mut() {
            Some(Line::Code { text, .. }) | Some(Line::Raw(text)) => text.push_str(suffix),
            None => self.push(suffix),
        }
        self
    }

    /// Surround the fragment, e.g. `optional(` ... `)`.
    pub fn wrap(self, open: &str, close: &str) -> Self {
        self.prefix(open).suffix(close)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render lines joined by newlines, without a trailing newline.
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(|line| match line {
                Line::Code { text, .. } if text.is_empty() => String::new(),
                Line::Code { depth, text } => format!("{}{}", INDENT.repeat(*depth), text),
                Line::Raw(text) => text.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Join rendered sections with a blank line and end with a newline.
pub fn join_sections<I, S>(sections: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = sections.into_iter().map(|s| s.as_ref().to_string()).collect();
    let mut content = parts.join("\n\n");
    content.push('\n');
    content
}
