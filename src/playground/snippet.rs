//! Snippet - Builder-Chain Source Rendering
//!
//! Formats builder-style Rust expressions as indented source text for the
//! example code blocks.

const INDENT: &str = "    ";

/// A receiver expression followed by chained method calls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain {
    head: String,
    calls: Vec<Vec<String>>,
}

impl Chain {
    pub fn new(head: impl Into<String>) -> Self {
        Self {
            head: head.into(),
            calls: Vec::new(),
        }
    }

    /// `.name(arg)` with a single-line argument
    pub fn call(&mut self, name: &str, arg: impl AsRef<str>) {
        self.calls.push(vec![format!("{name}({})", arg.as_ref())]);
    }

    /// `.name(expr)` where `expr` may span several lines
    pub fn call_expr(&mut self, name: &str, expr: Vec<String>) {
        self.calls.push(wrap_call(name, expr));
    }

    /// `.name([item, ...])` with one item per line
    pub fn call_list(&mut self, name: &str, items: Vec<Vec<String>>) {
        if items.is_empty() {
            self.calls.push(vec![format!("{name}([])")]);
            return;
        }
        let mut lines = vec![format!("{name}([")];
        for item in items {
            let last = item.len().saturating_sub(1);
            for (ix, line) in item.into_iter().enumerate() {
                let suffix = if ix == last { "," } else { "" };
                lines.push(format!("{INDENT}{line}{suffix}"));
            }
        }
        lines.push("])".to_string());
        self.calls.push(lines);
    }

    pub fn lines(self) -> Vec<String> {
        let mut lines = vec![self.head];
        for call in self.calls {
            for (ix, line) in call.into_iter().enumerate() {
                if ix == 0 {
                    lines.push(format!("{INDENT}.{line}"));
                } else {
                    lines.push(format!("{INDENT}{line}"));
                }
            }
        }
        lines
    }

    /// The whole chain on a single line
    pub fn inline(self) -> String {
        let mut out = self.head;
        for call in self.calls {
            out.push('.');
            out.push_str(&call.concat());
        }
        out
    }

    pub fn render(self) -> String {
        self.lines().join("\n")
    }
}

/// `name(expr)` for a possibly multi-line expression
pub fn wrap_call(name: &str, expr: Vec<String>) -> Vec<String> {
    let mut lines = expr;
    match lines.first_mut() {
        Some(first) => *first = format!("{name}({first}"),
        None => return vec![format!("{name}()")],
    }
    if let Some(last) = lines.last_mut() {
        last.push(')');
    }
    lines
}

/// Indent every line by `depth` levels
pub fn indent(lines: Vec<String>, depth: usize) -> Vec<String> {
    let prefix = INDENT.repeat(depth);
    lines
        .into_iter()
        .map(|line| format!("{prefix}{line}"))
        .collect()
}

/// Rust string literal for `text`
pub fn quote(text: &str) -> String {
    format!("{text:?}")
}

/// Lowercase dash-separated identifier derived from a label
pub fn slug(label: &str, fallback: &str) -> String {
    let mut out = String::new();
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_without_calls_is_head_only() {
        assert_eq!(Chain::new("Button::new(\"a\", \"A\")").render(), "Button::new(\"a\", \"A\")");
    }

    #[test]
    fn calls_are_indented_one_level() {
        let mut chain = Chain::new("Card::new(\"card\")");
        chain.call("title", quote("Hello"));
        chain.call("clickable", "true");
        assert_eq!(
            chain.render(),
            "Card::new(\"card\")\n    .title(\"Hello\")\n    .clickable(true)"
        );
    }

    #[test]
    fn nested_expressions_keep_relative_indent() {
        let mut inner = Chain::new("div()");
        inner.call("child", quote("x"));
        let mut outer = Chain::new("Card::new(\"card\")");
        outer.call_expr("footer", inner.lines());
        assert_eq!(
            outer.render(),
            "Card::new(\"card\")\n    .footer(div()\n        .child(\"x\"))"
        );
    }

    #[test]
    fn list_items_end_with_commas() {
        let mut chain = Chain::new("AppBarProps::new()");
        chain.call_list(
            "menu_items",
            vec![
                vec!["MenuItem::new(\"a\", \"A\")".to_string()],
                vec!["MenuItem::new(\"b\", \"B\")".to_string()],
            ],
        );
        assert_eq!(
            chain.render(),
            "AppBarProps::new()\n    .menu_items([\n        MenuItem::new(\"a\", \"A\"),\n        MenuItem::new(\"b\", \"B\"),\n    ])"
        );
    }

    #[test]
    fn inline_joins_calls() {
        let mut chain = Chain::new("MenuItem::new(\"a\", \"A\")");
        chain.call("disabled", "true");
        assert_eq!(chain.inline(), "MenuItem::new(\"a\", \"A\").disabled(true)");
    }

    #[test]
    fn slug_normalizes_labels() {
        assert_eq!(slug("Click me", "button"), "click-me");
        assert_eq!(slug("Full Width Button", "button"), "full-width-button");
        assert_eq!(slug("⚡", "button"), "button");
        assert_eq!(slug("Sign Up!", "button"), "sign-up");
    }

    #[test]
    fn quote_escapes() {
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
    }
}
