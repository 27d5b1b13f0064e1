//! ClassList - Ordered Class Token Sets
//!
//! Components describe their visual intent as an ordered list of class tokens
//! (`akgui-button`, `akgui-button--danger`, ...). The list is resolved against a
//! [`StyleSheet`](crate::theme::stylesheet::StyleSheet) at render time.

use std::fmt;

/// An ordered set of class tokens
///
/// Duplicates and empty tokens are dropped on insertion; the first occurrence
/// keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Create an empty class list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token
    pub fn push(&mut self, token: impl Into<String>) {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() || self.contains(token) {
            return;
        }
        self.tokens.push(token.to_string());
    }

    /// Append a token when `condition` holds
    pub fn push_if(&mut self, condition: bool, token: impl Into<String>) {
        if condition {
            self.push(token);
        }
    }

    /// Append every whitespace-separated token of an optional custom class string
    pub fn push_custom(&mut self, custom: Option<&str>) {
        if let Some(custom) = custom {
            for token in custom.split_whitespace() {
                self.push(token);
            }
        }
    }

    /// Builder-style append
    pub fn with(mut self, token: impl Into<String>) -> Self {
        self.push(token);
        self
    }

    /// Builder-style conditional append
    pub fn with_if(mut self, condition: bool, token: impl Into<String>) -> Self {
        self.push_if(condition, token);
        self
    }

    /// Check whether a token is present
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Iterate tokens in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = ClassList::new();
        for token in iter {
            list.push(token);
        }
        list
    }
}

/// A BEM block name used to derive element and modifier tokens
///
/// `Block("card").modifier("elevated")` yields `card--elevated`,
/// `Block("card").element("title")` yields `card__title`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block(pub &'static str);

impl Block {
    /// The block token itself
    pub fn name(&self) -> &'static str {
        self.0
    }

    /// `<block>--<modifier>`
    pub fn modifier(&self, modifier: &str) -> String {
        format!("{}--{}", self.0, modifier)
    }

    /// `<block>__<element>`
    pub fn element(&self, element: &str) -> String {
        format!("{}__{}", self.0, element)
    }

    /// `<block>__<element>--<modifier>`
    pub fn element_modifier(&self, element: &str, modifier: &str) -> String {
        format!("{}__{}--{}", self.0, element, modifier)
    }
}

/// Styling intent that maps onto a class token suffix
pub trait ClassToken {
    /// The modifier suffix (`primary`, `large`, ...)
    fn token(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_order_and_drops_duplicates() {
        let mut list = ClassList::new();
        list.push("a");
        list.push("b");
        list.push("a");
        list.push("  ");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(list.to_string(), "a b");
    }

    #[test]
    fn conditional_tokens() {
        let list = ClassList::new()
            .with("card")
            .with_if(false, "card--selected")
            .with_if(true, "card--loading");
        assert!(list.contains("card--loading"));
        assert!(!list.contains("card--selected"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn custom_class_string_is_split() {
        let mut list = ClassList::new();
        list.push_custom(Some("custom-card  extra"));
        list.push_custom(None);
        assert_eq!(list.to_string(), "custom-card extra");
    }

    #[test]
    fn block_derives_bem_tokens() {
        let block = Block("appbar");
        assert_eq!(block.modifier("sticky"), "appbar--sticky");
        assert_eq!(block.element("title"), "appbar__title");
        assert_eq!(
            block.element_modifier("menu-link", "active"),
            "appbar__menu-link--active"
        );
    }
}
