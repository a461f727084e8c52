// src/core/dom.rs
//! Navigable document tree over `scraper` (html5ever + ego-tree).
//!
//! The extractor only needs four kinds of lookup, all expressed as explicit
//! walks over the parse tree:
//! - descendants matching a tag + class predicate
//! - the next element in *document order* matching a tag + text predicate
//! - the nearest ancestor with a given tag
//! - the next following sibling with a given tag
//!
//! Tag names are compared ASCII case-insensitively; html5ever already
//! lowercases HTML element names, so this only matters for foreign content.

use scraper::{ElementRef, Html};
use scraper::node::Element;

use crate::Result;
use crate::core::charset;

/// A parsed HTML report.
pub struct Document {
    html: Html,
}

impl Document {
    /// Decode bytes (see [`charset::decode`]) and parse.
    /// Only input that is not text fails; broken markup still yields a tree.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let (text, _) = charset::decode(bytes)?;
        Ok(Self::parse_str(&text))
    }

    pub fn parse_str(text: &str) -> Self {
        let html = Html::parse_document(text);
        if !html.errors.is_empty() {
            logd!("Parse: {} recoverable markup error(s)", html.errors.len());
        }
        Self { html }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// Every element with `tag` whose class list contains `class`, in document order.
    pub fn find_all(&self, tag: &str, class: &str) -> Vec<ElementRef<'_>> {
        self.root().find_all(tag, class)
    }
}

/// Tree lookups the extractor is written against.
pub trait Query<'a>: Sized {
    /// Descendants (self excluded) with `tag` and `class`, in document order.
    fn find_all(self, tag: &str, class: &str) -> Vec<ElementRef<'a>>;

    /// First descendant with `tag` and `class`.
    fn find(self, tag: &str, class: &str) -> Option<ElementRef<'a>>;

    /// Descendant elements with `tag`, any class.
    fn find_all_tag(self, tag: &str) -> Vec<ElementRef<'a>>;

    /// Next element after `self` in document order (own descendants first)
    /// with `tag` whose stripped text satisfies `pred`.
    fn find_next<P>(self, tag: &str, pred: P) -> Option<ElementRef<'a>>
    where
        P: Fn(&str) -> bool;

    /// Nearest enclosing element with `tag`.
    fn find_parent(self, tag: &str) -> Option<ElementRef<'a>>;

    /// First following sibling element with `tag`.
    fn find_next_sibling(self, tag: &str) -> Option<ElementRef<'a>>;

    fn has_class(self, class: &str) -> bool;

    /// Text fragments trimmed one by one and joined without separator.
    fn stripped_text(self) -> String;
}

impl<'a> Query<'a> for ElementRef<'a> {
    fn find_all(self, tag: &str, class: &str) -> Vec<ElementRef<'a>> {
        descendant_elements(self)
            .filter(|el| is_tag(el.value(), tag) && el.has_class(class))
            .collect()
    }

    fn find(self, tag: &str, class: &str) -> Option<ElementRef<'a>> {
        descendant_elements(self).find(|el| is_tag(el.value(), tag) && el.has_class(class))
    }

    fn find_all_tag(self, tag: &str) -> Vec<ElementRef<'a>> {
        descendant_elements(self)
            .filter(|el| is_tag(el.value(), tag))
            .collect()
    }

    fn find_next<P>(self, tag: &str, pred: P) -> Option<ElementRef<'a>>
    where
        P: Fn(&str) -> bool,
    {
        following(self)
            .find(|el| is_tag(el.value(), tag) && pred(&el.stripped_text()))
    }

    fn find_parent(self, tag: &str) -> Option<ElementRef<'a>> {
        self.ancestors()
            .filter_map(ElementRef::wrap)
            .find(|el| is_tag(el.value(), tag))
    }

    fn find_next_sibling(self, tag: &str) -> Option<ElementRef<'a>> {
        self.next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|el| is_tag(el.value(), tag))
    }

    fn has_class(self, class: &str) -> bool {
        self.value().classes().any(|c| c == class)
    }

    fn stripped_text(self) -> String {
        self.text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

fn is_tag(el: &Element, tag: &str) -> bool {
    el.name().eq_ignore_ascii_case(tag)
}

fn descendant_elements(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Elements after `el` in document order: its subtree first, then every
/// later sibling subtree of it and of each ancestor.
fn following(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    let node = *el;
    let inside = node.descendants().skip(1);
    let after = std::iter::once(node)
        .chain(node.ancestors())
        .flat_map(|n| n.next_siblings())
        .flat_map(|s| s.descendants());
    inside.chain(after).filter_map(ElementRef::wrap)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<html><body>
        <table><tr><td class="Head a">One</td></tr></table>
        <p><b>skip</b></p>
        <table id="outer"><tr><td><big>  Main  Part </big></td></tr></table>
        <span>between</span>
        <div id="target"><table class="ResultTable x"><tr><td>r</td></tr></table></div>
    </body></html>"#;

    #[test]
    fn forward_scan_reaches_later_subtrees() {
        let doc = Document::parse_str(DOC);
        let head = doc.find_all("td", "Head")[0];
        let big = head.find_next("big", |t| t.contains("Main")).unwrap();
        assert_eq!(big.stripped_text(), "Main  Part");
    }

    #[test]
    fn parent_sibling_descendant_chain() {
        let doc = Document::parse_str(DOC);
        let head = doc.find_all("td", "Head")[0];
        let big = head.find_next("big", |t| t.contains("Main")).unwrap();
        let table = big.find_parent("table").unwrap();
        assert_eq!(table.value().attr("id"), Some("outer"));
        let div = table.find_next_sibling("div").unwrap();
        assert_eq!(div.value().attr("id"), Some("target"));
        assert!(div.find("table", "ResultTable").is_some());
    }

    #[test]
    fn stripped_text_joins_trimmed_fragments() {
        let doc = Document::parse_str("<p> a <b> b </b>\n c </p>");
        let p = doc.root().find_all_tag("p")[0];
        assert_eq!(p.stripped_text(), "abc");
    }

    #[test]
    fn only_binary_bytes_fail() {
        assert!(Document::parse(b"<p>\x00\x01\x02</p>").is_err());
        assert!(Document::parse(b"\xEF\xBB\xBF<p>ok</p>").is_ok());

        let doc = Document::parse(b"<p>25\xB0C</p>").unwrap();
        assert_eq!(doc.root().find_all_tag("p")[0].stripped_text(), "25°C");
    }
}
