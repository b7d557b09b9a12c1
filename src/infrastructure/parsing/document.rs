//! Read-only document model over a product page.

use scraper::{ElementRef, Html, Selector};

/// Best-effort traversable tree built from raw page text.
///
/// Construction never fails: unclosed tags, missing attributes and stray
/// text are recovered with standard HTML5 leniency, and empty input yields
/// an empty-but-valid tree. The wrapper stays deliberately thin; extractors
/// do their own narrowing with compiled selectors.
#[derive(Debug)]
pub struct ProductDocument {
    tree: Html,
}

impl ProductDocument {
    /// Parse raw page text into a queryable tree.
    pub fn parse(html: &str) -> Self {
        Self {
            tree: Html::parse_document(html),
        }
    }

    /// First element in the document matching `selector`.
    pub fn first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.tree.select(selector).next()
    }

    /// First descendant of `scope` matching `selector`.
    pub fn first_within<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
        scope.select(selector).next()
    }

    /// Trimmed text content of an element, all descendants flattened.
    pub fn text_of(element: ElementRef<'_>) -> String {
        element.text().collect::<String>().trim().to_string()
    }

    /// Attribute value on the element itself.
    pub fn attr_of<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
        element.value().attr(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(s: &str) -> Selector {
        Selector::parse(s).unwrap()
    }

    #[test]
    fn empty_input_yields_valid_tree() {
        let document = ProductDocument::parse("");
        assert!(document.first(&selector("#anything")).is_none());
    }

    #[test]
    fn malformed_markup_never_aborts() {
        let document = ProductDocument::parse("<div id=a><span>unclosed <p>stray</div></blah>");
        let el = document.first(&selector("#a")).unwrap();
        assert!(ProductDocument::text_of(el).contains("unclosed"));
    }

    #[test]
    fn scoped_lookup_only_sees_descendants() {
        let document =
            ProductDocument::parse(r#"<div id="box"><span class="x">in</span></div><span class="x">out</span>"#);
        let scope = document.first(&selector("#box")).unwrap();
        let hit = ProductDocument::first_within(scope, &selector("span.x")).unwrap();
        assert_eq!(ProductDocument::text_of(hit), "in");
    }

    #[test]
    fn missing_attribute_is_none() {
        let document = ProductDocument::parse(r#"<img id="pic" alt="no src here">"#);
        let img = document.first(&selector("#pic")).unwrap();
        assert_eq!(ProductDocument::attr_of(img, "src"), None);
        assert_eq!(ProductDocument::attr_of(img, "alt"), Some("no src here"));
    }
}
