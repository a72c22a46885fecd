//! Class tokens of an element.

use crate::navigator::SelectorNavigator;

/// Whitespace as the `\s` class of an ECMAScript regular expression: Unicode
/// `White_Space` without U+0085, plus the byte order mark U+FEFF.
const fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{B}'
            | '\u{C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Returns the node's class tokens in attribute order.
///
/// The attribute is split on runs of whitespace (in the ECMAScript `\s`
/// sense, so U+FEFF separates tokens and U+0085 does not) and empty tokens
/// are dropped.
/// Repeated tokens are kept so a class filter renders every token the
/// element declares.
#[must_use]
pub fn element_class_names<N: SelectorNavigator>(nav: &N, node: N::Node) -> Vec<&str> {
    nav.attribute(node, "class")
        .map(|classlist| {
            classlist
                .split(is_js_whitespace)
                .filter(|token| !token.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use selpath_dom::{DomTree, ElementData, NodeId};

    use super::*;

    fn element_with_class(class: Option<&str>) -> (DomTree, NodeId) {
        let mut tree = DomTree::new();
        let mut data = ElementData::html("div");
        if let Some(class) = class {
            data = data.with_attr("class", class);
        }
        let id = tree.append_element(NodeId::ROOT, data).unwrap();
        (tree, id)
    }

    #[test]
    fn test_absent_and_empty_class_attribute() {
        let (tree, id) = element_with_class(None);
        assert!(element_class_names(&tree, id).is_empty());

        let (tree, id) = element_with_class(Some(""));
        assert!(element_class_names(&tree, id).is_empty());
    }

    #[test]
    fn test_whitespace_runs_split_tokens() {
        let (tree, id) = element_with_class(Some(" nav  nav-item\n\tactive "));
        assert_eq!(element_class_names(&tree, id), vec!["nav", "nav-item", "active"]);
    }

    #[test]
    fn test_byte_order_mark_separates_tokens() {
        let (tree, id) = element_with_class(Some("a\u{FEFF}b\u{3000}c"));
        assert_eq!(element_class_names(&tree, id), vec!["a", "b", "c"]);

        // NEL is Unicode whitespace but not ECMAScript whitespace.
        let (tree, id) = element_with_class(Some("a\u{85}b"));
        assert_eq!(element_class_names(&tree, id), vec!["a\u{85}b"]);
    }

    #[test]
    fn test_reserved_looking_names_are_plain_tokens() {
        let (tree, id) = element_with_class(Some("__proto__ constructor"));
        assert_eq!(element_class_names(&tree, id), vec!["__proto__", "constructor"]);
    }
}
