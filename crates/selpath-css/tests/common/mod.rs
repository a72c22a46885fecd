//! Shared helpers: compact tree construction and a resolver for the
//! selectors this crate emits (compound selectors joined by `>`).

#![allow(dead_code)]

use selpath_dom::{DomTree, ElementData, Namespace, NodeId};

/// Append an HTML element with the given attributes under `parent`.
pub fn el(tree: &mut DomTree, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let data = attrs
        .iter()
        .fold(ElementData::html(tag), |data, &(name, value)| data.with_attr(name, value));
    tree.append_element(parent, data).unwrap()
}

/// `<html><head></head><body></body></html>`, returning (tree, html, head, body).
pub fn html_document() -> (DomTree, NodeId, NodeId, NodeId) {
    let mut tree = DomTree::new();
    let html = el(&mut tree, NodeId::ROOT, "html", &[]);
    let head = el(&mut tree, html, "head", &[]);
    let body = el(&mut tree, html, "body", &[]);
    (tree, html, head, body)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Simple {
    Type(String),
    Id(String),
    Class(String),
    AttrEquals(String, String),
    NthChild(usize),
}

/// [CSS Syntax § 4.3.7](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
fn consume_escape(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> char {
    let Some(&first) = chars.peek() else {
        return '\u{FFFD}';
    };
    if !first.is_ascii_hexdigit() {
        let _ = chars.next();
        return first;
    }
    let mut hex = String::new();
    while hex.len() < 6 {
        match chars.peek() {
            Some(c) if c.is_ascii_hexdigit() => hex.push(*c),
            _ => break,
        }
        let _ = chars.next();
    }
    if chars.peek().is_some_and(|c| c.is_whitespace()) {
        let _ = chars.next();
    }
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or('\u{FFFD}')
}

fn consume_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if c == '\\' {
            let _ = chars.next();
            ident.push(consume_escape(chars));
        } else if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            ident.push(c);
            let _ = chars.next();
        } else {
            break;
        }
    }
    ident
}

/// Parse `a > b.c > d:nth-child(2)` into compounds, left to right.
fn parse(selector: &str) -> Vec<Vec<Simple>> {
    let mut compounds = vec![Vec::new()];
    let mut chars = selector.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            ' ' => {
                let _ = chars.next();
            }
            '>' => {
                let _ = chars.next();
                compounds.push(Vec::new());
            }
            '#' => {
                let _ = chars.next();
                let ident = consume_ident(&mut chars);
                compounds.last_mut().unwrap().push(Simple::Id(ident));
            }
            '.' => {
                let _ = chars.next();
                let ident = consume_ident(&mut chars);
                compounds.last_mut().unwrap().push(Simple::Class(ident));
            }
            '[' => {
                let _ = chars.next();
                let name = consume_ident(&mut chars);
                assert_eq!(chars.next(), Some('='), "only [attr=value] is emitted");
                let value = consume_ident(&mut chars);
                assert_eq!(chars.next(), Some(']'));
                compounds.last_mut().unwrap().push(Simple::AttrEquals(name, value));
            }
            ':' => {
                let rest: String = chars.clone().collect();
                let digits: String = rest
                    .strip_prefix(":nth-child(")
                    .expect("only :nth-child is emitted")
                    .chars()
                    .take_while(char::is_ascii_digit)
                    .collect();
                for _ in 0..":nth-child(".len() + digits.len() + 1 {
                    let _ = chars.next();
                }
                compounds
                    .last_mut()
                    .unwrap()
                    .push(Simple::NthChild(digits.parse().unwrap()));
            }
            _ => {
                let ident = consume_ident(&mut chars);
                assert!(!ident.is_empty(), "unexpected {c:?} in {selector:?}");
                compounds.last_mut().unwrap().push(Simple::Type(ident));
            }
        }
    }
    compounds
}

fn simple_matches(tree: &DomTree, node: NodeId, simple: &Simple) -> bool {
    let Some(element) = tree.as_element(node) else {
        return false;
    };
    match simple {
        Simple::Type(name) if element.namespace == Namespace::Html => {
            element.local_name.eq_ignore_ascii_case(name)
        }
        Simple::Type(name) => element.local_name == *name,
        Simple::Id(id) => element.id() == Some(id.as_str()),
        Simple::Class(class) => element.classes().contains(&class.as_str()),
        Simple::AttrEquals(name, value) => element.attribute(name) == Some(value.as_str()),
        Simple::NthChild(n) => tree.parent(node).is_some_and(|parent| {
            tree.element_children(parent).position(|child| child == node) == Some(n - 1)
        }),
    }
}

fn compound_matches(tree: &DomTree, node: NodeId, compound: &[Simple]) -> bool {
    compound.iter().all(|simple| simple_matches(tree, node, simple))
}

/// All elements of `tree` matched by `selector`, in allocation order.
pub fn query_selector_all(tree: &DomTree, selector: &str) -> Vec<NodeId> {
    let compounds = parse(selector);
    let Some((subject, ancestors)) = compounds.split_last() else {
        return Vec::new();
    };

    (0..tree.len())
        .map(NodeId)
        .filter(|&node| {
            if !compound_matches(tree, node, subject) {
                return false;
            }
            let mut current = node;
            for compound in ancestors.iter().rev() {
                match tree.parent(current) {
                    Some(parent) if compound_matches(tree, parent, compound) => current = parent,
                    _ => return false,
                }
            }
            true
        })
        .collect()
}
