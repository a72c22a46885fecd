//! One selector fragment per element on the walk from target to root.

use std::fmt;

use serde::Serialize;

use crate::classes::element_class_names;
use crate::escape::serialize_identifier;
use crate::name::name_in_correct_case;
use crate::navigator::SelectorNavigator;
use crate::siblings::analyze_siblings;

/// Elements whose name alone is specific enough to end an optimized walk.
const ROOT_CONTAINERS: [&str; 3] = ["html", "head", "body"];

/// A compound selector for one element of the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    text: String,
    is_terminal: bool,
}

impl Step {
    /// Create a step from its selector text.
    #[must_use]
    pub const fn new(text: String, is_terminal: bool) -> Self {
        Self { text, is_terminal }
    }

    /// The compound selector text, e.g. `li.active` or `#main`.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the walk stops at this step: it names an id or a root
    /// container, or its element has no element parent worth naming.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.is_terminal
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Attributes set to the empty string are treated as absent.
fn non_empty_attribute<'a, N: SelectorNavigator>(
    nav: &'a N,
    node: N::Node,
    name: &str,
) -> Option<&'a str> {
    nav.attribute(node, name).filter(|value| !value.is_empty())
}

fn id_selector(id: &str) -> String {
    format!("#{}", serialize_identifier(id))
}

/// Builds the step for `node`.
///
/// With `optimize`, an id yields a bare `#id` and the `html`, `head` and
/// `body` containers yield their tag name, both ending the walk. Otherwise an
/// id yields `tag#id` (still terminal), a child of the document yields its
/// tag name, and anything else yields its tag name plus whatever
/// `:nth-child` or class filter its siblings call for. `is_target_node`
/// enables the `[type=...]` clause for a bare `<input>`.
///
/// Returns `None` if `node` is not an element.
#[must_use]
pub fn select_step<N: SelectorNavigator>(
    nav: &N,
    node: N::Node,
    optimize: bool,
    is_target_node: bool,
) -> Option<Step> {
    if !nav.is_element(node) {
        return None;
    }

    let id = non_empty_attribute(nav, node, "id");
    let node_name = name_in_correct_case(nav, node);

    if optimize {
        if let Some(id) = id {
            return Some(Step::new(id_selector(id), true));
        }
        if ROOT_CONTAINERS
            .iter()
            .any(|container| node_name.eq_ignore_ascii_case(container))
        {
            return Some(Step::new(node_name.into_owned(), true));
        }
    }

    if let Some(id) = id {
        return Some(Step::new(format!("{node_name}{}", id_selector(id)), true));
    }

    let parent = match nav.parent(node) {
        Some(parent) if !nav.is_document_root(parent) => parent,
        _ => return Some(Step::new(node_name.into_owned(), true)),
    };

    let own_class_names = element_class_names(nav, node);
    let analysis = analyze_siblings(
        nav,
        node,
        nav.element_children(parent),
        &node_name,
        &own_class_names,
    );

    let mut result = node_name.into_owned();
    if is_target_node
        && result.eq_ignore_ascii_case("input")
        && non_empty_attribute(nav, node, "class").is_none()
    {
        if let Some(input_type) = non_empty_attribute(nav, node, "type") {
            result.push_str(&format!("[type={}]", serialize_identifier(input_type)));
        }
    }

    if analysis.needs_nth_child {
        match analysis.own_index {
            Some(index) => result.push_str(&format!(":nth-child({})", index + 1)),
            None => {
                selpath_common::warning::warn_once(
                    "Selector",
                    "element is missing from its parent's children; omitting :nth-child",
                );
            }
        }
    } else if analysis.needs_class_names {
        for class_name in &own_class_names {
            result.push('.');
            result.push_str(&serialize_identifier(class_name));
        }
    }

    #[cfg(feature = "path-trace")]
    selpath_common::warning::trace(
        "Selector",
        &format!(
            "step {result:?}: nth-child={} classes={} index={:?}",
            analysis.needs_nth_child, analysis.needs_class_names, analysis.own_index
        ),
    );

    Some(Step::new(result, false))
}
