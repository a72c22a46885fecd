//! The ancestor walk that turns steps into a full selector.

use selpath_common::warning::warn_once;

use crate::navigator::SelectorNavigator;
use crate::step::{Step, select_step};

/// Separator between steps: the child combinator.
pub const STEP_SEPARATOR: &str = " > ";

/// Collects the steps from `target` up to the first terminal step, in
/// root-to-target order.
///
/// Returns no steps if `target` is not an element. The walk only climbs to
/// element parents; an element whose parent is some other kind of node
/// (a detached fragment) ends the walk without a terminal step.
#[must_use]
pub fn build_selector_steps<N: SelectorNavigator>(
    nav: &N,
    target: N::Node,
    optimize: bool,
) -> Vec<Step> {
    if !nav.is_element(target) {
        return Vec::new();
    }

    let mut steps = Vec::new();
    let mut current = Some(target);
    while let Some(node) = current {
        let Some(step) = select_step(nav, node, optimize, node == target) else {
            warn_once("Selector", "walk reached a non-element; selector is not rooted");
            break;
        };
        let is_terminal = step.is_terminal();
        steps.push(step);
        if is_terminal {
            break;
        }
        current = nav.parent(node).filter(|&parent| nav.is_element(parent));
    }

    steps.reverse();
    steps
}

/// Builds a selector that re-locates `target`, e.g.
/// `body > ul.menu > li:nth-child(3)`.
///
/// Returns the empty string if `target` is not an element. The result is a
/// best-effort unique selector: it is not minimal and is not re-checked
/// against the tree.
///
/// # Example
/// ```
/// use selpath_css::build_selector_path;
/// use selpath_dom::{DomTree, ElementData, NodeId};
///
/// let mut tree = DomTree::new();
/// let html = tree.append_element(NodeId::ROOT, ElementData::html("html")).unwrap();
/// let body = tree.append_element(html, ElementData::html("body")).unwrap();
/// let button = tree
///     .append_element(body, ElementData::html("button").with_attr("id", "save"))
///     .unwrap();
///
/// assert_eq!(build_selector_path(&tree, button, true), "#save");
/// assert_eq!(build_selector_path(&tree, button, false), "button#save");
/// ```
#[must_use]
pub fn build_selector_path<N: SelectorNavigator>(nav: &N, target: N::Node, optimize: bool) -> String {
    build_selector_steps(nav, target, optimize)
        .iter()
        .map(Step::text)
        .collect::<Vec<_>>()
        .join(STEP_SEPARATOR)
}
