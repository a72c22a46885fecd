//! Disambiguation of an element among same-named siblings.

use std::collections::HashSet;

use crate::classes::element_class_names;
use crate::name::name_in_correct_case;
use crate::navigator::SelectorNavigator;

/// What a step needs, beyond its tag name, to single out its element among
/// the element children of its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SiblingAnalysis {
    /// Some same-named sibling carries every class of the element (or the
    /// element has none), so only `:nth-child` tells them apart. Once set it
    /// is never cleared and wins over the class filter.
    pub needs_nth_child: bool,
    /// At least one sibling shares the element's tag name.
    pub needs_class_names: bool,
    /// Zero-based index of the element among the element siblings, `None`
    /// if the element was not found in the list.
    pub own_index: Option<usize>,
}

/// Scans `siblings` (the parent's children, in tree order) for elements that
/// a bare `node_name` type selector would also match.
///
/// For every conflicting sibling the element's classes are checked afresh:
/// positional disambiguation is needed only when a single sibling carries all
/// of them. The scan stops as soon as that is known and the element's own
/// index has been found.
#[must_use]
pub fn analyze_siblings<N, I>(
    nav: &N,
    node: N::Node,
    siblings: I,
    node_name: &str,
    own_class_names: &[&str],
) -> SiblingAnalysis
where
    N: SelectorNavigator,
    I: IntoIterator<Item = N::Node>,
{
    let mut analysis = SiblingAnalysis::default();

    let element_siblings = siblings
        .into_iter()
        .filter(|&sibling| nav.is_element(sibling));
    for (element_index, sibling) in element_siblings.enumerate() {
        if analysis.own_index.is_some() && analysis.needs_nth_child {
            break;
        }
        if sibling == node {
            analysis.own_index = Some(element_index);
            continue;
        }
        if analysis.needs_nth_child || name_in_correct_case(nav, sibling) != node_name {
            continue;
        }

        analysis.needs_class_names = true;
        if own_class_names.is_empty() {
            analysis.needs_nth_child = true;
            continue;
        }

        let mut own_classes: HashSet<&str> = own_class_names.iter().copied().collect();
        for sibling_class in element_class_names(nav, sibling) {
            if own_classes.remove(sibling_class) && own_classes.is_empty() {
                analysis.needs_nth_child = true;
                break;
            }
        }
    }

    analysis
}
