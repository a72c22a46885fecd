//! Tag names in the casing a selector needs.

use std::borrow::Cow;

use crate::navigator::SelectorNavigator;

/// Returns the node's tag name as it should appear in a type selector.
///
/// Prefixed names and nodes without a local name are case-sensitive, so the
/// qualified name is kept verbatim. Otherwise the local name is used, which
/// already carries the casing of the node's namespace (lower case for HTML,
/// camel case for SVG elements such as `foreignObject`).
#[must_use]
pub fn name_in_correct_case<N: SelectorNavigator>(nav: &N, node: N::Node) -> Cow<'_, str> {
    let qualified = nav.qualified_name(node);
    match nav.local_name(node) {
        Some(local) if local.len() == qualified.len() => Cow::Borrowed(local),
        _ => qualified,
    }
}
