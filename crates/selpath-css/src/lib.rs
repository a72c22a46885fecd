//! CSS selector path synthesis.
//!
//! Given an element of a document tree, this crate builds a selector that
//! can later find the same element again, by walking from the element up
//! through its ancestors and emitting one compound selector per level:
//!
//! ```text
//! html > body > ul.menu > li:nth-child(3)
//! ```
//!
//! Each level uses the first of these that applies:
//! - an id ([CSSOM § 2.1](https://drafts.csswg.org/cssom/#serialize-an-identifier) escaped), which ends the walk
//! - the tag name alone, when it is unique among its siblings
//! - the tag name plus the element's classes, when no same-named sibling carries all of them
//! - the tag name plus [`:nth-child`](https://www.w3.org/TR/selectors-4/#the-nth-child-pseudo)
//!
//! In optimize mode the walk also stops at `html`, `head` or `body`, and ids
//! are emitted without their tag name.
//!
//! The tree is reached only through [`SelectorNavigator`]; an implementation
//! for [`selpath_dom::DomTree`] is provided.

pub mod classes;
pub mod escape;
pub mod name;
pub mod navigator;
pub mod path;
pub mod siblings;
pub mod step;

pub use escape::serialize_identifier;
pub use navigator::SelectorNavigator;
pub use path::{build_selector_path, build_selector_steps};
pub use step::Step;
