//! Locate-or-create primitives for the custom instructions component.
//!
//! The workspace document holds many unrelated components; everything here
//! operates on the one named [`COMPONENT_NAME`] and leaves every sibling node
//! untouched. Traversal is built from two small combinators (`find_child`,
//! `ensure_child`) instead of hardcoded nested loops.

use xmltree::{Element, XMLNode};

/// Name of the component that stores custom instructions.
pub const COMPONENT_NAME: &str = "AIAssistantCustomInstructionsStorage";

const INSTRUCTIONS_OPTION: &str = "instructions";
const STORED_INSTRUCTION: &str = "AIAssistantStoredInstruction";

/// A single custom instruction: stable id plus markdown content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub id: String,
    pub content: String,
}

fn node_matches(node: &XMLNode, tag: &str, attr: Option<(&str, &str)>) -> bool {
    node.as_element().is_some_and(|el| {
        el.name == tag
            && attr.is_none_or(|(key, value)| {
                el.attributes.get(key).map(String::as_str) == Some(value)
            })
    })
}

/// First child element matching `tag` (and attribute, when given).
fn find_child<'a>(
    parent: &'a Element,
    tag: &str,
    attr: Option<(&str, &str)>,
) -> Option<&'a Element> {
    parent
        .children
        .iter()
        .find(|node| node_matches(node, tag, attr))
        .and_then(XMLNode::as_element)
}

/// Find-or-create: first matching child element, appending a fresh one (with
/// the attribute set) when none exists.
fn ensure_child<'a>(
    parent: &'a mut Element,
    tag: &str,
    attr: Option<(&str, &str)>,
) -> &'a mut Element {
    // Position-then-index so the search borrow ends before we mutate.
    let idx = match parent
        .children
        .iter()
        .position(|node| node_matches(node, tag, attr))
    {
        Some(idx) => idx,
        None => {
            let mut el = Element::new(tag);
            if let Some((key, value)) = attr {
                el.attributes.insert(key.to_string(), value.to_string());
            }
            parent.children.push(XMLNode::Element(el));
            parent.children.len() - 1
        }
    };

    match &mut parent.children[idx] {
        XMLNode::Element(el) => el,
        _ => unreachable!("index points at an element node"),
    }
}

/// Scan the document's top-level components for the instructions component.
/// No side effects.
pub fn find_component(root: &Element) -> Option<&Element> {
    find_child(root, "component", Some(("name", COMPONENT_NAME)))
}

/// Return the instructions component, appending an empty one (with its
/// `option`/`map` scaffold) to the document root when absent. Mutates the
/// in-memory document only.
pub fn ensure_component(root: &mut Element) -> &mut Element {
    let component = ensure_child(root, "component", Some(("name", COMPONENT_NAME)));
    let option = ensure_child(component, "option", Some(("name", INSTRUCTIONS_OPTION)));
    ensure_child(option, "map", None);
    component
}

/// All instruction entries in document order.
///
/// Entries missing any expected intermediate node (no `value`, no stored
/// instruction record, no content option) are silently skipped as malformed.
pub fn list_entries(component: &Element) -> Vec<Instruction> {
    let Some(map) = find_child(component, "option", Some(("name", INSTRUCTIONS_OPTION)))
        .and_then(|option| find_child(option, "map", None))
    else {
        return Vec::new();
    };

    map.children
        .iter()
        .filter_map(XMLNode::as_element)
        .filter(|el| el.name == "entry")
        .filter_map(|entry| {
            let id = entry.attributes.get("key")?.clone();
            let record = find_child(entry, "value", None)
                .and_then(|value| find_child(value, STORED_INSTRUCTION, None))?;
            let content = find_child(record, "option", Some(("name", "content")))?
                .attributes
                .get("value")?
                .clone();
            Some(Instruction { id, content })
        })
        .collect()
}

/// Create or update the entry for `id`, leaving every other entry and every
/// unrelated sibling node untouched.
///
/// The whole nested structure (entry, value, stored-instruction record,
/// `actionId` and `content` options) is created where missing, and the
/// `actionId` option is rewritten to match the entry key even on updates.
pub fn upsert_entry(component: &mut Element, id: &str, content: &str) {
    let option = ensure_child(component, "option", Some(("name", INSTRUCTIONS_OPTION)));
    let map = ensure_child(option, "map", None);
    let entry = ensure_child(map, "entry", Some(("key", id)));
    let value = ensure_child(entry, "value", None);
    let record = ensure_child(value, STORED_INSTRUCTION, None);

    let action = ensure_child(record, "option", Some(("name", "actionId")));
    action.attributes.insert("value".to_string(), id.to_string());

    let content_option = ensure_child(record, "option", Some(("name", "content")));
    content_option
        .attributes
        .insert("value".to_string(), content.to_string());
}
