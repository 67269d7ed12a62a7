mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    find_by(root, &|el| el.id == id)
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    find_by_mut(root, &|el| el.id == id)
}

/// Find the first element matching the predicate, in document order.
pub fn find_by<'a>(root: &'a Element, pred: &dyn Fn(&Element) -> bool) -> Option<&'a Element> {
    if pred(root) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_by(child, pred) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the first element matching the predicate, in document order, mutably.
pub fn find_by_mut<'a>(
    root: &'a mut Element,
    pred: &dyn Fn(&Element) -> bool,
) -> Option<&'a mut Element> {
    if pred(root) {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_by_mut(child, pred) {
                return Some(found);
            }
        }
    }

    None
}
