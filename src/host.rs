//! Host page boundary
//!
//! The animator never touches a document directly. It talks to a [`Page`]
//! that can locate the heading and to a [`HeadingElement`] that applies
//! content, custom properties and class changes. The browser binding
//! implements these over the DOM; [`MemoryPage`] implements them in memory for
//! tests and for the CLI trace.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::{Rc, Weak};

use crate::error::{Error, Result};
use crate::split::{to_markup, Segment};

/// Selector used to locate the heading
pub const HEADING_SELECTOR: &str = "h1";

/// Class that the stylesheet maps to the running animation
pub const ANIMATE_CLASS: &str = "animate";

/// Custom property holding the active animation identifier
pub const ANIMATION_PROPERTY: &str = "--animation";

/// A heading element the animator can drive
pub trait HeadingElement {
    /// Current text content, with any child markup flattened
    fn text(&self) -> Result<String>;

    /// Replace the element's children with the given segments
    fn replace_content(&mut self, segments: &[Segment]) -> Result<()>;

    /// Set an inline custom property
    fn set_property(&mut self, name: &str, value: &str) -> Result<()>;

    /// Add or remove a class
    fn set_class(&mut self, class: &str, enabled: bool) -> Result<()>;

    /// Restart the animation bound to `class` so it plays again from the start
    fn restart(&mut self, class: &str) -> Result<()>;
}

/// A document that can hand out its heading
pub trait Page {
    type Heading: HeadingElement;

    /// First element matching `selector`, if any
    fn query(&self, selector: &str) -> Result<Option<Self::Heading>>;
}

/// In-memory element state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryNode {
    pub tag: String,
    pub text: String,
    pub markup: String,
    pub segments: Vec<Segment>,
    pub properties: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    /// Number of completed animation restarts
    pub restarts: u64,
}

impl MemoryNode {
    fn new(tag: &str, text: &str) -> Self {
        Self {
            tag: tag.to_string(),
            text: text.to_string(),
            markup: crate::split::escape_html(text),
            ..Default::default()
        }
    }

    /// Value of a custom property
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Whether the class list contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// A flat in-memory document of tagged text elements
#[derive(Debug, Default)]
pub struct MemoryPage {
    elements: Vec<Rc<RefCell<MemoryNode>>>,
}

impl MemoryPage {
    /// Create an empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page holding a single `h1` with `text`
    pub fn with_heading(text: &str) -> Self {
        let mut page = Self::new();
        page.push(HEADING_SELECTOR, text);
        page
    }

    /// Append an element with the given tag and text
    pub fn push(&mut self, tag: &str, text: &str) {
        self.elements.push(Rc::new(RefCell::new(MemoryNode::new(tag, text))));
    }

    /// Snapshot of the first element with `tag`
    pub fn element(&self, tag: &str) -> Option<MemoryNode> {
        self.find(tag).map(|node| node.borrow().clone())
    }

    /// Remove every element with `tag`, detaching any handles to them
    pub fn remove(&mut self, tag: &str) {
        self.elements.retain(|node| node.borrow().tag != tag);
    }

    fn find(&self, tag: &str) -> Option<&Rc<RefCell<MemoryNode>>> {
        self.elements.iter().find(|node| node.borrow().tag == tag)
    }
}

impl Page for MemoryPage {
    type Heading = MemoryHeading;

    fn query(&self, selector: &str) -> Result<Option<MemoryHeading>> {
        Ok(self.find(selector).map(|node| MemoryHeading { node: Rc::downgrade(node) }))
    }
}

/// Handle to an element of a [`MemoryPage`].
///
/// Operations fail with [`Error::Detached`] once the page drops the element.
#[derive(Debug, Clone)]
pub struct MemoryHeading {
    node: Weak<RefCell<MemoryNode>>,
}

impl MemoryHeading {
    /// Snapshot of the element, if still attached
    pub fn snapshot(&self) -> Option<MemoryNode> {
        self.node.upgrade().map(|node| node.borrow().clone())
    }

    fn with_node<T>(&self, f: impl FnOnce(&mut MemoryNode) -> T) -> Result<T> {
        let rc = self.node.upgrade().ok_or(Error::Detached)?;
        let mut node = rc.borrow_mut();
        Ok(f(&mut node))
    }
}

impl HeadingElement for MemoryHeading {
    fn text(&self) -> Result<String> {
        self.with_node(|node| node.text.clone())
    }

    fn replace_content(&mut self, segments: &[Segment]) -> Result<()> {
        self.with_node(|node| {
            node.text = segments.iter().map(Segment::ch).collect();
            node.markup = to_markup(segments);
            node.segments = segments.to_vec();
        })
    }

    fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        self.with_node(|node| {
            node.properties.insert(name.to_string(), value.to_string());
        })
    }

    fn set_class(&mut self, class: &str, enabled: bool) -> Result<()> {
        self.with_node(|node| {
            if enabled {
                node.classes.insert(class.to_string());
            } else {
                node.classes.remove(class);
            }
        })
    }

    fn restart(&mut self, class: &str) -> Result<()> {
        self.with_node(|node| {
            node.classes.remove(class);
            node.classes.insert(class.to_string());
            node.restarts += 1;
        })
    }
}
