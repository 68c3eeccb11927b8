//! The page surface the helpers drive: error notices and confirmation
//! prompts, behind a trait so any front end (or a test) can supply it.

pub mod confirm;
pub mod notice;

pub use confirm::{Activation, ConfirmationGate};
pub use notice::{hide_error, show_error, Notice, DEFAULT_ERROR_ELEMENT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Link,
    Button,
}

/// An interactive element as seen at page initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionElement {
    pub id: String,
    pub kind: ElementKind,
    /// Text of the element's confirmation attribute, if it has one.
    pub confirm_text: Option<String>,
}

impl ActionElement {
    pub fn link(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ElementKind::Link,
            confirm_text: None,
        }
    }

    pub fn button(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ElementKind::Button,
            confirm_text: None,
        }
    }

    pub fn confirm(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }
}

pub trait Page {
    /// The error-notice element with this id, if the page has one.
    fn notice_mut(&mut self, element_id: &str) -> Option<&mut Notice>;

    /// Blocking message box; used when no notice element exists.
    fn alert(&mut self, message: &str);

    /// Yes/no prompt. `true` means the user accepted.
    fn confirm(&mut self, message: &str) -> bool;

    /// Links and buttons currently on the page.
    fn action_elements(&self) -> Vec<ActionElement>;
}

/// In-memory page: records alerts and prompts and answers prompts from a
/// fixed policy. Useful for headless callers and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticPage {
    pub notices: std::collections::HashMap<String, Notice>,
    pub elements: Vec<ActionElement>,
    pub alerts: Vec<String>,
    pub prompts: Vec<String>,
    pub accept_prompts: bool,
}

impl StaticPage {
    pub fn with_notice(mut self, element_id: &str) -> Self {
        self.notices.insert(element_id.to_string(), Notice::default());
        self
    }

    pub fn with_element(mut self, element: ActionElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn accepting(mut self, accept: bool) -> Self {
        self.accept_prompts = accept;
        self
    }
}

impl Page for StaticPage {
    fn notice_mut(&mut self, element_id: &str) -> Option<&mut Notice> {
        self.notices.get_mut(element_id)
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.accept_prompts
    }

    fn action_elements(&self) -> Vec<ActionElement> {
        self.elements.clone()
    }
}
