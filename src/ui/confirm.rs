use super::Page;
use log::{debug, info};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Let the element's default action run.
    Proceed,
    /// The user declined; the default action is cancelled.
    Prevented,
}

/// Confirmation bindings captured once, at page initialization.
///
/// Elements that appear after `install` are not bound and always proceed.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationGate {
    bindings: HashMap<String, String>,
}

impl ConfirmationGate {
    pub fn install<P: Page + ?Sized>(page: &P) -> Self {
        let bindings: HashMap<String, String> = page
            .action_elements()
            .into_iter()
            .filter_map(|el| el.confirm_text.map(|text| (el.id, text)))
            .collect();
        info!("Confirmation bound to {} elements", bindings.len());
        Self { bindings }
    }

    pub fn is_bound(&self, element_id: &str) -> bool {
        self.bindings.contains_key(element_id)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Handles a click on `element_id`, prompting first if it was bound.
    pub fn activate<P: Page + ?Sized>(&self, page: &mut P, element_id: &str) -> Activation {
        match self.bindings.get(element_id) {
            Some(text) if !page.confirm(text) => {
                debug!("Action on '{}' declined", element_id);
                Activation::Prevented
            }
            _ => Activation::Proceed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{ActionElement, StaticPage};

    fn page() -> StaticPage {
        StaticPage::default()
            .with_element(ActionElement::link("delete-comment-1").confirm("Удалить комментарий?"))
            .with_element(ActionElement::button("publish-7").confirm("Опубликовать статью?"))
            .with_element(ActionElement::link("view-7"))
    }

    #[test]
    fn test_binds_only_flagged_elements() {
        let gate = ConfirmationGate::install(&page());
        assert_eq!(gate.len(), 2);
        assert!(gate.is_bound("delete-comment-1"));
        assert!(gate.is_bound("publish-7"));
        assert!(!gate.is_bound("view-7"));
    }

    #[test]
    fn test_declined_prompt_prevents_action() {
        let mut page = page().accepting(false);
        let gate = ConfirmationGate::install(&page);

        assert_eq!(gate.activate(&mut page, "publish-7"), Activation::Prevented);
        assert_eq!(page.prompts, vec!["Опубликовать статью?".to_string()]);
    }

    #[test]
    fn test_accepted_prompt_proceeds() {
        let mut page = page().accepting(true);
        let gate = ConfirmationGate::install(&page);

        assert_eq!(gate.activate(&mut page, "delete-comment-1"), Activation::Proceed);
        assert_eq!(page.prompts.len(), 1);
    }

    #[test]
    fn test_unbound_and_late_elements_skip_prompt() {
        let mut page = page().accepting(false);
        let gate = ConfirmationGate::install(&page);
        page.elements
            .push(ActionElement::button("delete-2").confirm("Удалить?"));

        assert_eq!(gate.activate(&mut page, "view-7"), Activation::Proceed);
        assert_eq!(gate.activate(&mut page, "delete-2"), Activation::Proceed);
        assert!(page.prompts.is_empty());
    }
}
