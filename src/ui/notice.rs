use super::Page;
use log::debug;

pub const DEFAULT_ERROR_ELEMENT: &str = "errorMessage";

const WARNING_ICON: &str = "<i class=\"fas fa-exclamation-triangle me-2\"></i>";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    pub visible: bool,
    pub html: String,
}

/// Shows `message` in the notice element, or alerts when the page has none.
/// The message is inserted as markup.
pub fn show_error<P: Page + ?Sized>(page: &mut P, message: &str, element_id: &str) {
    match page.notice_mut(element_id) {
        Some(notice) => {
            notice.visible = true;
            notice.html = format!("{}{}", WARNING_ICON, message);
        }
        None => {
            debug!("No element '{}' on page, falling back to alert", element_id);
            page.alert(message);
        }
    }
}

pub fn hide_error<P: Page + ?Sized>(page: &mut P, element_id: &str) {
    if let Some(notice) = page.notice_mut(element_id) {
        notice.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::StaticPage;

    #[test]
    fn test_show_error_fills_notice() {
        let mut page = StaticPage::default().with_notice(DEFAULT_ERROR_ELEMENT);
        show_error(&mut page, "Не удалось загрузить авторов", DEFAULT_ERROR_ELEMENT);

        let notice = &page.notices[DEFAULT_ERROR_ELEMENT];
        assert!(notice.visible);
        assert!(notice.html.starts_with(WARNING_ICON));
        assert!(notice.html.ends_with("Не удалось загрузить авторов"));
        assert!(page.alerts.is_empty());
    }

    #[test]
    fn test_show_error_without_element_alerts() {
        let mut page = StaticPage::default();
        show_error(&mut page, "boom", DEFAULT_ERROR_ELEMENT);
        assert_eq!(page.alerts, vec!["boom".to_string()]);
    }

    #[test]
    fn test_hide_error_keeps_markup() {
        let mut page = StaticPage::default().with_notice("formError");
        show_error(&mut page, "bad", "formError");
        hide_error(&mut page, "formError");
        hide_error(&mut page, "missing");

        let notice = &page.notices["formError"];
        assert!(!notice.visible);
        assert!(notice.html.ends_with("bad"));
    }
}
