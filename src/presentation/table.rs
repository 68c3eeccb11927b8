/// A `<td>`. Content is inserted as markup, so it may hold a rendered badge;
/// escape plain text with [`super::escape_html`] first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCell {
    pub content: String,
    pub class: Option<String>,
}

impl TableCell {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            class: None,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.class = if class.is_empty() { None } else { Some(class) };
        self
    }

    pub fn to_html(&self) -> String {
        match &self.class {
            Some(class) => format!("<td class=\"{}\">{}</td>", class, self.content),
            None => format!("<td>{}</td>", self.content),
        }
    }
}

impl From<&str> for TableCell {
    fn from(content: &str) -> Self {
        TableCell::new(content)
    }
}

impl From<String> for TableCell {
    fn from(content: String) -> Self {
        TableCell::new(content)
    }
}

pub fn table_row<I, C>(cells: I) -> String
where
    I: IntoIterator<Item = C>,
    C: Into<TableCell>,
{
    let inner: String = cells.into_iter().map(|c| c.into().to_html()).collect();
    format!("<tr>{}</tr>", inner)
}
