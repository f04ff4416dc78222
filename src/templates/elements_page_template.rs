use askama::Template;

#[derive(Template)]
#[template(path = "elements.html")]
pub struct ElementsPageTemplate<'a> {
    pub title: String,
    pub heading: String,
    /// Output of `render_page`, already escaped.
    pub list: &'a str,
}
