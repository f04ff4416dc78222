use askama::Template;

pub struct DetailField {
    pub label: String,
    pub lines: Vec<String>,
}

#[derive(Template)]
#[template(path = "element_detail.html")]
pub struct ElementDetailTemplate {
    pub title: String,
    pub back_href: String,
    pub back_label: String,
    pub fields: Vec<DetailField>,
}
