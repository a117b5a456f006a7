use askama::Template;
use askama_web::WebTemplate;

use crate::catalog::CatalogEntry;

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub station_name: String,
    pub satellites: Vec<CatalogEntry>,
}
