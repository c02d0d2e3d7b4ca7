use axum::response::Html;

use super::SITEMAP_LINKS;

/// Landing page listing the browsable endpoints
///
/// GET /
pub async fn sitemap() -> Html<String> {
    let links: String = SITEMAP_LINKS
        .iter()
        .map(|path| format!("<li><a href=\"{path}\">{path}</a></li>"))
        .collect();

    Html(format!(
        "<div style=\"text-align: center;\"><h1>Favorites API</h1>\
         <p>Endpoints:</p><ul style=\"text-align: left;\">{links}</ul></div>"
    ))
}
