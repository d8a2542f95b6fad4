use super::ENDPOINTS;
use axum::response::Html;

/// HTML index of every endpoint
pub async fn sitemap() -> Html<String> {
    Html(render_sitemap())
}

pub(crate) fn render_sitemap() -> String {
    let items: String = ENDPOINTS
        .iter()
        .map(|endpoint| {
            // Only parameter-free GET routes can be followed as links
            if endpoint.methods.contains("GET") && !endpoint.path.contains('{') {
                format!(
                    "<li><code>{}</code> <a href=\"{path}\">{path}</a></li>",
                    endpoint.methods,
                    path = endpoint.path
                )
            } else {
                format!(
                    "<li><code>{}</code> {}</li>",
                    endpoint.methods, endpoint.path
                )
            }
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>holocron</title></head>\n<body>\n\
         <h1>holocron API</h1>\n<p>Available endpoints:</p>\n<ul>{items}</ul>\n</body>\n</html>\n"
    )
}
