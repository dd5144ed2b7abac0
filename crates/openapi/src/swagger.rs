//! Swagger UI HTML generation

const SWAGGER_UI_DIST: &str = "https://unpkg.com/swagger-ui-dist@5";

/// Generate a Swagger UI page that renders the document at `openapi_url`
pub fn swagger_ui_html(title: &str, openapi_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="{dist}/swagger-ui.css">
    <style>
        body {{
            margin: 0;
            padding: 0;
        }}
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="{dist}/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {{
            SwaggerUIBundle({{
                url: "{url}",
                dom_id: '#swagger-ui',
                deepLinking: true,
                persistAuthorization: true
            }});
        }};
    </script>
</body>
</html>
"#,
        title = escape_html(title),
        dist = SWAGGER_UI_DIST,
        url = escape_html(openapi_url),
    )
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
