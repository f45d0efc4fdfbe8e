// src/templates/layout.rs
use crate::translate::Translate;

/// Wraps a rendered fragment in the Davidgram page shell. The `title`
/// is a translation key like every other displayed literal.
pub fn render_page(title: &str, content: &str, t: &dyn Translate) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} - Davidgram</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
    <header class="header">
        <div class="container">
            <div class="logo">
                <a href="/">Davidgram</a>
            </div>
        </div>
    </header>

    <main class="main">
        <div class="container">
            {}
        </div>
    </main>

    <footer class="footer">
        <div class="container">
            <p>{}</p>
        </div>
    </footer>
</body>
</html>"#,
        t.t(title),
        content,
        t.t("Davidgram")
    )
}
