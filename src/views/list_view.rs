use crate::document::Document;
use crate::error::Result;
use crate::formatters::film_formatter::FilmFormatter;
use crate::model::film::Film;
use crate::render::render;

/// The list view: one `<li>` summary line per film.
pub struct ListView {}

impl ListView {
    pub const MOUNT_ID: &'static str = "films-list";

    pub fn page(films: &[Film]) -> Result<String> {
        let mut document = Document::with_mount(Self::MOUNT_ID);
        render(films, &mut document, Self::MOUNT_ID, FilmFormatter::list_item)?;
        let items = document.inner_html(Self::MOUNT_ID)?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Films - List View</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
</head>
<body>
<div class="container">
<h1>Films</h1>
<ul id="films-list">
{items}
</ul>
</div>
</body>
</html>
"#,
            items = items
        ))
    }
}
