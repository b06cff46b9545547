use crate::document::Document;
use crate::error::Result;
use crate::formatters::film_formatter::FilmFormatter;
use crate::model::film::Film;
use crate::render::render;

/// The table view: one row per film under a Title/Director header.
pub struct TableView {}

impl TableView {
    pub const MOUNT_ID: &'static str = "films-table-body";

    /// Renders the films into a fresh document and splices the rows into
    /// the page shell at the mount element.
    pub fn page(films: &[Film]) -> Result<String> {
        let mut document = Document::with_mount(Self::MOUNT_ID);
        render(films, &mut document, Self::MOUNT_ID, FilmFormatter::table_row)?;
        let rows = document.inner_html(Self::MOUNT_ID)?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Films - Table View</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
</head>
<body>
<div class="container">
<h1>Films</h1>
<table class="table table-striped">
<thead>
<tr><th>Title</th><th>Director</th></tr>
</thead>
<tbody id="films-table-body">
{rows}
</tbody>
</table>
</div>
</body>
</html>
"#,
            rows = rows
        ))
    }
}
