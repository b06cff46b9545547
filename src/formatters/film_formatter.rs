use html_escape::encode_text;

use crate::model::film::Film;

/// The two fragment shapes the views append. Each formatter is a pure
/// function from one film to one piece of markup text; empty fields pass
/// through and render as empty text.
pub struct FilmFormatter {}

impl FilmFormatter {
    /// One table row: title and director, each in its own cell.
    pub fn table_row(film: &Film) -> String {
        format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            encode_text(&film.title),
            encode_text(&film.director)
        )
    }

    /// One list item wrapping the plain summary line.
    pub fn list_item(film: &Film) -> String {
        format!("<li>{}</li>", encode_text(&Self::list_line(film)))
    }

    /// The plain-text summary line, exactly `<title> - Directed by <director>`.
    pub fn list_line(film: &Film) -> String {
        format!("{} - Directed by {}", film.title, film.director)
    }
}
