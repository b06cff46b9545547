use std::path::Path;

mod document;
mod error;
mod formatters;
mod model;
mod persisters;
mod render;
mod views;

pub use document::{Document, Mount};
pub use error::{RenderError, Result};
pub use formatters::film_formatter::FilmFormatter;
pub use model::catalog::Catalog;
pub use model::film::Film;
pub use render::{render, render_into, FragmentSink};
pub use views::list_view::ListView;
pub use views::table_view::TableView;

use persisters::html_writer::HtmlWriter;

/// Renders the catalog into both views and saves them under `output_dir`.
/// The views are independent: a failure in one is logged and the other is
/// still written.
pub fn run(catalog: &Catalog, output_dir: &Path) {
    render_and_save_table_view(catalog, output_dir);
    render_and_save_list_view(catalog, output_dir);

    log::info!(
        "films2html has finished rendering the catalog! \
         Open table.html or list.html in a browser to see the views."
    );
}

fn render_and_save_table_view(catalog: &Catalog, output_dir: &Path) {
    let path = output_dir.join("table.html");

    let saved = TableView::page(catalog.films())
        .and_then(|page| HtmlWriter::save_page_to_html(&page, &path));
    match saved {
        Err(e) => log::error!("Error when saving table view: {:?}", e),
        _ => log::info!("Successfully generated table view file: {}", path.display()),
    }
}

fn render_and_save_list_view(catalog: &Catalog, output_dir: &Path) {
    let path = output_dir.join("list.html");

    let saved = ListView::page(catalog.films())
        .and_then(|page| HtmlWriter::save_page_to_html(&page, &path));
    match saved {
        Err(e) => log::error!("Error when saving list view: {:?}", e),
        _ => log::info!("Successfully generated list view file: {}", path.display()),
    }
}
