use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{RenderError, Result};

pub struct HtmlWriter {}

impl HtmlWriter {
    pub fn save_page_to_html(page: &str, path: &Path) -> Result<()> {
        let write_failed = |source: std::io::Error| RenderError::WriteFailed {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::create(path).map_err(write_failed)?;
        file.write_all(page.as_bytes()).map_err(write_failed)?;
        file.flush().map_err(write_failed)?;

        Ok(())
    }
}
