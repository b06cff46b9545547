use crate::document::{Document, Mount};
use crate::error::Result;
use crate::model::film::Film;

/// Anything that accepts rendered fragments in order. Keeping the sink
/// behind a trait means the formatters never learn what they render into:
/// an HTML mount, a plain collector, or whatever a caller brings.
pub trait FragmentSink {
    fn append_fragment(&mut self, fragment: String) -> Result<()>;
}

impl FragmentSink for Mount {
    fn append_fragment(&mut self, fragment: String) -> Result<()> {
        self.append(fragment);
        Ok(())
    }
}

impl FragmentSink for Vec<String> {
    fn append_fragment(&mut self, fragment: String) -> Result<()> {
        self.push(fragment);
        Ok(())
    }
}

/// Core render loop: one fragment per film, in collection order, fail-fast.
/// Fragments appended before a failure stand; there is no rollback.
pub fn render_into<S, F>(films: &[Film], sink: &mut S, formatter: F) -> Result<()>
where
    S: FragmentSink,
    F: Fn(&Film) -> String,
{
    for film in films.iter() {
        log::debug!("Rendering fragment for film '{}'", film.title);
        sink.append_fragment(formatter(film))?;
    }

    Ok(())
}

/// Renders into the named mount of a document. The mount must already
/// exist; an unknown id fails with MissingMount before anything is appended.
pub fn render<F>(
    films: &[Film],
    document: &mut Document,
    mount_id: &str,
    formatter: F,
) -> Result<()>
where
    F: Fn(&Film) -> String,
{
    let mount = document.mount_mut(mount_id)?;
    render_into(films, mount, formatter)
}
