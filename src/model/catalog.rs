use std::collections::BTreeMap;

use crate::model::film::Film;

/// The film store: an ordered collection fixed at construction, plus the
/// actor-salary table. Both are read-only for the catalog's lifetime.
/// The salary table is consumed by no view; it ships with the catalog as
/// illustrative data only.
pub struct Catalog {
    films: Vec<Film>,
    salaries: BTreeMap<String, u64>,
}

impl Catalog {
    pub fn new(films: Vec<Film>, salaries: BTreeMap<String, u64>) -> Catalog {
        Catalog { films, salaries }
    }

    pub fn films(&self) -> &[Film] {
        &self.films
    }

    pub fn salaries(&self) -> &BTreeMap<String, u64> {
        &self.salaries
    }

    /// The fixed teaching catalog the binary renders.
    pub fn sample() -> Catalog {
        let films = vec![
            Film::new(
                "Inception",
                2010,
                "Christopher Nolan",
                &["Leonardo DiCaprio", "Joseph Gordon-Levitt", "Elliot Page"],
            ),
            Film::new(
                "The Dark Knight",
                2008,
                "Christopher Nolan",
                &["Christian Bale", "Heath Ledger"],
            ),
            Film::new(
                "Pulp Fiction",
                1994,
                "Quentin Tarantino",
                &["John Travolta", "Samuel L. Jackson", "Uma Thurman"],
            ),
            Film::new("Alien", 1979, "Ridley Scott", &["Sigourney Weaver"]),
            Film::new("Spirited Away", 2001, "Hayao Miyazaki", &["Rumi Hiiragi"]),
            Film::new("Koyaanisqatsi", 1982, "Godfrey Reggio", &[]),
        ];

        let mut salaries = BTreeMap::new();
        salaries.insert("Leonardo DiCaprio".to_string(), 20_000_000);
        salaries.insert("Christian Bale".to_string(), 9_000_000);
        salaries.insert("Heath Ledger".to_string(), 6_000_000);
        salaries.insert("Samuel L. Jackson".to_string(), 10_000_000);
        salaries.insert("Sigourney Weaver".to_string(), 35_000);

        Catalog::new(films, salaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn films_returns_the_same_collection_every_call() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.films(), catalog.films());
    }

    #[test]
    fn sample_catalog_keeps_declaration_order() {
        let catalog = Catalog::sample();

        let titles: Vec<&str> = catalog
            .films()
            .iter()
            .map(|film| film.title.as_str())
            .collect();
        assert_eq!(
            titles,
            [
                "Inception",
                "The Dark Knight",
                "Pulp Fiction",
                "Alien",
                "Spirited Away",
                "Koyaanisqatsi"
            ]
        );
    }

    #[test]
    fn sample_catalog_includes_a_film_without_actors() {
        let catalog = Catalog::sample();
        assert!(catalog.films().iter().any(|film| film.actors.is_empty()));
    }

    #[test]
    fn salaries_are_keyed_by_actor_name() {
        let catalog = Catalog::sample();

        assert_eq!(
            catalog.salaries().get("Leonardo DiCaprio"),
            Some(&20_000_000)
        );
        assert_eq!(catalog.salaries().get("Nobody"), None);
    }

    #[test]
    fn duplicate_titles_are_permitted() {
        let films = vec![
            Film::new("Solaris", 1972, "Andrei Tarkovsky", &[]),
            Film::new("Solaris", 2002, "Steven Soderbergh", &[]),
        ];
        let catalog = Catalog::new(films, BTreeMap::new());

        assert_eq!(catalog.films().len(), 2);
    }
}
