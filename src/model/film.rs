#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    pub title: String,
    pub year: u32,
    pub director: String,
    pub actors: Vec<String>,
}

impl Film {
    // Fields are taken as-is: an empty title or director is not rejected
    // here, it simply renders as empty text in the fragments.
    pub fn new(title: &str, year: u32, director: &str, actors: &[&str]) -> Film {
        Film {
            title: title.to_string(),
            year,
            director: director.to_string(),
            actors: actors.iter().map(|actor| actor.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_maps_all_fields() {
        let film = Film::new(
            "Inception",
            2010,
            "Christopher Nolan",
            &["Leonardo DiCaprio", "Joseph Gordon-Levitt"],
        );

        assert_eq!(film.title, "Inception");
        assert_eq!(film.year, 2010);
        assert_eq!(film.director, "Christopher Nolan");
        assert_eq!(
            film.actors,
            vec!["Leonardo DiCaprio", "Joseph Gordon-Levitt"]
        );
    }

    #[test]
    fn actor_list_may_be_empty() {
        let film = Film::new("Koyaanisqatsi", 1982, "Godfrey Reggio", &[]);
        assert!(film.actors.is_empty());
    }
}
