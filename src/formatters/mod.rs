pub mod film_formatter;
