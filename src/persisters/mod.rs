pub mod html_writer;
