pub mod list_view;
pub mod table_view;
