pub mod data;
pub mod home;
pub mod test_db;

pub use data::show_data;
pub use home::home;
pub use test_db::test_db;
