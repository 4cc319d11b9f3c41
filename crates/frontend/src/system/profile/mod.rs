pub mod controller;
pub mod page;

pub use page::ProfilePage;
