pub mod images;
pub mod neighborhoods;
pub mod system;
pub mod weather;
