pub mod image;
pub mod pixabay;
pub mod unsplash;
