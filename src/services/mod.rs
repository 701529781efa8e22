pub mod neighborhood;
pub mod pixabay;
pub mod resolver;
pub mod unsplash;
pub mod weather;
