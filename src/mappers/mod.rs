pub mod photo;
pub mod slug;
