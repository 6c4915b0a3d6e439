pub mod items;
pub mod pages;
pub mod vendors;
