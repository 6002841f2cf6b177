pub mod components;
pub mod layout;
pub mod recent;
pub mod theme;
