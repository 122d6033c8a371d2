pub mod clipboard;
pub mod colors;
pub mod logo_fetch;
