pub mod classifier;
pub mod html;
pub mod login;
