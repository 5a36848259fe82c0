pub mod archive;
pub mod home;
pub mod question;
