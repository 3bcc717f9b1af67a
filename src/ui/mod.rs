pub mod alert;
pub mod logos;
pub mod scatter;
pub mod timeline;
