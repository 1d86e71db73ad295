pub mod evaluate;
pub mod init;
pub mod interactive;
pub mod rules;
pub mod validate;
