pub mod flash;
pub mod validation;
