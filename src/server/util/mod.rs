pub mod extract;
pub mod name;
pub mod password;
