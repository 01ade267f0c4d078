pub mod password;
pub mod similarity;
