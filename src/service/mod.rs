pub mod accounts;
pub mod export;
pub mod password;
