pub mod proxy;
pub mod users;
