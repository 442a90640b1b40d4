pub mod health;
pub mod response;
pub mod swagger;
pub mod users;
