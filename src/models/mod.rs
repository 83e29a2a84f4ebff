pub mod account;
pub mod post;
pub mod subscriber;
