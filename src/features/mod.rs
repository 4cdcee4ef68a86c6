pub mod dados;
pub mod health;
