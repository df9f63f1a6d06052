pub mod auth;
pub mod catalog;
pub mod movies;
pub mod persistence;
pub mod theme;
