#![allow(dead_code)]

pub mod fake_catalog;
pub mod factories;
pub mod fake_server;
pub mod helpers;
