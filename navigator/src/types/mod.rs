pub mod catalog;

pub mod config;

pub mod geo;

pub mod nav_error;

pub mod session;
