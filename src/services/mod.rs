pub mod data_stores;
pub mod database;
pub mod repository;
pub mod seed;
