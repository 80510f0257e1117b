pub mod app_state;
pub mod controller;
pub mod notice;
pub mod number_store;
pub mod theme;
pub mod view_model;
