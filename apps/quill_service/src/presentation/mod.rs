pub mod form;
pub mod pages;
pub mod presentation_controller;
