pub mod assembler;
pub mod generation_controller;
pub mod generation_model;
pub mod generation_service;
pub mod segmenter;
