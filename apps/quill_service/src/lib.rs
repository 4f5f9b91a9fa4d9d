pub mod app_module;
pub mod app_router;
pub mod config;
pub mod error;
pub mod fact_check;
pub mod generation;
pub mod health;
pub mod presentation;
pub mod prompts;

#[cfg(test)]
pub(crate) mod test_support;
