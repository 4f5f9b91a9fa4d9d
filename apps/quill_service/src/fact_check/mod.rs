pub mod fact_check_service;

pub use fact_check_service::{
    FactCheckError, FactCheckResult, FactLookup, GoogleSearchService, SearchConfig,
    NO_RELEVANT_INFORMATION,
};
