pub mod advice;
pub mod algorithms;

pub use advice::{
    recommend_search, recommend_sort, AdviceConfig, SearchAdvice, SearchWorkload, SortWorkload,
};
pub use algorithms::{CatalogError, SearchAlgorithm, SortAlgorithm};
