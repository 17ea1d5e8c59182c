pub mod api;
pub mod catalog;
pub mod models;
pub mod pricing;
pub mod query;
pub mod quote;
pub mod sections;
pub mod selection;
pub mod state;
