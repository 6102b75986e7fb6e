pub mod context;
pub mod usecases;
