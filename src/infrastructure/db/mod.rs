pub mod dto;
pub mod memory;
pub mod repositories;
pub mod stores;
