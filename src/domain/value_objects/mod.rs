pub mod birth_date;
pub mod ids;
pub mod timestamps;
