pub mod hts;
pub mod table;
pub mod variants;
