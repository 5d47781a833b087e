pub mod fetcher;
pub mod maps;
pub mod match_data;
pub mod record;
pub mod summary;
