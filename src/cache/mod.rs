pub mod result_cache;
