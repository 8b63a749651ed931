pub mod app;
pub mod carousel;
