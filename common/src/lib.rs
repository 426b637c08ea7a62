pub mod config;
pub mod font;
pub mod plot;
pub mod series;
