pub mod config;
pub mod print;
pub mod run;
pub mod theme;
