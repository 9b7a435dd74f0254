pub mod schemas;
pub mod serve;
