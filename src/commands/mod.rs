pub mod analyse;
pub mod serve;
