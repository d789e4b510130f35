pub mod processing;
pub mod util;
