pub use generate::*;
pub use init::*;

pub mod generate;
pub mod init;
