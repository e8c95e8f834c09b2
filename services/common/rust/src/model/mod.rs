pub mod address;
pub mod outline;
pub mod sock;
