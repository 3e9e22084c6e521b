pub mod email;
pub mod release;
