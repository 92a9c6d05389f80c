pub mod password;
pub mod session_guard;
pub mod token_hasher;
