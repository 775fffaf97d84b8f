pub mod errors;
pub mod logging;
pub mod services;

// Available in fullstack mode (both client and server)
pub mod hooks;
