pub mod blocks;
pub mod builtins;
pub mod comments;
pub mod config;
pub mod digest;
pub mod errors;
pub mod literals;
pub mod logger;
pub mod obfuscator;
pub mod rename;
pub mod symbols;
pub mod variables;
