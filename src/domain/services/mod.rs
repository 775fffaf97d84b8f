// Business logic services
// Framework-agnostic, 100% testable

pub mod prompt;
pub use prompt::{build_prompt, build_prompt_with_query, FALLBACK_PROMPT};
