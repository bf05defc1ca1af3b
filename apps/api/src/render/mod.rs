// Document rendering: fixed-width line wrapping and single-page PDF emission.

pub mod pdf;
pub mod wrap;

// Re-export the public API consumed by the route handlers.
pub use pdf::render_letter;
