//! MOTD Renderer Library
//!
//! Renders game server message-of-the-day text with legacy formatting codes
//! (`§c`, `&l`, ...) into inline-styled HTML, and interprets status API
//! payloads for a server status page.
//!
//! - `core`: Color and style tables, output fragments
//! - `parser`: Entity decoding and control-sequence scanning
//! - `render`: HTML output and the `format` entry point
//! - `status`: Status widget and player roster
//! - `app`: Configuration
//!
//! ```
//! let html = motd_render::format("§cHi");
//! assert_eq!(
//!     html,
//!     "<span style=\"color:#FF5555;\">H</span><span style=\"color:#FF5555;\">i</span>"
//! );
//! ```

pub mod app;
pub mod core;
pub mod parser;
pub mod render;
pub mod status;

pub use render::{format, format_opt, plain_text};
