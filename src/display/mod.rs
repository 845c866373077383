pub mod table;

pub use table::{TableDisplay, WordsRow, render_json, render_plain};
