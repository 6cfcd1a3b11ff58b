pub mod buffer;
pub mod command;
pub mod editor;
pub mod file_writer;
pub mod search;
pub mod status;
pub mod theme;

// Re-export commonly used types
pub use buffer::{Buffer, CaretPosition, Edit, Span};
pub use command::{CommandId, CommandTable, Menu, MenuItem, Outcome, PendingInput, Prompt, MENU_BAR};
pub use editor::EditorState;
pub use theme::{Palette, Rgb, ThemeManager, ThemeMode, WidgetId, WidgetStyle};
