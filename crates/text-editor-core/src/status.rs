use crate::buffer::CaretPosition;

/// Status bar text before the first key release.
pub const INITIAL_STATUS: &str = "Ready";

pub fn format_status(position: CaretPosition) -> String {
    format!(
        "Ln: {}  Col: {}  |  {}",
        position.line, position.column, INITIAL_STATUS
    )
}
