use std::io::Write;
use tempfile::NamedTempFile;
use text_editor_core::file_writer::{with_default_extension, write_buffer};
use text_editor_core::*;

// Helper function to create an editor holding `content`
fn editor_with(content: &str) -> EditorState {
    EditorState::default().with_text(content)
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_find_then_replace_workflow() {
        let table = CommandTable::new();
        let mut state = editor_with("hello world hello");

        let Some(Outcome::Prompt(prompt)) = table.run("find", &mut state) else {
            panic!("find should prompt for a target");
        };
        assert_eq!(state.answer(prompt.pending, Some("hello".into())), Outcome::Done);
        state.answer(PendingInput::FindTarget, Some("world".into()));
        assert_eq!(state.highlights(), [Span::new(0, 5), Span::new(6, 11)]);

        let Some(Outcome::Prompt(prompt)) = table.run("replace", &mut state) else {
            panic!("replace should prompt for a target");
        };
        let Outcome::Prompt(prompt) = state.answer(prompt.pending, Some("hello".into())) else {
            panic!("replace should prompt for the replacement");
        };
        state.answer(prompt.pending, Some("goodbye".into()));

        assert_eq!(state.buffer().as_str(), "goodbye world hello");
        // The replaced match loses its mark, the other one moves along
        assert_eq!(state.highlights(), [Span::new(8, 13)]);
        let range = state.buffer().byte_range(state.highlights()[0]);
        assert_eq!(&state.buffer().as_str()[range], "world");
    }

    #[test]
    fn test_empty_target_leaves_buffer_unchanged() {
        let mut state = editor_with("unchanged text");
        assert_eq!(state.find(""), None);
        assert_eq!(state.replace("", "x"), None);
        assert_eq!(state.answer(PendingInput::FindTarget, Some(String::new())), Outcome::Done);
        assert_eq!(state.buffer().as_str(), "unchanged text");
    }

    #[test]
    fn test_status_after_typing_on_third_line() {
        let mut state = editor_with("first\nsecond\nabcdef");
        let offset = state.buffer().offset_of(CaretPosition { line: 3, column: 4 });
        state.set_caret(offset);
        state.update_status();
        assert_eq!(state.status(), "Ln: 3  Col: 4  |  Ready");
    }

    #[test]
    fn test_theme_round_trip() {
        let table = CommandTable::new();
        let mut state = editor_with("");
        let before = state.theme().sheet().clone();

        table.run("toggle_theme", &mut state);
        table.run("toggle_theme", &mut state);

        assert_eq!(state.theme().mode(), ThemeMode::Dark);
        assert_eq!(state.theme().sheet(), &before);
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = with_default_extension(dir.path().join("notes"));
        let content = "tabs\there\nunicode: héllo wörld\n\nno trailing newline";
        let mut state = editor_with(content);

        state.save_to(&path).unwrap();

        assert!(path.ends_with("notes.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
        assert_eq!(state.title(), format!("Text Editor - {}", path.display()));
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let mut existing = NamedTempFile::new().unwrap();
        existing.write_all(b"old contents that are much longer").unwrap();
        existing.flush().unwrap();

        write_buffer(existing.path(), &Buffer::from_text("new")).unwrap();
        assert_eq!(std::fs::read_to_string(existing.path()).unwrap(), "new");
    }

    #[test]
    fn test_save_to_invalid_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = editor_with("content");
        let result = state.save_to(&dir.path().join("no_such_dir").join("file.txt"));
        assert!(result.is_err());
        assert_eq!(state.title(), "Text Editor");
    }
}
