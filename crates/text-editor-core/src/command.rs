use crate::editor::{EditorState, ABOUT_MESSAGE, ABOUT_TITLE};

/// Every action reachable from the menu bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandId {
    Save,
    Exit,
    Find,
    Replace,
    ToggleTheme,
    About,
}

impl CommandId {
    pub const ALL: [CommandId; 6] = [
        CommandId::Save,
        CommandId::Exit,
        CommandId::Find,
        CommandId::Replace,
        CommandId::ToggleTheme,
        CommandId::About,
    ];

    /// Stable action name.
    pub fn name(self) -> &'static str {
        match self {
            CommandId::Save => "save",
            CommandId::Exit => "exit",
            CommandId::Find => "find",
            CommandId::Replace => "replace",
            CommandId::ToggleTheme => "toggle_theme",
            CommandId::About => "about",
        }
    }

    /// Menu entry text.
    pub fn label(self) -> &'static str {
        match self {
            CommandId::Save => "Save",
            CommandId::Exit => "Exit",
            CommandId::Find => "Find",
            CommandId::Replace => "Replace",
            CommandId::ToggleTheme => "Toggle Theme",
            CommandId::About => "About",
        }
    }

    pub fn shortcut(self) -> Option<&'static str> {
        match self {
            CommandId::Save => Some("Ctrl+S"),
            CommandId::Find => Some("Ctrl+F"),
            CommandId::Replace => Some("Ctrl+R"),
            _ => None,
        }
    }
}

/// What a text prompt's answer will be used for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingInput {
    FindTarget,
    ReplaceTarget,
    ReplaceWith { target: String },
}

/// A modal text prompt the UI has to show before the command can finish.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    pub title: &'static str,
    pub label: &'static str,
    pub pending: PendingInput,
}

impl Prompt {
    pub fn new(pending: PendingInput) -> Self {
        let (title, label) = match pending {
            PendingInput::FindTarget => ("Find", "Enter text to find:"),
            PendingInput::ReplaceTarget => ("Replace", "Enter text to replace:"),
            PendingInput::ReplaceWith { .. } => ("Replace", "Enter replacement text:"),
        };
        Self {
            title,
            label,
            pending,
        }
    }
}

/// Result of running a command handler or answering a prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Prompt(Prompt),
    ChooseSavePath,
    ShowInfo {
        title: &'static str,
        message: &'static str,
    },
    Quit,
}

pub type Handler = fn(&mut EditorState) -> Outcome;

fn save(_state: &mut EditorState) -> Outcome {
    Outcome::ChooseSavePath
}

fn exit(state: &mut EditorState) -> Outcome {
    state.request_quit();
    Outcome::Quit
}

fn find(_state: &mut EditorState) -> Outcome {
    Outcome::Prompt(Prompt::new(PendingInput::FindTarget))
}

fn replace(_state: &mut EditorState) -> Outcome {
    Outcome::Prompt(Prompt::new(PendingInput::ReplaceTarget))
}

fn toggle_theme(state: &mut EditorState) -> Outcome {
    state.toggle_theme();
    Outcome::Done
}

fn about(_state: &mut EditorState) -> Outcome {
    Outcome::ShowInfo {
        title: ABOUT_TITLE,
        message: ABOUT_MESSAGE,
    }
}

/// Action table built once at start-up; menu items and shortcuts both
/// dispatch through it.
#[derive(Clone, Debug)]
pub struct CommandTable {
    handlers: Vec<(CommandId, Handler)>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self {
            handlers: vec![
                (CommandId::Save, save as Handler),
                (CommandId::Exit, exit as Handler),
                (CommandId::Find, find as Handler),
                (CommandId::Replace, replace as Handler),
                (CommandId::ToggleTheme, toggle_theme as Handler),
                (CommandId::About, about as Handler),
            ],
        }
    }

    pub fn handler(&self, id: CommandId) -> Option<Handler> {
        self.handlers
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, handler)| *handler)
    }

    pub fn lookup(&self, name: &str) -> Option<CommandId> {
        self.handlers
            .iter()
            .map(|(id, _)| *id)
            .find(|id| id.name() == name)
    }

    pub fn dispatch(&self, id: CommandId, state: &mut EditorState) -> Outcome {
        tracing::debug!(command = id.name(), "dispatching command");
        match self.handler(id) {
            Some(handler) => handler(state),
            None => Outcome::Done,
        }
    }

    /// Dispatches by action name; `None` for unknown names.
    pub fn run(&self, name: &str, state: &mut EditorState) -> Option<Outcome> {
        let id = self.lookup(name)?;
        Some(self.dispatch(id, state))
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Command(CommandId),
    Separator,
}

#[derive(Clone, Copy, Debug)]
pub struct Menu {
    pub label: &'static str,
    pub items: &'static [MenuItem],
}

pub const MENU_BAR: &[Menu] = &[
    Menu {
        label: "File",
        items: &[
            MenuItem::Command(CommandId::Save),
            MenuItem::Separator,
            MenuItem::Command(CommandId::Exit),
        ],
    },
    Menu {
        label: "Edit",
        items: &[
            MenuItem::Command(CommandId::Find),
            MenuItem::Command(CommandId::Replace),
        ],
    },
    Menu {
        label: "Theme",
        items: &[MenuItem::Command(CommandId::ToggleTheme)],
    },
    Menu {
        label: "Help",
        items: &[MenuItem::Command(CommandId::About)],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;
    use std::collections::HashSet;

    #[test]
    fn every_command_has_a_handler() {
        let table = CommandTable::new();
        for id in CommandId::ALL {
            assert!(table.handler(id).is_some(), "{id:?} has no handler");
            assert_eq!(table.lookup(id.name()), Some(id));
        }
        assert_eq!(table.lookup("print"), None);
    }

    #[test]
    fn menu_bar_lists_every_command_once() {
        let seen: Vec<CommandId> = MENU_BAR
            .iter()
            .flat_map(|menu| menu.items.iter())
            .filter_map(|item| match item {
                MenuItem::Command(id) => Some(*id),
                MenuItem::Separator => None,
            })
            .collect();
        let unique: HashSet<CommandId> = seen.iter().copied().collect();
        assert_eq!(seen.len(), CommandId::ALL.len());
        assert_eq!(unique.len(), CommandId::ALL.len());

        let labels: Vec<_> = MENU_BAR.iter().map(|menu| menu.label).collect();
        assert_eq!(labels, ["File", "Edit", "Theme", "Help"]);
    }

    #[test]
    fn toggle_theme_by_name() {
        let table = CommandTable::new();
        let mut state = EditorState::default();

        assert_eq!(table.run("toggle_theme", &mut state), Some(Outcome::Done));
        assert_eq!(state.theme().mode(), ThemeMode::Light);
    }

    #[test]
    fn find_and_replace_start_with_a_prompt() {
        let table = CommandTable::new();
        let mut state = EditorState::default();

        assert_eq!(
            table.dispatch(CommandId::Find, &mut state),
            Outcome::Prompt(Prompt::new(PendingInput::FindTarget))
        );
        let Outcome::Prompt(prompt) = table.dispatch(CommandId::Replace, &mut state) else {
            panic!("replace should prompt");
        };
        assert_eq!(prompt.title, "Replace");
        assert_eq!(prompt.label, "Enter text to replace:");
    }

    #[test]
    fn exit_requests_quit() {
        let table = CommandTable::new();
        let mut state = EditorState::default();
        assert_eq!(table.run("exit", &mut state), Some(Outcome::Quit));
        assert!(state.quit_requested());
    }

    #[test]
    fn save_and_about_defer_to_dialogs() {
        let table = CommandTable::new();
        let mut state = EditorState::default();
        assert_eq!(table.dispatch(CommandId::Save, &mut state), Outcome::ChooseSavePath);
        assert_eq!(
            table.dispatch(CommandId::About, &mut state),
            Outcome::ShowInfo {
                title: "About",
                message: "Text Editor\nVersion 1.0"
            }
        );
    }
}
