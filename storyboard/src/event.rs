/// Gestures a host forwards to the scene list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Key press, targeted at the focused item
    Key { key: Key, modifiers: Modifiers },
    /// Click on one of the scene controls
    Click { control: Control },
}

/// Visibility signals from the container hosting the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    Show,
    Hide,
}

/// Clickable controls next to the scene list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    RemoveScene,
    MoveSceneLeft,
    MoveSceneRight,
}

impl Control {
    /// Role of the document node carrying this control.
    pub fn role(self) -> &'static str {
        match self {
            Control::RemoveScene => "storyboard-remove-scene",
            Control::MoveSceneLeft => "storyboard-move-scene-left",
            Control::MoveSceneRight => "storyboard-move-scene-right",
        }
    }
}

/// Keys the storyboard widgets react to. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Cmd on macOS, Super/Windows elsewhere.
    pub meta: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }

    /// Ctrl or Meta held: arrows reorder instead of navigate.
    pub fn reorder(&self) -> bool {
        self.ctrl || self.meta
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
            meta: mods.intersects(KeyModifiers::META | KeyModifiers::SUPER),
        }
    }
}

impl From<crossterm::event::KeyEvent> for Gesture {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        Gesture::Key {
            key: event.code.into(),
            modifiers: event.modifiers.into(),
        }
    }
}
