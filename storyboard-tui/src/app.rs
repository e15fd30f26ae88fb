use std::cell::Cell;
use std::io;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use storyboard::{
    AddSceneHotkey, Control, Gesture, GridGeometry, IdeaId, Key, MapModel, MemoryStoryboard,
    MenuAction, Scene, SceneListView, StoryboardConfig, StoryboardMenu,
};

use crate::error::AppError;
use crate::terminal::{truncate, TerminalGuard};

/// Rows above the scene grid: title and selected idea.
const HEADER_ROWS: u16 = 2;

const HELP: &str =
    "arrows move  ctrl+arrows reorder  tab idea  a/+ add  d remove  x remove idea  e rename  s show/hide  q quit";

/// Stand-in for the mind map: a fixed list of ideas, one selected.
#[derive(Debug)]
pub struct DemoMap {
    ideas: Vec<IdeaId>,
    selected: Cell<usize>,
}

impl DemoMap {
    pub fn new(scenes: &[Scene]) -> Self {
        let mut ideas: Vec<IdeaId> = scenes.iter().map(|scene| scene.idea_id).collect();
        ideas.sort();
        ideas.dedup();
        if ideas.is_empty() {
            ideas = vec![IdeaId(1), IdeaId(2), IdeaId(3)];
        }
        Self {
            ideas,
            selected: Cell::new(0),
        }
    }

    pub fn select_next(&self) {
        self.selected.set((self.selected.get() + 1) % self.ideas.len());
    }
}

impl MapModel for DemoMap {
    fn selected_node_id(&self) -> IdeaId {
        self.ideas[self.selected.get() % self.ideas.len()]
    }

    fn input_enabled(&self) -> bool {
        true
    }
}

type Board = Rc<MemoryStoryboard>;

pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    storyboard: Board,
    map: Rc<DemoMap>,
    view: SceneListView<Board, Board, GridGeometry>,
    hotkey: AddSceneHotkey<Board, Board, Rc<DemoMap>>,
    menu: StoryboardMenu<Board, Board, Rc<DemoMap>>,
    status: String,
}

impl App {
    pub fn new(
        scenes: Vec<Scene>,
        config: &StoryboardConfig,
        size: (u16, u16),
    ) -> Result<Self, AppError> {
        config.validate()?;

        let map = Rc::new(DemoMap::new(&scenes));
        let storyboard = Rc::new(MemoryStoryboard::with_scenes(scenes));

        let rows_fit = size.1.saturating_sub(HEADER_ROWS + 1) / (config.item_height + config.gap);
        let geometry = GridGeometry::new(
            config.layout(size.0),
            rows_fit.clamp(1, config.viewport_rows),
        );

        let view = SceneListView::new(storyboard.clone(), storyboard.clone(), geometry);
        let hotkey = AddSceneHotkey::new(
            storyboard.clone(),
            storyboard.clone(),
            map.clone(),
            config.add_scene_hotkey,
        );
        let menu = StoryboardMenu::new(storyboard.clone(), storyboard.clone(), map.clone());

        let mut app = Self {
            storyboard,
            map,
            view,
            hotkey,
            menu,
            status: String::new(),
        };
        app.view.show();
        app.sync();
        Ok(app)
    }

    /// Let every widget catch up with the storyboard.
    fn sync(&mut self) {
        self.view.process_model_events();
        self.menu.process_model_events();
        self.hotkey.process_model_events();
    }

    pub fn resize(&mut self, width: u16) {
        self.view.geometry_mut().set_container_width(width);
    }

    pub fn handle_key(&mut self, event: KeyEvent) -> Flow {
        let plain = !event.modifiers.intersects(
            KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::META | KeyModifiers::SUPER,
        );

        if self.hotkey.handle_key(event.code.into(), event.modifiers.into()) {
            self.status = format!("added scene for idea {}", self.map.selected_node_id());
            self.sync();
            return Flow::Continue;
        }

        match event.code {
            KeyCode::Char('q') | KeyCode::Esc if plain => return Flow::Quit,
            KeyCode::Char('s') if plain => self.toggle_visibility(),
            KeyCode::Tab => self.map.select_next(),
            KeyCode::Char('a') if plain => self.menu_click(MenuAction::AddScene),
            KeyCode::Char('x') if plain => self.menu_click(MenuAction::RemoveScenesForIdea),
            KeyCode::Char('d') | KeyCode::Delete if plain => self.control(Control::RemoveScene),
            KeyCode::Char('<') => self.control(Control::MoveSceneLeft),
            KeyCode::Char('>') => self.control(Control::MoveSceneRight),
            KeyCode::Char('e') if plain => self.rename_selected(),
            _ => {
                let gesture = Gesture::from(event);
                let arrow = matches!(
                    gesture,
                    Gesture::Key {
                        key: Key::Left | Key::Right | Key::Up | Key::Down,
                        ..
                    }
                );
                if arrow && self.view.is_visible() && self.view.focused().is_none() {
                    self.view.focus_at(0);
                } else {
                    let outcome = self.view.handle_gesture(gesture);
                    log::trace!("[app] {:?} -> {:?}", gesture, outcome);
                }
            }
        }

        self.sync();
        Flow::Continue
    }

    fn toggle_visibility(&mut self) {
        if self.view.is_visible() {
            self.view.hide();
            self.status = "storyboard hidden".to_string();
        } else {
            self.view.show();
            self.status = "storyboard shown".to_string();
        }
    }

    fn menu_click(&mut self, action: MenuAction) {
        self.sync();
        if !self.menu.click(action) {
            self.status = "menu is hidden".to_string();
        }
    }

    fn control(&mut self, control: Control) {
        let outcome = self.view.handle_gesture(Gesture::Click { control });
        self.status = format!("{:?}: {:?}", control, outcome);
    }

    fn rename_selected(&mut self) {
        let idea_id = self.map.selected_node_id();
        let title = format!("{}*", self.storyboard.idea_title(idea_id));
        self.storyboard.set_idea_title(idea_id, title);
    }

    pub fn draw(&self, term: &mut TerminalGuard) -> io::Result<()> {
        let (width, height) = term.size()?;
        term.clear()?;

        let visibility = if self.view.is_visible() { "shown" } else { "hidden" };
        let selected = self.map.selected_node_id();
        term.text(
            0,
            0,
            &truncate(
                &format!(
                    "Storyboard ({visibility}) - selected idea {selected}: {}",
                    self.storyboard.idea_title(selected)
                ),
                width as usize,
            ),
            false,
        )?;
        term.text(0, 1, &truncate(&self.status, width as usize), false)?;

        if self.view.is_visible() {
            let geometry = self.view.geometry();
            let layout = geometry.layout();
            let row_height = layout.item_height + layout.gap;
            let scroll_offset = (geometry.scroll_row() as u16).saturating_mul(row_height);
            let focused = self.view.focused();

            for (position, (id, item)) in self.view.items().iter().enumerate() {
                if !geometry.is_visible(position) {
                    continue;
                }
                let mut rect = layout.rect_at(position);
                rect.y = rect.y.saturating_sub(scroll_offset);
                term.card(rect, HEADER_ROWS, item.title(), focused == Some(id))?;
            }
        }

        term.text(0, height.saturating_sub(1), &truncate(HELP, width as usize), false)?;
        term.flush()
    }
}
