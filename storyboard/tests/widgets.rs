mod common;

use std::rc::Rc;

use common::{two_scenes, view_with, Command, CountingModel, FakeMap, RecordingController};
use storyboard::{AddSceneHotkey, IdeaId, Key, MenuAction, Modifiers, StoryboardMenu, StoryboardModel};

// ============================================================================
// Add-scene hotkey
// ============================================================================

fn hotkey() -> (
    AddSceneHotkey<Rc<CountingModel>, RecordingController, Rc<FakeMap>>,
    Rc<CountingModel>,
    RecordingController,
    Rc<FakeMap>,
) {
    let model = CountingModel::with_scenes(vec![]);
    let controller = RecordingController::new();
    let map = FakeMap::new(23);
    let hotkey = AddSceneHotkey::new(model.clone(), controller.clone(), map.clone(), '+');
    (hotkey, model, controller, map)
}

#[test]
fn test_hotkey_is_inactive_before_input_is_enabled() {
    let (mut hotkey, _, controller, _) = hotkey();

    assert!(!hotkey.handle_keypress('+'));
    assert!(controller.commands().is_empty());
}

#[test]
fn test_hotkey_adds_scene_for_selected_node() {
    let (mut hotkey, model, controller, _) = hotkey();
    model.set_input_enabled(true);

    assert!(hotkey.handle_keypress('+'));
    assert_eq!(controller.commands(), vec![Command::AddScene(IdeaId(23))]);
}

#[test]
fn test_hotkey_ignores_other_characters() {
    let (mut hotkey, model, controller, _) = hotkey();
    model.set_input_enabled(true);

    assert!(!hotkey.handle_keypress('-'));
    assert!(!hotkey.handle_key(Key::Char('+'), Modifiers::ctrl()));
    assert!(controller.commands().is_empty());
}

#[test]
fn test_hotkey_respects_map_input_flag() {
    let (mut hotkey, model, controller, map) = hotkey();
    model.set_input_enabled(true);
    map.input_enabled.set(false);

    assert!(!hotkey.handle_keypress('+'));
    assert!(controller.commands().is_empty());
}

#[test]
fn test_hotkey_stops_when_input_is_disabled_again() {
    let (mut hotkey, model, controller, _) = hotkey();
    model.set_input_enabled(true);
    model.set_input_enabled(false);

    assert!(!hotkey.handle_keypress('+'));
    assert!(!hotkey.is_enabled());
    assert!(controller.commands().is_empty());
}

#[test]
fn test_hotkey_follows_view_visibility() {
    let (mut view, model, controller) = view_with(two_scenes());
    let map = FakeMap::new(7);
    let mut hotkey = AddSceneHotkey::new(model.clone(), controller.clone(), map, '+');

    view.show();
    assert!(hotkey.handle_key(Key::Char('+'), Modifiers::new()));
    view.hide();
    assert!(!hotkey.handle_key(Key::Char('+'), Modifiers::new()));

    assert_eq!(controller.commands(), vec![Command::AddScene(IdeaId(7))]);
}

#[test]
fn test_dropping_hotkey_unsubscribes() {
    let (hotkey, model, _, _) = hotkey();
    assert_eq!(model.listeners(), 1);
    drop(hotkey);
    assert_eq!(model.listeners(), 0);
}

// ============================================================================
// Menu
// ============================================================================

fn menu(
    model: &Rc<CountingModel>,
) -> (
    StoryboardMenu<Rc<CountingModel>, RecordingController, Rc<FakeMap>>,
    RecordingController,
) {
    let controller = RecordingController::new();
    let menu = StoryboardMenu::new(model.clone(), controller.clone(), FakeMap::new(23));
    (menu, controller)
}

#[test]
fn test_menu_starts_hidden_when_input_is_disabled() {
    let model = CountingModel::with_scenes(vec![]);
    let (menu, _) = menu(&model);
    assert!(!menu.is_visible());
}

#[test]
fn test_menu_starts_visible_when_input_is_enabled() {
    let model = CountingModel::with_scenes(vec![]);
    model.set_input_enabled(true);
    let (menu, _) = menu(&model);
    assert!(menu.is_visible());
}

#[test]
fn test_menu_visibility_follows_input_enabled_events() {
    let model = CountingModel::with_scenes(vec![]);
    let (mut menu, _) = menu(&model);

    model.set_input_enabled(true);
    menu.process_model_events();
    assert!(menu.is_visible());

    model.set_input_enabled(false);
    menu.process_model_events();
    assert!(!menu.is_visible());
}

#[test]
fn test_menu_forwards_clicks_for_selected_node() {
    let model = CountingModel::with_scenes(vec![]);
    let (mut menu, controller) = menu(&model);
    model.set_input_enabled(true);

    assert!(menu.click(MenuAction::AddScene));
    assert!(menu.click(MenuAction::RemoveScenesForIdea));

    assert_eq!(
        controller.commands(),
        vec![
            Command::AddScene(IdeaId(23)),
            Command::RemoveScenesForIdeaId(IdeaId(23)),
        ]
    );
}

#[test]
fn test_menu_ignores_clicks_while_hidden() {
    let model = CountingModel::with_scenes(vec![]);
    let (mut menu, controller) = menu(&model);

    assert!(!menu.click(MenuAction::AddScene));
    assert!(controller.commands().is_empty());
}

#[test]
fn test_menu_action_roles() {
    assert_eq!(MenuAction::AddScene.role(), "storyboard-add-scene");
    assert_eq!(
        MenuAction::RemoveScenesForIdea.role(),
        "storyboard-remove-scenes-for-idea-id"
    );
}
