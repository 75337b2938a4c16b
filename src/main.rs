//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the projboard library and the Zellij plugin
//! system: it translates Zellij events into library events, forwards them to
//! [`handle_event`], and executes the returned actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `Mouse`, `PermissionRequestResult` events
//! 3. **Update**: Map events, delegate to the library, run actions
//! 4. **Render**: Record the pane size, then call the library renderer
//!
//! # Event Mapping
//!
//! - `Mouse::LeftClick(line, col)` → `Event::MouseDown` (converted to 1-indexed)
//! - `Mouse::Hold(line, col)` → `Event::MouseDrag`
//! - `Mouse::Release(line, col)` → `Event::MouseUp`
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//!
//! # Keybindings
//!
//! On the lists:
//! - `j`/`Down`, `k`/`Up`: Move the selection
//! - `h`/`Left`, `l`/`Right`, `Tab`: Focus a list
//! - `m`: Pick up the selected project
//! - `Enter`/`Space`: Drop the picked-up project on the focused list
//! - `Esc`: Cancel the drag
//! - `i`: Edit the new-project form
//! - `q`: Close plugin
//!
//! In the form:
//! - `Tab`/`Down`, `Shift+Tab`/`Up`: Change field
//! - `Enter`: Add the project
//! - `Esc`: Back to the lists

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use std::collections::BTreeMap;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
use projboard::{handle_event, Action, Config, Event, InputMode, ProjectStatus};

#[cfg(target_family = "wasm")]
register_plugin!(State);

/// The plugin only runs inside Zellij; host builds get an empty entry point.
#[cfg(not(target_family = "wasm"))]
fn main() {}

/// Plugin state wrapper.
#[cfg(target_family = "wasm")]
struct State {
    app: projboard::AppState,
}

#[cfg(target_family = "wasm")]
impl Default for State {
    fn default() -> Self {
        Self {
            app: projboard::initialize(&Config::default()),
        }
    }
}

#[cfg(target_family = "wasm")]
impl ZellijPlugin for State {
    /// Parses configuration, requests permissions and subscribes to input events.
    ///
    /// `ChangeApplicationState` is needed to rename the plugin pane.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        if let Err(e) = projboard::observability::init_tracing(&config) {
            eprintln!("projboard: tracing disabled: {e}");
        }

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            theme = ?config.theme,
            theme_file = ?config.theme_file,
            manday_min = config.manday_min,
            manday_max = config.manday_max,
            "parsed configuration"
        );
        self.app = projboard::initialize(&config);

        request_permission(&[PermissionType::ChangeApplicationState]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    /// Returns `true` if the plugin should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let span = tracing::debug_span!("plugin_update_event", event_type = %Self::event_name(&event));
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match Self::map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(rows, cols);
        projboard::ui::render(&self.app);
    }
}

#[cfg(target_family = "wasm")]
impl State {
    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        match self.app.input_mode {
            InputMode::Editing(_) => Self::map_editing_key(key),
            InputMode::Normal => self.map_board_key(key),
        }
    }

    fn map_editing_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PreviousField,
            BareKey::Tab | BareKey::Down => Event::NextField,
            BareKey::Up => Event::PreviousField,
            BareKey::Enter => Event::SubmitForm,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if !key.has_modifiers(&[KeyModifier::Ctrl]) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_board_key(&self, key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Left | BareKey::Char('h') => Event::FocusList(ProjectStatus::Active),
            BareKey::Right | BareKey::Char('l') => Event::FocusList(ProjectStatus::Finished),
            BareKey::Tab => Event::ToggleList,
            BareKey::Char('m') => Event::PickUp,
            BareKey::Enter | BareKey::Char(' ') if self.app.is_dragging() => Event::Drop,
            BareKey::Esc => Event::Escape,
            BareKey::Char('i') => Event::EditForm,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Zellij reports 0-indexed positions; the board layout is 1-indexed.
    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        let to_screen = |line: isize, col: usize| -> Option<(usize, usize)> {
            let row = usize::try_from(line).ok()?;
            Some((row + 1, col + 1))
        };

        match mouse {
            Mouse::LeftClick(line, col) => {
                to_screen(line, col).map(|(row, col)| Event::MouseDown { row, col })
            }
            Mouse::Hold(line, col) => to_screen(line, col).map(|(row, col)| Event::MouseDrag { row, col }),
            Mouse::Release(line, col) => to_screen(line, col).map(|(row, col)| Event::MouseUp { row, col }),
            _ => None,
        }
    }

    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::RenamePane { title } => {
                tracing::debug!(title = %title, "renaming plugin pane");
                rename_plugin_pane(get_plugin_ids().plugin_id, title);
            }
        }
    }
}
