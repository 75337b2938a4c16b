//! Mountable view capability shared by the form and the lists.
//!
//! A component is mounted against the store once: [`Component::configure`] wires
//! its event bindings (the lists subscribe to store notifications there), and
//! [`Component::render_content`] produces the view model the UI layer draws.

use crate::store::ProjectStore;

/// A board component that binds to the store and renders itself.
pub trait Component {
    /// View model produced for the renderer.
    type View;

    /// Binds the component's event hooks. Called once, at mount time.
    fn configure(&mut self, store: &mut ProjectStore);

    /// Produces the component's current view model.
    fn render_content(&self) -> Self::View;
}
