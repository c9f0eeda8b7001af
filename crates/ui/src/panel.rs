use std::sync::Arc;

use gpui::{AnyView, App, Context, Entity, EntityId, Render, SharedString};

/// A renderable unit that can occupy one of the sliding menu slots
/// (menu, content or header).
///
/// The container depends only on this contract: it mounts the panel's view
/// in its slot and notifies the panel when it is detached again. Panels own
/// their internal state; the container owns nothing but the attachment
/// point.
pub trait Panel: Render {
    /// Stable name used in logs.
    fn panel_name(&self) -> SharedString {
        SharedString::from(std::any::type_name::<Self>())
    }

    /// Called when the container detaches this panel from its slot, either
    /// because it was replaced or because the container itself is being
    /// removed.
    fn on_removed(&mut self, _cx: &mut Context<Self>) {}
}

/// Type-erased handle to a [`Panel`] entity, held by the container slots.
pub trait PanelView: 'static {
    fn panel_name(&self, cx: &App) -> SharedString;

    fn view(&self) -> AnyView;

    fn entity_id(&self) -> EntityId;

    /// Run the panel's removal hook.
    fn removed(&self, cx: &mut App);
}

impl<T: Panel> PanelView for Entity<T> {
    fn panel_name(&self, cx: &App) -> SharedString {
        self.read(cx).panel_name()
    }

    fn view(&self) -> AnyView {
        self.clone().into()
    }

    fn entity_id(&self) -> EntityId {
        Entity::entity_id(self)
    }

    fn removed(&self, cx: &mut App) {
        self.update(cx, |panel, cx| panel.on_removed(cx));
    }
}

impl PartialEq for dyn PanelView {
    fn eq(&self, other: &Self) -> bool {
        self.entity_id() == other.entity_id()
    }
}

/// Wrap a panel entity into the slot handle the container stores.
pub fn panel_view<T: Panel>(panel: Entity<T>) -> Arc<dyn PanelView> {
    Arc::new(panel)
}
