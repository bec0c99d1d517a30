//! Capability interface for presentation controls.

use tracing::debug;

use crate::material::Color;
use crate::node::SceneNode;

/// Presentation controls a host exposes for a loaded model.
///
/// The fitting core never needs these; they are the narrow surface a
/// session uses to show, tint and release a model without knowing how the
/// host renders it.
pub trait SceneHandle {
    /// Show or hide the model. Does not touch geometry or transforms.
    fn set_visible(&mut self, visible: bool);

    /// Recolor every colorable material of every mesh in the model.
    ///
    /// Returns the number of material instances replaced.
    fn set_color(&mut self, color: Color) -> usize;

    /// Release the model's geometry and materials.
    fn dispose(&mut self);
}

impl SceneHandle for SceneNode {
    fn set_visible(&mut self, visible: bool) {
        self.set_visible_flag(visible);
    }

    fn set_color(&mut self, color: Color) -> usize {
        let mut recolored = 0;
        self.visit_mut(&mut |node| {
            if node.mesh().is_none() {
                return;
            }
            if let Some(slot) = node.material_mut() {
                recolored += slot.recolor(color);
            }
        });
        debug!(node = self.name(), %color, recolored, "Recolored materials");
        recolored
    }

    fn dispose(&mut self) {
        let nodes = self.node_count();
        self.release();
        debug!(node = self.name(), nodes, "Disposed scene node");
    }
}
