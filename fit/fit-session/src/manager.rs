//! Avatar and garment sequencing.

use std::fmt;

use fit_garment::{FitReport, fit_in_place};
use fit_measure::{AvatarData, analyze_avatar_with, normalize_in_place};
use mesh_scene::{Color, SceneHandle, SceneNode};
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::state::SceneState;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Generation number of a clothing load.
///
/// Tickets increase monotonically. Only the newest ticket may install a
/// garment; older loads that finish late are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub(crate) const fn new(generation: u64) -> Self {
        Self(generation)
    }

    /// The generation number.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns the avatar and garment of one fitting session.
///
/// The manager sequences loads: an avatar is analyzed once on arrival, and
/// a garment is fitted against the current avatar as soon as both are
/// present, whichever arrives first. Presentation choices live in
/// [`SceneState`] and are reapplied to every garment installed.
///
/// # Example
///
/// ```
/// use fit_session::{SceneManager, SessionConfig};
/// use mesh_scene::{Material, MaterialSlot, SceneNode};
/// use mesh_types::{box_mesh, Point3};
///
/// let mut scene = SceneManager::new(SessionConfig::default());
///
/// let avatar = SceneNode::new("avatar")
///     .with_mesh(box_mesh(Point3::new(-25.0, 0.0, -15.0), Point3::new(25.0, 180.0, 15.0)));
/// scene.load_avatar(avatar).unwrap();
///
/// let shirt = SceneNode::new("shirt")
///     .with_mesh(box_mesh(Point3::new(-0.5, 0.0, -0.2), Point3::new(0.5, 0.6, 0.2)))
///     .with_material(MaterialSlot::single(Material::new("cotton")));
/// let report = scene.load_clothing(shirt).unwrap();
/// assert!(report.is_some());
///
/// scene.change_clothing_color("#336699").unwrap();
/// scene.toggle_clothing_visibility(false);
/// assert!(!scene.clothing().unwrap().is_visible());
///
/// scene.clear_scene();
/// assert!(scene.avatar().is_none());
/// ```
#[derive(Debug, Default)]
pub struct SceneManager {
    config: SessionConfig,
    avatar: Option<SceneNode>,
    avatar_data: Option<AvatarData>,
    clothing: Option<SceneNode>,
    last_fit: Option<FitReport>,
    state: SceneState,
    newest_ticket: u64,
}

impl SceneManager {
    /// Create an empty session.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Get the session configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get the presentation state.
    #[must_use]
    pub const fn state(&self) -> &SceneState {
        &self.state
    }

    /// Get the installed avatar.
    #[must_use]
    pub const fn avatar(&self) -> Option<&SceneNode> {
        self.avatar.as_ref()
    }

    /// Get the measurements of the installed avatar.
    #[must_use]
    pub const fn avatar_data(&self) -> Option<&AvatarData> {
        self.avatar_data.as_ref()
    }

    /// Get the installed garment.
    #[must_use]
    pub const fn clothing(&self) -> Option<&SceneNode> {
        self.clothing.as_ref()
    }

    /// Get the report of the most recent successful fit.
    #[must_use]
    pub const fn last_fit(&self) -> Option<&FitReport> {
        self.last_fit.as_ref()
    }

    /// Install a new avatar, replacing any previous one.
    ///
    /// The avatar is normalized (if configured) and analyzed. An installed
    /// garment is then refitted against it.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Measure`] if the avatar cannot be normalized or
    ///   analyzed. The previous avatar stays installed.
    /// - [`SessionError::Fit`] if refitting the installed garment fails. The
    ///   new avatar is installed regardless and the garment keeps its
    ///   previous transform.
    pub fn load_avatar(&mut self, mut node: SceneNode) -> SessionResult<AvatarData> {
        if self.config.normalize_avatar {
            normalize_in_place(&mut node, &self.config.normalization)?;
        }
        let data = analyze_avatar_with(&node, &self.config.key_points)?;

        if let Some(mut previous) = self.avatar.replace(node) {
            previous.dispose();
        }
        self.avatar_data = Some(data);
        self.state.has_avatar = true;

        info!(
            width = data.size.x,
            height = data.size.y,
            depth = data.size.z,
            "Loaded avatar"
        );

        if let Some(clothing) = self.clothing.as_mut() {
            match fit_in_place(clothing, &data, &self.config.fit) {
                Ok(report) => self.last_fit = Some(report),
                Err(err) => {
                    self.last_fit = None;
                    return Err(err.into());
                }
            }
        }

        Ok(data)
    }

    /// Start a clothing load.
    ///
    /// Every call supersedes all earlier tickets.
    pub fn begin_clothing_load(&mut self) -> LoadTicket {
        self.newest_ticket += 1;
        let ticket = LoadTicket::new(self.newest_ticket);
        debug!(%ticket, "Began clothing load");
        ticket
    }

    /// Finish a clothing load started with `ticket`.
    ///
    /// The garment picks up the current visibility and color. If an avatar
    /// is installed the garment is fitted and the report returned;
    /// otherwise it is held unfitted and fitted when an avatar arrives.
    ///
    /// # Errors
    ///
    /// - [`SessionError::StaleLoad`] if a newer load has begun since
    ///   `ticket` was issued. The node is dropped.
    /// - [`SessionError::Fit`] if the garment cannot be fitted. It is not
    ///   installed and any previous garment stays.
    pub fn finish_clothing_load(
        &mut self,
        ticket: LoadTicket,
        mut node: SceneNode,
    ) -> SessionResult<Option<FitReport>> {
        let current = LoadTicket::new(self.newest_ticket);
        if ticket != current {
            warn!(%ticket, %current, clothing = node.name(), "Discarding stale clothing load");
            return Err(SessionError::StaleLoad { ticket, current });
        }

        let report = match &self.avatar_data {
            Some(data) => Some(fit_in_place(&mut node, data, &self.config.fit)?),
            None => {
                debug!(clothing = node.name(), "No avatar yet, holding garment");
                None
            }
        };

        self.apply_presentation(&mut node);
        info!(
            %ticket,
            clothing = node.name(),
            fitted = report.is_some(),
            "Loaded clothing"
        );

        if let Some(mut previous) = self.clothing.replace(node) {
            previous.dispose();
        }
        self.last_fit = report;
        self.state.has_clothing = true;

        Ok(report)
    }

    /// Begin and finish a clothing load in one step.
    ///
    /// # Errors
    ///
    /// See [`finish_clothing_load`](Self::finish_clothing_load).
    pub fn load_clothing(&mut self, node: SceneNode) -> SessionResult<Option<FitReport>> {
        let ticket = self.begin_clothing_load();
        self.finish_clothing_load(ticket, node)
    }

    /// Show or hide the garment.
    ///
    /// The choice is remembered for garments loaded later.
    pub fn toggle_clothing_visibility(&mut self, visible: bool) {
        self.state.clothing_visible = visible;
        if let Some(clothing) = self.clothing.as_mut() {
            clothing.set_visible(visible);
        }
        debug!(visible, "Clothing visibility changed");
    }

    /// Tint the garment.
    ///
    /// Accepts `#rrggbb`, `#rgb` or a CSS color name. The color is
    /// remembered for garments loaded later. Returns the number of material
    /// instances recolored on the installed garment.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Scene`] if the color does not parse. The
    /// state is left unchanged.
    pub fn change_clothing_color(&mut self, color: &str) -> SessionResult<usize> {
        let color: Color = color.parse()?;
        self.state.clothing_color = Some(color);

        let recolored = self
            .clothing
            .as_mut()
            .map_or(0, |clothing| clothing.set_color(color));
        debug!(%color, recolored, "Clothing color changed");
        Ok(recolored)
    }

    /// Remove both models and reset the presentation state.
    ///
    /// Loads begun before the clear become stale.
    pub fn clear_scene(&mut self) {
        if let Some(mut avatar) = self.avatar.take() {
            avatar.dispose();
        }
        if let Some(mut clothing) = self.clothing.take() {
            clothing.dispose();
        }
        self.avatar_data = None;
        self.last_fit = None;
        self.state = SceneState::default();
        self.newest_ticket += 1;
        info!("Cleared scene");
    }

    fn apply_presentation(&self, node: &mut SceneNode) {
        node.set_visible(self.state.clothing_visible);
        if let Some(color) = self.state.clothing_color {
            node.set_color(color);
        }
    }
}
