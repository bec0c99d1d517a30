//! Surface materials and colors.
//!
//! Materials are shared between nodes through [`Arc`]. A loader typically
//! hands the same instance to every primitive that uses it, so recoloring
//! must never mutate a material in place: [`MaterialSlot::recolor`] swaps in
//! fresh clones and leaves the shared originals untouched.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::SceneError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Linear RGB color with components in `[0, 1]`.
///
/// # Example
///
/// ```
/// use mesh_scene::Color;
///
/// let red: Color = "#ff0000".parse().unwrap();
/// assert_eq!(red, Color::RED);
/// assert_eq!("#f00".parse::<Color>().unwrap(), Color::RED);
/// assert_eq!("Red".parse::<Color>().unwrap(), Color::RED);
/// assert_eq!(red.to_string(), "#ff0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

impl Color {
    /// Pure white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Pure black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Pure red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Pure blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from float components, clamped to `[0, 1]`.
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Create a color from 8-bit components.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0)
    }

    /// Create a color from a packed `0xRRGGBB` value.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgb8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Quantize to 8-bit components.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let q = |c: f32| (c * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }

    fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        NAMED_COLORS
            .binary_search_by(|(candidate, _)| candidate.cmp(&name.as_str()))
            .ok()
            .map(|i| Self::from_hex(NAMED_COLORS[i].1))
    }
}

/// CSS named colors, sorted by name.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0x00f0_f8ff),
    ("antiquewhite", 0x00fa_ebd7),
    ("aqua", 0x0000_ffff),
    ("aquamarine", 0x007f_ffd4),
    ("azure", 0x00f0_ffff),
    ("beige", 0x00f5_f5dc),
    ("bisque", 0x00ff_e4c4),
    ("black", 0x0000_0000),
    ("blanchedalmond", 0x00ff_ebcd),
    ("blue", 0x0000_00ff),
    ("blueviolet", 0x008a_2be2),
    ("brown", 0x00a5_2a2a),
    ("burlywood", 0x00de_b887),
    ("cadetblue", 0x005f_9ea0),
    ("chartreuse", 0x007f_ff00),
    ("chocolate", 0x00d2_691e),
    ("coral", 0x00ff_7f50),
    ("cornflowerblue", 0x0064_95ed),
    ("cornsilk", 0x00ff_f8dc),
    ("crimson", 0x00dc_143c),
    ("cyan", 0x0000_ffff),
    ("darkblue", 0x0000_008b),
    ("darkcyan", 0x0000_8b8b),
    ("darkgoldenrod", 0x00b8_860b),
    ("darkgray", 0x00a9_a9a9),
    ("darkgreen", 0x0000_6400),
    ("darkgrey", 0x00a9_a9a9),
    ("darkkhaki", 0x00bd_b76b),
    ("darkmagenta", 0x008b_008b),
    ("darkolivegreen", 0x0055_6b2f),
    ("darkorange", 0x00ff_8c00),
    ("darkorchid", 0x0099_32cc),
    ("darkred", 0x008b_0000),
    ("darksalmon", 0x00e9_967a),
    ("darkseagreen", 0x008f_bc8f),
    ("darkslateblue", 0x0048_3d8b),
    ("darkslategray", 0x002f_4f4f),
    ("darkslategrey", 0x002f_4f4f),
    ("darkturquoise", 0x0000_ced1),
    ("darkviolet", 0x0094_00d3),
    ("deeppink", 0x00ff_1493),
    ("deepskyblue", 0x0000_bfff),
    ("dimgray", 0x0069_6969),
    ("dimgrey", 0x0069_6969),
    ("dodgerblue", 0x001e_90ff),
    ("firebrick", 0x00b2_2222),
    ("floralwhite", 0x00ff_faf0),
    ("forestgreen", 0x0022_8b22),
    ("fuchsia", 0x00ff_00ff),
    ("gainsboro", 0x00dc_dcdc),
    ("ghostwhite", 0x00f8_f8ff),
    ("gold", 0x00ff_d700),
    ("goldenrod", 0x00da_a520),
    ("gray", 0x0080_8080),
    ("green", 0x0000_8000),
    ("greenyellow", 0x00ad_ff2f),
    ("grey", 0x0080_8080),
    ("honeydew", 0x00f0_fff0),
    ("hotpink", 0x00ff_69b4),
    ("indianred", 0x00cd_5c5c),
    ("indigo", 0x004b_0082),
    ("ivory", 0x00ff_fff0),
    ("khaki", 0x00f0_e68c),
    ("lavender", 0x00e6_e6fa),
    ("lavenderblush", 0x00ff_f0f5),
    ("lawngreen", 0x007c_fc00),
    ("lemonchiffon", 0x00ff_facd),
    ("lightblue", 0x00ad_d8e6),
    ("lightcoral", 0x00f0_8080),
    ("lightcyan", 0x00e0_ffff),
    ("lightgoldenrodyellow", 0x00fa_fad2),
    ("lightgray", 0x00d3_d3d3),
    ("lightgreen", 0x0090_ee90),
    ("lightgrey", 0x00d3_d3d3),
    ("lightpink", 0x00ff_b6c1),
    ("lightsalmon", 0x00ff_a07a),
    ("lightseagreen", 0x0020_b2aa),
    ("lightskyblue", 0x0087_cefa),
    ("lightslategray", 0x0077_8899),
    ("lightslategrey", 0x0077_8899),
    ("lightsteelblue", 0x00b0_c4de),
    ("lightyellow", 0x00ff_ffe0),
    ("lime", 0x0000_ff00),
    ("limegreen", 0x0032_cd32),
    ("linen", 0x00fa_f0e6),
    ("magenta", 0x00ff_00ff),
    ("maroon", 0x0080_0000),
    ("mediumaquamarine", 0x0066_cdaa),
    ("mediumblue", 0x0000_00cd),
    ("mediumorchid", 0x00ba_55d3),
    ("mediumpurple", 0x0093_70db),
    ("mediumseagreen", 0x003c_b371),
    ("mediumslateblue", 0x007b_68ee),
    ("mediumspringgreen", 0x0000_fa9a),
    ("mediumturquoise", 0x0048_d1cc),
    ("mediumvioletred", 0x00c7_1585),
    ("midnightblue", 0x0019_1970),
    ("mintcream", 0x00f5_fffa),
    ("mistyrose", 0x00ff_e4e1),
    ("moccasin", 0x00ff_e4b5),
    ("navajowhite", 0x00ff_dead),
    ("navy", 0x0000_0080),
    ("oldlace", 0x00fd_f5e6),
    ("olive", 0x0080_8000),
    ("olivedrab", 0x006b_8e23),
    ("orange", 0x00ff_a500),
    ("orangered", 0x00ff_4500),
    ("orchid", 0x00da_70d6),
    ("palegoldenrod", 0x00ee_e8aa),
    ("palegreen", 0x0098_fb98),
    ("paleturquoise", 0x00af_eeee),
    ("palevioletred", 0x00db_7093),
    ("papayawhip", 0x00ff_efd5),
    ("peachpuff", 0x00ff_dab9),
    ("peru", 0x00cd_853f),
    ("pink", 0x00ff_c0cb),
    ("plum", 0x00dd_a0dd),
    ("powderblue", 0x00b0_e0e6),
    ("purple", 0x0080_0080),
    ("rebeccapurple", 0x0066_3399),
    ("red", 0x00ff_0000),
    ("rosybrown", 0x00bc_8f8f),
    ("royalblue", 0x0041_69e1),
    ("saddlebrown", 0x008b_4513),
    ("salmon", 0x00fa_8072),
    ("sandybrown", 0x00f4_a460),
    ("seagreen", 0x002e_8b57),
    ("seashell", 0x00ff_f5ee),
    ("sienna", 0x00a0_522d),
    ("silver", 0x00c0_c0c0),
    ("skyblue", 0x0087_ceeb),
    ("slateblue", 0x006a_5acd),
    ("slategray", 0x0070_8090),
    ("slategrey", 0x0070_8090),
    ("snow", 0x00ff_fafa),
    ("springgreen", 0x0000_ff7f),
    ("steelblue", 0x0046_82b4),
    ("tan", 0x00d2_b48c),
    ("teal", 0x0000_8080),
    ("thistle", 0x00d8_bfd8),
    ("tomato", 0x00ff_6347),
    ("turquoise", 0x0040_e0d0),
    ("violet", 0x00ee_82ee),
    ("wheat", 0x00f5_deb3),
    ("white", 0x00ff_ffff),
    ("whitesmoke", 0x00f5_f5f5),
    ("yellow", 0x00ff_ff00),
    ("yellowgreen", 0x009a_cd32),
];

impl FromStr for Color {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || SceneError::InvalidColor(s.to_string());

        let Some(digits) = trimmed.strip_prefix('#') else {
            return Self::from_name(trimmed).ok_or_else(invalid);
        };

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;

        match digits.len() {
            6 => Ok(Self::from_hex(value)),
            3 => {
                // #rgb expands each nibble: #f80 == #ff8800
                let expand = |n: u32| {
                    let n = n & 0xf;
                    (n << 4) | n
                };
                Ok(Self::from_hex(
                    (expand(value >> 8) << 16) | (expand(value >> 4) << 8) | expand(value),
                ))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_rgb8();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// A surface material.
///
/// Mirrors the subset of a PBR material that garment tooling touches.
/// `color` is `None` for materials without a base color channel; those are
/// skipped by recoloring.
///
/// # Example
///
/// ```
/// use mesh_scene::{Color, Material};
///
/// let cloth = Material::new("denim")
///     .with_color(Color::from_hex(0x1560bd))
///     .with_roughness(0.9);
///
/// assert_eq!(cloth.name(), "denim");
/// assert_eq!(cloth.roughness, 0.9);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Material {
    name: String,

    /// Base color, if the material has a color channel.
    pub color: Option<Color>,

    /// Roughness in `[0, 1]`.
    pub roughness: f32,

    /// Metalness in `[0, 1]`.
    pub metalness: f32,

    /// Opacity in `[0, 1]`.
    pub opacity: f32,
}

impl Material {
    /// Create a white, fully rough, opaque material.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: Some(Color::WHITE),
            roughness: 1.0,
            metalness: 0.0,
            opacity: 1.0,
        }
    }

    /// Get the material name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the base color (builder pattern).
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Remove the color channel (builder pattern).
    #[must_use]
    pub fn without_color(mut self) -> Self {
        self.color = None;
        self
    }

    /// Set roughness (builder pattern).
    #[must_use]
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness.clamp(0.0, 1.0);
        self
    }

    /// Set metalness (builder pattern).
    #[must_use]
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness.clamp(0.0, 1.0);
        self
    }

    /// Set opacity (builder pattern).
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Check whether recoloring applies to this material.
    #[must_use]
    pub const fn has_color(&self) -> bool {
        self.color.is_some()
    }

    /// A copy of this material carrying `color`, or `None` if it has no
    /// color channel.
    #[must_use]
    pub fn recolored(&self, color: Color) -> Option<Self> {
        self.has_color().then(|| Self {
            color: Some(color),
            ..self.clone()
        })
    }
}

/// The material(s) bound to a mesh node.
///
/// Multi-material meshes carry one entry per primitive group.
#[derive(Debug, Clone)]
pub enum MaterialSlot {
    /// One material for the whole mesh.
    Single(Arc<Material>),
    /// One material per primitive group.
    Multi(Vec<Arc<Material>>),
}

impl MaterialSlot {
    /// Wrap a single material.
    #[must_use]
    pub fn single(material: Material) -> Self {
        Self::Single(Arc::new(material))
    }

    /// Iterate over the materials in this slot.
    pub fn materials(&self) -> impl Iterator<Item = &Arc<Material>> {
        let slice: &[Arc<Material>] = match self {
            Self::Single(material) => std::slice::from_ref(material),
            Self::Multi(materials) => materials,
        };
        slice.iter()
    }

    /// Number of materials in this slot.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multi(materials) => materials.len(),
        }
    }

    /// Check whether the slot holds no materials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace every colorable material with a recolored clone.
    ///
    /// Returns the number of materials replaced. The previous `Arc`s are
    /// released, never written through.
    pub fn recolor(&mut self, color: Color) -> usize {
        let swap = |material: &mut Arc<Material>| match material.recolored(color) {
            Some(fresh) => {
                *material = Arc::new(fresh);
                1
            }
            None => 0,
        };

        match self {
            Self::Single(material) => swap(material),
            Self::Multi(materials) => materials.iter_mut().map(swap).sum(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parse_long_hex() {
        let c: Color = "#1560bd".parse().unwrap();
        assert_eq!(c.to_rgb8(), (0x15, 0x60, 0xbd));
    }

    #[test]
    fn parse_short_hex() {
        let c: Color = "#f80".parse().unwrap();
        assert_eq!(c.to_rgb8(), (0xff, 0x88, 0x00));
    }

    #[test]
    fn parse_names_case_insensitive() {
        assert_eq!("WHITE".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("grey".parse::<Color>().unwrap(), "gray".parse::<Color>().unwrap());
        assert_eq!(" blue ".parse::<Color>().unwrap(), Color::BLUE);
    }

    #[test]
    fn parse_full_css_name_table() {
        assert_eq!(NAMED_COLORS.len(), 148);
        assert!(NAMED_COLORS.windows(2).all(|w| w[0].0 < w[1].0));

        let navy: Color = "Navy".parse().unwrap();
        assert_eq!(navy.to_rgb8(), (0x00, 0x00, 0x80));
        let purple: Color = "rebeccapurple".parse().unwrap();
        assert_eq!(purple.to_rgb8(), (0x66, 0x33, 0x99));
        assert_eq!("aqua".parse::<Color>().unwrap(), "cyan".parse::<Color>().unwrap());
        assert_eq!("lime".parse::<Color>().unwrap().to_rgb8(), (0x00, 0xff, 0x00));
        assert_eq!("green".parse::<Color>().unwrap().to_rgb8(), (0x00, 0x80, 0x00));
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "#", "#12", "#12345", "#gggggg", "#+12345", "chartreusy", "ff0000"] {
            let err = bad.parse::<Color>().unwrap_err();
            assert_eq!(err, SceneError::InvalidColor(bad.to_string()));
        }
    }

    #[test]
    fn display_round_trips_hex() {
        assert_eq!(Color::from_hex(0x00ab_cdef).to_string(), "#abcdef");
    }

    #[test]
    fn new_clamps_components() {
        let c = Color::new(1.5, -0.5, 0.25);
        assert_relative_eq!(c.r, 1.0);
        assert_relative_eq!(c.g, 0.0);
        assert_relative_eq!(c.b, 0.25);
    }

    #[test]
    fn recolored_preserves_other_properties() {
        let m = Material::new("wool").with_roughness(0.4).with_opacity(0.8);
        let red = m.recolored(Color::RED).unwrap();
        assert_eq!(red.color, Some(Color::RED));
        assert_eq!(red.name(), "wool");
        assert_relative_eq!(red.roughness, 0.4);
        assert_relative_eq!(red.opacity, 0.8);
    }

    #[test]
    fn colorless_material_is_not_recolored() {
        let m = Material::new("unlit").without_color();
        assert!(m.recolored(Color::RED).is_none());
    }

    #[test]
    fn recolor_single_slot_leaves_shared_instance() {
        let shared = Arc::new(Material::new("cotton"));
        let mut slot = MaterialSlot::Single(Arc::clone(&shared));

        assert_eq!(slot.recolor(Color::RED), 1);
        assert_eq!(shared.color, Some(Color::WHITE));

        let MaterialSlot::Single(current) = &slot else {
            panic!("slot kind changed");
        };
        assert!(!Arc::ptr_eq(current, &shared));
        assert_eq!(current.color, Some(Color::RED));
    }

    #[test]
    fn recolor_multi_slot_skips_colorless() {
        let mut slot = MaterialSlot::Multi(vec![
            Arc::new(Material::new("a")),
            Arc::new(Material::new("b").without_color()),
            Arc::new(Material::new("c")),
        ]);

        assert_eq!(slot.len(), 3);
        assert_eq!(slot.recolor(Color::BLUE), 2);

        let colors: Vec<_> = slot.materials().map(|m| m.color).collect();
        assert_eq!(colors, vec![Some(Color::BLUE), None, Some(Color::BLUE)]);
    }
}
