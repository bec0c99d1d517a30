//! Core garment fitting algorithm.

use fit_measure::AvatarData;
use mesh_scene::{NodeTransform, SceneNode};
use mesh_types::{Axis, MIN_EXTENT, Point3, Vector3};
use tracing::{debug, info, warn};

use crate::classify::{ClothingType, aspect_ratio, classify_aspect_ratio};
use crate::error::{FitError, FitResult};
use crate::params::{FitParams, FitProportions};
use crate::result::{FitReport, FitTransform};

/// Compute the transform that fits a garment onto an avatar, with default
/// parameters.
///
/// # Errors
///
/// See [`fit_clothing`].
///
/// # Example
///
/// ```
/// use fit_garment::fit_clothing_to_avatar;
/// use fit_measure::analyze_avatar;
/// use mesh_scene::SceneNode;
/// use mesh_types::{box_mesh, Point3};
///
/// let avatar = SceneNode::new("avatar")
///     .with_mesh(box_mesh(Point3::new(-0.5, -1.0, -0.25), Point3::new(0.5, 1.0, 0.25)));
/// let dress = SceneNode::new("dress")
///     .with_mesh(box_mesh(Point3::new(-0.2, 0.0, -0.15), Point3::new(0.2, 1.6, 0.15)));
///
/// let fit = fit_clothing_to_avatar(&dress, &analyze_avatar(&avatar).unwrap()).unwrap();
/// assert!((fit.scale.x - 2.375).abs() < 1e-9);
/// assert!((fit.scale.y - 1.125).abs() < 1e-9);
/// ```
pub fn fit_clothing_to_avatar(node: &SceneNode, avatar: &AvatarData) -> FitResult<FitTransform> {
    fit_clothing(node, avatar, &FitParams::default()).map(|report| report.transform)
}

/// Compute the transform that fits a garment onto an avatar.
///
/// The garment is measured with its root transform reset, classified (unless
/// `params` forces a type), and given a per-type scale and anchor point.
/// The position is chosen so the center of the scaled garment's bounds
/// lands exactly on the anchor.
///
/// The node is not modified, and the result depends only on the garment's
/// geometry below its root, so repeated calls return identical output.
///
/// # Errors
///
/// - [`FitError::Measure`] if the garment holds no vertices.
/// - [`FitError::DegenerateGeometry`] if the garment has zero extent along
///   an axis the fit divides by.
/// - [`FitError::NonFiniteTransform`] if the result is not finite.
pub fn fit_clothing(
    node: &SceneNode,
    avatar: &AvatarData,
    params: &FitParams,
) -> FitResult<FitReport> {
    let clothing_size =
        fit_measure::compute_bounds_with_root(node, &NodeTransform::identity())?.size();

    let (clothing_type, aspect) = match params.clothing_type_override {
        Some(forced) => {
            let aspect = aspect_ratio(&clothing_size, params.zero_width_policy)
                .unwrap_or(f64::INFINITY);
            (forced, aspect)
        }
        None => {
            let aspect = aspect_ratio(&clothing_size, params.zero_width_policy)
                .inspect_err(|_| warn!(clothing = node.name(), "Garment has zero width"))?;
            (classify_aspect_ratio(aspect, &params.thresholds), aspect)
        }
    };

    debug!(
        clothing = node.name(),
        %clothing_type,
        aspect,
        width = clothing_size.x,
        height = clothing_size.y,
        depth = clothing_size.z,
        "Measured garment"
    );

    let (scale, target) = target_for(clothing_type, &clothing_size, avatar, &params.proportions)
        .inspect_err(|err| warn!(clothing = node.name(), %clothing_type, %err, "Cannot fit garment"))?;

    let scaled_center = node
        .world_bounds_with_root(&NodeTransform::from_scale(scale))
        .center();

    let transform = FitTransform {
        scale,
        position: target - scaled_center,
    };
    if !transform.is_finite() {
        return Err(FitError::NonFiniteTransform { clothing_type });
    }

    info!(
        clothing = node.name(),
        %clothing_type,
        scale_x = scale.x,
        scale_y = scale.y,
        scale_z = scale.z,
        "Fitted garment"
    );

    Ok(FitReport {
        clothing_type,
        aspect_ratio: aspect,
        clothing_size,
        target_position: target,
        transform,
    })
}

/// Install a fit on the garment's root: scale and position set, rotation
/// reset to identity.
pub fn apply_fit(node: &mut SceneNode, fit: &FitTransform) {
    *node.transform_mut() = fit.to_node_transform();
}

/// Compute a fit and install it on the garment's root.
///
/// # Errors
///
/// See [`fit_clothing`]. On error the node is left unchanged.
pub fn fit_in_place(
    node: &mut SceneNode,
    avatar: &AvatarData,
    params: &FitParams,
) -> FitResult<FitReport> {
    let report = fit_clothing(node, avatar, params)?;
    apply_fit(node, &report.transform);
    Ok(report)
}

/// Per-type scale and anchor point.
fn target_for(
    clothing_type: ClothingType,
    clothing: &Vector3<f64>,
    avatar: &AvatarData,
    p: &FitProportions,
) -> FitResult<(Vector3<f64>, Point3<f64>)> {
    let av = &avatar.size;
    let kp = &avatar.key_points;

    // Hats scale by avatar height alone; every other type by all three axes.
    let used: &[Axis] = if clothing_type == ClothingType::Hat {
        &[Axis::Y]
    } else {
        &Axis::ALL
    };
    if let Some(&axis) = used.iter().find(|axis| av[axis.index()] <= MIN_EXTENT) {
        warn!(%clothing_type, %axis, "Avatar is flat along a scaled axis");
        return Err(FitError::DegenerateAvatar { axis });
    }

    let fitted = match clothing_type {
        ClothingType::Fullbody => {
            let cl = nonzero_extents(clothing)?;
            let scale = Vector3::new(
                p.fullbody_width * av.x / cl.x,
                p.fullbody_height * av.y / cl.y,
                p.fullbody_depth * av.z / cl.z,
            );
            let mut target = avatar.center;
            target.y -= p.fullbody_drop * av.y;
            (scale, target)
        }
        ClothingType::Jacket | ClothingType::Top => {
            let cl = nonzero_extents(clothing)?;
            let height = p.top_height * av.y;
            let scale = Vector3::new(
                p.top_girth * av.x / cl.x,
                height / cl.y,
                p.top_girth * av.z / cl.z,
            );
            let mut target = kp.chest;
            target.y += p.top_lift * height;
            (scale, target)
        }
        ClothingType::Pants => {
            let cl = nonzero_extents(clothing)?;
            let height = p.pants_height * av.y;
            let scale = Vector3::new(
                p.pants_girth * av.x / cl.x,
                height / cl.y,
                p.pants_girth * av.z / cl.z,
            );
            let mut target = kp.waist;
            target.y -= p.pants_drop * height;
            (scale, target)
        }
        ClothingType::Hat => {
            let largest = clothing.x.max(clothing.y).max(clothing.z);
            if largest <= MIN_EXTENT {
                return Err(FitError::DegenerateGeometry { axis: Axis::X });
            }
            let height = p.hat_height * av.y;
            let u = height / largest;
            let mut target = kp.head;
            target.y += p.hat_lift * height;
            (Vector3::new(u, u, u), target)
        }
        ClothingType::Default => {
            let cl = nonzero_extents(clothing)?;
            let u = (av.x / cl.x).min(av.y / cl.y).min(av.z / cl.z) * p.default_margin;
            (Vector3::new(u, u, u), avatar.center)
        }
    };

    Ok(fitted)
}

fn nonzero_extents(size: &Vector3<f64>) -> FitResult<Vector3<f64>> {
    match Axis::ALL.into_iter().find(|axis| size[axis.index()] <= MIN_EXTENT) {
        Some(axis) => Err(FitError::DegenerateGeometry { axis }),
        None => Ok(*size),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::params::ZeroWidthPolicy;
    use approx::assert_relative_eq;
    use fit_measure::{KeyPointFractions, analyze_avatar};
    use mesh_types::{Bounds3, box_mesh};
    use std::f64::consts::FRAC_PI_3;

    fn avatar() -> AvatarData {
        let node = SceneNode::new("avatar").with_mesh(box_mesh(
            Point3::new(-0.5, -1.0, -0.25),
            Point3::new(0.5, 1.0, 0.25),
        ));
        analyze_avatar(&node).unwrap()
    }

    fn garment(min: [f64; 3], max: [f64; 3]) -> SceneNode {
        SceneNode::new("garment").with_mesh(box_mesh(min.into(), max.into()))
    }

    fn fitted_center(node: &SceneNode, fit: &FitTransform) -> Point3<f64> {
        node.world_bounds_with_root(&fit.to_node_transform()).center()
    }

    #[test]
    fn fullbody_reference_scenario() {
        let dress = garment([0.1, 0.2, -0.4], [0.5, 1.8, -0.1]);
        let report = fit_clothing(&dress, &avatar(), &FitParams::default()).unwrap();

        assert_eq!(report.clothing_type, ClothingType::Fullbody);
        assert_relative_eq!(report.aspect_ratio, 4.0, epsilon = 1e-12);
        assert_relative_eq!(report.transform.scale.x, 2.375, epsilon = 1e-9);
        assert_relative_eq!(report.transform.scale.y, 1.125, epsilon = 1e-9);
        assert_relative_eq!(report.transform.scale.z, 0.95 * 0.5 / 0.3, epsilon = 1e-9);
        assert_relative_eq!(report.target_position, Point3::new(0.0, -0.1, 0.0), epsilon = 1e-12);

        let center = fitted_center(&dress, &report.transform);
        assert_relative_eq!(center, report.target_position, epsilon = 1e-9);
    }

    #[test]
    fn top_anchors_above_chest() {
        let shirt = garment([-0.6, 0.0, -0.2], [0.6, 0.72, 0.2]);
        let data = avatar();
        let report = fit_clothing(&shirt, &data, &FitParams::default()).unwrap();

        assert_eq!(report.clothing_type, ClothingType::Top);
        let h = 0.4 * 2.0;
        assert_relative_eq!(report.transform.scale.x, 1.02 * 1.0 / 1.2, epsilon = 1e-9);
        assert_relative_eq!(report.transform.scale.y, h / 0.72, epsilon = 1e-9);
        assert_relative_eq!(report.transform.scale.z, 1.02 * 0.5 / 0.4, epsilon = 1e-9);
        assert_relative_eq!(report.target_position.y, data.key_points.chest.y + 0.1 * h, epsilon = 1e-12);
    }

    #[test]
    fn pants_anchor_below_waist() {
        // aspect 0.35 is pants under first-match-wins
        let pants = garment([-0.5, 0.0, -0.1], [0.5, 0.35, 0.1]);
        let data = avatar();
        let report = fit_clothing(&pants, &data, &FitParams::default()).unwrap();

        assert_eq!(report.clothing_type, ClothingType::Pants);
        let h = 0.5 * 2.0;
        assert_relative_eq!(report.transform.scale.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(report.transform.scale.y, h / 0.35, epsilon = 1e-9);
        assert_relative_eq!(report.target_position.y, data.key_points.waist.y - 0.3 * h, epsilon = 1e-12);
    }

    #[test]
    fn hat_is_uniform_and_above_head() {
        let hat = garment([-0.15, 0.0, -0.12], [0.15, 0.06, 0.12]);
        let data = avatar();
        let report = fit_clothing(&hat, &data, &FitParams::default()).unwrap();

        assert_eq!(report.clothing_type, ClothingType::Hat);
        assert!(report.transform.is_uniform(1e-12));
        let hat_height = 0.15 * 2.0;
        assert_relative_eq!(report.transform.scale.x, hat_height / 0.3, epsilon = 1e-9);
        assert_relative_eq!(report.target_position.y, data.key_points.head.y + 0.2 * hat_height, epsilon = 1e-12);
    }

    #[test]
    fn default_is_uniform_and_centered() {
        let blob = garment([0.0, 0.0, 0.0], [2.0, 1.0, 1.0]);
        let params = FitParams::new().with_clothing_type(ClothingType::Default);
        let report = fit_clothing(&blob, &avatar(), &params).unwrap();

        assert_eq!(report.clothing_type, ClothingType::Default);
        assert!(report.transform.is_uniform(1e-12));
        // min(1/2, 2/1, 0.5/1) * 1.02
        assert_relative_eq!(report.transform.scale.x, 0.5 * 1.02, epsilon = 1e-9);
        assert_relative_eq!(fitted_center(&blob, &report.transform), Point3::origin(), epsilon = 1e-9);
    }

    #[test]
    fn fullbody_scale_is_per_axis() {
        let dress = garment([-0.2, 0.0, -0.15], [0.2, 1.6, 0.15]);
        let fit = fit_clothing_to_avatar(&dress, &avatar()).unwrap();
        assert!(!fit.is_uniform(1e-6));
    }

    #[test]
    fn repeated_fits_are_identical() {
        let mut dress = garment([-0.2, 0.0, -0.15], [0.2, 1.6, 0.15]);
        let data = avatar();

        let first = fit_clothing_to_avatar(&dress, &data).unwrap();
        apply_fit(&mut dress, &first);
        let second = fit_clothing_to_avatar(&dress, &data).unwrap();
        let third = fit_clothing_to_avatar(&dress, &data).unwrap();

        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[test]
    fn prior_rotation_is_discarded() {
        let mut shirt = garment([-0.6, 0.0, -0.2], [0.6, 0.72, 0.2]);
        *shirt.transform_mut() = NodeTransform::identity()
            .with_rotation(Vector3::z(), FRAC_PI_3)
            .with_uniform_scale(3.0);

        let data = avatar();
        let report = fit_in_place(&mut shirt, &data, &FitParams::default()).unwrap();

        assert_eq!(report.clothing_type, ClothingType::Top);
        assert!(shirt.transform().rotation.angle() < 1e-12);
        let center = shirt.world_bounds().center();
        assert_relative_eq!(center, report.target_position, epsilon = 1e-9);
    }

    #[test]
    fn nested_geometry_is_centered() {
        let jacket = SceneNode::new("jacket")
            .with_child(
                garment([-0.3, 0.0, -0.1], [0.0, 0.3, 0.1]).with_transform(
                    NodeTransform::identity().with_position(Vector3::new(0.0, 0.3, 0.0)),
                ),
            )
            .with_child(garment([0.0, 0.0, -0.1], [0.3, 0.3, 0.1]));

        let data = avatar();
        let fit = fit_clothing_to_avatar(&jacket, &data).unwrap();
        let center = jacket.world_bounds_with_root(&fit.to_node_transform()).center();

        // 0.6 wide, 0.6 tall: jacket
        let expected_y = data.key_points.chest.y + 0.1 * 0.4 * 2.0;
        assert_relative_eq!(center, Point3::new(0.0, expected_y, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn flat_garment_is_degenerate() {
        let cape = garment([-0.5, 0.0, 0.0], [0.5, 1.0, 0.0]);
        assert_eq!(
            fit_clothing_to_avatar(&cape, &avatar()),
            Err(FitError::DegenerateGeometry { axis: Axis::Z })
        );
    }

    #[test]
    fn flat_avatar_is_rejected() {
        let board = AvatarData::from_bounds(
            Bounds3::new(Point3::new(-0.5, -1.0, 0.0), Point3::new(0.5, 1.0, 0.0)),
            &KeyPointFractions::default(),
        );
        let shirt = garment([-0.4, 0.0, -0.2], [0.4, 0.5, 0.2]);
        assert_eq!(
            fit_clothing_to_avatar(&shirt, &board),
            Err(FitError::DegenerateAvatar { axis: Axis::Z })
        );

        // A hat only reads the avatar's height.
        let cap = garment([-0.1, 0.0, -0.1], [0.1, 0.04, 0.1]);
        let report = fit_clothing(&cap, &board, &FitParams::default()).unwrap();
        assert_eq!(report.clothing_type, ClothingType::Hat);
        assert!(report.transform.scale.iter().all(|s| s.is_finite() && *s > 0.0));
    }

    #[test]
    fn flat_hat_still_fits() {
        // A hat only divides by its largest extent.
        let brim = garment([-0.2, 0.0, -0.2], [0.2, 0.0, 0.2]);
        let report = fit_clothing(&brim, &avatar(), &FitParams::default()).unwrap();
        assert_eq!(report.clothing_type, ClothingType::Hat);
        assert!(report.transform.is_uniform(1e-12));
    }

    #[test]
    fn zero_width_policies() {
        let strap = garment([0.0, 0.0, -0.1], [0.0, 1.0, 0.1]);
        let data = avatar();

        assert_eq!(
            fit_clothing_to_avatar(&strap, &data),
            Err(FitError::DegenerateGeometry { axis: Axis::X })
        );

        // Classified as fullbody, which then cannot divide by the width.
        let params = FitParams::new().with_zero_width_policy(ZeroWidthPolicy::Unbounded);
        assert_eq!(
            fit_clothing(&strap, &data, &params),
            Err(FitError::DegenerateGeometry { axis: Axis::X })
        );

        // Forcing a hat sidesteps the width entirely.
        let params = params.with_clothing_type(ClothingType::Hat);
        let report = fit_clothing(&strap, &data, &params).unwrap();
        assert!(report.aspect_ratio.is_infinite());
    }

    #[test]
    fn empty_garment_fails_measurement() {
        let err = fit_clothing_to_avatar(&SceneNode::new("nothing"), &avatar()).unwrap_err();
        assert!(matches!(err, FitError::Measure(_)));
    }

    #[test]
    fn failed_fit_leaves_node_unchanged() {
        let mut cape = garment([-0.5, 0.0, 0.0], [0.5, 1.0, 0.0])
            .with_transform(NodeTransform::identity().with_uniform_scale(2.0));
        let before = *cape.transform();
        assert!(fit_in_place(&mut cape, &avatar(), &FitParams::default()).is_err());
        assert_eq!(*cape.transform(), before);
    }
}
