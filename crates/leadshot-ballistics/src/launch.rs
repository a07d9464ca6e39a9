//! Closed-form launch pitch for a constant-speed, gravity-affected shot.
//!
//! Solves `v⁴ − g(g·d² + 2·Δz·v²) ≥ 0` and takes the low-arc root,
//! the flatter of the two trajectories that pass through the point.
//! The root is evaluated as `(g·d² + 2·Δz·v²) / (d·(v² + √root))`, which
//! stays accurate as `g → 0` and equals the line-of-sight elevation at `g = 0`.

use glam::Vec3;
use leadshot_core::angles::length_2d;
use leadshot_core::Projectile;

/// Pitch angle (degrees) that lands `projectile` on `target_position`.
///
/// Returns `None` when the discriminant is negative: the point is out of
/// reach at this launch speed and gravity. Points directly above or below
/// the muzzle give ±90°, and the muzzle itself gives 0°.
pub fn solve_launch_angle(projectile: &Projectile, target_position: Vec3, gravity: f32) -> Option<f32> {
    let g = projectile.effective_gravity(gravity);
    let delta = target_position - projectile.origin;
    let distance_2d = length_2d(delta);

    let v2 = projectile.launch_speed * projectile.launch_speed;
    let lift = g * distance_2d * distance_2d + 2.0 * delta.z * v2;
    let root = v2 * v2 - g * lift;
    if root < 0.0 {
        return None;
    }

    let angle = lift.atan2(distance_2d * (v2 + root.sqrt()));
    Some(angle.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_gravity_matches_elevation_angle() {
        let p = Projectile::new(Vec3::ZERO, 300.0, 0.0);
        let target = Vec3::new(100.0, 0.0, 20.0);
        let angle = solve_launch_angle(&p, target, 800.0).unwrap();
        let expected = 20.0_f32.atan2(100.0).to_degrees();
        assert!((angle - expected).abs() < 1e-4, "expected {expected}, got {angle}");
    }

    #[test]
    fn test_gravity_raises_pitch_above_line_of_sight() {
        let p = Projectile::new(Vec3::ZERO, 300.0, 1.0);
        let angle = solve_launch_angle(&p, Vec3::new(600.0, 0.0, 0.0), 9.81).unwrap();
        assert!(angle > 0.0, "level target under gravity needs positive pitch, got {angle}");
        assert!(angle < 45.0, "low-arc solution must be under 45°, got {angle}");
    }

    #[test]
    fn test_discriminant_boundary() {
        // v = 100, g = 10, level target: max range is v²/g = 1000.
        let p = Projectile::new(Vec3::ZERO, 100.0, 1.0);
        assert!(solve_launch_angle(&p, Vec3::new(999.0, 0.0, 0.0), 10.0).is_some());
        assert!(solve_launch_angle(&p, Vec3::new(1001.0, 0.0, 0.0), 10.0).is_none());
    }

    #[test]
    fn test_boundary_uses_horizontal_distance_only() {
        // Same 2D distance split across x and y must behave identically.
        let p = Projectile::new(Vec3::ZERO, 100.0, 1.0);
        let inside = Vec3::new(999.0 / 2f32.sqrt(), 999.0 / 2f32.sqrt(), 0.0);
        let outside = Vec3::new(1001.0 / 2f32.sqrt(), 1001.0 / 2f32.sqrt(), 0.0);
        assert!(solve_launch_angle(&p, inside, 10.0).is_some());
        assert!(solve_launch_angle(&p, outside, 10.0).is_none());
    }

    #[test]
    fn test_gravity_multiplier_scales_reach() {
        let heavy = Projectile::new(Vec3::ZERO, 100.0, 2.0);
        assert!(solve_launch_angle(&heavy, Vec3::new(600.0, 0.0, 0.0), 10.0).is_none());
        let light = Projectile::new(Vec3::ZERO, 100.0, 0.5);
        assert!(solve_launch_angle(&light, Vec3::new(1500.0, 0.0, 0.0), 10.0).is_some());
    }

    #[test]
    fn test_directly_overhead() {
        let p = Projectile::new(Vec3::ZERO, 300.0, 1.0);
        assert_eq!(solve_launch_angle(&p, Vec3::new(0.0, 0.0, 100.0), 9.81), Some(90.0));
        assert_eq!(solve_launch_angle(&p, Vec3::new(0.0, 0.0, -100.0), 9.81), Some(-90.0));
        assert_eq!(solve_launch_angle(&p, Vec3::ZERO, 9.81), Some(0.0));
    }

    #[test]
    fn test_pitch_converges_to_elevation_as_gravity_vanishes() {
        let target = Vec3::new(100.0, 0.0, 20.0);
        let elevation = 20.0_f32.atan2(100.0).to_degrees();

        let mut last = elevation;
        for multiplier in [0.0, 1e-6, 1e-4, 1e-2] {
            let p = Projectile::new(Vec3::ZERO, 300.0, multiplier);
            let angle = solve_launch_angle(&p, target, 9.81).unwrap();
            assert!(
                (angle - elevation).abs() < 0.01,
                "multiplier {multiplier}: pitch {angle} should be near elevation {elevation}"
            );
            assert!(
                angle >= last - 1e-4,
                "multiplier {multiplier}: pitch {angle} dropped below {last}"
            );
            last = angle;
        }
    }

    #[test]
    fn test_flat_fast_shot_keeps_precision() {
        // tan θ = g·d / (v² + √(v⁴ − g²d²)) ≈ 4.905e-4 rad.
        let p = Projectile::new(Vec3::ZERO, 1000.0, 1.0);
        let angle = solve_launch_angle(&p, Vec3::new(100.0, 0.0, 0.0), 9.81).unwrap();
        assert!((angle - 0.028_104).abs() < 1e-5, "expected ≈0.028104°, got {angle}");
    }

    #[test]
    fn test_zero_gravity_straight_up_and_down() {
        let p = Projectile::new(Vec3::ZERO, 300.0, 0.0);
        assert_eq!(solve_launch_angle(&p, Vec3::new(0.0, 0.0, 50.0), 9.81), Some(90.0));
        assert_eq!(solve_launch_angle(&p, Vec3::new(0.0, 0.0, -50.0), 9.81), Some(-90.0));
    }

    #[test]
    fn test_directly_overhead_out_of_reach() {
        // Needs v² ≥ 2·g·Δz: 300² = 90000 < 2·800·100.
        let p = Projectile::new(Vec3::ZERO, 300.0, 1.0);
        assert_eq!(solve_launch_angle(&p, Vec3::new(0.0, 0.0, 100.0), 800.0), None);
    }
}
