//! Collision detection
//!
//! The avatar is drawn as a circle but tested as the square box that
//! bounds its hit radius. An obstacle is solid everywhere in its column
//! except the gap.

use glam::Vec2;

use super::state::{EndCause, Obstacle};

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl HitBox {
    /// Square box bounding a circle
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Strict overlap with the horizontal span `[left, right]`
    pub fn overlaps_columns(&self, left: f32, right: f32) -> bool {
        self.max.x > left && self.min.x < right
    }
}

/// Check the avatar box against one obstacle of the given width
pub fn avatar_obstacle_collision(avatar: &HitBox, obstacle: &Obstacle, width: f32) -> bool {
    if !avatar.overlaps_columns(obstacle.x, obstacle.right_edge(width)) {
        return false;
    }
    avatar.top() < obstacle.gap_top || avatar.bottom() > obstacle.gap_bottom
}

/// Check the avatar box against the top and bottom of the playfield
pub fn avatar_out_of_bounds(avatar: &HitBox, extent: f32) -> bool {
    avatar.top() < 0.0 || avatar.bottom() > extent
}

/// Full end-of-run test. Obstacles are checked before the playfield edges.
pub fn check_end<'a>(
    avatar: &HitBox,
    obstacles: impl IntoIterator<Item = &'a Obstacle>,
    width: f32,
    extent: f32,
) -> Option<EndCause> {
    if obstacles
        .into_iter()
        .any(|o| avatar_obstacle_collision(avatar, o, width))
    {
        return Some(EndCause::Collision);
    }
    if avatar_out_of_bounds(avatar, extent) {
        return Some(EndCause::OutOfBounds);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle(x: f32, gap_top: f32, gap_bottom: f32) -> Obstacle {
        Obstacle {
            x,
            gap_top,
            gap_bottom,
            scored: false,
        }
    }

    #[test]
    fn test_hitbox_around() {
        let hb = HitBox::around(Vec2::new(90.0, 200.0), 14.0);
        assert_eq!(hb.min, Vec2::new(76.0, 186.0));
        assert_eq!(hb.max, Vec2::new(104.0, 214.0));
    }

    #[test]
    fn test_tall_box_hits_gap_bottom() {
        // Box spans [90, 310] vertically against a 100..250 gap
        let avatar = HitBox::around(Vec2::new(90.0, 200.0), 110.0);
        assert_eq!(avatar.top(), 90.0);
        assert_eq!(avatar.bottom(), 310.0);

        let pipes = [obstacle(60.0, 100.0, 250.0), obstacle(260.0, 100.0, 250.0)];
        assert!(avatar_obstacle_collision(&avatar, &pipes[0], 64.0));
        assert_eq!(
            check_end(&avatar, &pipes, 64.0, 640.0),
            Some(EndCause::Collision)
        );
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let avatar = HitBox::around(Vec2::new(90.0, 175.0), 14.0);
        let pipe = obstacle(70.0, 100.0, 250.0);
        assert!(!avatar_obstacle_collision(&avatar, &pipe, 64.0));
    }

    #[test]
    fn test_touching_gap_edge_is_safe() {
        // top == gap_top and bottom == gap_bottom are both allowed
        let avatar = HitBox::around(Vec2::new(90.0, 175.0), 75.0);
        let pipe = obstacle(70.0, 100.0, 250.0);
        assert!(!avatar_obstacle_collision(&avatar, &pipe, 64.0));
    }

    #[test]
    fn test_no_horizontal_overlap_no_collision() {
        let avatar = HitBox::around(Vec2::new(90.0, 20.0), 14.0);
        // Pipe starts exactly at the box's right edge
        let pipe = obstacle(104.0, 100.0, 250.0);
        assert!(!avatar_obstacle_collision(&avatar, &pipe, 64.0));
        // Pipe ends exactly at the box's left edge
        let pipe = obstacle(12.0, 100.0, 250.0);
        assert!(!avatar_obstacle_collision(&avatar, &pipe, 64.0));
    }

    #[test]
    fn test_out_of_bounds() {
        let extent = 640.0;
        assert!(!avatar_out_of_bounds(
            &HitBox::around(Vec2::new(90.0, 320.0), 14.0),
            extent
        ));
        assert!(avatar_out_of_bounds(
            &HitBox::around(Vec2::new(90.0, 13.0), 14.0),
            extent
        ));
        assert!(avatar_out_of_bounds(
            &HitBox::around(Vec2::new(90.0, 627.0), 14.0),
            extent
        ));
        // Touching the floor exactly is still in bounds
        assert!(!avatar_out_of_bounds(
            &HitBox::around(Vec2::new(90.0, 626.0), 14.0),
            extent
        ));
    }

    #[test]
    fn test_check_end_reports_bounds() {
        let avatar = HitBox::around(Vec2::new(90.0, 700.0), 14.0);
        let far = [obstacle(500.0, 100.0, 250.0)];
        assert_eq!(
            check_end(&avatar, &far, 64.0, 640.0),
            Some(EndCause::OutOfBounds)
        );
        let avatar = HitBox::around(Vec2::new(90.0, 320.0), 14.0);
        assert_eq!(check_end(&avatar, &far, 64.0, 640.0), None);
    }
}
