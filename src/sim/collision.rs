//! Pixel-accurate collision between the bird and obstacle columns
//!
//! Both sprites are non-rectangular, so boxes would report hits in the
//! transparent corners. Masks are compared at their integer offset instead.

use glam::{IVec2, Vec2};

use super::bird::Bird;
use super::obstacle::Obstacle;

/// Where the bird touched an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionHit {
    /// Index into the obstacle slice
    pub index: usize,
    /// Overlapping pixel in the bird's mask coordinates
    pub point: IVec2,
}

/// Origin of `to` relative to `from`, snapped to whole pixels
#[inline]
pub fn mask_offset(from: Vec2, to: Vec2) -> IVec2 {
    to.floor().as_ivec2() - from.floor().as_ivec2()
}

/// First obstacle, in slice order, whose mask overlaps the bird's current frame
pub fn first_hit(bird: &Bird, obstacles: &[Obstacle]) -> Option<CollisionHit> {
    let mask = bird.current_mask();
    obstacles.iter().enumerate().find_map(|(index, obstacle)| {
        let offset = mask_offset(bird.position, obstacle.position);
        mask.overlap_point(obstacle.mask(), offset)
            .map(|point| CollisionHit { index, point })
    })
}

pub fn collides(bird: &Bird, obstacles: &[Obstacle]) -> bool {
    first_hit(bird, obstacles).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::assets::{AssetProvider, SpriteAtlas, names, procedural};
    use crate::consts::PIPE_GAP;
    use crate::sim::bird::BirdPhysics;
    use crate::sim::obstacle::PipePair;

    fn fixtures() -> (Bird, Rc<PipePair>) {
        let atlas: SpriteAtlas = procedural::atlas().unwrap();
        let frames = names::BIRD_FRAMES.map(|n| atlas.sprite(n).unwrap());
        let bird = Bird::new(frames, BirdPhysics::default());
        let pipes = Rc::new(PipePair::new(atlas.sprite(names::PIPE).unwrap(), PIPE_GAP));
        (bird, pipes)
    }

    #[test]
    fn test_no_obstacles_never_collide() {
        let (mut bird, _) = fixtures();
        for y in [-100.0, 0.0, 250.0, 600.0] {
            bird.position.y = y;
            assert!(!collides(&bird, &[]));
        }
    }

    #[test]
    fn test_above_gap_collides_inside_gap_does_not() {
        let (mut bird, pipes) = fixtures();
        let obstacle = Obstacle::new(pipes, 40.0, 250.0);
        assert_eq!(obstacle.gap_span(), (200.0, 300.0));
        bird.position.x = 50.0;

        bird.position.y = 150.0;
        assert!(collides(&bird, std::slice::from_ref(&obstacle)));

        bird.position.y = 250.0;
        assert!(!collides(&bird, std::slice::from_ref(&obstacle)));
    }

    #[test]
    fn test_below_gap_collides() {
        let (mut bird, pipes) = fixtures();
        let obstacles = [Obstacle::new(pipes, 40.0, 250.0)];
        bird.position = Vec2::new(50.0, 310.0);
        let hit = first_hit(&bird, &obstacles).unwrap();
        assert_eq!(hit.index, 0);
        assert!(bird.current_mask().get(hit.point.x, hit.point.y));
    }

    #[test]
    fn test_horizontally_clear_obstacle_misses() {
        let (mut bird, pipes) = fixtures();
        bird.position = Vec2::new(50.0, 150.0);
        // Column starts one pixel right of the bird's last column
        let obstacles = [Obstacle::new(pipes, 84.0, 250.0)];
        assert!(!collides(&bird, &obstacles));
    }

    #[test]
    fn test_reports_first_overlapping_obstacle() {
        let (mut bird, pipes) = fixtures();
        bird.position = Vec2::new(50.0, 150.0);
        let obstacles = [
            Obstacle::new(Rc::clone(&pipes), 200.0, 250.0),
            Obstacle::new(Rc::clone(&pipes), 40.0, 250.0),
            Obstacle::new(pipes, 45.0, 250.0),
        ];
        assert_eq!(first_hit(&bird, &obstacles).map(|h| h.index), Some(1));
    }

    #[test]
    fn test_offset_floors_fractional_positions() {
        assert_eq!(mask_offset(Vec2::new(50.0, 10.7), Vec2::new(41.9, -0.2)), IVec2::new(-9, -11));
    }
}
