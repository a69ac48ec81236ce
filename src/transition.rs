//! Maps the direction flag onto slide offsets.
//!
//! Offsets are horizontal displacements from the stage centre in render
//! pixels: positive values lie towards the trailing (right) edge.

use crate::state::Direction;

/// How far an item travels while entering or leaving the stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlideDistance {
    /// Multiple of the stage width
    StageWidth(f32),
    /// Fixed number of pixels
    Pixels(f32),
}

impl SlideDistance {
    pub fn resolve(self, stage_width: f32) -> f32 {
        match self {
            SlideDistance::StageWidth(factor) => stage_width * factor,
            SlideDistance::Pixels(px) => px,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionStyle {
    pub distance: SlideDistance,
    pub slide_duration: f32,
    pub fade_duration: f32,
}

impl TransitionStyle {
    /// Offset the incoming item starts from.
    pub fn enter_offset(&self, direction: Direction, stage_width: f32) -> f32 {
        let distance = self.distance.resolve(stage_width);
        match direction {
            Direction::Forward => distance,
            Direction::Backward => -distance,
        }
    }

    /// Offset the outgoing item ends at.
    pub fn exit_offset(&self, direction: Direction, stage_width: f32) -> f32 {
        -self.enter_offset(direction, stage_width)
    }
}
