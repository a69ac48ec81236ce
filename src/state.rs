/// Orientation of the most recent transition. Only selects the animation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Direction {
    #[default]
    Forward,  // Incoming item enters from the trailing edge
    Backward, // Incoming item enters from the leading edge
}

/// Lifecycle of one animated slide on the stage.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SlidePhase {
    Entering, // Sliding in from off-stage
    Centered, // Resting in the middle of the stage
    Exiting,  // Sliding out towards off-stage
    Gone,     // Finished exiting, no longer drawn
}
