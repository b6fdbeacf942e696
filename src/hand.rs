/// One of the three pointers on the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    /// Shortest, moves 30° per hour.
    Hour,

    /// Moves 6° per minute.
    Minute,

    /// Longest, moves 6° per second.
    Second,
}

impl Hand {
    /// Every hand, in the order they're painted.
    ///
    /// The hour hand comes last so that it ends up on top.
    pub const ALL: [Self; 3] = [Self::Second, Self::Minute, Self::Hour];
}
