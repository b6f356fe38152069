/// Share of a card that must be on screen before it plays.
pub const AUTOPLAY_THRESHOLD: f64 = 0.7;

/// What a feed card's video should do after a visibility change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Play,
    PauseAndRewind,
}

impl Playback {
    pub fn for_ratio(intersection_ratio: f64) -> Self {
        if intersection_ratio >= AUTOPLAY_THRESHOLD {
            Self::Play
        } else {
            Self::PauseAndRewind
        }
    }
}
