//! Frame clock and adaptive quality controller.

pub(crate) mod frame_clock;
pub(crate) mod quality;
