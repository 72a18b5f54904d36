//! Modulated line paths: waveform sampling, taper profiles, stroke decomposition and closed
//! polygon outlines.

pub(crate) mod shape;
pub(crate) mod stroke;
pub(crate) mod taper;
pub(crate) mod wave;
pub(crate) mod waveform;
