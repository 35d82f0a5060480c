//! Marker types.

/// Marker type describing a start of some period.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker type describing an end of some period.
#[derive(Clone, Copy, Debug)]
pub struct End;
