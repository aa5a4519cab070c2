// Site-level constants. The scroll/animation numbers are presentational
// tuning values chosen by the designers, not derived, so they live here
// instead of being inlined at their call sites.

/// Damping factor applied to the raw scroll offset for the hero parallax.
pub const PARALLAX_DAMPING: f64 = 0.5;

/// In minimal shell mode the header is shown only while the page is
/// scrolled less than this many pixels from the top.
pub const HEADER_REVEAL_PX: f64 = 10.0;

/// A section only recomputes its scroll-driven active item while its
/// midpoint is within this distance of the viewport midpoint.
pub const ACTIVE_ITEM_BAND_PX: f64 = 200.0;

/// Fraction of a card that must enter the viewport before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Artificial latency of the contact-form submission stub.
pub const SUBMIT_STUB_DELAY_MS: u32 = 1_000;
