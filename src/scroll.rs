use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config;

/// How far the user has scrolled through the whole document, as a
/// fraction in `[0, 1]`. A document no taller than the viewport has
/// nothing to scroll through, so it reports `0.0` rather than dividing
/// by zero.
pub fn document_progress(scroll_top: f64, viewport_height: f64, document_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// Vertical displacement of a parallax background layer for the given
/// scroll offset. The damping constant is `config::PARALLAX_DAMPING` in
/// current use; callers pass it in so the mapping stays a pure function.
pub fn parallax_offset(scroll_top: f64, damping: f64) -> f64 {
    scroll_top * damping
}

/// Which of `len` vertically stacked items the viewport midpoint is
/// over, given the section's viewport-relative top and height.
/// The index is clamped to `[0, len - 1]` regardless of how far past
/// the section the viewport has scrolled.
pub fn item_index(viewport_height: f64, section_top: f64, section_height: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let viewport_mid = viewport_height / 2.0;
    let progress = (viewport_mid - section_top) / section_height;
    let index = (progress * len as f64).floor();
    (index.max(0.0) as usize).min(len - 1)
}

/// Scroll-driven active-item selection. Returns `Some(index)` only while
/// the section midpoint is within `config::ACTIVE_ITEM_BAND_PX` of the
/// viewport midpoint; outside that band the caller keeps whatever index
/// it already had (including one picked manually), so `None` means
/// "no change", not "no selection".
pub fn active_item(
    viewport_height: f64,
    section_top: f64,
    section_height: f64,
    len: usize,
) -> Option<usize> {
    if len == 0 || section_height <= 0.0 {
        return None;
    }
    let viewport_mid = viewport_height / 2.0;
    let section_mid = section_top + section_height / 2.0;
    if (section_mid - viewport_mid).abs() >= config::ACTIVE_ITEM_BAND_PX {
        return None;
    }
    Some(item_index(viewport_height, section_top, section_height, len))
}

/// A window `scroll` subscription that is guaranteed to be released.
///
/// The handler runs once synchronously at attach time so the derived
/// state starts from the current scroll position instead of waiting for
/// the first scroll event, then on every scroll notification until the
/// handle is dropped. Holding the handle inside a `use_effect` cleanup
/// closure gives "subscribe on mount, unsubscribe on unmount".
pub struct ScrollListener {
    window: web_sys::Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach<F>(mut handler: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window()?;
        handler();
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { window, callback })
    }

    /// Current vertical scroll offset of the attached window.
    pub fn scroll_top(window: &web_sys::Window) -> f64 {
        window.scroll_y().unwrap_or(0.0)
    }

    /// Viewport height of the attached window.
    pub fn viewport_height(window: &web_sys::Window) -> f64 {
        window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    /// Full scrollable height of the document.
    pub fn document_height(window: &web_sys::Window) -> f64 {
        window
            .document()
            .and_then(|document| document.document_element())
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(0.0)
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_scroll_over_scrollable_range() {
        assert_eq!(document_progress(500.0, 1000.0, 2000.0), 0.5);
        assert_eq!(document_progress(0.0, 1000.0, 2000.0), 0.0);
        assert_eq!(document_progress(1000.0, 1000.0, 2000.0), 1.0);
    }

    #[test]
    fn progress_clamps_to_unit_interval() {
        assert_eq!(document_progress(5000.0, 1000.0, 2000.0), 1.0);
        assert_eq!(document_progress(-50.0, 1000.0, 2000.0), 0.0);
    }

    #[test]
    fn progress_of_unscrollable_document_is_zero() {
        // d == h must not divide by zero.
        let progress = document_progress(0.0, 1000.0, 1000.0);
        assert_eq!(progress, 0.0);
        assert!(progress.is_finite());
        // A document shorter than the viewport behaves the same way.
        assert_eq!(document_progress(10.0, 1000.0, 800.0), 0.0);
    }

    #[test]
    fn parallax_scales_by_damping() {
        assert_eq!(parallax_offset(100.0, 0.5), 50.0);
        assert_eq!(parallax_offset(0.0, 0.5), 0.0);
    }

    #[test]
    fn index_tracks_viewport_midpoint_through_thirds() {
        // 3 items, section three viewport-heights tall. The viewport
        // midpoint inside the first third selects item 0, inside the
        // second third item 1, inside the last third item 2.
        let viewport = 600.0;
        let height = 3.0 * viewport;
        // Midpoint 500px into the section: first third.
        assert_eq!(item_index(viewport, viewport / 2.0 - 500.0, height, 3), 0);
        // Midpoint 700px in: second third.
        assert_eq!(item_index(viewport, viewport / 2.0 - 700.0, height, 3), 1);
        // Midpoint 1300px in: last third.
        assert_eq!(item_index(viewport, viewport / 2.0 - 1300.0, height, 3), 2);
    }

    #[test]
    fn index_is_clamped_at_extreme_scroll_positions() {
        let viewport = 600.0;
        let height = 3.0 * viewport;
        // Section far below the viewport: midpoint sits before item 0.
        assert_eq!(item_index(viewport, 10_000.0, height, 3), 0);
        // Section scrolled far past: midpoint sits beyond the last item.
        assert_eq!(item_index(viewport, -10_000.0, height, 3), 2);
    }

    #[test]
    fn selection_only_updates_inside_proximity_band() {
        let viewport = 600.0;
        let height = 1_000.0;
        // Section midpoint aligned with the viewport midpoint: in band.
        let aligned_top = viewport / 2.0 - height / 2.0;
        assert!(active_item(viewport, aligned_top, height, 4).is_some());
        // Midpoints 200px apart: at the edge of the band, no update.
        assert_eq!(active_item(viewport, aligned_top + 200.0, height, 4), None);
        // Well outside the band, still no update.
        assert_eq!(active_item(viewport, aligned_top + 2_000.0, height, 4), None);
    }

    #[test]
    fn selection_handles_degenerate_sections() {
        assert_eq!(active_item(600.0, 0.0, 1_000.0, 0), None);
        assert_eq!(active_item(600.0, 0.0, 0.0, 3), None);
    }

    #[test]
    fn in_band_selection_is_clamped() {
        let viewport = 600.0;
        let height = 350.0;
        // Section slightly above center, shallow enough that the raw
        // index formula would overshoot the last item.
        let top = viewport / 2.0 - height + 10.0;
        let index = active_item(viewport, top, height, 2);
        assert!(matches!(index, Some(i) if i <= 1));
    }
}
