use super::controller::{AdvanceOutcome, AggregationController};

/// Remaining-distance threshold, in viewport units.
pub const DEFAULT_SCROLL_THRESHOLD: f32 = 200.0;

/// Position of a scrolled viewport over its content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub viewport: f32,
    pub content: f32,
}

impl ScrollMetrics {
    pub fn new(offset: f32, viewport: f32, content: f32) -> Self {
        Self {
            offset,
            viewport,
            content,
        }
    }

    /// Viewport parked at the very bottom of `content`.
    pub fn at_bottom(viewport: f32, content: f32) -> Self {
        Self::new((content - viewport).max(0.0), viewport, content)
    }

    /// Unscrolled distance below the viewport.
    pub fn remaining(&self) -> f32 {
        self.content - (self.offset + self.viewport)
    }
}

/// Turns scroll positions into advance requests.
///
/// There is no debounce: rapid events may all reach the controller, and
/// its single-flight guard turns the extras into no-ops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTrigger {
    threshold: f32,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl ScrollTrigger {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn near_bottom(&self, metrics: ScrollMetrics) -> bool {
        metrics.remaining() < self.threshold
    }

    /// Near the bottom, and the controller is neither advancing nor
    /// still seeding a search.
    pub fn should_fire(
        &self,
        controller: &AggregationController,
        metrics: ScrollMetrics,
    ) -> bool {
        self.near_bottom(metrics)
            && !controller.is_advancing()
            && !controller.is_loading()
    }

    /// Handle one scroll event. `None` means the trigger did not fire.
    pub async fn on_scroll(
        &self,
        controller: &AggregationController,
        metrics: ScrollMetrics,
    ) -> Option<AdvanceOutcome> {
        if !self.should_fire(controller, metrics) {
            return None;
        }
        Some(controller.advance().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_distance_is_content_below_viewport() {
        let metrics = ScrollMetrics::new(1000.0, 800.0, 2000.0);
        assert_eq!(metrics.remaining(), 200.0);
    }

    #[test]
    fn fires_strictly_below_threshold() {
        let trigger = ScrollTrigger::default();
        assert_eq!(trigger.threshold(), DEFAULT_SCROLL_THRESHOLD);
        assert!(!trigger.near_bottom(ScrollMetrics::new(1000.0, 800.0, 2000.0)));
        assert!(trigger.near_bottom(ScrollMetrics::new(1000.5, 800.0, 2000.0)));
        assert!(trigger.near_bottom(ScrollMetrics::at_bottom(800.0, 2000.0)));
    }

    #[test]
    fn short_content_is_always_near_bottom() {
        let metrics = ScrollMetrics::at_bottom(800.0, 300.0);
        assert_eq!(metrics.offset, 0.0);
        assert!(ScrollTrigger::default().near_bottom(metrics));
    }
}
