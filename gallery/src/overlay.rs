//! Explore-gallery overlay state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The overlay is a full-screen layer holding an oversized canvas of product
//! cards. The Leptos view owns one [`GalleryOverlay`] per mount and forwards
//! pointer events, quiet-timer expiry and animation frames to it; the view
//! then paints [`GalleryOverlay::canvas_transform`] and
//! [`GalleryOverlay::placed_items`].
//!
//! LIFECYCLE
//! =========
//! `open` resets motion, clears the list and returns a [`LoadTicket`]. The
//! fetch runs outside this type; its result comes back through
//! [`GalleryOverlay::finish_load`] with the ticket. Results for a ticket that
//! is no longer current (overlay closed or re-opened in between) are dropped.
//! A failed fetch is logged and leaves the list empty with loading cleared.
//! [`GalleryOverlay::reconfigure`] replaces the tuning between opens without
//! resetting the generation counter.
//!
//! FRAME PROTOCOL
//! ==============
//! Pointer handlers return a [`PointerResponse`] telling the host whether to
//! schedule or cancel the frame loop and whether to (re)arm the quiet timer.
//! [`GalleryOverlay::tick`] returns `true` while another frame is needed.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use catalog::Product;

use crate::config::{GalleryConfig, MappingMode};
use crate::geom::{Point, Rect};
use crate::layout::{LayoutSlot, LayoutTable};
use crate::mapper::{CoordinateMapper, MapOutcome};
use crate::motion::MotionSmoother;
use crate::source::SourceError;

/// Identifies one open-and-fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// How [`GalleryOverlay::finish_load`] disposed of a fetch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { count: usize },
    Failed,
    /// The ticket was outdated; the result was dropped.
    Stale,
}

/// What the host should do with its frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDirective {
    Schedule,
    Cancel,
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerResponse {
    pub frames: FrameDirective,
    /// Restart the quiet-interval timer (momentum mode).
    pub arm_quiet_timer: bool,
}

impl PointerResponse {
    const IDLE: Self = Self { frames: FrameDirective::Keep, arm_quiet_timer: false };
}

/// A product paired with its canvas placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedItem<'a> {
    pub index: usize,
    pub product: &'a Product,
    pub slot: LayoutSlot,
}

pub struct GalleryOverlay {
    config: GalleryConfig,
    mapper: CoordinateMapper,
    smoother: MotionSmoother,
    open: bool,
    loading: bool,
    generation: u64,
    products: Vec<Product>,
    hovered: Option<String>,
}

impl GalleryOverlay {
    #[must_use]
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            mapper: CoordinateMapper::new(&config),
            smoother: MotionSmoother::new(&config),
            config,
            open: false,
            loading: false,
            generation: 0,
            products: Vec::new(),
            hovered: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> MappingMode {
        self.config.mapping_mode
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Swap in new tuning. Motion state is rebuilt; the load generation is
    /// kept so tickets handed out before the swap stay outdated.
    pub fn reconfigure(&mut self, config: GalleryConfig) {
        self.mapper = CoordinateMapper::new(&config);
        self.smoother = MotionSmoother::new(&config);
        self.config = config;
    }

    /// Open (or re-open) the overlay and start a new load cycle.
    pub fn open(&mut self) -> LoadTicket {
        self.generation += 1;
        self.open = true;
        self.loading = true;
        self.products.clear();
        self.hovered = None;
        self.mapper.reset();
        self.smoother.reset(Point::ZERO);
        LoadTicket(self.generation)
    }

    /// Close the overlay. Any glide stops and in-flight loads go stale.
    pub fn close(&mut self) {
        self.generation += 1;
        self.open = false;
        self.loading = false;
        self.products.clear();
        self.hovered = None;
        self.smoother.cancel_momentum();
    }

    /// Apply the result of the fetch started by `ticket`.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<Product>, SourceError>) -> LoadOutcome {
        if !self.open || ticket.0 != self.generation {
            log::debug!("gallery: dropping load result for ticket {} (current {})", ticket.0, self.generation);
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(products) => {
                self.products = products;
                LoadOutcome::Applied { count: self.products.len() }
            }
            Err(e) => {
                log::error!("gallery: error fetching products: {e}");
                self.products.clear();
                LoadOutcome::Failed
            }
        }
    }

    // ── Pointer input ───────────────────────────────────────────

    /// Place the canvas at its centering offset for `rect` (absolute mode).
    pub fn center(&mut self, rect: &Rect) {
        if self.mode() != MappingMode::Absolute {
            return;
        }
        if let Some(target) = self.mapper.centering_target(rect) {
            self.mapper.set_target(target);
            self.smoother.reset(target);
        }
    }

    pub fn pointer_enter(&mut self) -> PointerResponse {
        self.mapper.pointer_enter();
        PointerResponse::IDLE
    }

    pub fn pointer_move(&mut self, client: Point, rect: &Rect) -> PointerResponse {
        if !self.open {
            return PointerResponse::IDLE;
        }
        let outcome = self.mapper.pointer_move(client, rect);
        if self.mode() == MappingMode::Momentum {
            if outcome == MapOutcome::Ignored {
                return PointerResponse::IDLE;
            }
            self.smoother.track(self.mapper.target());
            return PointerResponse {
                frames: FrameDirective::Cancel,
                arm_quiet_timer: outcome.changed_target(),
            };
        }
        if outcome.changed_target() {
            PointerResponse { frames: FrameDirective::Schedule, arm_quiet_timer: false }
        } else {
            PointerResponse::IDLE
        }
    }

    pub fn pointer_leave(&mut self) -> PointerResponse {
        self.mapper.pointer_leave();
        if self.open && self.mode() == MappingMode::Centered {
            return PointerResponse { frames: FrameDirective::Schedule, arm_quiet_timer: false };
        }
        PointerResponse::IDLE
    }

    /// The quiet interval elapsed without a move. In momentum mode this
    /// launches the glide from the last pointer delta.
    pub fn pointer_stopped(&mut self) -> FrameDirective {
        if !self.open || self.mode() != MappingMode::Momentum {
            return FrameDirective::Keep;
        }
        let velocity = -(self.mapper.last_delta() * self.mapper.sensitivity());
        if self.smoother.launch(velocity) {
            FrameDirective::Schedule
        } else {
            FrameDirective::Keep
        }
    }

    /// Advance one animation frame of `dt_ms` milliseconds.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        if !self.open {
            return false;
        }
        let mut target = self.mapper.target();
        let moving = self.smoother.step(&mut target, dt_ms / 1000.0);
        self.mapper.set_target(target);
        moving
    }

    // ── Rendering ───────────────────────────────────────────────

    /// Smoothed offset to paint.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.smoother.rendered()
    }

    #[must_use]
    pub fn target(&self) -> Point {
        self.mapper.target()
    }

    /// CSS transform for the whole canvas.
    #[must_use]
    pub fn canvas_transform(&self) -> String {
        let Point { x, y } = self.offset();
        format!("translate3d({x:.2}px, {y:.2}px, 0)")
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutTable {
        &self.config.layout
    }

    #[must_use]
    pub fn placed_items(&self) -> Vec<PlacedItem<'_>> {
        self.config
            .layout
            .place(&self.products)
            .map(|(index, product, slot)| PlacedItem { index, product, slot })
            .collect()
    }

    // ── Hover / select ──────────────────────────────────────────

    pub fn hover(&mut self, product_id: &str) {
        self.hovered = Some(product_id.to_owned());
    }

    /// Clear hover, but only if `product_id` is the hovered item.
    pub fn unhover(&mut self, product_id: &str) {
        if self.hovered.as_deref() == Some(product_id) {
            self.hovered = None;
        }
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    #[must_use]
    pub fn is_hovered(&self, product_id: &str) -> bool {
        self.hovered.as_deref() == Some(product_id)
    }

    /// Select a product: returns its detail route and closes the overlay.
    pub fn select(&mut self, product_id: &str) -> Option<String> {
        let route = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .map(Product::route)?;
        self.close();
        Some(route)
    }
}
