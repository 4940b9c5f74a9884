use tracing::{debug, trace};

use crate::error::ChartResult;
use crate::interaction::{HoverState, HoverTransition, PointerPosition};
use crate::render::Renderer;

use super::{ChartEngine, TooltipView};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn hover_state(&self) -> &HoverState {
        self.interaction.hover()
    }

    #[must_use]
    pub fn hovered_name(&self) -> Option<&str> {
        self.interaction.hovered_name()
    }

    /// Pointer entered the bar keyed by `name`.
    ///
    /// Entering a bar while another is hovered leaves the previous one first.
    /// Names absent from the dataset are ignored.
    pub fn pointer_enter(&mut self, name: &str, x: f64, y: f64) -> HoverTransition {
        if !x.is_finite() || !y.is_finite() {
            return HoverTransition::Unchanged;
        }
        if self.dataset.find(name).is_none() {
            debug!(name, "ignoring pointer enter for unknown bar");
            return HoverTransition::Unchanged;
        }
        let transition = self
            .interaction
            .on_pointer_enter(name, PointerPosition::new(x, y));
        trace!(?transition, "pointer enter");
        transition
    }

    /// Pointer moved over the hovered bar; the tooltip follows it.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> HoverTransition {
        if !x.is_finite() || !y.is_finite() {
            return HoverTransition::Unchanged;
        }
        self.interaction.on_pointer_move(PointerPosition::new(x, y))
    }

    pub fn pointer_leave(&mut self) -> HoverTransition {
        let transition = self.interaction.on_pointer_leave();
        trace!(?transition, "pointer leave");
        transition
    }

    /// Routes a raw pointer position through bar hit-testing.
    ///
    /// Synthesizes the enter/move/leave events a pointer-event host would
    /// deliver for the bar under `(x, y)`.
    pub fn pointer_at(&mut self, x: f64, y: f64) -> ChartResult<HoverTransition> {
        if !x.is_finite() || !y.is_finite() {
            return Ok(HoverTransition::Unchanged);
        }
        let hit = self.bar_at(x, y)?;
        let current = self.interaction.hovered_name().map(str::to_owned);
        let transition = match (hit, current.as_deref()) {
            (Some(bar), Some(current)) if bar.name == current => self.pointer_move(x, y),
            (Some(bar), _) => self.pointer_enter(&bar.name, x, y),
            (None, Some(_)) => self.pointer_leave(),
            (None, None) => HoverTransition::Unchanged,
        };
        Ok(transition)
    }

    /// Tooltip for the hovered bar, anchored at the pointer plus the
    /// configured offset.
    #[must_use]
    pub fn tooltip(&self) -> Option<TooltipView> {
        let name = self.interaction.hovered_name()?;
        let pointer = self.interaction.pointer()?;
        let record = self.display_record(name)?;
        let offset = self.config.style.tooltip.pointer_offset_px;
        Some(TooltipView::for_record(
            record,
            &self.config.labels,
            pointer.x + offset,
            pointer.y + offset,
        ))
    }
}
