use serde::{Deserialize, Serialize};

/// Pointer location in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Hover state of the bar layer. At most one bar is hovered at a time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering {
        name: String,
        pointer: PointerPosition,
    },
}

/// Observable effect of one pointer event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverTransition {
    /// Idle → Hovering.
    Entered { name: String },
    /// Hovering(a) → Hovering(b); `a` was left implicitly.
    Switched { from: String, to: String },
    /// Same bar, new pointer position.
    Tracked,
    /// Hovering → Idle.
    Left { name: String },
    /// Event did not change the state.
    Unchanged,
}

/// Pointer-driven hover state machine.
///
/// Transitions are explicit so they can be exercised without a drawing
/// surface. Every method is a single atomic step; callers serialize events.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    hover: HoverState,
}

impl InteractionState {
    #[must_use]
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    #[must_use]
    pub fn hovered_name(&self) -> Option<&str> {
        match &self.hover {
            HoverState::Idle => None,
            HoverState::Hovering { name, .. } => Some(name.as_str()),
        }
    }

    #[must_use]
    pub fn pointer(&self) -> Option<PointerPosition> {
        match &self.hover {
            HoverState::Idle => None,
            HoverState::Hovering { pointer, .. } => Some(*pointer),
        }
    }

    /// Pointer entered the bar keyed by `name`.
    pub fn on_pointer_enter(&mut self, name: &str, pointer: PointerPosition) -> HoverTransition {
        let previous = std::mem::replace(
            &mut self.hover,
            HoverState::Hovering {
                name: name.to_owned(),
                pointer,
            },
        );
        match previous {
            HoverState::Idle => HoverTransition::Entered {
                name: name.to_owned(),
            },
            HoverState::Hovering { name: from, .. } if from == name => HoverTransition::Tracked,
            HoverState::Hovering { name: from, .. } => HoverTransition::Switched {
                from,
                to: name.to_owned(),
            },
        }
    }

    /// Pointer moved while over the hovered bar. Ignored when idle.
    pub fn on_pointer_move(&mut self, position: PointerPosition) -> HoverTransition {
        match &mut self.hover {
            HoverState::Idle => HoverTransition::Unchanged,
            HoverState::Hovering { pointer, .. } => {
                *pointer = position;
                HoverTransition::Tracked
            }
        }
    }

    pub fn on_pointer_leave(&mut self) -> HoverTransition {
        match std::mem::take(&mut self.hover) {
            HoverState::Idle => HoverTransition::Unchanged,
            HoverState::Hovering { name, .. } => HoverTransition::Left { name },
        }
    }

    /// Drops any hover, e.g. when the dataset is replaced.
    pub fn reset(&mut self) {
        self.hover = HoverState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::{HoverState, HoverTransition, InteractionState, PointerPosition};

    #[test]
    fn enter_move_leave_cycle() {
        let mut state = InteractionState::default();
        assert_eq!(
            state.on_pointer_enter("Lion", PointerPosition::new(10.0, 20.0)),
            HoverTransition::Entered {
                name: "Lion".to_owned()
            }
        );
        assert_eq!(
            state.on_pointer_move(PointerPosition::new(15.0, 25.0)),
            HoverTransition::Tracked
        );
        assert_eq!(state.pointer(), Some(PointerPosition::new(15.0, 25.0)));
        assert_eq!(
            state.on_pointer_leave(),
            HoverTransition::Left {
                name: "Lion".to_owned()
            }
        );
        assert_eq!(state.hover(), &HoverState::Idle);
    }

    #[test]
    fn move_and_leave_while_idle_are_ignored() {
        let mut state = InteractionState::default();
        assert_eq!(
            state.on_pointer_move(PointerPosition::new(1.0, 1.0)),
            HoverTransition::Unchanged
        );
        assert_eq!(state.on_pointer_leave(), HoverTransition::Unchanged);
        assert!(state.hovered_name().is_none());
    }
}
