// File: crates/chart-core/src/interaction.rs
// Summary: Pointer hit-testing over hover zones, the hover state machine, and tooltip content.

use crate::format::format_value;
use crate::generator::Series;
use crate::layout::HoverZone;

/// Pointer input in surface pixels, independent of any windowing toolkit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Moved { x: f32, y: f32 },
    /// Pointer left the surface.
    Left,
}

/// Which sample is under the pointer, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    pub active_index: Option<usize>,
}

/// What a pointer event did to the hover state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverChange {
    /// Nothing was active and nothing is.
    Idle,
    Entered(usize),
    /// Moved within the already active zone.
    Tracked(usize),
    Switched { from: usize, to: usize },
    Exited(usize),
}

/// Sample whose zone contains `(x, y)`.
pub fn locate_pointer(x: f32, y: f32, zones: &[HoverZone]) -> Option<usize> {
    zones.iter().find(|z| z.rect.contains(x, y)).map(|z| z.index)
}

/// Pure hover state transition.
pub fn transition(state: HoverState, event: PointerEvent, zones: &[HoverZone]) -> (HoverState, HoverChange) {
    let hit = match event {
        PointerEvent::Moved { x, y } => locate_pointer(x, y, zones),
        PointerEvent::Left => None,
    };
    let change = match (state.active_index, hit) {
        (None, None) => HoverChange::Idle,
        (None, Some(i)) => HoverChange::Entered(i),
        (Some(a), Some(i)) if a == i => HoverChange::Tracked(i),
        (Some(a), Some(i)) => HoverChange::Switched { from: a, to: i },
        (Some(a), None) => HoverChange::Exited(a),
    };
    (HoverState { active_index: hit }, change)
}

/// What the host's tooltip widget should show.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    pub x: f32,
    pub y: f32,
    pub title: String,
    pub body: String,
}

impl Tooltip {
    pub fn hidden() -> Self {
        Self::default()
    }
}

/// Owns the hover state for the current geometry snapshot.
#[derive(Clone, Debug)]
pub struct InteractionController {
    state: HoverState,
    zones: Vec<HoverZone>,
    tooltip: Tooltip,
    /// Last position seen over the surface; `None` after the pointer left.
    pointer: Option<(f32, f32)>,
    offset: (f32, f32),
    unit: String,
}

impl InteractionController {
    pub fn new(offset: (f32, f32), unit: impl Into<String>) -> Self {
        Self {
            state: HoverState::default(),
            zones: Vec::new(),
            tooltip: Tooltip::hidden(),
            pointer: None,
            offset,
            unit: unit.into(),
        }
    }

    /// Swap in the zones from a fresh render and hit-test the last pointer
    /// position against them, so highlight and tooltip follow the new layout.
    pub fn attach(&mut self, zones: Vec<HoverZone>, series: &Series) -> HoverChange {
        self.zones = zones;
        match self.pointer {
            Some((x, y)) => self.handle(PointerEvent::Moved { x, y }, series),
            None => {
                self.state = HoverState::default();
                self.tooltip = Tooltip::hidden();
                HoverChange::Idle
            }
        }
    }

    /// Forget the hover and the pointer, e.g. after the series was replaced.
    pub fn reset(&mut self) {
        self.state = HoverState::default();
        self.tooltip = Tooltip::hidden();
        self.pointer = None;
    }

    pub fn handle(&mut self, event: PointerEvent, series: &Series) -> HoverChange {
        self.pointer = match event {
            PointerEvent::Moved { x, y } => Some((x, y)),
            PointerEvent::Left => None,
        };
        let (next, change) = transition(self.state, event, &self.zones);
        self.state = next;
        match (change, event) {
            (HoverChange::Entered(i) | HoverChange::Switched { to: i, .. }, PointerEvent::Moved { x, y }) => {
                match series.get(i) {
                    Some(sample) => {
                        self.tooltip = Tooltip {
                            visible: true,
                            x: x + self.offset.0,
                            y: y + self.offset.1,
                            title: sample.long_label.clone(),
                            body: format_value(sample.value, &self.unit),
                        };
                    }
                    None => {
                        self.state = HoverState::default();
                        self.tooltip = Tooltip::hidden();
                    }
                }
            }
            (HoverChange::Tracked(_), PointerEvent::Moved { x, y }) => {
                self.tooltip.x = x + self.offset.0;
                self.tooltip.y = y + self.offset.1;
            }
            (HoverChange::Exited(_), _) => self.tooltip = Tooltip::hidden(),
            _ => {}
        }
        tracing::trace!(?event, ?change, "hover transition");
        change
    }

    pub fn state(&self) -> HoverState { self.state }
    pub fn active_index(&self) -> Option<usize> { self.state.active_index }
    pub fn tooltip(&self) -> &Tooltip { &self.tooltip }
    pub fn zones(&self) -> &[HoverZone] { &self.zones }
}
