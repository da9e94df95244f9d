//! Tooltip that trails the pointer over a hovered marker
//!
//! Two states: hidden when nothing is hovered, visible when a record is.
//! Transitions happen synchronously with the pointer events applied to
//! [`HoverState`]; there is no delay or fade.

use super::interaction::HoverState;
use crate::types::Record;
use egui::{Pos2, RichText, Vec2};

/// Shown in place of an empty allegation note
pub const NO_ALLEGATIONS: &str = "No doping allegations";

/// Tooltip state derived from the hover state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipState {
    Hidden,
    Visible { key: u32 },
}

impl From<&HoverState> for TooltipState {
    fn from(hover: &HoverState) -> Self {
        match hover.hovered {
            Some(key) => TooltipState::Visible { key },
            None => TooltipState::Hidden,
        }
    }
}

/// Content and placement of a visible tooltip
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipView {
    pub key: u32,
    /// `Name (Nationality)`
    pub heading: String,
    pub year: i32,
    pub place: u32,
    /// `MM:SS`
    pub time: String,
    pub allegation: String,
    /// Top-left corner in screen points
    pub position: Pos2,
}

impl TooltipView {
    /// Build the view for `record` with the pointer at `pointer`
    pub fn new(record: &Record, pointer: Pos2, offset: Vec2) -> Self {
        let allegation = if record.has_allegation() {
            record.doping.clone()
        } else {
            NO_ALLEGATIONS.to_string()
        };

        Self {
            key: record.rank,
            heading: format!("{} ({})", record.name, record.nationality),
            year: record.year,
            place: record.rank,
            time: record.time.format(),
            allegation,
            position: pointer + offset,
        }
    }

    /// Body lines under the heading
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Year: {}", self.year),
            format!("Place: {}", self.place),
            format!("Time: {}", self.time),
        ]
    }

    /// Paint the panel as a foreground area
    pub fn show(&self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("cyclist_tooltip"))
            .order(egui::Order::Tooltip)
            .fixed_pos(self.position)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(260.0);
                    ui.label(RichText::new(&self.heading).strong());
                    ui.separator();
                    for line in self.lines() {
                        ui.label(line);
                    }
                    ui.add_space(4.0);
                    ui.label(RichText::new(&self.allegation).italics());
                });
            });
    }
}

/// Resolves the hover state into a tooltip view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipController {
    offset: Vec2,
}

impl TooltipController {
    /// `offset` is added to the pointer position to place the panel
    pub fn new(offset: Vec2) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn state(&self, hover: &HoverState) -> TooltipState {
        TooltipState::from(hover)
    }

    /// The view to paint, or `None` when hidden
    ///
    /// `lookup` maps a marker key back to its record.
    pub fn view<'a>(
        &self,
        hover: &HoverState,
        lookup: impl FnOnce(u32) -> Option<&'a Record>,
    ) -> Option<TooltipView> {
        match self.state(hover) {
            TooltipState::Hidden => None,
            TooltipState::Visible { key } => {
                let record = lookup(key)?;
                Some(TooltipView::new(record, hover.pointer, self.offset))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::interaction::PointerEvent;
    use crate::types::RaceTime;

    fn record(doping: &str) -> Record {
        Record {
            rank: 12,
            year: 2004,
            time: RaceTime::parse("37:36").unwrap(),
            name: "Lance Armstrong".to_string(),
            nationality: "USA".to_string(),
            doping: doping.to_string(),
        }
    }

    #[test]
    fn test_position_trails_pointer() {
        let view = TooltipView::new(&record(""), Pos2::new(500.0, 300.0), Vec2::new(25.0, -25.0));
        assert_eq!(view.position, Pos2::new(525.0, 275.0));
    }

    #[test]
    fn test_content() {
        let view = TooltipView::new(&record("Stripped of titles"), Pos2::ZERO, Vec2::ZERO);
        assert_eq!(view.heading, "Lance Armstrong (USA)");
        assert_eq!(
            view.lines(),
            [
                "Year: 2004".to_string(),
                "Place: 12".to_string(),
                "Time: 37:36".to_string()
            ]
        );
        assert_eq!(view.allegation, "Stripped of titles");

        let clean = TooltipView::new(&record(""), Pos2::ZERO, Vec2::ZERO);
        assert_eq!(clean.allegation, NO_ALLEGATIONS);
    }

    #[test]
    fn test_state_machine() {
        let controller = TooltipController::new(Vec2::new(25.0, -25.0));
        let rec = record("");
        let mut hover = HoverState::default();

        assert_eq!(controller.state(&hover), TooltipState::Hidden);
        assert!(controller.view(&hover, |_| Some(&rec)).is_none());

        hover.apply(PointerEvent::Enter(12));
        hover.apply(PointerEvent::Move(Pos2::new(100.0, 100.0)));
        assert_eq!(controller.state(&hover), TooltipState::Visible { key: 12 });
        let view = controller.view(&hover, |_| Some(&rec)).unwrap();
        assert_eq!(view.position, Pos2::new(125.0, 75.0));

        hover.apply(PointerEvent::Move(Pos2::new(110.0, 90.0)));
        let view = controller.view(&hover, |_| Some(&rec)).unwrap();
        assert_eq!(view.position, Pos2::new(135.0, 65.0));

        hover.apply(PointerEvent::Leave);
        assert_eq!(controller.state(&hover), TooltipState::Hidden);
        assert!(controller.view(&hover, |_| Some(&rec)).is_none());
    }

    #[test]
    fn test_unknown_key_hides() {
        let controller = TooltipController::new(Vec2::ZERO);
        let mut hover = HoverState::default();
        hover.apply(PointerEvent::Enter(99));
        assert!(controller.view(&hover, |_| None).is_none());
    }
}
