//! Marker layer: one circle per record
//!
//! Marks are positioned in plot coordinates (origin at the top-left of the
//! inner plotting area) and keyed by the record's place. The layer also owns
//! hit testing and turns the pointer into [`PointerEvent`]s.

use super::interaction::PointerEvent;
use crate::config::StyleConfig;
use crate::scale::{ContinuousScale, LinearScale, TimeScale};
use crate::types::{RaceTime, Record};
use egui::{Color32, Painter, Pos2, Vec2};
use std::collections::HashMap;

/// Fill category of a mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkFill {
    /// Rider with a doping allegation
    Doping,
    /// Rider without an allegation
    Clean,
}

impl MarkFill {
    pub fn for_record(record: &Record) -> Self {
        if record.has_allegation() {
            MarkFill::Doping
        } else {
            MarkFill::Clean
        }
    }

    pub fn color(&self, style: &StyleConfig) -> Color32 {
        let [r, g, b] = match self {
            MarkFill::Doping => style.doping_color,
            MarkFill::Clean => style.clean_color,
        };
        Color32::from_rgb(r, g, b)
    }
}

/// A single positioned marker
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    /// Record place, unique within the layer
    pub key: u32,
    /// Index of the record in the dataset
    pub index: usize,
    /// Centre in plot coordinates
    pub center: Pos2,
    pub radius: f32,
    pub fill: MarkFill,
    year: i32,
    time: RaceTime,
}

impl Mark {
    /// Whether `point` (plot coordinates) falls inside the circle
    pub fn contains(&self, point: Pos2) -> bool {
        (point - self.center).length_sq() <= self.radius * self.radius
    }

    /// The source values this mark was placed from
    pub fn data_values(&self) -> (i32, RaceTime) {
        (self.year, self.time)
    }
}

/// All marks of the chart, in paint order
#[derive(Debug, Clone, Default)]
pub struct MarkLayer {
    marks: Vec<Mark>,
    by_key: HashMap<u32, usize>,
}

impl MarkLayer {
    /// Place one mark per record
    pub fn new(records: &[Record], x: &LinearScale, y: &TimeScale, style: &StyleConfig) -> Self {
        let mut marks = Vec::with_capacity(records.len());
        let mut by_key = HashMap::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let fill = MarkFill::for_record(record);
            let center = Pos2::new(x.apply(record.year as f64) as f32, y.apply(record.time) as f32);

            if by_key.insert(record.rank, marks.len()).is_some() {
                tracing::warn!("Place {} appears more than once, later mark wins", record.rank);
            }
            marks.push(Mark {
                key: record.rank,
                index,
                center,
                radius: style.circle_radius,
                fill,
                year: record.year,
                time: record.time,
            });
        }

        Self { marks, by_key }
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Look up a mark by its key
    pub fn get(&self, key: u32) -> Option<&Mark> {
        self.by_key.get(&key).map(|&i| &self.marks[i])
    }

    /// Topmost mark under `point` (plot coordinates)
    ///
    /// Later marks are painted over earlier ones, so the search runs
    /// back to front.
    pub fn hit_test(&self, point: Pos2) -> Option<&Mark> {
        self.marks.iter().rev().find(|m| m.contains(point))
    }

    /// Translate the current pointer into hover events
    ///
    /// `pointer` is in screen points; `origin` is the screen position of the
    /// plot's top-left corner. Crossing straight from one marker to another
    /// yields a leave followed by an enter.
    pub fn dispatch(
        &self,
        hovered: Option<u32>,
        pointer: Option<Pos2>,
        origin: Pos2,
    ) -> Vec<PointerEvent> {
        let hit = pointer
            .and_then(|p| self.hit_test(p - origin.to_vec2()))
            .map(|m| m.key);

        let mut events = Vec::with_capacity(3);
        if hit != hovered {
            if hovered.is_some() {
                events.push(PointerEvent::Leave);
            }
            if let Some(key) = hit {
                events.push(PointerEvent::Enter(key));
            }
        }
        if let (Some(_), Some(pos)) = (hit, pointer) {
            events.push(PointerEvent::Move(pos));
        }
        events
    }

    /// Paint every mark, offset by the plot origin
    pub fn paint(&self, painter: &Painter, origin: Vec2, style: &StyleConfig) {
        let doping = MarkFill::Doping.color(style);
        let clean = MarkFill::Clean.color(style);
        for mark in &self.marks {
            let color = match mark.fill {
                MarkFill::Doping => doping,
                MarkFill::Clean => clean,
            };
            painter.circle_filled(mark.center + origin, mark.radius, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rank: u32, year: i32, time: &str, doping: &str) -> Record {
        Record {
            rank,
            year,
            time: RaceTime::parse(time).unwrap(),
            name: format!("Rider {}", rank),
            nationality: "FRA".to_string(),
            doping: doping.to_string(),
        }
    }

    fn layer(records: &[Record]) -> MarkLayer {
        let x = LinearScale::new((1990.0, 2010.0), (0.0, 200.0));
        let y = TimeScale::new(
            (RaceTime::parse("36:00").unwrap(), RaceTime::parse("40:00").unwrap()),
            (0.0, 240.0),
        );
        MarkLayer::new(records, &x, &y, &StyleConfig::default())
    }

    #[test]
    fn test_fill_predicate() {
        let style = StyleConfig::default();
        let doped = record(1, 2000, "37:00", "Admitted doping");
        let clean = record(2, 2000, "37:00", "");
        assert_eq!(MarkFill::for_record(&doped), MarkFill::Doping);
        assert_eq!(MarkFill::for_record(&clean), MarkFill::Clean);
        assert_eq!(MarkFill::Doping.color(&style), Color32::from_rgb(0xE2, 0x5A, 0x42));
        assert_eq!(MarkFill::Clean.color(&style), Color32::from_rgb(0x6B, 0xBB, 0xA1));

        // Any non-empty note counts, even blank
        let blank = record(3, 2000, "37:00", " ");
        assert_eq!(MarkFill::for_record(&blank), MarkFill::Doping);
    }

    #[test]
    fn test_positions() {
        let layer = layer(&[record(1, 2000, "38:00", "")]);
        let mark = layer.get(1).unwrap();
        assert_eq!(mark.center, Pos2::new(100.0, 120.0));
        assert_eq!(mark.radius, 7.0);
        assert_eq!(mark.data_values(), (2000, RaceTime::parse("38:00").unwrap()));
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let layer = layer(&[record(1, 2000, "38:00", ""), record(2, 2000, "38:00", "EPO")]);
        assert_eq!(layer.hit_test(Pos2::new(103.0, 121.0)).map(|m| m.key), Some(2));
        assert!(layer.hit_test(Pos2::new(110.0, 120.0)).is_none());
    }

    #[test]
    fn test_dispatch_sequences() {
        let layer = layer(&[record(1, 2000, "38:00", ""), record(2, 2010, "40:00", "")]);
        let origin = Pos2::new(110.0, 50.0);
        let on_first = Pos2::new(210.0, 170.0);
        let on_second = Pos2::new(310.0, 290.0);
        let off = Pos2::new(150.0, 60.0);

        assert_eq!(
            layer.dispatch(None, Some(on_first), origin),
            vec![PointerEvent::Enter(1), PointerEvent::Move(on_first)]
        );
        assert_eq!(
            layer.dispatch(Some(1), Some(on_first), origin),
            vec![PointerEvent::Move(on_first)]
        );
        assert_eq!(
            layer.dispatch(Some(1), Some(on_second), origin),
            vec![
                PointerEvent::Leave,
                PointerEvent::Enter(2),
                PointerEvent::Move(on_second)
            ]
        );
        assert_eq!(layer.dispatch(Some(2), Some(off), origin), vec![PointerEvent::Leave]);
        assert_eq!(layer.dispatch(Some(2), None, origin), vec![PointerEvent::Leave]);
        assert!(layer.dispatch(None, Some(off), origin).is_empty());
    }
}
