//! Test data builders for creating test objects

use cyclist_scatter::{RaceTime, RawRecord, Record};

/// Builder for wire-form records
pub struct RawRecordBuilder {
    record: RawRecord,
}

impl RawRecordBuilder {
    pub fn new(place: u32, year: i32, time: &str) -> Self {
        Self {
            record: RawRecord {
                time: time.to_string(),
                place,
                seconds: 0,
                name: format!("Rider {}", place),
                year,
                nationality: "FRA".to_string(),
                doping: String::new(),
                url: String::new(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.record.name = name.to_string();
        self
    }

    pub fn nationality(mut self, nationality: &str) -> Self {
        self.record.nationality = nationality.to_string();
        self
    }

    pub fn doping(mut self, doping: &str) -> Self {
        self.record.doping = doping.to_string();
        self
    }

    pub fn build(self) -> RawRecord {
        self.record
    }
}

/// Builder for normalised records
pub struct RecordBuilder {
    rank: u32,
    year: i32,
    time: RaceTime,
    name: String,
    nationality: String,
    doping: String,
}

impl RecordBuilder {
    pub fn new(rank: u32) -> Self {
        Self {
            rank,
            year: 2000,
            time: RaceTime::from_min_sec(37, 0).unwrap(),
            name: format!("Rider {}", rank),
            nationality: "ITA".to_string(),
            doping: String::new(),
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn time(mut self, time: &str) -> Self {
        self.time = RaceTime::parse(time).unwrap();
        self
    }

    pub fn doping(mut self, doping: &str) -> Self {
        self.doping = doping.to_string();
        self
    }

    pub fn build(self) -> Record {
        Record {
            rank: self.rank,
            year: self.year,
            time: self.time,
            name: self.name,
            nationality: self.nationality,
            doping: self.doping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = RecordBuilder::new(4)
            .year(1997)
            .time("36:55")
            .doping("Alleged drug use")
            .build();

        assert_eq!(record.rank, 4);
        assert_eq!(record.year, 1997);
        assert_eq!(record.time.format(), "36:55");
        assert!(record.has_allegation());
    }
}
