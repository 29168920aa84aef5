use serde::Serialize;

use crate::distance::Distance;
use crate::error::Result;
use crate::section::Section;
use crate::sections::{Placement, Sections};
use crate::station::Station;

/// Numeric identifier for a line.
pub type LineId = i64;

/// A named subway route owning one section chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    pub color: String,
    sections: Sections,
}

impl Line {
    /// Create a line without sections.
    pub fn new(id: LineId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            sections: Sections::new(),
        }
    }

    /// Create a line together with its first section.
    pub fn with_section(
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<Self> {
        let mut line = Self::new(id, name, color);
        line.add_section(up_station, down_station, distance)?;
        Ok(line)
    }

    pub fn update(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.name = name.into();
        self.color = color.into();
    }

    /// Add a section owned by this line.
    pub fn add_section(
        &mut self,
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<Placement> {
        let section = Section::new(self.id, up_station, down_station, distance)?;
        self.sections.insert(section)
    }

    pub fn remove_station(&mut self, station: &Station) -> Result<()> {
        self.sections.remove(station)
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn stations(&self) -> Vec<Station> {
        self.sections.stations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_owned_by_the_line() {
        let line = Line::with_section(
            7,
            "신분당선",
            "red",
            Station::new(1, "강남역"),
            Station::new(2, "양재역"),
            Distance::new(10).unwrap(),
        )
        .unwrap();

        assert_eq!(line.sections().len(), 1);
        assert!(line.sections().iter().all(|section| section.line() == 7));
        assert_eq!(line.stations().len(), 2);
    }

    #[test]
    fn update_changes_metadata_only() {
        let mut line = Line::with_section(
            1,
            "신분당선",
            "red",
            Station::new(1, "강남역"),
            Station::new(2, "양재역"),
            Distance::new(10).unwrap(),
        )
        .unwrap();

        line.update("구분당선", "blue");

        assert_eq!(line.name, "구분당선");
        assert_eq!(line.color, "blue");
        assert_eq!(line.sections().len(), 1);
    }
}
