//! Ordered section chain for a single line.
//!
//! [`Sections`] keeps a line's sections as one simple directed path: every
//! station is the up-station of at most one section and the down-station of at
//! most one section, and the backing vector is kept in travel order so the
//! first section leaves the start terminal and the last one reaches the end
//! terminal.
//!
//! Insertion attaches a candidate at the front, splits an existing section
//! around a new station, or appends at the end. Removal drops a terminal
//! section or merges the two sections around an interior station.

use serde::Serialize;
use tracing::debug;

use crate::distance::Distance;
use crate::error::{Error, Result, TopologyViolation};
use crate::section::Section;
use crate::station::Station;

/// Where an inserted section landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The section became the new start of the line.
    Front,
    /// The section split an existing section sharing its up-station.
    SplitFromUp,
    /// The section split an existing section sharing its down-station.
    SplitFromDown,
    /// The section became the new end of the line (or its first section).
    End,
}

/// Sections of one line, kept in travel order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sections {
    sections: Vec<Section>,
}

impl Sections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current sections in travel order.
    pub fn edges(&self) -> &[Section] {
        &self.sections
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn contains_station(&self, station: &Station) -> bool {
        self.sections.iter().any(|section| section.touches(station))
    }

    /// Length of the whole line.
    pub fn total_distance(&self) -> u64 {
        self.sections
            .iter()
            .map(|section| u64::from(section.distance().value()))
            .sum()
    }

    /// Attach `candidate` to the line.
    ///
    /// A non-empty line only accepts a section with exactly one station
    /// already on it. Splitting an existing section requires the candidate to
    /// be strictly shorter than the section it splits.
    pub fn insert(&mut self, candidate: Section) -> Result<Placement> {
        self.validate_candidate(&candidate)?;

        let placement = if let Some(index) = self.front_anchor(&candidate) {
            self.sections.insert(index, candidate);
            Placement::Front
        } else if let Some(index) = self.position_by_up(candidate.up_station()) {
            self.split_from_up(index, &candidate)?;
            Placement::SplitFromUp
        } else if let Some(index) = self.position_by_down(candidate.down_station()) {
            self.split_from_down(index, &candidate)?;
            Placement::SplitFromDown
        } else {
            self.sections.push(candidate);
            Placement::End
        };

        debug!(
            placement = ?placement,
            sections = self.sections.len(),
            "inserted section"
        );
        Ok(placement)
    }

    /// Take `station` off the line.
    ///
    /// Terminal stations drop their section; an interior station merges the
    /// section arriving at it with the one leaving it.
    pub fn remove(&mut self, station: &Station) -> Result<()> {
        if self.sections.len() < 2 {
            return Err(Error::ChainTooShort {
                sections: self.sections.len(),
            });
        }
        if !self.contains_station(station) {
            return Err(Error::UnknownStation {
                station: station.name.clone(),
            });
        }

        match self.position_by_up(station) {
            None => {
                self.sections.pop();
                debug!(station = %station, "removed end terminal");
            }
            Some(0) => {
                self.sections.remove(0);
                debug!(station = %station, "removed start terminal");
            }
            Some(index) => {
                let previous = &self.sections[index - 1];
                let current = &self.sections[index];
                let merged = Section::new(
                    previous.line(),
                    previous.up_station().clone(),
                    current.down_station().clone(),
                    previous.distance().checked_add(current.distance())?,
                )?;
                self.sections[index - 1] = merged;
                self.sections.remove(index);
                debug!(station = %station, "merged sections around interior station");
            }
        }

        Ok(())
    }

    /// Stations in travel order, from the start terminal to the end terminal.
    pub fn stations(&self) -> Vec<Station> {
        let Some(mut current) = self.start_section() else {
            return Vec::new();
        };

        let mut stations = vec![current.up_station().clone()];
        for _ in 0..self.sections.len() {
            stations.push(current.down_station().clone());
            match self
                .sections
                .iter()
                .find(|section| section.up_station() == current.down_station())
            {
                Some(next) => current = next,
                None => break,
            }
        }
        stations
    }

    fn validate_candidate(&self, candidate: &Section) -> Result<()> {
        if self.sections.is_empty() {
            return Ok(());
        }

        let up_present = self.contains_station(candidate.up_station());
        let down_present = self.contains_station(candidate.down_station());
        let reason = match (up_present, down_present) {
            (true, true) => TopologyViolation::BothPresent,
            (false, false) => TopologyViolation::Disconnected,
            _ => return Ok(()),
        };

        Err(Error::InvalidTopology {
            up: candidate.up_station().name.clone(),
            down: candidate.down_station().name.clone(),
            reason,
        })
    }

    /// Index of the first section when the candidate ends at the start terminal.
    fn front_anchor(&self, candidate: &Section) -> Option<usize> {
        let index = self.position_by_up(candidate.down_station())?;
        if self.position_by_down(candidate.down_station()).is_some() {
            return None;
        }
        Some(index)
    }

    fn start_section(&self) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| self.position_by_down(section.up_station()).is_none())
    }

    fn position_by_up(&self, station: &Station) -> Option<usize> {
        self.sections
            .iter()
            .position(|section| section.up_station() == station)
    }

    fn position_by_down(&self, station: &Station) -> Option<usize> {
        self.sections
            .iter()
            .position(|section| section.down_station() == station)
    }

    /// `standard.up -> candidate.down -> standard.down`
    fn split_from_up(&mut self, index: usize, candidate: &Section) -> Result<()> {
        let standard = &self.sections[index];
        let remainder = split_remainder(standard.distance(), candidate.distance())?;

        let head = Section::new(
            standard.line(),
            standard.up_station().clone(),
            candidate.down_station().clone(),
            candidate.distance(),
        )?;
        let tail = Section::new(
            standard.line(),
            candidate.down_station().clone(),
            standard.down_station().clone(),
            remainder,
        )?;

        self.sections[index] = head;
        self.sections.insert(index + 1, tail);
        Ok(())
    }

    /// `standard.up -> candidate.up -> standard.down`
    fn split_from_down(&mut self, index: usize, candidate: &Section) -> Result<()> {
        let standard = &self.sections[index];
        let remainder = split_remainder(standard.distance(), candidate.distance())?;

        let head = Section::new(
            standard.line(),
            standard.up_station().clone(),
            candidate.up_station().clone(),
            remainder,
        )?;
        let tail = Section::new(
            standard.line(),
            candidate.up_station().clone(),
            standard.down_station().clone(),
            candidate.distance(),
        )?;

        self.sections[index] = head;
        self.sections.insert(index + 1, tail);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Sections {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

fn split_remainder(existing: Distance, requested: Distance) -> Result<Distance> {
    if requested >= existing {
        return Err(Error::DistanceTooLong {
            requested: requested.value(),
            available: existing.value(),
        });
    }
    existing.checked_sub(requested)
}
