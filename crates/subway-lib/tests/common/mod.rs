//! Common test utilities and fixture helpers.
//!
//! Stations are numbered by their position in the fixtures so assertions can
//! compare plain identifier lists.
#![allow(dead_code)]

use subway_lib::{Distance, Line, Network, Section, Sections, Station, StationId};

pub fn station(id: StationId) -> Station {
    Station::new(id, format!("S{id}"))
}

pub fn distance(value: i64) -> Distance {
    Distance::new(value).expect("positive distance")
}

pub fn section(up: StationId, down: StationId, length: i64) -> Section {
    Section::new(1, station(up), station(down), distance(length)).expect("valid section")
}

/// Build a chain by inserting the given `(up, down, distance)` triples in order.
pub fn chain(triples: &[(StationId, StationId, i64)]) -> Sections {
    let mut sections = Sections::new();
    for &(up, down, length) in triples {
        sections
            .insert(section(up, down, length))
            .expect("fixture section attaches");
    }
    sections
}

pub fn station_ids(sections: &Sections) -> Vec<StationId> {
    sections.stations().iter().map(|station| station.id).collect()
}

pub fn shape(sections: &Sections) -> Vec<(StationId, StationId, u32)> {
    sections
        .iter()
        .map(|section| {
            (
                section.up_station().id,
                section.down_station().id,
                section.distance().value(),
            )
        })
        .collect()
}

/// Assert the chain is empty or a single simple path in travel order.
pub fn assert_single_path(sections: &Sections) {
    let edges = sections.edges();
    if edges.is_empty() {
        return;
    }

    for window in edges.windows(2) {
        assert_eq!(
            window[0].down_station(),
            window[1].up_station(),
            "sections must be stored in travel order"
        );
    }

    let stations = sections.stations();
    assert_eq!(stations.len(), edges.len() + 1, "no branching or cycles");
    let mut unique = stations.clone();
    unique.sort_by_key(|station| station.id);
    unique.dedup();
    assert_eq!(unique.len(), stations.len(), "stations appear once");
}

/// Seoul stations and lines used by the path-finding scenarios.
///
/// ```text
/// 교대역 --- 2호선 (10) --- 강남역
///   |
///   +--- 3호선 (1) ------+
///   +--- 신분당선 (10) ---+--- 남부터미널역 --- 3호선 (3) --- 양재역
/// ```
pub struct SeoulFixture {
    pub network: Network,
    pub gyodae: Station,
    pub gangnam: Station,
    pub yangjae: Station,
    pub nambu: Station,
}

pub fn seoul_fixture() -> SeoulFixture {
    let mut network = Network::new();
    let gyodae = network.add_station("교대역");
    let gangnam = network.add_station("강남역");
    let yangjae = network.add_station("양재역");
    let nambu = network.add_station("남부터미널역");

    network
        .create_line("2호선", "green", gyodae.id, gangnam.id, distance(10))
        .expect("line 2");
    let line3 = network
        .create_line("3호선", "orange", gyodae.id, nambu.id, distance(1))
        .expect("line 3");
    network
        .add_section(line3, nambu.id, yangjae.id, distance(3))
        .expect("line 3 extension");
    network
        .create_line("신분당선", "red", gyodae.id, nambu.id, distance(10))
        .expect("shinbundang");

    SeoulFixture {
        network,
        gyodae,
        gangnam,
        yangjae,
        nambu,
    }
}

pub fn line_stations(line: &Line) -> Vec<String> {
    line.stations()
        .into_iter()
        .map(|station| station.name)
        .collect()
}
