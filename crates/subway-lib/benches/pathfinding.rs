use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use subway_lib::{
    build_graph, plan_path, Distance, Network, PathFinder, PathRequest, Section, Sections,
    Station,
};

const LINES: i64 = 12;
const STATIONS_PER_LINE: i64 = 40;

/// A grid of lines: line `l` visits `l * STATIONS_PER_LINE + s` and shares
/// every fifth station with the next line.
static NETWORK: Lazy<Network> = Lazy::new(|| {
    let mut network = Network::new();
    for id in 1..=LINES * STATIONS_PER_LINE {
        network
            .insert_station(Station::new(id, format!("S{id}")))
            .expect("unique ids");
    }

    for line in 0..LINES {
        let base = line * STATIONS_PER_LINE;
        let id = network
            .create_line(
                format!("L{line}"),
                "grey",
                base + 1,
                base + 2,
                Distance::new(3).expect("positive"),
            )
            .expect("line created");
        for offset in 2..STATIONS_PER_LINE {
            network
                .add_section(
                    id,
                    base + offset,
                    base + offset + 1,
                    Distance::new(1 + offset % 4).expect("positive"),
                )
                .expect("end extension");
        }
    }

    for line in 0..LINES - 1 {
        let base = line * STATIONS_PER_LINE;
        let link = network
            .create_line(
                format!("Link{line}"),
                "black",
                base + 5,
                base + STATIONS_PER_LINE + 5,
                Distance::new(7).expect("positive"),
            )
            .expect("link created");
        network
            .add_section(
                link,
                base + STATIONS_PER_LINE + 5,
                base + STATIONS_PER_LINE + 25,
                Distance::new(30).expect("positive"),
            )
            .expect("link extension");
    }

    network
});

static REQUEST: Lazy<PathRequest> =
    Lazy::new(|| PathRequest::new("S1", format!("S{}", LINES * STATIONS_PER_LINE)));

fn bench_path_queries(c: &mut Criterion) {
    let network = &*NETWORK;
    let sections = network.sections();

    c.bench_function("plan_path_end_to_end", |b| {
        b.iter(|| {
            let plan = plan_path(black_box(network), black_box(&REQUEST)).expect("route");
            black_box(plan.distance);
        })
    });

    let finder = PathFinder::from_graph(build_graph(&sections));
    let source = network.resolve_station("S1").expect("source");
    let target = network
        .resolve_station(&format!("S{}", LINES * STATIONS_PER_LINE))
        .expect("target");
    c.bench_function("dijkstra_prebuilt_graph", |b| {
        b.iter(|| black_box(finder.find_path(source, target).expect("route")))
    });
}

fn bench_section_inserts(c: &mut Criterion) {
    c.bench_function("split_sections", |b| {
        b.iter(|| {
            let mut sections = Sections::new();
            let line = 1;
            let a = Station::new(1, "A");
            let z = Station::new(2, "Z");
            let first = Section::new(line, a.clone(), z, Distance::new(10_000).unwrap()).unwrap();
            sections.insert(first).unwrap();
            for id in 3..200 {
                let fresh = Station::new(id, "mid");
                let length = Distance::new(10_000 - id).unwrap();
                let section = Section::new(line, a.clone(), fresh, length).unwrap();
                sections.insert(section).unwrap();
            }
            black_box(sections.stations().len())
        })
    });
}

criterion_group!(benches, bench_path_queries, bench_section_inserts);
criterion_main!(benches);
