//! Unit tests for rn-network.
//!
//! All tests use hand-written maps so they run without any fixture files.

#[cfg(test)]
mod helpers {
    use crate::{GridPoint, Network, NetworkBuilder};

    /// Diamond network.
    ///
    /// ```text
    ///   a(0,0) ── b(1,0) ── c(2,0)
    ///      └──── d(1,1) ────┘
    /// ```
    pub fn diamond() -> Network {
        let mut b = NetworkBuilder::new();
        let a = b.add_station("a", GridPoint::new(0, 0));
        let bb = b.add_station("b", GridPoint::new(1, 0));
        let c = b.add_station("c", GridPoint::new(2, 0));
        let d = b.add_station("d", GridPoint::new(1, 1));
        b.add_connection(a, bb);
        b.add_connection(bb, c);
        b.add_connection(a, d);
        b.add_connection(d, c);
        b.build()
    }

    pub const DIAMOND_MAP: &str = "\
stations:
a,0,0
b,1,0
c,2,0
d,1,1

connections:
a-b
b-c
a-d
d-c
";
}

// ── Builder & network structure ───────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use rn_core::StationId;

    use crate::{GridPoint, NetworkBuilder, NetworkError};

    #[test]
    fn empty_build() {
        let net = NetworkBuilder::new().build();
        assert_eq!(net.station_count(), 0);
        assert_eq!(net.connection_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn ids_follow_declaration_order() {
        let net = super::helpers::diamond();
        assert_eq!(net.lookup("a"), Some(StationId(0)));
        assert_eq!(net.lookup("d"), Some(StationId(3)));
        assert_eq!(net.name(StationId(2)), "c");
        assert_eq!(net.position(StationId(3)), GridPoint::new(1, 1));
    }

    #[test]
    fn connections_are_symmetric_and_sorted() {
        let net = super::helpers::diamond();
        assert_eq!(net.connection_count(), 4);
        let a = StationId(0);
        let c = StationId(2);
        assert_eq!(net.neighbors(a), &[StationId(1), StationId(3)]);
        assert_eq!(net.neighbors(c), &[StationId(1), StationId(3)]);
        assert!(net.are_connected(StationId(1), a));
        assert!(!net.are_connected(a, c));
    }

    #[test]
    fn duplicate_and_self_connections_collapse() {
        let mut b = NetworkBuilder::new();
        let x = b.add_station("x", GridPoint::new(0, 0));
        let y = b.add_station("y", GridPoint::new(0, 1));
        b.add_connection(x, y);
        b.add_connection(y, x);
        b.add_connection(x, x);
        let net = b.build();
        assert_eq!(net.connection_count(), 1);
        assert_eq!(net.neighbors(x), &[y]);
    }

    #[test]
    fn require_reports_missing_station() {
        let net = super::helpers::diamond();
        assert_eq!(
            net.require("zz").unwrap_err(),
            NetworkError::StationNotFound("zz".into())
        );
    }
}

// ── Working graph ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod working_graph {
    use rn_core::StationId;

    const A: StationId = StationId(0);
    const B: StationId = StationId(1);
    const C: StationId = StationId(2);
    const D: StationId = StationId(3);

    #[test]
    fn starts_as_copy_of_network() {
        let net = super::helpers::diamond();
        let g = net.working_graph();
        assert_eq!(g.station_count(), 4);
        assert_eq!(g.live_count(), 4);
        assert_eq!(g.degree(A), 2);
        assert_eq!(g.neighbors(A).collect::<Vec<_>>(), vec![B, D]);
    }

    #[test]
    fn sever_removes_both_directions() {
        let net = super::helpers::diamond();
        let mut g = net.working_graph();
        assert!(g.sever(A, B));
        assert!(!g.has_link(A, B));
        assert!(!g.has_link(B, A));
        assert_eq!(g.degree(A), 1);
        assert_eq!(g.degree(B), 1);
        // Already gone.
        assert!(!g.sever(B, A));
        // The immutable network is untouched.
        assert!(net.are_connected(A, B));
    }

    #[test]
    fn restore_outbound_is_one_sided() {
        let net = super::helpers::diamond();
        let mut g = net.working_graph();
        let saved = g.outbound(A).clone();
        g.sever(A, B);
        g.sever(A, D);
        assert_eq!(g.degree(A), 0);

        g.restore_outbound(A, saved);
        assert!(g.has_link(A, B));
        assert!(g.has_link(A, D));
        assert!(!g.has_link(B, A));
        assert!(!g.has_link(D, A));
    }

    #[test]
    fn retire_decrements_live_count_once() {
        let net = super::helpers::diamond();
        let mut g = net.working_graph();
        assert!(g.retire(C));
        assert!(!g.retire(C));
        assert!(!g.is_live(C));
        assert_eq!(g.live_count(), 3);
        // Links survive retirement.
        assert_eq!(g.degree(C), 2);
        for s in [A, B, D] {
            g.retire(s);
        }
        assert!(g.is_exhausted());
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Write;

    use rn_core::StationId;

    use crate::{load_map_file, load_map_reader, LoadError, TopologyError, MAX_STATIONS};

    fn topology_errors(map: &str, origin: &str, dest: &str) -> Vec<TopologyError> {
        match load_map_reader(map.as_bytes(), origin, dest) {
            Err(LoadError::Invalid(errors)) => errors,
            other => panic!("expected topology errors, got {other:?}"),
        }
    }

    #[test]
    fn loads_diamond() {
        let map = load_map_reader(super::helpers::DIAMOND_MAP.as_bytes(), "a", "c").unwrap();
        assert_eq!(map.network.station_count(), 4);
        assert_eq!(map.network.connection_count(), 4);
        assert_eq!(map.origin, StationId(0));
        assert_eq!(map.destination, StationId(2));
    }

    #[test]
    fn strips_spaces_and_comments() {
        let src = "\
# leading comment
stations:
  alpha , 0, 0   # first
beta,3,4
connections:
alpha - beta # only link
";
        let map = load_map_reader(src.as_bytes(), "alpha", "beta").unwrap();
        assert_eq!(map.network.station_count(), 2);
        assert!(map.network.are_connected(map.origin, map.destination));
    }

    #[test]
    fn loads_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(super::helpers::DIAMOND_MAP.as_bytes()).unwrap();
        let map = load_map_file(f.path(), "a", "c").unwrap();
        assert_eq!(map.network.station_count(), 4);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_map_file(std::path::Path::new("/no/such/map.txt"), "a", "b").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn invalid_name_and_duplicates_batched() {
        let src = "\
stations:
a,0,0
Bad,1,0
a,2,0
c,0,0
connections:
a-c
";
        let errors = topology_errors(src, "a", "c");
        assert!(errors.contains(&TopologyError::InvalidName { line: 3, name: "Bad".into() }));
        assert!(errors.contains(&TopologyError::DuplicateStation { line: 4, name: "a".into() }));
        assert!(errors.contains(&TopologyError::DuplicateCoordinates {
            line: 5,
            name: "c".into(),
            x: 0,
            y: 0,
        }));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn rejected_station_is_still_declared() {
        let src = "stations:\na,0,0\nc,0,0\nconnections:\na-c\n";
        let errors = topology_errors(src, "a", "c");
        assert_eq!(errors, vec![TopologyError::DuplicateCoordinates {
            line: 3,
            name: "c".into(),
            x: 0,
            y: 0,
        }]);
    }

    #[test]
    fn negative_and_non_integer_coordinates() {
        let src = "\
stations:
a,0,0
b,-1,0
c,x,2
connections:
";
        let errors = topology_errors(src, "a", "b");
        assert!(errors.contains(&TopologyError::NegativeCoordinates { line: 3, name: "b".into() }));
        assert!(errors.contains(&TopologyError::InvalidCoordinates { line: 4, name: "c".into() }));
    }

    #[test]
    fn malformed_records() {
        let src = "\
stations:
a,0
b,1,1
connections:
a-b-c
";
        let errors = topology_errors(src, "b", "b2");
        assert!(errors.contains(&TopologyError::MalformedStation { line: 2, record: "a,0".into() }));
        assert!(errors.contains(&TopologyError::MalformedConnection { line: 5, record: "a-b-c".into() }));
    }

    #[test]
    fn duplicate_reverse_connection_and_self_loop() {
        let src = "\
stations:
a,0,0
b,1,0
connections:
a-b
b-a
a-a
";
        let errors = topology_errors(src, "a", "b");
        assert_eq!(
            errors,
            vec![
                TopologyError::DuplicateConnection { line: 6, a: "b".into(), b: "a".into() },
                TopologyError::SelfLoop { line: 7, name: "a".into() },
            ]
        );
    }

    #[test]
    fn missing_sections() {
        let errors = topology_errors("a,0,0\n", "a", "b");
        assert!(errors.contains(&TopologyError::MissingStations));
        assert!(errors.contains(&TopologyError::MissingConnections));
        assert!(errors.contains(&TopologyError::OriginNotFound("a".into())));
    }

    #[test]
    fn too_many_stations_aborts() {
        let mut src = String::from("stations:\n");
        for i in 0..=MAX_STATIONS {
            src.push_str(&format!("station_{i},{i},{i}\n"));
        }
        src.push_str("connections:\nstation_0-station_1\n");
        let err = load_map_reader(src.as_bytes(), "station_0", "station_1").unwrap_err();
        assert!(matches!(err, LoadError::TooManyStations { limit } if limit == MAX_STATIONS));
    }

    #[test]
    fn exactly_max_stations_is_accepted() {
        let mut src = String::from("stations:\n");
        for i in 0..MAX_STATIONS {
            src.push_str(&format!("s{i},{i},0\n"));
        }
        src.push_str("connections:\ns0-s1\n");
        let map = load_map_reader(src.as_bytes(), "s0", "s1").unwrap();
        assert_eq!(map.network.station_count(), MAX_STATIONS);
    }
}
