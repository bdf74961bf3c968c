//! Integration tests for rn-output.

#[cfg(test)]
mod helpers {
    use rn_core::{StationId, TrainId, Turn};
    use rn_network::{GridPoint, Network, NetworkBuilder};
    use rn_sim::{Movement, TurnRecord};

    pub fn network() -> Network {
        let mut b = NetworkBuilder::new();
        for (i, name) in ["a", "b", "c", "d"].into_iter().enumerate() {
            b.add_station(name, GridPoint::new(i as u32, 0));
        }
        b.build()
    }

    pub fn record(turn: u64, moves: &[(u32, u32)]) -> TurnRecord {
        TurnRecord {
            turn:  Turn(turn),
            moves: moves
                .iter()
                .map(|&(t, s)| Movement { train: TrainId(t), station: StationId(s) })
                .collect(),
        }
    }
}

// ── Text ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod text_tests {
    use super::helpers::{network, record};
    use crate::{TextWriter, TurnWriter};

    #[test]
    fn one_line_per_turn() {
        let net = network();
        let mut w = TextWriter::new(Vec::new());
        w.write_turn(&record(1, &[(0, 1), (1, 3)]), &net).unwrap();
        w.write_turn(&record(2, &[(0, 2), (1, 2)]), &net).unwrap();
        w.finish().unwrap();
        let out = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(out, "T1-b T2-d\nT1-c T2-c\n");
    }

    #[test]
    fn empty_turn_is_blank_line() {
        let net = network();
        let mut w = TextWriter::new(Vec::new());
        w.write_turn(&record(1, &[]), &net).unwrap();
        assert_eq!(w.into_inner(), b"\n");
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::helpers::{network, record};
    use crate::{CsvWriter, MovementRow, TurnWriter};

    #[test]
    fn header_written_on_create() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("turns.csv");
        let mut w = CsvWriter::create(&path).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["turn", "train", "station"]);
        assert_eq!(rdr.records().count(), 0);
    }

    #[test]
    fn one_row_per_movement() {
        let net = network();
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("turns.csv");
        let mut w = CsvWriter::create(&path).unwrap();
        w.write_turn(&record(1, &[(0, 1), (1, 3)]), &net).unwrap();
        w.write_turn(&record(2, &[(0, 2)]), &net).unwrap();
        w.finish().unwrap();
        // Second finish is a no-op.
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], "T1");
        assert_eq!(&rows[0][2], "b");
        assert_eq!(&rows[1][2], "d");
        assert_eq!(&rows[2][0], "2");
        assert_eq!(&rows[2][2], "c");
    }

    #[test]
    fn in_memory_sink() {
        let net = network();
        let mut w = CsvWriter::from_writer(Vec::new()).unwrap();
        w.write_turn(&record(3, &[(4, 0)]), &net).unwrap();
        let out = String::from_utf8(w.into_inner().unwrap()).unwrap();
        assert_eq!(out, "turn,train,station\n3,T5,a\n");
    }

    #[test]
    fn rows_keep_movement_order() {
        let net = network();
        let rows = MovementRow::from_record(&record(7, &[(2, 3), (0, 1)]), &net);
        let trains: Vec<_> = rows.iter().map(|r| r.train.as_str()).collect();
        assert_eq!(trains, ["T3", "T1"]);
        assert!(rows.iter().all(|r| r.turn == 7));
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use std::io;

    use rn_core::{RunConfig, Turn};
    use rn_network::{LoadedMap, Network};
    use rn_sim::{simulate, TurnObserver, TurnRecord};

    use super::helpers::{network, record};
    use crate::{CsvWriter, OutputError, OutputResult, TextWriter, TurnOutputObserver, TurnWriter};

    /// Fails on every call.
    struct Broken;

    impl TurnWriter for Broken {
        fn write_turn(&mut self, _: &TurnRecord, _: &Network) -> OutputResult<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "write").into())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Err(io::Error::new(io::ErrorKind::Other, "finish").into())
        }
    }

    fn diamond_map() -> LoadedMap {
        let mut net = rn_network::NetworkBuilder::new();
        let a = net.add_station("a", rn_network::GridPoint::new(0, 0));
        let b = net.add_station("b", rn_network::GridPoint::new(1, 0));
        let c = net.add_station("c", rn_network::GridPoint::new(2, 0));
        let d = net.add_station("d", rn_network::GridPoint::new(1, 1));
        net.add_connection(a, b);
        net.add_connection(b, c);
        net.add_connection(a, d);
        net.add_connection(d, c);
        LoadedMap { network: net.build(), origin: a, destination: c }
    }

    #[test]
    fn drives_text_and_csv_together() {
        let map = diamond_map();
        let writers = (TextWriter::new(Vec::new()), Some(CsvWriter::from_writer(Vec::new()).unwrap()));
        let mut obs = TurnOutputObserver::new(writers);
        simulate(&map, &RunConfig::new("a", "c", 2), &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let (text, csv) = obs.into_writer();
        assert_eq!(String::from_utf8(text.into_inner()).unwrap(), "T1-b T2-d\nT1-c T2-c\n");
        let csv = String::from_utf8(csv.unwrap().into_inner().unwrap()).unwrap();
        assert_eq!(csv.lines().count(), 5);
    }

    #[test]
    fn disabled_csv_is_skipped() {
        let net = network();
        let mut obs = TurnOutputObserver::new(None::<CsvWriter<Vec<u8>>>);
        obs.on_turn(&record(1, &[(0, 1)]), &net);
        obs.on_dispatch_end(Turn(1));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn keeps_first_error_only() {
        let net = network();
        let mut obs = TurnOutputObserver::new(Broken);
        obs.on_turn(&record(1, &[(0, 1)]), &net);
        obs.on_dispatch_end(Turn(1));
        match obs.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected the write error, got {other:?}"),
        }
        assert!(obs.take_error().is_none());
    }
}
