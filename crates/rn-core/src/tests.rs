//! Unit tests for rn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{StationId, TrainId};

    #[test]
    fn index_roundtrip() {
        let id = StationId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StationId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(StationId(0) < StationId(1));
        assert!(TrainId(100) > TrainId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(StationId::INVALID.0, u32::MAX);
        assert_eq!(TrainId::INVALID.0, u32::MAX);
    }

    #[test]
    fn train_label_is_one_based() {
        assert_eq!(TrainId(0).to_string(), "T1");
        assert_eq!(TrainId(9).to_string(), "T10");
    }
}

#[cfg(test)]
mod turn {
    use crate::Turn;

    #[test]
    fn turn_arithmetic() {
        assert_eq!(Turn::ZERO.next(), Turn::FIRST);
        assert_eq!(Turn(3) + 2, Turn(5));
        assert_eq!(Turn(7).since(Turn(2)), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Turn(4).to_string(), "turn 4");
    }
}

#[cfg(test)]
mod config {
    use crate::{parse_train_count, CoreError, RunConfig, DEFAULT_MAX_PASSES, MAX_TRAINS};

    #[test]
    fn valid_config_passes() {
        let cfg = RunConfig::new("a", "c", 2);
        assert_eq!(cfg.max_passes, DEFAULT_MAX_PASSES);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn same_endpoints_rejected() {
        let err = RunConfig::new("a", "a", 2).validate().unwrap_err();
        assert_eq!(err, CoreError::SameEndpoints("a".into()));
    }

    #[test]
    fn zero_trains_rejected() {
        assert_eq!(RunConfig::new("a", "b", 0).validate(), Err(CoreError::NoTrains));
    }

    #[test]
    fn zero_passes_rejected() {
        let cfg = RunConfig::new("a", "b", 1).with_max_passes(0);
        assert_eq!(cfg.validate(), Err(CoreError::NoPasses));
    }

    #[test]
    fn parse_positive() {
        assert_eq!(parse_train_count("4"), Ok(4));
        assert_eq!(parse_train_count(" 12 "), Ok(12));
    }

    #[test]
    fn parse_negative() {
        assert_eq!(
            parse_train_count("-3"),
            Err(CoreError::NegativeTrainCount("-3".into()))
        );
    }

    #[test]
    fn parse_non_numeric() {
        assert_eq!(
            parse_train_count("four"),
            Err(CoreError::InvalidTrainCount("four".into()))
        );
        assert!(parse_train_count("2.5").is_err());
    }

    #[test]
    fn parse_zero() {
        assert_eq!(parse_train_count("0"), Err(CoreError::NoTrains));
    }

    #[test]
    fn parse_beyond_train_ids() {
        assert_eq!(parse_train_count("4294967295"), Ok(MAX_TRAINS));
        assert_eq!(
            parse_train_count("4294967296"),
            Err(CoreError::TooManyTrains("4294967296".into()))
        );
        assert_eq!(
            parse_train_count("99999999999999999999999"),
            Err(CoreError::TooManyTrains("99999999999999999999999".into()))
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn oversized_fleet_rejected() {
        let err = RunConfig::new("a", "b", MAX_TRAINS + 1).validate().unwrap_err();
        assert_eq!(err, CoreError::TooManyTrains("4294967296".into()));
    }
}
