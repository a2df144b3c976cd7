#[cfg(test)]
mod verify {
    use deckle::broaden::BroadenDeck;
    use deckle::deck::{ErrorKind, Quantity};

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    #[test]
    fn single_material_run() {
        let deck = BroadenDeck::parse(trim(
            r#"
 20 21 22
 9228 2 0 0 0
 0.001 1 0.02 1e-07
 300 1200
 0/
            "#,
        ))
        .unwrap();

        assert_eq!(
            deck.tapes
                .source
                .value,
            20
        );
        assert_eq!(
            deck.tapes
                .input
                .value,
            21
        );
        assert_eq!(
            deck.tapes
                .output
                .value,
            22
        );

        assert_eq!(
            deck.material
                .material
                .value,
            9228
        );
        assert_eq!(
            deck.material
                .temperatures
                .value,
            2
        );
        assert_eq!(
            deck.material
                .restart
                .value,
            0
        );
        assert_eq!(
            deck.material
                .bootstrap
                .value,
            0
        );
        assert_eq!(
            deck.material
                .start_temperature
                .value,
            Quantity::kelvin(0.0)
        );
        assert!(!deck
            .material
            .start_temperature
            .is_defaulted());

        assert_eq!(
            deck.tolerances
                .thinning
                .value,
            1.0e-3
        );
        assert_eq!(
            deck.tolerances
                .energy_ceiling
                .value,
            Quantity::electron_volts(1.0)
        );
        assert_eq!(
            deck.tolerances
                .relative_error
                .value,
            0.02
        );
        assert_eq!(
            deck.tolerances
                .integral_tolerance
                .value,
            Quantity::barns(1.0e-7)
        );

        assert_eq!(
            deck.temperatures
                .first(),
            Some(Quantity::kelvin(300.0))
        );
        assert_eq!(
            deck.temperatures
                .last(),
            Some(Quantity::kelvin(1200.0))
        );

        assert!(deck
            .continuations
            .is_absent());
    }

    #[test]
    fn multiple_material_run() {
        let deck = BroadenDeck::parse(trim(
            r#"
 20 21 22
 9228 2 0 0 0
 0.001 1 0.02 1e-07
 300 1200
 9225
 125
 825
 0/
            "#,
        ))
        .unwrap();

        assert!(!deck
            .continuations
            .is_absent());
        assert_eq!(
            deck.continuations
                .len(),
            3
        );
        assert_eq!(
            deck.continuations
                .first()
                .map(|card| {
                    card.material
                        .value
                }),
            Some(9225)
        );
        assert_eq!(
            deck.continuations
                .get(1)
                .map(|card| {
                    card.material
                        .value
                }),
            Some(125)
        );
        assert_eq!(
            deck.continuations
                .last()
                .map(|card| {
                    card.material
                        .value
                }),
            Some(825)
        );
    }

    #[test]
    fn mismatched_temperature_count() {
        let error = BroadenDeck::parse(trim(
            r#"
 20 21 22
 9228 3 0 0 0
 0.001 1 0.02 1e-07
 300 1200
 0/
            "#,
        ))
        .unwrap_err();

        assert_eq!(error.kind, ErrorKind::UnexpectedEndOfRecord);
        assert_eq!(error.card, Some("temperatures"));
        assert_eq!(error.field, Some("temperature"));
        assert_eq!(error.line, 4);
    }

    #[test]
    fn omitted_trailing_fields_take_defaults() {
        let deck = BroadenDeck::parse(trim(
            r#"
 20 21 22
 9228 1
 0.005
 293.6
 0/
            "#,
        ))
        .unwrap();

        assert!(deck
            .material
            .restart
            .is_defaulted());
        assert!(deck
            .material
            .bootstrap
            .is_defaulted());
        assert_eq!(
            deck.material
                .start_temperature
                .value,
            Quantity::kelvin(0.0)
        );

        assert_eq!(
            deck.tolerances
                .energy_ceiling
                .value,
            Quantity::electron_volts(1.0)
        );
        assert!(deck
            .tolerances
            .energy_ceiling
            .is_defaulted());
        assert_eq!(
            deck.tolerances
                .integral_tolerance
                .value,
            Quantity::barns(0.0)
        );

        assert_eq!(
            deck.temperatures
                .first(),
            Some(Quantity::kelvin(293.6))
        );
        assert!(deck
            .continuations
            .is_absent());
    }

    #[test]
    fn invalid_flag_is_fatal_despite_its_default() {
        let error = BroadenDeck::parse(trim(
            r#"
 20 21 22
 9228 2 5 0 0
 0.001 1 0.02 1e-07
 300 1200
 0/
            "#,
        ))
        .unwrap_err();

        assert_eq!(
            error.kind,
            ErrorKind::InvalidValue {
                token: "5",
                constraint: "one of 0, 1".to_string(),
            }
        );
        assert_eq!(error.card, Some("material"));
        assert_eq!(error.field, Some("restart"));
        assert_eq!(error.line, 2);
        assert_eq!(
            error.to_string(),
            "line 2, material card, field restart: value '5' not allowed; expected one of 0, 1"
        );
    }

    #[test]
    fn trailing_commentary_is_tolerated() {
        let deck = BroadenDeck::parse(trim(
            r#"
 20 21 22 uranium-235 broadening
 9228 2 0 0 0
 0.001 1 0.02 1e-07
 300 1200 kelvin
 0/ end of run
            "#,
        ))
        .unwrap();

        assert_eq!(
            deck.tapes
                .output
                .value,
            22
        );
        assert_eq!(
            deck.temperatures
                .last(),
            Some(Quantity::kelvin(1200.0))
        );
        assert!(deck
            .continuations
            .is_absent());
    }

    #[test]
    fn bad_continuation_aborts_the_whole_sequence() {
        let error = BroadenDeck::parse(trim(
            r#"
 20 21 22
 9228 2 0 0 0
 0.001 1 0.02 1e-07
 300 1200
 9225
 -4
 0/
            "#,
        ))
        .unwrap_err();

        assert_eq!(
            error.kind,
            ErrorKind::InvalidValue {
                token: "-4",
                constraint: "at least 0".to_string(),
            }
        );
        assert_eq!(error.card, Some("continuation"));
        assert_eq!(error.line, 6);
    }
}
