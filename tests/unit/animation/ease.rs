use super::*;

const SHAPED: [Ease; 6] = [
    Ease::Smoothstep,
    Ease::Sine,
    Ease::Power {
        power: 2,
        side: Side::In,
    },
    Ease::Power {
        power: 3,
        side: Side::Out,
    },
    Ease::Power {
        power: 2,
        side: Side::Both,
    },
    Ease::Power {
        power: 0,
        side: Side::In,
    },
];

#[test]
fn keyframes_are_hit_exactly() {
    for ease in SHAPED.into_iter().chain([Ease::Linear]) {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn shaped_curves_rise_through_the_segment() {
    for ease in SHAPED {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b && b < c, "{ease:?}");
    }
}

#[test]
fn sides_mirror_each_other() {
    let ease_in = Ease::Power {
        power: 2,
        side: Side::In,
    };
    let ease_out = Ease::Power {
        power: 2,
        side: Side::Out,
    };
    assert_eq!(ease_in.apply(0.5), 0.25);
    assert_eq!(ease_out.apply(0.5), 0.75);
    assert_eq!(Ease::Smoothstep.apply(0.5), 0.5);
    assert!((Ease::Sine.apply(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn only_linear_extrapolates() {
    assert_eq!(Ease::Linear.apply(1.5), 1.5);
    assert_eq!(Ease::Smoothstep.apply(1.5), 1.0);
    assert_eq!(Ease::Sine.apply(-0.5), 0.0);
}

#[test]
fn script_names_parse() {
    let ease: Ease = serde_json::from_str(r#""smoothstep""#).unwrap();
    assert_eq!(ease, Ease::Smoothstep);
    let json = r#"{ "power": { "power": 3, "side": "both" } }"#;
    let ease: Ease = serde_json::from_str(json).unwrap();
    assert_eq!(
        ease,
        Ease::Power {
            power: 3,
            side: Side::Both
        }
    );
}
