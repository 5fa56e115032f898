use garage_calibration::factors::CalibrationFactors;
use garage_calibration::formula;
use garage_calibration::{CalibrationSignals, ConfidenceCalibrator};
use garage_core::config::CalibrationConfig;
use proptest::prelude::*;

fn unit() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

fn arb_factors() -> impl Strategy<Value = CalibrationFactors> {
    (unit(), unit(), unit(), unit(), unit()).prop_map(|(primary, historical, keyword, ontology, clarity)| {
        CalibrationFactors {
            primary,
            historical,
            keyword,
            ontology,
            clarity,
        }
    })
}

proptest! {
    #[test]
    fn output_always_in_unit_interval(f in arb_factors()) {
        let v = formula::compute(&f, &CalibrationConfig::default());
        prop_assert!((0.0..=1.0).contains(&v));
    }

    #[test]
    fn monotonic_in_each_factor(f in arb_factors(), bump in 0.0f64..=1.0) {
        let config = CalibrationConfig::default();
        let base = formula::compute(&f, &config);
        let raised = [
            CalibrationFactors { primary: (f.primary + bump).min(1.0), ..f },
            CalibrationFactors { historical: (f.historical + bump).min(1.0), ..f },
            CalibrationFactors { keyword: (f.keyword + bump).min(1.0), ..f },
            CalibrationFactors { ontology: (f.ontology + bump).min(1.0), ..f },
            CalibrationFactors { clarity: (f.clarity + bump).min(1.0), ..f },
        ];
        for r in raised {
            prop_assert!(formula::compute(&r, &config) >= base - 1e-12);
        }
    }

    #[test]
    fn raising_primary_never_lowers_calibration(
        primary in unit(),
        bump in 0.0f64..=1.0,
        history in proptest::collection::vec(unit(), 0..6),
        chars in 0usize..300,
    ) {
        let calibrator = ConfidenceCalibrator::default();
        let low = calibrator.calibrate(&CalibrationSignals {
            primary,
            historical_scores: history.clone(),
            keywords_matched: 1,
            keywords_total: 2,
            input_chars: chars,
        });
        let high = calibrator.calibrate(&CalibrationSignals {
            primary: (primary + bump).min(1.0),
            historical_scores: history,
            keywords_matched: 1,
            keywords_total: 2,
            input_chars: chars,
        });
        prop_assert!(high.value.value() >= low.value.value() - 1e-12);
    }

    #[test]
    fn band_stays_in_unit_interval(v in unit()) {
        let (lo, hi) = garage_calibration::calibrator::uncertainty_band(v);
        prop_assert!(0.0 <= lo && lo <= v && v <= hi && hi <= 1.0);
    }
}
