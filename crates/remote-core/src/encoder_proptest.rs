#[cfg(test)]
mod proptest_encoder {
    use crate::encoder::*;
    use crate::reading::{GaugeReading, ReadingKind};
    use crate::selector::advance;
    use proptest::prelude::*;

    fn is_display_shape(s: &str) -> bool {
        let chars: Vec<char> = s.chars().collect();
        let shape_ok = matches!(chars.len(), 3 | 4)
            && chars[0].is_ascii_alphabetic()
            && chars[1] == ':'
            && chars[2].is_ascii_alphanumeric();
        shape_ok && (chars.len() == 3 || chars[3] == '.')
    }

    fn glyph() -> impl Strategy<Value = char> {
        prop::sample::select(ReadingKind::ALL.map(|k| k.glyph()).to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10000))]

        // Property: any band reading with min <= max renders as glyph, colon, one code char, optional dot
        #[test]
        fn band_output_keeps_shape(
            glyph in glyph(),
            min in -1000.0f64..1000.0,
            span in 0.0f64..1000.0,
            value in -3000.0f64..3000.0,
        ) {
            let reading = GaugeReading::new(value, min, min + span);
            let out = encode(glyph, &reading);
            prop_assert!(is_display_shape(&out), "bad shape {:?} for {:?}", out, reading);
        }

        // Property: in-band readings always produce a digit
        #[test]
        fn in_band_is_a_digit(
            min in -1000.0f64..1000.0,
            span in 0.001f64..1000.0,
            t in 0.0f64..=1.0,
        ) {
            let max = min + span;
            let value = (min + span * t).min(max);
            let out = encode('F', &GaugeReading::new(value, min, max));
            let code = out.chars().nth(2);
            prop_assert!(code.is_some_and(|c| c.is_ascii_digit()), "expected digit, got {:?}", out);
        }

        // Property: temperatures render as c, H, or a single digit with optional dot
        #[test]
        fn temperature_output_keeps_shape(temp in -100.0f64..300.0) {
            let reading = GaugeReading::new(temp, 0.0, 0.0);
            let out = encode_with('T', Encoding::AbsoluteTemperature, &reading);
            prop_assert!(is_display_shape(&out), "bad shape {:?} for {}", out, temp);
        }

        // Property: the dot marks a remainder of at least one half
        #[test]
        fn format_value_dot_matches_fraction(v in 0.0f64..10.0) {
            let out = format_value(v);
            let has_dot = out.ends_with('.');
            prop_assert_eq!(has_dot, v - v.floor() >= 0.5);
            prop_assert_eq!(out.trim_end_matches('.'), (v.floor() as i64).to_string());
        }

        // Property: selection always lands inside the readings, or parks at zero
        #[test]
        fn advance_stays_in_range(
            current in any::<i32>(),
            delta in any::<i32>(),
            count in 0usize..64,
        ) {
            let next = advance(current, delta, count);
            if count == 0 {
                prop_assert_eq!(next, 0);
            } else {
                prop_assert!(next >= 0 && (next as usize) < count, "{} out of 0..{}", next, count);
            }
        }

        // Property: stepping forward then back returns to the same reading
        #[test]
        fn advance_round_trips(start in 0i32..4, delta in -50i32..50) {
            let there = advance(start, delta, 4);
            prop_assert_eq!(advance(there, -delta, 4), start);
        }
    }
}
