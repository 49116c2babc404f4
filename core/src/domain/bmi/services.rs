use crate::domain::bmi::entities::{BmiCategory, BmiResult};

/// BMI from kilograms and centimetres, rounded to two decimals.
///
/// Both inputs must already be positive finite numbers; the profile
/// validation guarantees this for every caller inside the crate.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> BmiResult {
    let height_m = height_cm / 100.0;
    let value = round_to_hundredths(weight_kg / (height_m * height_m));

    BmiResult {
        value,
        category: BmiCategory::from_value(value),
    }
}

// Halves go to the even neighbour, as `round(x, 2)` does.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_adult() {
        let bmi = calculate_bmi(70.0, 175.0);
        assert_eq!(bmi.value, 22.86);
        assert_eq!(bmi.category, BmiCategory::NormalWeight);
    }

    #[test]
    fn light_adult_is_still_normal() {
        let bmi = calculate_bmi(50.0, 160.0);
        assert_eq!(bmi.value, 19.53);
        assert_eq!(bmi.category, BmiCategory::NormalWeight);
    }

    #[test]
    fn underweight() {
        let bmi = calculate_bmi(45.0, 170.0);
        assert_eq!(bmi.value, 15.57);
        assert_eq!(bmi.category, BmiCategory::Underweight);
    }

    #[test]
    fn exact_halves_round_to_even() {
        // 80.5 / 2^2 = 20.125 and 81.5 / 2^2 = 20.375, both exact in binary
        assert_eq!(calculate_bmi(80.5, 200.0).value, 20.12);
        assert_eq!(calculate_bmi(81.5, 200.0).value, 20.38);
    }

    #[test]
    fn overweight_and_obesity() {
        assert_eq!(calculate_bmi(85.0, 175.0).category, BmiCategory::Overweight);
        assert_eq!(calculate_bmi(110.0, 175.0).category, BmiCategory::Obesity);
    }

    #[test]
    fn thresholds_belong_to_upper_category() {
        assert_eq!(BmiCategory::from_value(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_value(18.5), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::from_value(24.99), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::from_value(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_value(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_value(30.0), BmiCategory::Obesity);
    }

    #[test]
    fn exact_boundary_from_metrics() {
        // 25 / 1^2
        let bmi = calculate_bmi(25.0, 100.0);
        assert_eq!(bmi.value, 25.0);
        assert_eq!(bmi.category, BmiCategory::Overweight);
    }

    #[test]
    fn category_is_monotonic_in_weight() {
        let mut previous = BmiCategory::Underweight;
        for weight in 30..=160 {
            let category = calculate_bmi(weight as f64, 172.0).category;
            assert!(rank(category) >= rank(previous), "regressed at {} kg", weight);
            previous = category;
        }
        assert_eq!(previous, BmiCategory::Obesity);
    }

    #[test]
    fn summary_line() {
        assert_eq!(
            calculate_bmi(70.0, 175.0).summary(),
            "Your BMI: 22.86 (Normal weight)"
        );
        assert_eq!(
            calculate_bmi(25.0, 100.0).summary(),
            "Your BMI: 25.0 (Overweight)"
        );
    }

    fn rank(category: BmiCategory) -> u8 {
        match category {
            BmiCategory::Underweight => 0,
            BmiCategory::NormalWeight => 1,
            BmiCategory::Overweight => 2,
            BmiCategory::Obesity => 3,
        }
    }
}
