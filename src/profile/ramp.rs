use log::debug;
use crate::profile::error::ProfileError;
use crate::types::{Breakpoint, RampSpec};
/// Free-text ramp inputs as typed by the user.
///
/// `frequency` plays no part in the ramp itself, but quick fill has always
/// refused to run until it is filled in. `require_frequency` keeps that
/// precondition explicit; clear it to validate the five ramp fields alone.
#[derive(Clone, Debug, PartialEq)]
pub struct RampForm {
    pub width: String,
    pub low_temp: String,
    pub high_temp: String,
    pub step: String,
    pub max_interval: String,
    pub frequency: String,
    pub require_frequency: bool,
}
impl Default for RampForm {
    fn default() -> Self {
        Self {
            width: String::new(),
            low_temp: String::new(),
            high_temp: String::new(),
            step: String::new(),
            max_interval: String::new(),
            frequency: String::new(),
            require_frequency: true,
        }
    }
}
impl RampForm {
    pub fn parse(&self) -> Result<RampSpec, ProfileError> {
        let spec = RampSpec {
            width: parse_field("width", &self.width)?,
            low_temp: parse_field("low_temp", &self.low_temp)?,
            high_temp: parse_field("high_temp", &self.high_temp)?,
            step: parse_field("step", &self.step)?,
            max_interval: parse_field("max_interval", &self.max_interval)?,
        };
        if self.require_frequency && self.frequency.trim().is_empty() {
            return Err(ProfileError::IncompleteRampSpec { field: "frequency" });
        }
        Ok(spec)
    }
}
fn parse_field(field: &'static str, text: &str) -> Result<i64, ProfileError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ProfileError::IncompleteRampSpec { field })
}
/// Builds a staircase of breakpoints climbing from `low_temp` towards `high_temp`.
///
/// Each step emits a plateau at `max(low_temp, top - max_interval)` followed by
/// one at the step's top temperature, `width` time units apart.
#[derive(Clone, Copy, Debug)]
pub struct RampProfileGenerator {
    spec: RampSpec,
}
impl RampProfileGenerator {
    pub fn new(spec: RampSpec) -> Self {
        Self { spec }
    }
    pub fn from_form(form: &RampForm) -> Result<Self, ProfileError> {
        Ok(Self::new(form.parse()?))
    }
    pub fn spec(&self) -> &RampSpec {
        &self.spec
    }
    /// `(actual_low, actual_high)` for every step, in order. Widened to `i128`
    /// so steps near the `i64` bounds cannot overflow.
    pub fn steps(&self) -> impl Iterator<Item = (i128, i128)> + '_ {
        let RampSpec {
            low_temp,
            high_temp,
            step,
            max_interval,
            ..
        } = self.spec;
        // An empty range when the bounds are inverted or the step is not positive.
        let stride = usize::try_from(step).ok().filter(|s| *s > 0);
        let temps = match stride {
            Some(stride) => (i128::from(low_temp)..i128::from(high_temp)).step_by(stride),
            None => (0..0).step_by(1),
        };
        let (low_temp, step, max_interval) = (
            i128::from(low_temp),
            i128::from(step),
            i128::from(max_interval),
        );
        temps.map(move |temp| {
            let actual_high = temp + step;
            let actual_low = low_temp.max(actual_high - max_interval);
            (actual_low, actual_high)
        })
    }
    pub fn generate(&self) -> Vec<Breakpoint> {
        let width = self.spec.width as f64;
        let breakpoints: Vec<Breakpoint> = self
            .steps()
            .flat_map(|(low, high)| [low, high])
            .enumerate()
            .map(|(idx, temp)| {
                let timer = (idx + 1) as f64;
                Breakpoint::new(timer * width, temp as f64)
            })
            .collect();
        debug!("ramp {:?} produced {} breakpoints", self.spec, breakpoints.len());
        breakpoints
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn spec(width: i64, low: i64, high: i64, step: i64, max_interval: i64) -> RampSpec {
        RampSpec {
            width,
            low_temp: low,
            high_temp: high,
            step,
            max_interval,
        }
    }
    fn pairs(bps: &[Breakpoint]) -> Vec<(f64, f64)> {
        bps.iter().map(|b| (b.time, b.value)).collect()
    }
    #[test]
    fn small_ramp_matches_hand_computed_staircase() {
        let bps = RampProfileGenerator::new(spec(1, 0, 4, 2, 10)).generate();
        assert_eq!(
            pairs(&bps),
            vec![(1.0, 0.0), (2.0, 2.0), (3.0, 0.0), (4.0, 4.0)]
        );
    }
    #[test]
    fn max_interval_limits_plateau_depth() {
        let bps = RampProfileGenerator::new(spec(5, 20, 50, 10, 15)).generate();
        // temps 20, 30, 40 -> highs 30, 40, 50; lows max(20, high - 15)
        assert_eq!(
            pairs(&bps),
            vec![
                (5.0, 20.0),
                (10.0, 30.0),
                (15.0, 25.0),
                (20.0, 40.0),
                (25.0, 35.0),
                (30.0, 50.0),
            ]
        );
    }
    #[test]
    fn steps_near_the_integer_limit_do_not_overflow() {
        let generator = RampProfileGenerator::new(spec(1, i64::MAX - 10, i64::MAX, 7, 3));
        let steps: Vec<(i128, i128)> = generator.steps().collect();
        let max = i128::from(i64::MAX);
        assert_eq!(steps, vec![(max - 6, max - 3), (max + 1, max + 4)]);
        let bps = generator.generate();
        assert_eq!(bps.len(), 4);
        assert!(bps.windows(2).all(|w| w[0].time < w[1].time));
        assert!(bps.iter().all(|b| b.value.is_finite() && b.value > 0.0));
    }
    #[test]
    fn extreme_max_interval_stays_finite() {
        let bps = RampProfileGenerator::new(spec(2, 0, 2, 1, i64::MIN)).generate();
        let values: Vec<f64> = bps.iter().map(|b| b.value).collect();
        assert!(values.iter().all(|v| v.is_finite()));
        assert_eq!(bps.len(), 4);
        let bps =
            RampProfileGenerator::new(spec(2, i64::MIN, i64::MIN + 2, 1, i64::MAX)).generate();
        assert_eq!(bps[0].value, i64::MIN as f64);
    }
    #[test]
    fn inverted_bounds_or_bad_step_give_nothing() {
        assert!(RampProfileGenerator::new(spec(1, 4, 4, 1, 1)).generate().is_empty());
        assert!(RampProfileGenerator::new(spec(1, 9, 4, 1, 1)).generate().is_empty());
        assert!(RampProfileGenerator::new(spec(1, 0, 4, 0, 1)).generate().is_empty());
        assert!(RampProfileGenerator::new(spec(1, 0, 4, -2, 1)).generate().is_empty());
    }
    #[test]
    fn form_requires_every_field() {
        let mut form = RampForm {
            width: "1".into(),
            low_temp: "0".into(),
            high_temp: "4".into(),
            step: " 2 ".into(),
            max_interval: "10".into(),
            frequency: "100".into(),
            require_frequency: true,
        };
        assert_eq!(form.parse().unwrap(), spec(1, 0, 4, 2, 10));
        form.max_interval = "ten".into();
        assert!(matches!(
            form.parse(),
            Err(ProfileError::IncompleteRampSpec { field: "max_interval" })
        ));
        form.max_interval = "10".into();
        form.high_temp = "4.5".into();
        assert!(matches!(
            form.parse(),
            Err(ProfileError::IncompleteRampSpec { field: "high_temp" })
        ));
    }
    #[test]
    fn frequency_is_only_required_when_flagged() {
        let mut form = RampForm {
            width: "1".into(),
            low_temp: "0".into(),
            high_temp: "4".into(),
            step: "2".into(),
            max_interval: "10".into(),
            ..RampForm::default()
        };
        assert!(matches!(
            form.parse(),
            Err(ProfileError::IncompleteRampSpec { field: "frequency" })
        ));
        form.require_frequency = false;
        assert!(form.parse().is_ok());
    }
}
