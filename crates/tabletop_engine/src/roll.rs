//! Dice rolling.
//!
//! A [`RollResolver`] turns a parsed [`RollSpec`] into a [`RollOutcome`] using
//! a [`DieRoller`]. Flat modifiers are never rolled.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tabletop_foundation::{Error, Result, RollSpec, RollTerm, SemanticLimit};
use tracing::debug;

use crate::config::{DEFAULT_MAX_DICE, EngineConfig, RollMode};

/// A source of die faces.
pub trait DieRoller: Send {
    /// Rolls one die with `faces` faces, returning a value in `1..=faces`.
    fn roll(&mut self, faces: u32) -> u32;
}

/// Rolls uniformly with a seedable `ChaCha8` generator.
#[derive(Clone, Debug)]
pub struct RandomRoller {
    rng: ChaCha8Rng,
}

impl RandomRoller {
    /// Creates a roller seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a roller that produces the same faces for the same seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DieRoller for RandomRoller {
    fn roll(&mut self, faces: u32) -> u32 {
        self.rng.gen_range(1..=faces.max(1))
    }
}

/// Always rolls 1.
#[derive(Copy, Clone, Debug, Default)]
pub struct MinRoller;

impl DieRoller for MinRoller {
    fn roll(&mut self, _faces: u32) -> u32 {
        1
    }
}

/// Always rolls the highest face.
#[derive(Copy, Clone, Debug, Default)]
pub struct MaxRoller;

impl DieRoller for MaxRoller {
    fn roll(&mut self, faces: u32) -> u32 {
        faces.max(1)
    }
}

/// The faces rolled for one term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermOutcome {
    /// The term as written.
    pub term: RollTerm,
    /// Each die's face; empty for a flat modifier.
    pub rolls: Vec<u32>,
    /// Signed contribution to the total.
    pub subtotal: i64,
}

/// The result of resolving a roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollOutcome {
    /// Sum of every term's signed contribution.
    pub total: i64,
    /// Per-term breakdown in source order.
    pub terms: Vec<TermOutcome>,
}

impl fmt::Display for RollOutcome {
    /// Renders as `2d6[3,5]+4 = 12`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, outcome) in self.terms.iter().enumerate() {
            let term = outcome.term;
            if i > 0 || term.sign == tabletop_foundation::Sign::Minus {
                write!(f, "{}", term.sign)?;
            }
            write!(f, "{term}")?;
            if !term.is_flat() {
                let faces: Vec<String> = outcome.rolls.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", faces.join(","))?;
            }
        }
        write!(f, " = {}", self.total)
    }
}

/// Resolves roll expressions with a configured roller and dice limit.
pub struct RollResolver {
    roller: Box<dyn DieRoller>,
    max_dice: u32,
}

impl RollResolver {
    /// Creates a resolver with the default dice limit.
    #[must_use]
    pub fn new(roller: impl DieRoller + 'static) -> Self {
        Self {
            roller: Box::new(roller),
            max_dice: DEFAULT_MAX_DICE,
        }
    }

    /// Creates a resolver from engine configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        let resolver = match config.roll_mode {
            RollMode::Min => Self::new(MinRoller),
            RollMode::Max => Self::new(MaxRoller),
            RollMode::Random => match config.seed {
                Some(seed) => Self::new(RandomRoller::seeded(seed)),
                None => Self::new(RandomRoller::from_entropy()),
            },
        };
        resolver.with_max_dice(config.max_dice)
    }

    /// Builder method to set the dice limit.
    #[must_use]
    pub fn with_max_dice(mut self, max_dice: u32) -> Self {
        self.max_dice = max_dice;
        self
    }

    /// The dice limit.
    #[must_use]
    pub const fn max_dice(&self) -> u32 {
        self.max_dice
    }

    /// Rolls every die of `spec` and sums the signed terms.
    ///
    /// # Errors
    /// Returns `LimitExceeded` if the roll needs more dice than the limit.
    /// Nothing is rolled in that case.
    pub fn resolve(&mut self, spec: &RollSpec) -> Result<RollOutcome> {
        let requested = spec.dice_count();
        if requested > u64::from(self.max_dice) {
            debug!(roll = %spec, requested, limit = self.max_dice, "roll exceeds dice limit");
            return Err(Error::limit_exceeded(SemanticLimit::MaxDice {
                limit: self.max_dice,
                requested,
            }));
        }

        let mut total = 0;
        let mut terms = Vec::with_capacity(spec.terms().len());
        for &term in spec.terms() {
            let (rolls, magnitude) = if term.is_flat() {
                (Vec::new(), i64::from(term.count))
            } else {
                let rolls: Vec<u32> = (0..term.count).map(|_| self.roller.roll(term.die)).collect();
                let sum = rolls.iter().copied().map(i64::from).sum();
                (rolls, sum)
            };
            let subtotal = term.sign.apply(magnitude);
            total += subtotal;
            terms.push(TermOutcome {
                term,
                rolls,
                subtotal,
            });
        }

        debug!(roll = %spec, total, "resolved roll");
        Ok(RollOutcome { total, terms })
    }

    /// Parses and resolves a roll expression.
    ///
    /// # Errors
    /// Returns a parse error for an invalid expression, or `LimitExceeded`.
    pub fn resolve_str(&mut self, input: &str) -> Result<RollOutcome> {
        let spec = tabletop_parser::parse_roll(input)?;
        self.resolve(&spec)
    }

    /// Resolves the default check roll, a single `d20`.
    ///
    /// # Errors
    /// Returns `LimitExceeded` only if the dice limit is zero.
    pub fn resolve_check(&mut self) -> Result<RollOutcome> {
        self.resolve(&RollSpec::d20())
    }
}

impl Default for RollResolver {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl fmt::Debug for RollResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RollResolver")
            .field("max_dice", &self.max_dice)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabletop_foundation::{ErrorKind, Sign};
    use tabletop_parser::parse_roll;

    /// Replays a fixed list of faces.
    struct Scripted(Vec<u32>);

    impl DieRoller for Scripted {
        fn roll(&mut self, _faces: u32) -> u32 {
            self.0.remove(0)
        }
    }

    #[test]
    fn flat_terms_are_not_rolled() {
        let mut resolver = RollResolver::new(Scripted(vec![3, 5, 2]));
        let outcome = resolver.resolve(&parse_roll("2d6+1d4-3").unwrap()).unwrap();
        assert_eq!(outcome.total, 3 + 5 + 2 - 3);
        assert_eq!(outcome.terms[2].rolls, Vec::<u32>::new());
        assert_eq!(outcome.terms[2].subtotal, -3);
        assert_eq!(outcome.to_string(), "2d6[3,5]+d4[2]-3 = 7");
    }

    #[test]
    fn min_and_max_modes_hit_bounds() {
        let spec = parse_roll("3d8-d4+2").unwrap();
        let min = RollResolver::new(MinRoller).resolve(&spec).unwrap();
        let max = RollResolver::new(MaxRoller).resolve(&spec).unwrap();
        assert_eq!(min.total, spec.lowest_roll_total());
        assert_eq!(max.total, spec.highest_roll_total());
    }

    #[test]
    fn seeded_rolls_repeat() {
        let spec = parse_roll("10d20").unwrap();
        let config = EngineConfig::seeded(42);
        let a = RollResolver::from_config(&config).resolve(&spec).unwrap();
        let b = RollResolver::from_config(&config).resolve(&spec).unwrap();
        assert_eq!(a, b);
        assert!(a.terms[0].rolls.iter().all(|face| (1..=20).contains(face)));
    }

    #[test]
    fn dice_limit_is_enforced() {
        let mut resolver = RollResolver::new(MaxRoller).with_max_dice(5);
        let err = resolver.resolve(&parse_roll("3d6+3d6+100").unwrap()).unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::LimitExceeded(SemanticLimit::MaxDice {
                limit: 5,
                requested: 6
            })
        ));
        assert!(resolver.resolve(&parse_roll("5d6+100").unwrap()).is_ok());
    }

    #[test]
    fn default_check_is_d20() {
        let outcome = RollResolver::new(MaxRoller).resolve_check().unwrap();
        assert_eq!(outcome.total, 20);
        assert_eq!(outcome.terms[0].term, RollTerm::new(1, 20, Sign::Plus));
    }

    #[test]
    fn resolve_str_reports_parse_errors() {
        let err = RollResolver::new(MinRoller).resolve_str("2d7").unwrap_err();
        assert!(err.is_parse_failure());
    }
}
