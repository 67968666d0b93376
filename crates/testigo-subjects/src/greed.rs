//! Greed dice scorer: a calculating subject for proxy demos.
//!
//! Greed scores a single throw of dice with faces 1 to 6:
//!
//! - A set of three ones is 1000 points.
//! - A set of three of any other face is 100 times that face.
//! - A one outside a set of three is worth 100 points.
//! - A five outside a set of three is worth 50 points.
//! - Everything else contributes nothing.
//!
//! Throws larger than three dice score as whole sets plus leftovers:
//! four ones is 1000 + 100. Faces outside 1..=6 contribute nothing.

use testigo_core::{Member, MemberError, Result, Target, Value};

/// Stateless Greed scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greed;

impl Greed {
    /// Creates a scorer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Scores one throw of dice.
    #[must_use]
    pub fn score(&self, dice: &[u8]) -> u32 {
        let mut counts = [0_u32; 7];
        for &die in dice {
            if (1..=6).contains(&die) {
                counts[die as usize] += 1;
            }
        }
        let mut points = 1000 * (counts[1] / 3) + 100 * (counts[1] % 3);
        points += 500 * (counts[5] / 3) + 50 * (counts[5] % 3);
        for face in [2_u32, 3, 4, 6] {
            points += face * 100 * (counts[face as usize] / 3);
        }
        points
    }
}

/// Collects dice faces out of call arguments.
///
/// Integer arguments count directly; list arguments contribute their
/// integer items. Anything else is ignored, as are integers that do not
/// fit a die.
fn dice_from_args(args: &[Value]) -> Vec<u8> {
    fn extend(dice: &mut Vec<u8>, value: &Value) {
        match value {
            Value::Int(n) => {
                if let Ok(die) = u8::try_from(*n) {
                    dice.push(die);
                }
            }
            Value::List(items) => {
                for item in items {
                    extend(dice, item);
                }
            }
            _ => {}
        }
    }
    let mut dice = Vec::new();
    for arg in args {
        extend(&mut dice, arg);
    }
    dice
}

impl Target for Greed {
    fn name(&self) -> &str {
        "greed"
    }

    fn members(&self) -> Vec<Member> {
        vec![Member::method("score")]
    }

    fn get_member(&self, name: &str) -> Result<Value> {
        match name {
            "score" => Ok(Value::method("score")),
            _ => Err(MemberError::not_found(self.name(), name)),
        }
    }

    fn set_member(&mut self, name: &str, _value: Value) -> Result<()> {
        Err(MemberError::not_found(self.name(), name))
    }

    fn call_member(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        match name {
            "score" => {
                let dice = dice_from_args(args);
                let points = self.score(&dice);
                tracing::debug!(dice = ?dice, points = points, "greed throw scored");
                Ok(Value::Int(i64::from(points)))
            }
            _ => Err(MemberError::not_found(self.name(), name)),
        }
    }
}
