//! The question bank: the static, ordered sequence of turns.
//!
//! A bank is created once at startup and never mutated. All authoring
//! invariants (sequential ids, exactly four choices per turn, delta signs
//! agreeing with outcome classes, successor ids resolving) are checked in
//! [`QuestionBank::new`], so the session engine never re-validates them.

use serde::{Deserialize, Serialize};

use crate::error::{BankError, BankResult};

/// Number of turns in the standard story.
pub const TOTAL_TURNS: u32 = 10;

/// Number of choices every turn offers.
pub const CHOICES_PER_TURN: usize = 4;

/// How an answer lands with the emissary, paired 1:1 with its score delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeClass {
    /// Raises the emissary's regard (+1).
    Favorable,
    /// Lowers the emissary's regard (−1).
    Unfavorable,
}

impl OutcomeClass {
    /// The score delta this outcome class must carry.
    pub fn delta(self) -> i32 {
        match self {
            Self::Favorable => 1,
            Self::Unfavorable => -1,
        }
    }
}

impl std::fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Favorable => write!(f, "favorable"),
            Self::Unfavorable => write!(f, "unfavorable"),
        }
    }
}

/// One selectable answer on a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// The answer text shown to the player.
    pub text: String,
    /// Whether the emissary receives this answer well or badly.
    pub outcome: OutcomeClass,
    /// Score delta, always agreeing in sign with `outcome` (validated at load).
    pub delta: i32,
}

impl Choice {
    /// Create a choice whose delta follows its outcome class.
    pub fn new(outcome: OutcomeClass, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            outcome,
            delta: outcome.delta(),
        }
    }
}

/// One prompt-and-four-choices unit in the fixed sequence.
///
/// The prompt may embed double-quoted speech spans; see
/// [`crate::segment::segment_prompt`]. Successor ids are carried per outcome
/// class so content *can* branch, though the standard story is linear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Sequential id, 1..=N.
    pub id: u32,
    /// Narration and quoted emissary speech shown before the choices.
    pub prompt: String,
    /// The four choices, in canonical (unshuffled) order.
    pub choices: Vec<Choice>,
    /// Turn to enter after a favorable answer; `None` ends the story.
    pub next_favorable: Option<u32>,
    /// Turn to enter after an unfavorable answer; `None` ends the story.
    pub next_unfavorable: Option<u32>,
}

impl Turn {
    /// The successor turn id for the given outcome, if any.
    pub fn next_for(&self, outcome: OutcomeClass) -> Option<u32> {
        match outcome {
            OutcomeClass::Favorable => self.next_favorable,
            OutcomeClass::Unfavorable => self.next_unfavorable,
        }
    }
}

/// The immutable, validated sequence of turns.
///
/// Read-only after construction; safe to share across any number of
/// sessions (wrap it in an `Arc`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    turns: Vec<Turn>,
}

impl QuestionBank {
    /// Build a bank, checking every authoring invariant.
    pub fn new(turns: Vec<Turn>) -> BankResult<Self> {
        if turns.is_empty() {
            return Err(BankError::Empty);
        }

        for (i, turn) in turns.iter().enumerate() {
            let expected = i as u32 + 1;
            if turn.id != expected {
                return Err(BankError::NonSequentialId {
                    expected,
                    found: turn.id,
                });
            }

            if turn.choices.len() != CHOICES_PER_TURN {
                return Err(BankError::WrongChoiceCount {
                    turn: turn.id,
                    count: turn.choices.len(),
                    expected: CHOICES_PER_TURN,
                });
            }

            for (c, choice) in turn.choices.iter().enumerate() {
                if choice.delta != choice.outcome.delta() {
                    return Err(BankError::DeltaMismatch {
                        turn: turn.id,
                        choice: c,
                        delta: choice.delta,
                        outcome: choice.outcome.to_string(),
                    });
                }
            }
        }

        let last_id = turns.len() as u32;
        for turn in &turns {
            for next in [turn.next_favorable, turn.next_unfavorable].into_iter().flatten() {
                if !(1..=last_id).contains(&next) {
                    return Err(BankError::DanglingNext {
                        turn: turn.id,
                        next,
                    });
                }
            }
        }

        Ok(Self { turns })
    }

    /// Look up a turn by id. A miss signals end-of-sequence.
    pub fn get(&self, id: u32) -> Option<&Turn> {
        // Ids are sequential from 1, so lookup is an index.
        self.turns.get(id.checked_sub(1)? as usize)
    }

    /// The id of the first turn.
    pub fn first_id(&self) -> u32 {
        1
    }

    /// Number of turns in the bank.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the bank has no turns (never true for a constructed bank).
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Iterate the turns in order.
    pub fn turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }

    /// The built-in ten-turn story: an alien emissary questions one human
    /// about whether Earth deserves a tomorrow.
    pub fn standard() -> Self {
        let turns = vec![
            story_turn(
                1,
                "The craft settles over the old observatory without a sound. A seam of \
                 light opens. \"You are the one who came to speak for Earth. Why you?\"",
                [
                    "Nobody sent me. I came because someone should be here to listen to you.",
                    "I don't speak for Earth. I can only answer for myself, as honestly as I can.",
                    "I'm the best humanity has to offer. Frankly, you're lucky it's me.",
                    "Does it matter? Ask your questions so we can get this over with.",
                ],
            ),
            story_turn(
                2,
                "The emissary unrolls a map of your sky, pinpricked with orbits. \"Your \
                 species points radio telescopes at the stars and missiles at itself. \
                 Explain.\"",
                [
                    "We're afraid of each other. We're trying to outgrow it, slowly.",
                    "It shames me. The telescopes are who we want to be.",
                    "The missiles keep the peace. You'd understand if you were human.",
                    "We'll point them wherever we need to. That includes up.",
                ],
            ),
            story_turn(
                3,
                "A pane of blue light shows your oceans, time running backwards. \"We \
                 watched these waters warm for two of your centuries. Was that ignorance \
                 or indifference?\"",
                [
                    "Both, at first. Now it's a fight between profit and conscience, and \
                     conscience is gaining.",
                    "Indifference, mostly. I won't insult you by pretending otherwise.",
                    "A planet's resources exist to be used. So we used them.",
                    "Our oceans are our business, not yours.",
                ],
            ),
            story_turn(
                4,
                "From somewhere inside the craft, a thin melody plays: a recording your \
                 species once bolted to a probe. \"One of your machines carried this song \
                 past the planets. Which do you value more, the machine or the song?\"",
                [
                    "The song. The machine was just how we waved hello.",
                    "They're the same gesture. We wanted someone out there to know we sing.",
                    "The machine. Engineering is measurable; music is decoration.",
                    "Neither meant much. It was a publicity exercise.",
                ],
            ),
            story_turn(
                5,
                "The emissary's lights dim to something like patience. \"Your kind shares \
                 the planet with millions of other species. Name your obligation to them.\"",
                [
                    "We're their keepers now, whether we deserve to be or not.",
                    "Obligation is the wrong word. Kinship is closer.",
                    "Obligation? They'd eat us if they could.",
                    "We owe them nothing. The strong inherit the biosphere.",
                ],
            ),
            story_turn(
                6,
                "For the first time, the emissary leans close enough that you see your \
                 reflection bend. \"If concealing the truth would spare your species pain, \
                 would you lie to me now?\"",
                [
                    "No. If this conversation matters at all, it has to be honest.",
                    "I've considered it. I'd rather be judged for what we are.",
                    "Of course I would. Any loyal human would.",
                    "I've been lying since you landed. Prove otherwise.",
                ],
            ),
            story_turn(
                7,
                "The pane of light shifts to one of your cities at night: towers lit gold, \
                 doorways below them full of sleeping bodies. \"Your cities shelter some \
                 and discard others. Who decided?\"",
                [
                    "No one decided, which is the problem. We're answerable for it anyway.",
                    "We all did, by looking away. Some of us are trying to look back.",
                    "Scarcity decided. Someone always ends up outside.",
                    "The discarded mostly earn their place.",
                ],
            ),
            story_turn(
                8,
                "A chime sounds, flat and cold. \"Your governments are aiming weapons at \
                 this craft as we speak. Should I take it personally?\"",
                [
                    "They're frightened. Give us the chance to be better than our fear.",
                    "Yes, and I'm sorry. Fear is our oldest reflex. It isn't our only one.",
                    "You hovered over our cities uninvited. What did you expect?",
                    "Take it however you like. We won't apologize for being armed.",
                ],
            ),
            story_turn(
                9,
                "The map, the oceans, the city all fold away until only the two of you \
                 remain. \"If Earth ends tonight, what is lost that the universe cannot \
                 replace?\"",
                [
                    "Every unfinished kindness. Billions of stories stopped mid-sentence.",
                    "Nothing measurable. Everything that matters.",
                    "Lost? The universe doesn't keep accounts, and neither do I.",
                    "Humanity's assets, mostly. The rest is sentiment.",
                ],
            ),
            story_turn(
                10,
                "The seam of light begins to narrow. \"Last question. Tomorrow morning, if \
                 your sun rises, what will you do differently?\"",
                [
                    "Start small: learn my neighbors' names. Mend what I can actually reach.",
                    "Tell people what I saw here. We do better when we feel watched.",
                    "Differently? Nothing. We were fine before you came.",
                    "Sleep in. This was a dream anyway.",
                ],
            ),
        ];

        // The standard story cannot fail validation.
        match Self::new(turns) {
            Ok(bank) => bank,
            Err(e) => unreachable!("built-in bank is invalid: {e}"),
        }
    }
}

/// Build a standard-story turn: two favorable then two unfavorable choices in
/// canonical order, linear successors.
fn story_turn(id: u32, prompt: &str, texts: [&str; CHOICES_PER_TURN]) -> Turn {
    let next = if id < TOTAL_TURNS { Some(id + 1) } else { None };
    Turn {
        id,
        prompt: prompt.to_string(),
        choices: vec![
            Choice::new(OutcomeClass::Favorable, texts[0]),
            Choice::new(OutcomeClass::Favorable, texts[1]),
            Choice::new(OutcomeClass::Unfavorable, texts[2]),
            Choice::new(OutcomeClass::Unfavorable, texts[3]),
        ],
        next_favorable: next,
        next_unfavorable: next,
    }
}
