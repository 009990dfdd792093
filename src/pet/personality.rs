use super::stats::Stat;
use serde::{Deserialize, Serialize};

pub const NUM_PERSONALITY_ATTRIBUTES: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PersonalityAttribute {
    Friendliness,
    Energy,
    Curiosity,
    Patience,
    Playfulness,
}

impl PersonalityAttribute {
    pub fn all() -> [PersonalityAttribute; NUM_PERSONALITY_ATTRIBUTES] {
        [
            PersonalityAttribute::Friendliness,
            PersonalityAttribute::Energy,
            PersonalityAttribute::Curiosity,
            PersonalityAttribute::Patience,
            PersonalityAttribute::Playfulness,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PersonalityAttribute::Friendliness => "friendliness",
            PersonalityAttribute::Energy => "energy",
            PersonalityAttribute::Curiosity => "curiosity",
            PersonalityAttribute::Patience => "patience",
            PersonalityAttribute::Playfulness => "playfulness",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            PersonalityAttribute::Friendliness => 0,
            PersonalityAttribute::Energy => 1,
            PersonalityAttribute::Curiosity => 2,
            PersonalityAttribute::Patience => 3,
            PersonalityAttribute::Playfulness => 4,
        }
    }
}

/// The five personality attributes, each in [0, 100].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Personality {
    values: [Stat; NUM_PERSONALITY_ATTRIBUTES],
}

impl Personality {
    pub fn new(values: [Stat; NUM_PERSONALITY_ATTRIBUTES]) -> Self {
        Self { values }
    }

    /// Builds a personality with every attribute set to `value`.
    pub fn uniform(value: Stat) -> Self {
        Self {
            values: [value; NUM_PERSONALITY_ATTRIBUTES],
        }
    }

    pub fn get(&self, attr: PersonalityAttribute) -> Stat {
        self.values[attr.index()]
    }

    pub fn set(&mut self, attr: PersonalityAttribute, value: Stat) {
        self.values[attr.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (PersonalityAttribute, Stat)> + '_ {
        PersonalityAttribute::all()
            .into_iter()
            .map(move |attr| (attr, self.get(attr)))
    }
}
