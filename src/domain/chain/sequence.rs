//! Chain sequences and hop position resolution

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one cooperating test bench instance
pub type InstanceId = u32;

/// Sequence used when a chain request does not carry one
pub const DEFAULT_SEQUENCE: &str = "1234";

/// One position of a chain sequence
///
/// Every character of the textual sequence becomes exactly one slot. Characters
/// that are not decimal digits are kept as [`Slot::Invalid`] so the sequence can
/// be forwarded verbatim; they only fail once a hop tries to call them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Instance(InstanceId),
    Invalid(char),
}

impl Slot {
    fn parse(symbol: char) -> Self {
        match symbol.to_digit(10) {
            Some(id) => Self::Instance(id),
            None => Self::Invalid(symbol),
        }
    }

    /// The instance this slot addresses, if it is a valid identifier
    pub fn instance_id(&self) -> Option<InstanceId> {
        match self {
            Self::Instance(id) => Some(*id),
            Self::Invalid(_) => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance(id) => write!(f, "{}", id),
            Self::Invalid(symbol) => write!(f, "{}", symbol),
        }
    }
}

/// Ordered list of instances a chain request should visit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    slots: Vec<Slot>,
}

impl Sequence {
    /// Parse a compact digit string, one slot per character
    pub fn parse(raw: &str) -> Self {
        raw.chars().map(Slot::parse).collect()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn first(&self) -> Option<Slot> {
        self.slots.first().copied()
    }

    /// Index of the first slot naming `id`
    pub fn position_of(&self, id: InstanceId) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| *slot == Slot::Instance(id))
    }

    /// Everything after `index`; empty when `index` is the last slot or beyond
    pub fn suffix_after(&self, index: usize) -> Sequence {
        self.slots.iter().skip(index + 1).copied().collect()
    }
}

impl FromIterator<Slot> for Sequence {
    fn from_iter<I: IntoIterator<Item = Slot>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot)?;
        }
        Ok(())
    }
}

/// How a hop decides where it sits in the sequence it received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressingDiscipline {
    /// Find the first occurrence of the own identifier; the rest of the
    /// sequence after it is the remaining chain. Absent means terminal.
    #[default]
    Search,
    /// The first slot names who should be handling the request. A mismatch
    /// relays the whole sequence there; a match strips the first slot.
    Removal,
}

/// What a single hop has to do with the sequence it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HopPlan {
    /// Relay the unmodified sequence to `target` and return its answer as is
    Relay { target: Slot },
    /// Handle locally, then forward `remaining` to its first slot if any
    Process {
        position: Option<usize>,
        remaining: Sequence,
    },
}

impl AddressingDiscipline {
    pub fn plan(&self, sequence: &Sequence, own: InstanceId) -> HopPlan {
        match self {
            Self::Search => {
                let position = sequence.position_of(own);
                let remaining = position
                    .map(|index| sequence.suffix_after(index))
                    .unwrap_or_default();

                HopPlan::Process {
                    position,
                    remaining,
                }
            }
            Self::Removal => match sequence.first() {
                Some(first) if first != Slot::Instance(own) && sequence.len() > 1 => {
                    HopPlan::Relay { target: first }
                }
                first => HopPlan::Process {
                    position: (first == Some(Slot::Instance(own))).then_some(0),
                    remaining: sequence.suffix_after(0),
                },
            },
        }
    }
}

impl fmt::Display for AddressingDiscipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search => write!(f, "search"),
            Self::Removal => write!(f, "removal"),
        }
    }
}
