//! Slot registry for aspect contributions.
//!
//! Each extension point is a [`Slot`] type with its own strongly-typed contribution record.
//! Registration is append-only and keyed by the contributing aspect; consumers enumerate
//! contributions ordered by weight (lower first) with ties kept in registration order.

use fxhash::FxHashMap;
use serde::Serialize;
use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::fmt::Debug;
use tracing::trace;

/// Weight of a contribution that declares none.
pub const DEFAULT_WEIGHT: i32 = 1;

/// A record registered into a slot.
pub trait Contribution: Debug + Send + Sync + 'static {
    /// Name of the contribution, unique only by convention.
    fn name(&self) -> &str;

    /// Explicit sort weight, if any.
    fn weight(&self) -> Option<i32> {
        None
    }

    /// Human-readable label, if any.
    fn label(&self) -> Option<&str> {
        None
    }

    /// Weight used for ordering.
    fn effective_weight(&self) -> i32 {
        self.weight().unwrap_or(DEFAULT_WEIGHT)
    }
}

/// A well-known extension point.
pub trait Slot: 'static {
    /// Registry-wide name of the extension point.
    const NAME: &'static str;

    /// Contribution schema of this extension point.
    type Contribution: Contribution;
}

/// Diagnostic view of one registered contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionSummary {
    pub slot: &'static str,
    pub aspect: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
}

#[derive(Debug)]
struct Registered<C> {
    aspect: Cow<'static, str>,
    contribution: C,
}

#[derive(Debug)]
struct SlotEntries<C> {
    name: &'static str,
    entries: Vec<Registered<C>>,
}

impl<C: Contribution> SlotEntries<C> {
    /// Entries ordered by effective weight; `sort_by_key` is stable.
    fn ordered(&self) -> Vec<&Registered<C>> {
        let mut ordered: Vec<_> = self.entries.iter().collect();
        ordered.sort_by_key(|entry| entry.contribution.effective_weight());
        ordered
    }
}

trait ErasedSlot: Any + Debug + Send + Sync {
    fn name(&self) -> &'static str;
    fn len(&self) -> usize;
    fn summaries(&self) -> Vec<ContributionSummary>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<C: Contribution> ErasedSlot for SlotEntries<C> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn summaries(&self) -> Vec<ContributionSummary> {
        self.ordered()
            .into_iter()
            .map(|entry| ContributionSummary {
                slot: self.name,
                aspect: entry.aspect.to_string(),
                name: entry.contribution.name().to_owned(),
                label: entry.contribution.label().map(ToOwned::to_owned),
                weight: entry.contribution.weight(),
            })
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// An explicit registry instance, owned by the composition root and lent to each aspect.
#[derive(Debug, Default)]
pub struct SlotRegistry {
    slots: Vec<Box<dyn ErasedSlot>>,
    index: FxHashMap<TypeId, usize>,
}

impl SlotRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `contributions` from `aspect` to slot `S`.
    ///
    /// Returns the number of contributions appended.
    pub fn register<S, I>(&mut self, aspect: impl Into<Cow<'static, str>>, contributions: I) -> usize
    where
        S: Slot,
        I: IntoIterator<Item = S::Contribution>,
    {
        let aspect = aspect.into();
        let Some(slot) = self.entries_mut::<S>() else {
            return 0;
        };

        let before = slot.entries.len();
        slot.entries.extend(
            contributions
                .into_iter()
                .map(|contribution| Registered { aspect: aspect.clone(), contribution }),
        );
        let added = slot.entries.len() - before;

        trace!(slot = S::NAME, aspect = %aspect, added, "Registered slot contributions");
        added
    }

    /// All contributions to slot `S`, ordered by weight then registration order.
    #[must_use]
    pub fn contributions<S: Slot>(&self) -> Vec<&S::Contribution> {
        self.entries::<S>().map_or_else(Vec::new, |slot| {
            slot.ordered().into_iter().map(|entry| &entry.contribution).collect()
        })
    }

    /// Contributions made by one aspect to slot `S`, in the order it registered them.
    #[must_use]
    pub fn contributions_by<S: Slot>(&self, aspect: &str) -> Vec<&S::Contribution> {
        self.entries::<S>().map_or_else(Vec::new, |slot| {
            slot.entries
                .iter()
                .filter(|entry| entry.aspect == aspect)
                .map(|entry| &entry.contribution)
                .collect()
        })
    }

    /// Ordered summaries of every slot, slots in first-registration order.
    #[must_use]
    pub fn summaries(&self) -> Vec<ContributionSummary> {
        self.slots.iter().flat_map(|slot| slot.summaries()).collect()
    }

    /// Ordered summaries of the slot registered under `name`.
    #[must_use]
    pub fn summaries_of(&self, name: &str) -> Vec<ContributionSummary> {
        self.slots
            .iter()
            .filter(|slot| slot.name() == name)
            .flat_map(|slot| slot.summaries())
            .collect()
    }

    /// Names of slots that received at least one registration call.
    pub fn slot_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.iter().map(|slot| slot.name())
    }

    /// Total number of contributions across all slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().map(|slot| slot.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entries<S: Slot>(&self) -> Option<&SlotEntries<S::Contribution>> {
        let position = *self.index.get(&TypeId::of::<S>())?;
        self.slots.get(position)?.as_any().downcast_ref()
    }

    fn entries_mut<S: Slot>(&mut self) -> Option<&mut SlotEntries<S::Contribution>> {
        let position = *self.index.entry(TypeId::of::<S>()).or_insert_with(|| {
            self.slots.push(Box::new(SlotEntries::<S::Contribution> {
                name: S::NAME,
                entries: Vec::new(),
            }));
            self.slots.len() - 1
        });
        self.slots.get_mut(position)?.as_any_mut().downcast_mut()
    }
}
