//! Launches aspect: scheduled and live product launches.

mod error;
pub mod mock;

pub use crate::error::{LaunchesError, LaunchesErrorExt};
use hunt_kernel::domain::aspect::InitializedAspect;
use hunt_kernel::domain::entities::{Launch, LaunchStatus};
use hunt_kernel::domain::registry::SlotRegistry;
use hunt_kernel::domain::slots::{
    DashboardWidget, DashboardWidgets, HeaderLinks, NavLink, ProductTab, ProductTabs,
};

/// Launches aspect state.
#[hunt_derive::aspect(name = "launches")]
pub struct Launches {
    /// Maximum number of launches shown on a day's lineup.
    pub daily_slots: usize,
}

impl Launches {
    /// Today's lineup: live launches, featured first, then by rank (unranked last).
    #[must_use]
    pub fn lineup<'a>(&self, launches: &'a [Launch]) -> Vec<&'a Launch> {
        let mut live: Vec<_> =
            launches.iter().filter(|l| l.status() == LaunchStatus::Live).collect();
        live.sort_by_key(|l| (!l.featured(), l.rank().unwrap_or(u32::MAX)));
        live.truncate(self.daily_slots);
        live
    }

    /// Scheduled launches ordered by launch date.
    #[must_use]
    pub fn upcoming<'a>(&self, launches: &'a [Launch]) -> Vec<&'a Launch> {
        let mut scheduled: Vec<_> =
            launches.iter().filter(|l| l.status() == LaunchStatus::Scheduled).collect();
        scheduled.sort_by(|a, b| a.launch_date().cmp(b.launch_date()));
        scheduled
    }
}

/// Initialize the launches aspect.
///
/// # Errors
/// Currently infallible; the signature matches every other aspect.
pub fn init(slots: &mut SlotRegistry) -> Result<InitializedAspect, LaunchesError> {
    let mut contributions = slots.register::<HeaderLinks, _>(
        Launches::NAME,
        [NavLink::builder().name("launches").label("Launches").href("/launches").weight(20).build()],
    );
    contributions += slots.register::<ProductTabs, _>(
        Launches::NAME,
        [ProductTab::builder()
            .name("launches")
            .label("Launches")
            .component("launches.Timeline")
            .weight(20)
            .build()],
    );
    contributions += slots.register::<DashboardWidgets, _>(
        Launches::NAME,
        [DashboardWidget::builder()
            .name("upcoming-launches")
            .component("launches.Upcoming")
            .label("Upcoming launches")
            .build()],
    );

    tracing::info!(aspect = Launches::NAME, contributions, "Launches aspect initialized");

    Ok(InitializedAspect::new(Launches::new(LaunchesInner { daily_slots: 10 })))
}
