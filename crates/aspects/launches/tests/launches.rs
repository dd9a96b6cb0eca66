use hunt_kernel::domain::constants::LAUNCHES;
use hunt_kernel::domain::entities::{LaunchPatch, LaunchStatus};
use hunt_kernel::domain::entity::Entity;
use hunt_kernel::domain::registry::SlotRegistry;
use hunt_kernel::domain::slots::{DashboardWidgets, HeaderLinks, ProductTabs};
use hunt_launches::{Launches, init, mock};
use serde_json::json;

fn live(rank: Option<u32>, featured: bool) -> LaunchPatch {
    LaunchPatch {
        status: Some(LaunchStatus::Live),
        rank: Some(rank),
        featured: Some(featured),
        ..LaunchPatch::default()
    }
}

#[test]
fn init_registers_launch_contributions() {
    let mut slots = SlotRegistry::new();
    let initialized = init(&mut slots).expect("launches init");

    assert_eq!(initialized.name, LAUNCHES);
    assert_eq!(slots.contributions_by::<HeaderLinks>(LAUNCHES)[0].href, "/launches");
    assert_eq!(slots.contributions::<ProductTabs>()[0].component.as_str(), "launches.Timeline");
    assert_eq!(slots.contributions::<DashboardWidgets>()[0].span, 1);
}

#[test]
fn lineup_puts_featured_then_ranked_first() {
    let mut slots = SlotRegistry::new();
    let initialized = init(&mut slots).unwrap();
    let aspect = initialized.state.as_any().downcast_ref::<Launches>().unwrap();

    let launches = mock::launches([
        live(None, false),
        live(Some(2), false),
        LaunchPatch::default(),
        live(Some(9), true),
        live(Some(1), false),
    ]);

    let ids: Vec<_> = aspect.lineup(&launches).iter().map(|l| l.id().to_owned()).collect();
    let expected: Vec<_> = [3, 4, 1, 0].iter().map(|&i| launches[i].id().to_owned()).collect();
    assert_eq!(ids, expected);

    let upcoming = aspect.upcoming(&launches);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].id(), launches[2].id());
}

#[test]
fn mock_launch_defaults_are_scheduled() {
    let value = mock::launch(LaunchPatch {
        product_id: Some("p-7".to_owned()),
        ..LaunchPatch::default()
    })
    .to_value()
    .unwrap();

    assert_eq!(value["productId"], json!("p-7"));
    assert_eq!(value["status"], json!("scheduled"));
    assert_eq!(value["featured"], json!(false));
    assert!(value.get("rank").is_none());
}
