use hunt_forums::{Forums, init, mock};
use hunt_kernel::domain::constants::FORUMS;
use hunt_kernel::domain::entities::ForumPatch;
use hunt_kernel::domain::entity::Entity;
use hunt_kernel::domain::registry::{DEFAULT_WEIGHT, SlotRegistry};
use hunt_kernel::domain::slots::{HeaderLinks, ProductTabs};
use serde_json::json;

fn board(slug: &str, product: Option<&str>, threads: u32) -> ForumPatch {
    ForumPatch {
        slug: Some(slug.to_owned()),
        product_id: Some(product.map(ToOwned::to_owned)),
        thread_count: Some(threads),
        ..ForumPatch::default()
    }
}

#[test]
fn init_registers_header_link_and_discussion_tab() {
    let mut slots = SlotRegistry::new();
    let initialized = init(&mut slots).expect("forums init");

    assert_eq!(initialized.name, FORUMS);
    assert_eq!(slots.contributions::<HeaderLinks>()[0].weight, Some(30));

    let tab = slots.contributions::<ProductTabs>()[0];
    assert_eq!(tab.weight, None);
    assert_eq!(hunt_kernel::domain::registry::Contribution::effective_weight(tab), DEFAULT_WEIGHT);
}

#[test]
fn product_boards_are_busiest_first() {
    let mut slots = SlotRegistry::new();
    let initialized = init(&mut slots).unwrap();
    let aspect = initialized.state.as_any().downcast_ref::<Forums>().unwrap();

    let forums = mock::forums([
        board("general", None, 100),
        board("hunt-help", Some("p1"), 4),
        board("hunt-ideas", Some("p1"), 12),
        board("other", Some("p2"), 50),
    ]);

    let slugs: Vec<_> = aspect.for_product(&forums, "p1").iter().map(|f| f.slug()).collect();
    assert_eq!(slugs, vec!["hunt-ideas", "hunt-help"]);
    assert_eq!(aspect.forum_path(&forums[0]), "/forums/general");
}

#[test]
fn mock_forum_keeps_optional_product_absent() {
    let value = mock::forum(ForumPatch::default()).to_value().unwrap();

    assert_eq!(value["slug"], json!("general"));
    assert_eq!(value["threadCount"], json!(0));
    assert!(value.get("productId").is_none());
}
