use hunt::aspects::{forums::Forums, products::Products, reviews::Reviews, users::Users};
use hunt::compose;
use hunt::domain::aspect::AspectSet;
use hunt::domain::config::HuntConfig;
use hunt::domain::slots::{DashboardWidgets, HeaderLinks, ProductTabs, UserProfileCards};
use hunt::kernel::platform::PlatformError;

fn names<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    items.into_iter().collect()
}

#[test]
fn default_config_composes_every_aspect_in_canonical_order() {
    let platform = compose(&HuntConfig::default()).expect("platform composes");

    assert_eq!(
        names(platform.aspect_names()),
        vec!["users", "products", "launches", "reviews", "forums", "upvotes"]
    );
    assert_eq!(platform.config.platform.name, "hunt");
}

#[test]
fn slots_enumerate_by_weight_then_registration() {
    let platform = compose(&HuntConfig::default()).unwrap();
    let slots = &platform.slots;

    assert_eq!(
        names(slots.contributions::<HeaderLinks>().iter().map(|l| l.name.as_str())),
        vec!["profile", "products", "launches", "forums"]
    );
    assert_eq!(
        names(slots.contributions::<ProductTabs>().iter().map(|t| t.name.as_str())),
        vec!["overview", "discussion", "reviews", "launches"]
    );
    assert_eq!(
        names(slots.contributions::<UserProfileCards>().iter().map(|c| c.name.as_str())),
        vec!["about", "reviews", "upvotes"]
    );
    assert_eq!(
        names(slots.contributions::<DashboardWidgets>().iter().map(|w| w.name.as_str())),
        vec!["trending", "my-products", "upcoming-launches"]
    );
    assert_eq!(slots.len(), 14);
}

#[test]
fn summaries_carry_the_contributing_aspect() {
    let platform = compose(&HuntConfig::default()).unwrap();
    let tabs = platform.slots.summaries_of("product.tabs");

    let owners: Vec<_> = tabs.iter().map(|s| s.aspect.as_str()).collect();
    assert_eq!(owners, vec!["products", "forums", "reviews", "launches"]);
    assert_eq!(tabs[0].weight, Some(-10));
    assert_eq!(tabs[1].weight, None);
}

#[test]
fn subset_config_leaves_other_aspects_out() {
    let mut config = HuntConfig::default();
    config.aspects = AspectSet::FORUMS | AspectSet::PRODUCTS;

    let platform = compose(&config).unwrap();
    assert_eq!(names(platform.aspect_names()), vec!["products", "forums"]);
    assert!(platform.try_aspect::<Products>().is_ok());
    assert_eq!(platform.try_aspect::<Forums>().unwrap().route_prefix, "/forums/");

    let err = platform.try_aspect::<Users>().unwrap_err();
    assert!(matches!(err, PlatformError::MissingAspect { .. }));
    assert!(platform.aspect::<Reviews>().is_none());

    assert!(platform.slots.contributions::<UserProfileCards>().is_empty());
    assert_eq!(
        names(platform.slots.contributions::<HeaderLinks>().iter().map(|l| l.name.as_str())),
        vec!["products", "forums"]
    );
}

#[test]
fn empty_aspect_set_composes_an_empty_platform() {
    let mut config = HuntConfig::default();
    config.aspects = AspectSet::empty();

    let platform = compose(&config).unwrap();
    assert_eq!(platform.aspect_count(), 0);
    assert!(platform.slots.is_empty());
}
