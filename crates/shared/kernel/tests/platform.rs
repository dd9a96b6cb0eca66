use hunt_kernel::domain::aspect::{Aspect, InitializedAspect};
use hunt_kernel::domain::config::HuntConfig;
use hunt_kernel::domain::registry::SlotRegistry;
use hunt_kernel::domain::slots::{HeaderLinks, NavLink};
use hunt_kernel::platform::{Platform, PlatformError};

#[hunt_derive::aspect(name = "catalog")]
pub struct Catalog {
    pub page_size: usize,
}

#[hunt_derive::aspect]
pub struct Inbox;

#[hunt_derive::aspect(name = "unused")]
pub struct Unused;

fn registry() -> SlotRegistry {
    let mut slots = SlotRegistry::new();
    slots.register::<HeaderLinks, _>(
        Catalog::NAME,
        [NavLink::builder().name("catalog").label("Catalog").href("/catalog").build()],
    );
    slots
}

#[test]
fn composed_aspects_are_reachable() {
    let platform = Platform::builder()
        .config(HuntConfig::default())
        .slots(registry())
        .register_aspect(InitializedAspect::new(Catalog::new(CatalogInner { page_size: 25 })))
        .register_aspect(InitializedAspect::new(Inbox::new(InboxInner)))
        .build()
        .expect("platform builds");

    let catalog = platform.try_aspect::<Catalog>().expect("catalog composed");
    assert_eq!(catalog.page_size, 25);
    assert_eq!(catalog.name(), "catalog");
    assert_eq!(platform.aspect_names().collect::<Vec<_>>(), vec!["catalog", "inbox"]);
    assert_eq!(platform.slots.contributions::<HeaderLinks>().len(), 1);
}

#[test]
fn missing_aspect_is_an_explicit_error() {
    let platform = Platform::builder().config(HuntConfig::default()).build().unwrap();

    let err = platform.try_aspect::<Unused>().unwrap_err();
    assert!(matches!(err, PlatformError::MissingAspect { .. }));
    assert!(err.to_string().contains("Unused"));
    assert!(platform.aspect::<Unused>().is_none());
}

#[test]
fn config_is_required() {
    let err = Platform::builder().build().unwrap_err();
    assert!(matches!(err, PlatformError::Validation { .. }));
}

#[test]
fn registration_order_survives_duplicates() {
    let platform = Platform::builder()
        .config(HuntConfig::default())
        .register_aspects([
            InitializedAspect::new(Inbox::new(InboxInner)),
            InitializedAspect::new(Catalog::new(CatalogInner { page_size: 10 })),
            InitializedAspect::new(Inbox::new(InboxInner)),
        ])
        .build()
        .unwrap();

    assert_eq!(platform.aspect_names().collect::<Vec<_>>(), vec!["inbox", "catalog"]);
    assert_eq!(platform.aspect_count(), 2);
}

#[test]
fn platform_is_shareable_across_threads() {
    let platform = Platform::builder().config(HuntConfig::default()).build().unwrap();
    let handle = std::thread::spawn(move || platform.aspect_count());
    assert_eq!(handle.join().unwrap(), 0);
}
