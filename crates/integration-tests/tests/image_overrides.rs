//! Image override persistence and resolution.

use mercato_integration_tests::TestHarness;
use mercato_storefront::ImageSlot;

#[test]
fn every_slot_falls_back_when_unset() {
    let state = TestHarness::new().open();

    for slot in [
        ImageSlot::HomeHero,
        ImageSlot::AboutHero,
        ImageSlot::Logo,
    ] {
        assert_eq!(state.images.resolve(slot, None), slot.fallback());
    }
    assert_eq!(
        state.images.resolve(ImageSlot::Product, Some("42")),
        ImageSlot::Product.fallback()
    );
    assert_eq!(
        state.images.resolve(ImageSlot::Category, Some("home-living")),
        ImageSlot::Category.fallback()
    );
}

#[test]
fn overrides_survive_restart_per_slot_family() {
    let harness = TestHarness::new();

    {
        let mut state = harness.open();
        state
            .images
            .set_override(ImageSlot::HomeHero, None, "https://cdn.example/hero.jpg")
            .expect("hero override");
        state
            .images
            .set_override(ImageSlot::Category, Some("home-living"), "https://cdn.example/hl.jpg")
            .expect("category override");
        state
            .images
            .set_override(ImageSlot::Product, Some("3"), "https://cdn.example/3.jpg")
            .expect("product override");
    }

    let state = harness.open();
    assert_eq!(
        state.images.resolve(ImageSlot::HomeHero, None),
        "https://cdn.example/hero.jpg"
    );
    assert_eq!(
        state.images.resolve(ImageSlot::Category, Some("home-living")),
        "https://cdn.example/hl.jpg"
    );
    assert_eq!(
        state.images.resolve(ImageSlot::Product, Some("3")),
        "https://cdn.example/3.jpg"
    );
    // A different product key still falls back
    assert_eq!(
        state.images.resolve(ImageSlot::Product, Some("4")),
        ImageSlot::Product.fallback()
    );
}

#[test]
fn removing_an_override_survives_restart() {
    let harness = TestHarness::new();

    {
        let mut state = harness.open();
        state
            .images
            .set_override(ImageSlot::Logo, None, "https://cdn.example/logo.png")
            .expect("logo override");
        state
            .images
            .remove_override(ImageSlot::Logo, None)
            .expect("logo removal");
    }

    let state = harness.open();
    assert_eq!(
        state.images.resolve(ImageSlot::Logo, None),
        ImageSlot::Logo.fallback()
    );
}

#[test]
fn wishlist_and_overrides_share_the_store_without_clashes() {
    let harness = TestHarness::new();

    {
        let mut state = harness.open();
        state.wishlist.add(mercato_core::ProductId::new(5));
        state
            .images
            .set_override(ImageSlot::Product, Some("5"), "https://cdn.example/5.jpg")
            .expect("product override");
    }

    let state = harness.open();
    assert!(state.wishlist.contains(mercato_core::ProductId::new(5)));
    assert_eq!(
        state.images.resolve(ImageSlot::Product, Some("5")),
        "https://cdn.example/5.jpg"
    );
}
