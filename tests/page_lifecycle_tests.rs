// Page lifecycle tests
//
// Drives the component the way a browser host would: mount, scroll events,
// nav clicks, teardown. The host fakes layout measurement, the viewport and
// listener registration.

use portfolio_site::{
    scroll_to_section, ListenerHost, ListenerId, PortfolioComponent, ScrollBehavior, SectionBounds,
    SectionId, SectionLayout, StaticLayout, Viewport,
};
use std::cell::{Cell, RefCell};

struct FakeBrowser {
    layout: StaticLayout,
    scroll_y: Cell<f64>,
    listeners: RefCell<Vec<ListenerId>>,
    next_id: Cell<u64>,
}

impl FakeBrowser {
    // about=[0,800), experience=[800,1600), projects=[1600,2600), contact=[2600,3200)
    fn new() -> Self {
        Self {
            layout: StaticLayout::contiguous(&[800.0, 800.0, 1000.0, 600.0]).unwrap(),
            scroll_y: Cell::new(0.0),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl SectionLayout for FakeBrowser {
    fn section_bounds(&self, id: SectionId) -> Option<SectionBounds> {
        self.layout.section_bounds(id)
    }
}

impl ListenerHost for FakeBrowser {
    fn add_scroll_listener(&self) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push(id);
        id
    }

    fn remove_scroll_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|l| *l != id);
    }
}

struct FakeViewport<'a> {
    browser: &'a FakeBrowser,
    requests: usize,
}

impl Viewport for FakeViewport<'_> {
    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        assert_eq!(behavior, ScrollBehavior::Smooth);
        self.browser.scroll_y.set(top);
        self.requests += 1;
    }
}

#[test]
fn test_reference_scenarios() {
    let browser = FakeBrowser::new();
    let mut page = PortfolioComponent::new();
    let _subscription = page.mount(&browser);

    page.handle_scroll(750.0, &browser);
    assert_eq!(page.view().active, SectionId::Experience);

    page.handle_scroll(0.0, &browser);
    assert_eq!(page.view().active, SectionId::About);

    page.handle_scroll(2700.0, &browser);
    assert_eq!(page.view().active, SectionId::Contact);

    page.handle_scroll(3500.0, &browser);
    assert_eq!(page.view().active, SectionId::Contact);
}

#[test]
fn test_nav_click_then_scroll_event() {
    let browser = FakeBrowser::new();
    let mut page = PortfolioComponent::new();
    let _subscription = page.mount(&browser);
    let mut viewport = FakeViewport { browser: &browser, requests: 0 };

    scroll_to_section("projects", &browser, &mut viewport);
    assert_eq!(browser.scroll_y.get(), 1600.0);

    // the scroll that follows lands the probe inside projects
    page.handle_scroll(browser.scroll_y.get(), &browser);
    assert_eq!(page.view().active, SectionId::Projects);

    scroll_to_section("resume", &browser, &mut viewport);
    assert_eq!(viewport.requests, 1);
    assert_eq!(browser.scroll_y.get(), 1600.0);
}

#[test]
fn test_mount_and_teardown() {
    let browser = FakeBrowser::new();
    let mut page = PortfolioComponent::new();
    assert!(!page.view().visible);

    {
        let _subscription = page.mount(&browser);
        assert!(page.view().visible);
        assert_eq!(browser.listener_count(), 1);
    }

    assert_eq!(browser.listener_count(), 0);
    assert!(page.view().visible);
}

#[test]
fn test_remount_registers_fresh_listener() {
    let browser = FakeBrowser::new();
    let mut page = PortfolioComponent::new();

    let first = page.mount(&browser);
    let first_id = first.id();
    drop(first);

    let second = page.mount(&browser);
    assert_ne!(second.id(), first_id);
    assert_eq!(browser.listener_count(), 1);
}
