use super::*;
use todos::page::PageState;

#[test]
fn active_link_gets_active_class() {
    assert_eq!(page_item_class(PageLink { number: 2, active: true }), "page-item active");
    assert_eq!(page_item_class(PageLink { number: 1, active: false }), "page-item");
}

#[test]
fn classes_follow_current_page() {
    let mut page = PageState::default();
    page.go_to(3, 20);
    let classes: Vec<_> = page.links(20).into_iter().map(page_item_class).collect();
    assert_eq!(classes, vec!["page-item", "page-item", "page-item active"]);
}
