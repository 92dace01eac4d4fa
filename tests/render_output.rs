// tests/render_output.rs
//
// What each results surface actually emits.

use provider_directory::{
    config::consts::TXT_NO_RESULTS,
    model::{Category, Provider},
    render::{render_results, HtmlRenderer, Slot, SlotRenderer, TextRenderer},
};

fn clinic(name: &str, phone: &str) -> Provider {
    Provider {
        name: name.into(),
        category: Category::Clinics,
        specialty: Some("أسنان".into()),
        area: "الجيزة".into(),
        address: Some("ميدان الجيزة".into()),
        phone: phone.into(),
    }
}

#[test]
fn empty_result_is_one_placeholder_and_no_cards() {
    let mut html = HtmlRenderer::new();
    let summary = render_results(&mut html, &[]).unwrap();
    assert!(summary.empty);
    assert_eq!(summary.cards, 0);

    let out = html.html();
    assert!(out.starts_with("<div id=\"results\""));
    assert_eq!(out.matches("class=\"no-results\"").count(), 1);
    assert_eq!(out.matches("provider-card").count(), 0);
    assert!(out.contains(TXT_NO_RESULTS));

    let mut slots = SlotRenderer::new();
    render_results(&mut slots, &[]).unwrap();
    assert_eq!(slots.slots.len(), 1);
    assert!(matches!(&slots.slots[0], Slot::Empty(m) if m == TXT_NO_RESULTS));
}

#[test]
fn each_phone_number_gets_its_own_link() {
    let a = clinic("عيادة <النور>", "01234567 - 09876543");
    let mut html = HtmlRenderer::new();
    render_results(&mut html, &[&a]).unwrap();
    let body = html.body();

    assert!(body.contains("href=\"tel:01234567\""));
    assert!(body.contains("href=\"tel:09876543\""));
    assert_eq!(body.matches("class=\"phone-link\"").count(), 2);
    assert!(body.contains("عيادة &lt;النور&gt;"));
    assert!(!body.contains("<النور>"));
}

#[test]
fn rendering_replaces_previous_output() {
    let a = clinic("A", "1");
    let b = clinic("B", "2");
    let mut html = HtmlRenderer::new();
    render_results(&mut html, &[&a, &b]).unwrap();
    render_results(&mut html, &[&b]).unwrap();
    assert_eq!(html.body().matches("provider-name").count(), 1);
}

#[test]
fn blank_name_does_not_blank_the_page() {
    let good = clinic("A", "1");
    let broken = clinic("  ", "2");
    let mut slots = SlotRenderer::new();
    let summary = render_results(&mut slots, &[&good, &broken, &good]).unwrap();

    assert_eq!(summary.cards, 2);
    assert_eq!(summary.placeholders, 1);
    assert!(matches!(slots.slots[1], Slot::Placeholder));
}

#[test]
fn text_cards_list_one_number_per_line() {
    let a = clinic("عيادة النور", "0111 – 0222");
    let mut text = TextRenderer::new(Vec::new());
    render_results(&mut text, &[&a]).unwrap();
    let out = String::from_utf8(text.into_inner()).unwrap();

    assert!(out.starts_with("عيادة النور [عيادات]\n"));
    assert!(out.contains("  tel: 0111\n"));
    assert!(out.contains("  tel: 0222\n"));
}
