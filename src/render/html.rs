// src/render/html.rs
use std::fmt::Write;

use super::{Card, RenderError, Renderer};
use crate::config::consts::{RESULTS_CONTAINER_ID, TXT_ADDRESS};
use crate::core::sanitize::{dialable, escape_html};

/// Renders into the markup of a single results container.
#[derive(Clone, Debug, Default)]
pub struct HtmlRenderer {
    body: String,
}

impl HtmlRenderer {
    pub fn new() -> Self { Self::default() }

    /// Container with everything drawn since the last `clear`.
    pub fn html(&self) -> String {
        format!(
            "<div id=\"{}\" class=\"results-grid\" dir=\"rtl\">\n{}</div>\n",
            RESULTS_CONTAINER_ID, self.body
        )
    }

    /// Inner markup only.
    pub fn body(&self) -> &str { &self.body }
}

impl Renderer for HtmlRenderer {
    fn clear(&mut self) -> Result<(), RenderError> {
        self.body.clear();
        Ok(())
    }

    fn draw_card(&mut self, card: &Card) -> Result<(), RenderError> {
        // Build aside so a failure leaves no half-written card.
        let mut out = String::new();
        writeln!(out, "  <div class=\"provider-card\" data-category=\"{}\">", card.category.key())?;
        writeln!(out, "    <h3 class=\"provider-name\">{}</h3>", escape_html(&card.name))?;
        if let Some(s) = &card.specialty {
            writeln!(out, "    <p class=\"provider-specialty\">{}</p>", escape_html(s))?;
        }
        writeln!(out, "    <p class=\"provider-area\">{}</p>", escape_html(&card.area))?;
        if let Some(a) = &card.address {
            writeln!(
                out,
                "    <p class=\"provider-address\" title=\"{}\">{}</p>",
                TXT_ADDRESS,
                escape_html(a)
            )?;
        }
        writeln!(out, "    <div class=\"phone-numbers\">")?;
        for phone in &card.phones {
            writeln!(
                out,
                "      <a href=\"tel:{}\" class=\"phone-link\">{}</a>",
                escape_html(&dialable(phone)),
                escape_html(phone)
            )?;
        }
        writeln!(out, "    </div>")?;
        writeln!(out, "  </div>")?;

        self.body.push_str(&out);
        Ok(())
    }

    fn draw_placeholder(&mut self) -> Result<(), RenderError> {
        self.body.push_str("  <div class=\"provider-card provider-card-placeholder\"></div>\n");
        Ok(())
    }

    fn draw_empty(&mut self, message: &str) -> Result<(), RenderError> {
        writeln!(self.body, "  <div class=\"no-results\">{}</div>", escape_html(message))?;
        Ok(())
    }

    fn draw_error(&mut self, message: &str) -> Result<(), RenderError> {
        writeln!(self.body, "  <div class=\"load-error\">{}</div>", escape_html(message))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn card_markup_has_one_link_per_number_and_escapes() {
        let card = Card {
            name: s!("<Dr> Ali & Sons"),
            category: Category::Doctors,
            specialty: Some(s!("Dental")),
            area: s!("Giza"),
            address: None,
            phones: vec![s!("01234567"), s!("+20 2 555")],
        };
        let mut r = HtmlRenderer::new();
        r.draw_card(&card).unwrap();
        let html = r.html();

        assert!(html.starts_with("<div id=\"results\""));
        assert_eq!(html.matches("class=\"phone-link\"").count(), 2);
        assert!(html.contains("href=\"tel:+202555\""));
        assert!(html.contains("&lt;Dr&gt; Ali &amp; Sons"));
        assert!(!html.contains("provider-address"));
    }
}
