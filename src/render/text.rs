// src/render/text.rs
use std::io::Write;

use super::{Card, RenderError, Renderer};

/// Plain-text cards for the terminal. A stream cannot be un-written, so
/// `clear` only resets the counter.
pub struct TextRenderer<W: Write> {
    out: W,
    drawn: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, drawn: 0 }
    }

    pub fn into_inner(self) -> W { self.out }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn clear(&mut self) -> Result<(), RenderError> {
        self.drawn = 0;
        Ok(())
    }

    fn draw_card(&mut self, card: &Card) -> Result<(), RenderError> {
        if self.drawn > 0 {
            writeln!(self.out)?;
        }
        writeln!(self.out, "{} [{}]", card.name, card.category.label())?;
        if let Some(s) = &card.specialty {
            writeln!(self.out, "  {s}")?;
        }
        writeln!(self.out, "  {}", card.area)?;
        if let Some(a) = &card.address {
            writeln!(self.out, "  {a}")?;
        }
        for phone in &card.phones {
            writeln!(self.out, "  tel: {phone}")?;
        }
        self.drawn += 1;
        Ok(())
    }

    fn draw_placeholder(&mut self) -> Result<(), RenderError> {
        if self.drawn > 0 {
            writeln!(self.out)?;
        }
        writeln!(self.out, "-")?;
        self.drawn += 1;
        Ok(())
    }

    fn draw_empty(&mut self, message: &str) -> Result<(), RenderError> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    fn draw_error(&mut self, message: &str) -> Result<(), RenderError> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn writes_each_number_on_its_own_line() {
        let card = Card {
            name: s!("B"),
            category: Category::Clinics,
            specialty: Some(s!("Dental")),
            area: s!("Giza"),
            address: Some(s!("12 Nile St")),
            phones: vec![s!("222"), s!("333")],
        };
        let mut r = TextRenderer::new(Vec::new());
        r.draw_card(&card).unwrap();
        let text = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(text, "B [عيادات]\n  Dental\n  Giza\n  12 Nile St\n  tel: 222\n  tel: 333\n");
    }
}
