// src/render/mod.rs
//
// Result rendering contract. Every call replaces the previous output:
// clear, then either one placeholder message or one card per provider.
// A card that cannot be built or drawn becomes a placeholder card; it never
// takes the rest of the list down with it.

use std::{fmt, io};

use thiserror::Error;

use crate::config::consts::TXT_NO_RESULTS;
use crate::model::{Category, Provider};

pub mod html;
pub mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("provider has a blank name")]
    BlankName,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
    #[error("format failed")]
    Fmt(#[from] fmt::Error),
    #[error("{0}")]
    Card(#[from] CardError),
}

/// Display model for one provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub category: Category,
    pub specialty: Option<String>,
    pub area: String,
    pub address: Option<String>,
    /// One entry per number; each gets its own link.
    pub phones: Vec<String>,
}

impl Card {
    pub fn from_provider(p: &Provider) -> Result<Self, CardError> {
        if p.name.trim().is_empty() {
            return Err(CardError::BlankName);
        }
        Ok(Self {
            name: p.name.clone(),
            category: p.category,
            specialty: p.specialty.clone(),
            area: p.area.clone(),
            address: p.address.clone(),
            phones: p.phones().into_iter().map(String::from).collect(),
        })
    }
}

/// A results surface.
pub trait Renderer {
    /// Remove everything drawn by the previous render.
    fn clear(&mut self) -> Result<(), RenderError>;

    fn draw_card(&mut self, card: &Card) -> Result<(), RenderError>;

    /// Stand-in for a card that failed.
    fn draw_placeholder(&mut self) -> Result<(), RenderError>;

    /// The single "no results" element.
    fn draw_empty(&mut self, message: &str) -> Result<(), RenderError>;

    /// Error message shown in place of results.
    fn draw_error(&mut self, message: &str) -> Result<(), RenderError>;

    /// Called once all cards are drawn.
    fn finish(&mut self) -> Result<(), RenderError> { Ok(()) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub cards: usize,
    pub placeholders: usize,
    pub empty: bool,
}

/// Draw `providers` on `r`.
pub fn render_results<R>(r: &mut R, providers: &[&Provider]) -> Result<RenderSummary, RenderError>
where
    R: Renderer + ?Sized,
{
    r.clear()?;
    let mut summary = RenderSummary::default();

    if providers.is_empty() {
        r.draw_empty(TXT_NO_RESULTS)?;
        summary.empty = true;
        r.finish()?;
        return Ok(summary);
    }

    for p in providers {
        let drawn = Card::from_provider(p)
            .map_err(RenderError::from)
            .and_then(|card| r.draw_card(&card));
        match drawn {
            Ok(()) => summary.cards += 1,
            Err(e) => {
                logw!("Render: card for {:?} ({}) failed: {}", p.name, p.category, e);
                r.draw_placeholder()?;
                summary.placeholders += 1;
            }
        }
    }
    r.finish()?;
    logd!("Render: {} card(s), {} placeholder(s)", summary.cards, summary.placeholders);
    Ok(summary)
}

/// Replace the results with `message`.
pub fn render_error<R>(r: &mut R, message: &str) -> Result<(), RenderError>
where
    R: Renderer + ?Sized,
{
    r.clear()?;
    r.draw_error(message)?;
    r.finish()
}

/// What a surface holds after rendering. Used by the GUI and by tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    Card(Card),
    Placeholder,
    Empty(String),
    Error(String),
}

/// Renderer that keeps the drawn slots in memory.
#[derive(Clone, Debug, Default)]
pub struct SlotRenderer {
    pub slots: Vec<Slot>,
}

impl SlotRenderer {
    pub fn new() -> Self { Self::default() }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.slots.iter().filter_map(|s| match s {
            Slot::Card(c) => Some(c),
            _ => None,
        })
    }
}

impl Renderer for SlotRenderer {
    fn clear(&mut self) -> Result<(), RenderError> {
        self.slots.clear();
        Ok(())
    }

    fn draw_card(&mut self, card: &Card) -> Result<(), RenderError> {
        self.slots.push(Slot::Card(card.clone()));
        Ok(())
    }

    fn draw_placeholder(&mut self) -> Result<(), RenderError> {
        self.slots.push(Slot::Placeholder);
        Ok(())
    }

    fn draw_empty(&mut self, message: &str) -> Result<(), RenderError> {
        self.slots.push(Slot::Empty(s!(message)));
        Ok(())
    }

    fn draw_error(&mut self, message: &str) -> Result<(), RenderError> {
        self.slots.push(Slot::Error(s!(message)));
        Ok(())
    }
}
