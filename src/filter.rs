// src/filter.rs
//
// Filter selection, derived option sets, and the filter itself.
//
// - Selection: the four user-chosen values. Setting the category always
//              clears the specialty, because the specialty options change.
// - derive_*:  option lists for the select controls, recomputed on demand.
// - apply_filters: conjunction of every non-empty predicate, input order kept.

use std::collections::HashSet;

use crate::core::collate;
use crate::core::sanitize::{fold_case, non_blank, normalize_ws};
use crate::model::{Category, Provider};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    category: Option<Category>,
    specialty: Option<String>,
    area: Option<String>,
    query: String,
}

impl Selection {
    pub fn new() -> Self { Self::default() }

    pub fn category(&self) -> Option<Category> { self.category }
    pub fn specialty(&self) -> Option<&str> { self.specialty.as_deref() }
    pub fn area(&self) -> Option<&str> { self.area.as_deref() }
    pub fn query(&self) -> &str { &self.query }

    /// Any value, including the current one or `None`, resets the specialty.
    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
        self.specialty = None;
    }

    pub fn set_specialty(&mut self, specialty: Option<&str>) {
        self.specialty = specialty.and_then(non_blank);
    }

    pub fn set_area(&mut self, area: Option<&str>) {
        self.area = area.and_then(non_blank);
    }

    /// Whitespace runs collapse to one space, the same as record fields;
    /// whitespace-only means no query.
    pub fn set_query(&mut self, query: &str) {
        self.query = normalize_ws(query);
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.specialty.is_none() && self.area.is_none() && self.query.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.set_category(Some(category));
        self
    }

    pub fn with_specialty(mut self, specialty: &str) -> Self {
        self.set_specialty(Some(specialty));
        self
    }

    pub fn with_area(mut self, area: &str) -> Self {
        self.set_area(Some(area));
        self
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.set_query(query);
        self
    }

    /// Predicate over providers with the query folded once.
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher { sel: self, query: fold_case(&self.query) }
    }
}

pub struct Matcher<'a> {
    sel: &'a Selection,
    query: String,
}

impl Matcher<'_> {
    pub fn matches(&self, p: &Provider) -> bool {
        let sel = self.sel;

        if sel.category.is_some_and(|c| c != p.category) {
            return false;
        }
        if let Some(s) = sel.specialty.as_deref() {
            if p.specialty.as_deref() != Some(s) {
                return false;
            }
        }
        if let Some(a) = sel.area.as_deref() {
            if p.area != a {
                return false;
            }
        }
        if self.query.is_empty() {
            return true;
        }

        let q = self.query.as_str();
        fold_case(&p.name).contains(q)
            || p.specialty.as_deref().is_some_and(|s| fold_case(s).contains(q))
            || fold_case(&p.area).contains(q)
    }
}

/// Providers satisfying every non-empty predicate of `sel`, in input order.
pub fn apply_filters<'a>(providers: &'a [Provider], sel: &Selection) -> Vec<&'a Provider> {
    let m = sel.matcher();
    let out: Vec<&Provider> = providers.iter().filter(|p| m.matches(p)).collect();
    logd!("Filter: {:?} → {}/{}", sel, out.len(), providers.len());
    out
}

/// Distinct areas, locale-sorted.
pub fn derive_areas(providers: &[Provider]) -> Vec<String> {
    distinct_sorted(providers.iter().map(|p| p.area.as_str()))
}

/// Distinct specialties among providers of `category`; every provider when
/// no category is selected. Blank values are dropped before deduplication.
pub fn derive_specialties(providers: &[Provider], category: Option<Category>) -> Vec<String> {
    distinct_sorted(
        providers
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .filter_map(|p| p.specialty.as_deref()),
    )
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out: Vec<String> = values
        .map(str::trim)
        .filter(|v| !v.is_empty() && seen.insert(*v))
        .map(String::from)
        .collect();
    collate::sort_dedup(&mut out);
    out
}

/// Record totals per category, in display order.
pub fn category_counts(providers: &[Provider]) -> Vec<(Category, usize)> {
    Category::ALL
        .iter()
        .map(|c| (*c, providers.iter().filter(|p| p.category == *c).count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str, category: Category, area: &str, specialty: Option<&str>) -> Provider {
        Provider {
            name: s!(name),
            category,
            specialty: specialty.map(String::from),
            area: s!(area),
            address: None,
            phone: s!("0"),
        }
    }

    #[test]
    fn category_change_always_clears_specialty() {
        let mut sel = Selection::new().with_category(Category::Clinics).with_specialty("Dental");
        assert_eq!(sel.specialty(), Some("Dental"));
        sel.set_category(Some(Category::Clinics));
        assert_eq!(sel.specialty(), None);

        sel.set_specialty(Some("Dental"));
        sel.set_category(None);
        assert_eq!(sel.specialty(), None);
        assert!(sel.is_empty());
    }

    #[test]
    fn missing_specialty_never_matches_query_but_name_can() {
        let data = [p("Alpha Lab", Category::Labs, "Cairo", None)];
        assert_eq!(apply_filters(&data, &Selection::new().with_query("dental")).len(), 0);
        assert_eq!(apply_filters(&data, &Selection::new().with_query("LAB")).len(), 1);
    }

    #[test]
    fn whitespace_query_is_no_query() {
        let data = [p("A", Category::Labs, "Cairo", None)];
        let sel = Selection::new().with_query("   ");
        assert!(sel.is_empty());
        assert_eq!(apply_filters(&data, &sel).len(), 1);
    }

    #[test]
    fn inner_query_spaces_collapse() {
        let data = [p("Nile Eye Center", Category::Clinics, "Dokki", None)];
        let sel = Selection::new().with_query(" nile   eye\t");
        assert_eq!(sel.query(), "nile eye");
        assert_eq!(apply_filters(&data, &sel).len(), 1);
    }

    #[test]
    fn specialties_scope_to_category_or_everything() {
        let data = [
            p("A", Category::Clinics, "Cairo", Some("Dental")),
            p("B", Category::Doctors, "Giza", Some("Cardiology")),
            p("C", Category::Clinics, "Giza", Some("  ")),
            p("D", Category::Clinics, "Giza", Some("Dental")),
        ];
        assert_eq!(derive_specialties(&data, Some(Category::Clinics)), vec!["Dental"]);
        assert_eq!(derive_specialties(&data, None), vec!["Cardiology", "Dental"]);
        assert!(derive_specialties(&data, Some(Category::Labs)).is_empty());
    }

    #[test]
    fn counts_follow_category_order() {
        let data = [
            p("A", Category::Doctors, "Cairo", None),
            p("B", Category::Hospitals, "Giza", None),
            p("C", Category::Doctors, "Giza", None),
        ];
        let counts = category_counts(&data);
        assert_eq!(counts[0], (Category::Hospitals, 1));
        assert_eq!(counts[4], (Category::Doctors, 2));
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 3);
    }
}
